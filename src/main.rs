use anyhow::Context;
use chainfetch::page::{Action, run_actions};
use chainfetch::render::{OutputContainer, render_page};
use chainfetch::{Locations, logging, serve};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "chainfetch")]
#[command(about = "Follow chained JSON files and render their records as a table", long_about = None)]
struct Cli {
    /// Log each hop to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply load/reset actions in order to one output container, then write the page.
    Run {
        /// Site root; files are read from <base-url>/data/.
        #[arg(long, default_value = "http://127.0.0.1:8000/", conflicts_with = "serve_dir")]
        base_url: Url,

        /// Serve this directory on an ephemeral port and load from it instead.
        #[arg(long)]
        serve_dir: Option<PathBuf>,

        /// First file of the chain, relative to data/.
        #[arg(long, default_value = chainfetch::locator::DEFAULT_ROOT)]
        root: String,

        /// Independently known file fetched last, relative to data/.
        #[arg(long, default_value = chainfetch::locator::DEFAULT_CONSTANT)]
        constant: String,

        /// Id of the element the tables are rendered into.
        #[arg(long, default_value = chainfetch::render::DEFAULT_CONTAINER_ID)]
        container_id: String,

        /// Where to write the HTML page.
        #[arg(short = 'o', long, default_value = "chainfetch.html")]
        out: PathBuf,

        /// Actions to apply, in order.
        #[arg(value_enum, required = true)]
        actions: Vec<Action>,
    },

    /// Serve a directory (expected to contain data/) over HTTP.
    Serve {
        #[arg(long)]
        dir: PathBuf,

        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.cmd {
        Commands::Run {
            base_url,
            serve_dir,
            root,
            constant,
            container_id,
            out,
            actions,
        } => {
            // 1) Pick the site: a local directory served in-process, or a URL.
            let base = match serve_dir {
                Some(dir) => {
                    let addr = serve::spawn_background(&dir)
                        .with_context(|| format!("serve {}", dir.display()))?;
                    Url::parse(&format!("http://{addr}/"))?
                }
                None => base_url,
            };

            let locations = Locations::under(&base)?
                .with_root(root)
                .with_constant(constant);

            // 2) Apply actions to a single container.
            let mut output = OutputContainer::new(container_id);
            let outcome = run_actions(&mut output, &locations, &actions).await;

            // 3) Write whatever was rendered, even if an action failed.
            std::fs::write(&out, render_page(&output))
                .with_context(|| format!("write page {}", out.display()))?;
            println!("Wrote {}", out.display());

            outcome.context("action failed")?;
        }
        Commands::Serve { dir, addr } => {
            serve::bind_and_serve(addr, dir.clone())
                .await
                .with_context(|| format!("serve {} on {}", dir.display(), addr))?;
        }
    }

    Ok(())
}
