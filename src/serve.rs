//! Static file server for a site containing a `data/` tree.
//!
//! An axum router with `ServeDir` as its fallback: every path is looked up
//! below the root directory, percent-decoded, with `..` refused and missing
//! files answered with 404.

use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::thread;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Router serving files below `root`.
pub fn router(root: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(TraceLayer::new_for_http())
}

/// Serve `root` on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, root: PathBuf) -> io::Result<()> {
    info!(addr = %listener.local_addr()?, root = %root.display(), "serving");
    axum::serve(listener, router(root)).await
}

/// Bind `addr` and serve `root` on the current runtime.
pub async fn bind_and_serve(addr: SocketAddr, root: PathBuf) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, root).await
}

/// Serve `root` on an ephemeral localhost port from a dedicated thread with
/// its own runtime, so callers that block their own thread do not starve it.
///
/// Returns the bound address. The server lives until the process exits.
pub fn spawn_background(root: impl Into<PathBuf>) -> io::Result<SocketAddr> {
    let root = root.into();
    let listener = std::net::TcpListener::bind(("127.0.0.1", 0))?;
    listener.set_nonblocking(true)?;
    let addr = listener.local_addr()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("chainfetch-serve".to_string())
        .spawn(move || {
            let outcome = runtime.block_on(async move {
                let listener = TcpListener::from_std(listener)?;
                serve(listener, root).await
            });
            if let Err(err) = outcome {
                warn!(error = %err, "static server stopped");
            }
        })?;

    Ok(addr)
}
