//! Entry points: one load per transport plus reset.
//!
//! Failure policy differs per entry point:
//! - blocking: every error goes back to the caller, the container is untouched
//! - promise / fetch: transport errors are shown in the container as text and
//!   the call succeeds; parse errors still go back to the caller

use crate::error::{ChainError, Result};
use crate::locator::{Locations, resolve_chain};
use crate::render::{OutputContainer, render_table};
use crate::transport::{BlockingTransport, FetchTransport, PromiseTransport, Transport};
use tracing::{info, warn};

/// Something a user can trigger against the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    Blocking,
    Promise,
    Fetch,
    Reset,
}

pub async fn load_blocking(out: &mut OutputContainer, locations: &Locations) -> Result<()> {
    let records = resolve_chain(&BlockingTransport::new(), locations).await?;
    render_table(out, &records);
    Ok(())
}

pub async fn load_with_promise(out: &mut OutputContainer, locations: &Locations) -> Result<()> {
    match PromiseTransport::new() {
        Ok(transport) => load_catching(&transport, out, locations).await,
        Err(err) => display_or_raise(out, err),
    }
}

pub async fn load_with_fetch(out: &mut OutputContainer, locations: &Locations) -> Result<()> {
    match FetchTransport::new() {
        Ok(transport) => load_catching(&transport, out, locations).await,
        Err(err) => display_or_raise(out, err),
    }
}

pub fn reset(out: &mut OutputContainer) {
    out.reset();
}

/// Apply `actions` in order to one container, stopping at the first error
/// that is not displayed in the container.
pub async fn run_actions(
    out: &mut OutputContainer,
    locations: &Locations,
    actions: &[Action],
) -> Result<()> {
    for action in actions {
        info!(?action, "running");
        match action {
            Action::Blocking => load_blocking(out, locations).await?,
            Action::Promise => load_with_promise(out, locations).await?,
            Action::Fetch => load_with_fetch(out, locations).await?,
            Action::Reset => reset(out),
        }
    }
    Ok(())
}

async fn load_catching<T: Transport>(
    transport: &T,
    out: &mut OutputContainer,
    locations: &Locations,
) -> Result<()> {
    match resolve_chain(transport, locations).await {
        Ok(records) => {
            render_table(out, &records);
            Ok(())
        }
        Err(err) => display_or_raise(out, err),
    }
}

fn display_or_raise(out: &mut OutputContainer, err: ChainError) -> Result<()> {
    if err.is_transport() {
        warn!(error = %err, "request failed; showing error");
        out.show_error(format!("Error: {err}"));
        Ok(())
    } else {
        Err(err)
    }
}
