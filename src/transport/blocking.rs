use crate::error::{ChainError, Result};
use crate::transport::Transport;
use serde_json::Value;
use std::thread;
use tracing::debug;
use url::Url;

/// Synchronous transport.
///
/// The request runs on a helper thread that the caller joins in place, so the
/// thread polling this future is stuck until the response arrives. Nothing
/// else scheduled on that thread makes progress in the meantime.
///
/// The reqwest blocking client must not live inside an async runtime, which
/// is why it is created, used and dropped on the helper thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingTransport;

impl BlockingTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for BlockingTransport {
    fn name(&self) -> &'static str {
        "blocking"
    }

    async fn request(&self, url: &Url) -> Result<Value> {
        debug!(transport = self.name(), %url, "request");
        thread::scope(|scope| match scope.spawn(|| get_json(url)).join() {
            Ok(outcome) => outcome,
            Err(panic) => std::panic::resume_unwind(panic),
        })
    }
}

/// Status is not inspected: whatever body comes back must parse as JSON.
fn get_json(url: &Url) -> Result<Value> {
    let client = reqwest::blocking::Client::builder()
        .build()
        .map_err(ChainError::Client)?;

    let response = client
        .get(url.clone())
        .send()
        .map_err(|source| ChainError::Network {
            url: url.clone(),
            source,
        })?;
    let status = response.status();

    let body = response.text().map_err(|source| ChainError::Network {
        url: url.clone(),
        source,
    })?;
    debug!(%url, status = status.as_u16(), bytes = body.len(), "blocking response");

    serde_json::from_str(&body).map_err(|source| ChainError::Parse {
        url: url.clone(),
        source,
    })
}
