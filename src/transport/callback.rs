//! Callback-style client and the promise wrapper built on it.
//!
//! `CallbackClient::send` fires a request and reports back through a
//! completion callback, the way an event-driven request object would.
//! `PromiseTransport` turns that callback into a future with a oneshot
//! channel.

use crate::error::{ChainError, Result};
use crate::transport::Transport;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::debug;
use url::Url;

/// What the callback receives when a request finishes.
#[derive(Debug, Clone)]
pub struct Completion {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct CallbackClient {
    client: reqwest::Client,
}

impl CallbackClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(ChainError::Client)?;
        Ok(Self { client })
    }

    /// Issue a GET in the background and invoke `on_load` once it finishes.
    ///
    /// Must be called from within a tokio runtime. The callback runs on the
    /// spawned task and receives either the full response or the network
    /// error that ended it.
    pub fn send<F>(&self, url: Url, on_load: F)
    where
        F: FnOnce(std::result::Result<Completion, reqwest::Error>) + Send + 'static,
    {
        let client = self.client.clone();
        tokio::spawn(async move {
            let outcome: std::result::Result<Completion, reqwest::Error> = async {
                let response = client.get(url).send().await?;
                let status = response.status();
                let body = response.text().await?;
                Ok(Completion { status, body })
            }
            .await;
            on_load(outcome);
        });
    }
}

/// Promise over `CallbackClient`: resolves on status 200 only.
#[derive(Debug, Clone)]
pub struct PromiseTransport {
    inner: CallbackClient,
}

impl PromiseTransport {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: CallbackClient::new()?,
        })
    }

    pub fn from_client(inner: CallbackClient) -> Self {
        Self { inner }
    }
}

impl Transport for PromiseTransport {
    fn name(&self) -> &'static str {
        "promise"
    }

    async fn request(&self, url: &Url) -> Result<Value> {
        debug!(transport = self.name(), %url, "request");

        let (tx, rx) = oneshot::channel();
        self.inner.send(url.clone(), move |outcome| {
            // Receiver gone means the caller stopped waiting; nothing to do.
            let _ = tx.send(outcome);
        });

        let outcome = rx
            .await
            .map_err(|_| ChainError::CallbackDropped { url: url.clone() })?;
        let completion = outcome.map_err(|source| ChainError::Network {
            url: url.clone(),
            source,
        })?;

        if completion.status != StatusCode::OK {
            return Err(ChainError::Status {
                url: url.clone(),
                status: completion.status.as_u16(),
            });
        }

        serde_json::from_str(&completion.body).map_err(|source| ChainError::Parse {
            url: url.clone(),
            source,
        })
    }
}
