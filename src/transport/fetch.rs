use crate::error::{ChainError, Result};
use crate::transport::Transport;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Native async transport: `send().await`, then let the response decode
/// itself as JSON.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    client: reqwest::Client,
}

impl FetchTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(ChainError::Client)?;
        Ok(Self { client })
    }
}

impl Transport for FetchTransport {
    fn name(&self) -> &'static str {
        "fetch"
    }

    async fn request(&self, url: &Url) -> Result<Value> {
        debug!(transport = self.name(), %url, "request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ChainError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|source| {
            if source.is_decode() {
                ChainError::Decode {
                    url: url.clone(),
                    source,
                }
            } else {
                ChainError::Network {
                    url: url.clone(),
                    source,
                }
            }
        })
    }
}
