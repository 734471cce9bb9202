//! Error types for chain resolution.
//!
//! Two classes matter to callers:
//! - transport failures (network, non-success status, lost callback), which
//!   the promise and fetch entry points catch and display;
//! - parse failures (malformed JSON, unexpected document shape, broken
//!   locations), which always propagate.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ChainError {
    // ── transport ──────────────────────────────────────────────────────
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("network error requesting {url}: {source}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}")]
    Status { url: Url, status: u16 },

    #[error("request to {url} completed without invoking its callback")]
    CallbackDropped { url: Url },

    // ── parse ──────────────────────────────────────────────────────────
    #[error("malformed JSON from {url}: {source}")]
    Parse {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode JSON body from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected document shape at {url}: {source}")]
    Shape {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("{url} has no data_location to follow")]
    MissingLocation { url: Url },

    #[error("invalid location {location:?} relative to {base}: {source}")]
    InvalidLocation {
        base: Url,
        location: String,
        #[source]
        source: url::ParseError,
    },
}

impl ChainError {
    /// True for failures of the request itself rather than of its payload.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Client(_)
                | Self::Network { .. }
                | Self::Status { .. }
                | Self::CallbackDropped { .. }
        )
    }

    /// The URL the failing step was working on, if any.
    pub fn url(&self) -> Option<&Url> {
        let url = match self {
            Self::Client(_) => return None,
            Self::Network { url, .. }
            | Self::Status { url, .. }
            | Self::CallbackDropped { url }
            | Self::Parse { url, .. }
            | Self::Decode { url, .. }
            | Self::Shape { url, .. }
            | Self::MissingLocation { url } => url,
            Self::InvalidLocation { base, .. } => base,
        };
        Some(url)
    }
}

pub type Result<T> = std::result::Result<T, ChainError>;
