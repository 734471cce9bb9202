//! Transports: three ways of issuing a GET and handing back parsed JSON.
//!
//! Every transport has the same contract so the resolver never cares which
//! one it was given:
//! - issue one request for `url`
//! - return the body parsed as JSON
//! - signal failure through `ChainError`
//!
//! They differ only in how they wait and in what counts as failure:
//! - `BlockingTransport` parks the polling thread and never checks status
//! - `PromiseTransport` wraps a completion callback, resolves on 200 only
//! - `FetchTransport` awaits a native async client, rejects non-2xx

mod blocking;
mod callback;
mod fetch;

pub use blocking::BlockingTransport;
pub use callback::{CallbackClient, Completion, PromiseTransport};
pub use fetch::FetchTransport;

use crate::error::Result;
use serde_json::Value;
use std::future::Future;
use url::Url;

pub trait Transport: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// GET `url` and parse the body as JSON.
    fn request(&self, url: &Url) -> impl Future<Output = Result<Value>> + Send;
}
