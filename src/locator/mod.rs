//! Locator: follows the chain of `data_location` pointers.
//!
//! Fixed order, one request at a time:
//!   1) root      (Descriptor)  -> location of data1
//!   2) data1     (DataFile)    -> location of data2
//!   3) data2     (DataFile)
//!   4) constant  (DataFile)    known up front, fetched last
//!
//! Relative locations are resolved against the data root (`<base>/data/`).
//! The first failure aborts the chain; nothing is retried.

use crate::error::{ChainError, Result};
use crate::model::{DataFile, Descriptor, Record};
use crate::transport::Transport;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

pub const DATA_DIR: &str = "data/";
pub const DEFAULT_ROOT: &str = "reference.json";
pub const DEFAULT_CONSTANT: &str = "data3.json";

/// Where the chain starts and which file is fetched independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub data_root: Url,
    pub root: String,
    pub constant: String,
}

impl Locations {
    /// Locations below `<base>/data/` with the default root and constant.
    pub fn under(base: &Url) -> Result<Self> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let data_root = join(&base, DATA_DIR)?;

        Ok(Self {
            data_root,
            root: DEFAULT_ROOT.to_string(),
            constant: DEFAULT_CONSTANT.to_string(),
        })
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_constant(mut self, constant: impl Into<String>) -> Self {
        self.constant = constant.into();
        self
    }

    /// Resolve a location relative to the data root.
    pub fn resolve(&self, location: &str) -> Result<Url> {
        join(&self.data_root, location)
    }
}

fn join(base: &Url, location: &str) -> Result<Url> {
    base.join(location)
        .map_err(|source| ChainError::InvalidLocation {
            base: base.clone(),
            location: location.to_string(),
            source,
        })
}

/// Walk the chain and return data1 ++ data2 ++ data3 in that order.
pub async fn resolve_chain<T: Transport>(transport: &T, locations: &Locations) -> Result<Vec<Record>> {
    let root_url = locations.resolve(&locations.root)?;
    let descriptor: Descriptor = fetch_as(transport, &root_url).await?;

    let first_url = locations.resolve(&descriptor.data_location)?;
    let first: DataFile = fetch_as(transport, &first_url).await?;

    let Some(next) = first.data_location.as_deref() else {
        return Err(ChainError::MissingLocation { url: first_url });
    };
    let second_url = locations.resolve(next)?;
    let second: DataFile = fetch_as(transport, &second_url).await?;

    let constant_url = locations.resolve(&locations.constant)?;
    let third: DataFile = fetch_as(transport, &constant_url).await?;

    let mut records =
        Vec::with_capacity(first.data.len() + second.data.len() + third.data.len());
    records.extend(first.data);
    records.extend(second.data);
    records.extend(third.data);

    info!(
        transport = transport.name(),
        records = records.len(),
        "chain resolved"
    );
    Ok(records)
}

async fn fetch_as<T, D>(transport: &T, url: &Url) -> Result<D>
where
    T: Transport,
    D: DeserializeOwned,
{
    let value = transport.request(url).await?;
    debug!(transport = transport.name(), %url, "hop");
    serde_json::from_value(value).map_err(|source| ChainError::Shape {
        url: url.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory transport: serves canned documents and records request order.
    struct MapTransport {
        docs: HashMap<String, Value>,
        seen: Mutex<Vec<String>>,
    }

    impl MapTransport {
        fn new(docs: &[(&str, Value)]) -> Self {
            Self {
                docs: docs
                    .iter()
                    .map(|(k, v)| (format!("http://host/data/{k}"), v.clone()))
                    .collect(),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Transport for MapTransport {
        fn name(&self) -> &'static str {
            "map"
        }

        async fn request(&self, url: &Url) -> Result<Value> {
            self.seen.lock().unwrap().push(url.to_string());
            self.docs
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| ChainError::Status {
                    url: url.clone(),
                    status: 404,
                })
        }
    }

    fn locations() -> Locations {
        Locations::under(&Url::parse("http://host").unwrap()).unwrap()
    }

    fn example_chain() -> MapTransport {
        MapTransport::new(&[
            ("reference.json", json!({"data_location": "a.json"})),
            (
                "a.json",
                json!({"data_location": "b.json", "data": [{"name":"X","id":1,"address":"Y"}]}),
            ),
            ("b.json", json!({"data": [{"name":"P","id":2,"address":"Q"}]})),
            ("data3.json", json!({"data": [{"name":"M","id":3,"address":"N"}]})),
        ])
    }

    #[test]
    fn data_root_is_below_base() {
        let loc = Locations::under(&Url::parse("http://host/site").unwrap()).unwrap();
        assert_eq!(loc.data_root.as_str(), "http://host/site/data/");
        assert_eq!(
            loc.resolve("x/y.json").unwrap().as_str(),
            "http://host/site/data/x/y.json"
        );
    }

    #[tokio::test]
    async fn follows_hops_in_order_and_concatenates() {
        let t = example_chain();
        let records = resolve_chain(&t, &locations()).await.unwrap();

        assert_eq!(
            records,
            vec![
                Record::new("X", 1, "Y"),
                Record::new("P", 2, "Q"),
                Record::new("M", 3, "N"),
            ]
        );
        assert_eq!(
            t.seen(),
            vec![
                "http://host/data/reference.json",
                "http://host/data/a.json",
                "http://host/data/b.json",
                "http://host/data/data3.json",
            ]
        );
    }

    #[tokio::test]
    async fn stops_at_first_failure() {
        let mut t = example_chain();
        t.docs.remove("http://host/data/b.json");

        let err = resolve_chain(&t, &locations()).await.unwrap_err();
        assert!(matches!(err, ChainError::Status { status: 404, .. }));
        assert_eq!(t.seen().len(), 3, "constant file must not be requested");
    }

    #[tokio::test]
    async fn first_hop_without_pointer_is_an_error() {
        let t = MapTransport::new(&[
            ("reference.json", json!({"data_location": "a.json"})),
            ("a.json", json!({"data": []})),
        ]);

        let err = resolve_chain(&t, &locations()).await.unwrap_err();
        assert!(matches!(err, ChainError::MissingLocation { .. }));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn wrong_document_shape_is_reported_with_url() {
        let t = MapTransport::new(&[("reference.json", json!({"location": "a.json"}))]);

        let err = resolve_chain(&t, &locations()).await.unwrap_err();
        match err {
            ChainError::Shape { url, .. } => {
                assert_eq!(url.as_str(), "http://host/data/reference.json")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
