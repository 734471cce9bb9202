//! Test site: a temp directory with a `data/` tree, served over HTTP.

#![allow(dead_code)]

use chainfetch::Locations;
use chainfetch::serve;
use std::fs;
use tempfile::TempDir;
use url::Url;

pub struct Site {
    // Kept alive so the served files outlive the test.
    _dir: TempDir,
    pub base: Url,
}

impl Site {
    /// Write `files` (paths relative to data/) and start serving them.
    pub fn new(files: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        fs::create_dir_all(&data).unwrap();
        for (name, body) in files {
            fs::write(data.join(name), body).unwrap();
        }

        let addr = serve::spawn_background(dir.path()).unwrap();
        let base = Url::parse(&format!("http://{addr}/")).unwrap();
        Self { _dir: dir, base }
    }

    pub fn locations(&self) -> Locations {
        Locations::under(&self.base).unwrap()
    }

    pub fn url(&self, name: &str) -> String {
        format!("{}data/{}", self.base, name)
    }
}

pub const REFERENCE: &str = r#"{"data_location": "a.json"}"#;
pub const A: &str = r#"{"data_location": "b.json", "data": [{"name":"X","id":1,"address":"Y"}]}"#;
pub const B: &str = r#"{"data": [{"name":"P","id":2,"address":"Q"}]}"#;
pub const DATA3: &str = r#"{"data": [{"name":"M","id":3,"address":"N"}]}"#;

/// reference.json -> a.json -> b.json, plus data3.json.
pub fn example_site() -> Site {
    Site::new(&[
        ("reference.json", REFERENCE),
        ("a.json", A),
        ("b.json", B),
        ("data3.json", DATA3),
    ])
}

/// Same chain with b.json missing.
pub fn site_missing_second_hop() -> Site {
    Site::new(&[
        ("reference.json", REFERENCE),
        ("a.json", A),
        ("data3.json", DATA3),
    ])
}
