//! Document shapes read along the chain.
//!
//! JSON shapes:
//!   reference.json   { "data_location": "data1.json" }
//!   data file        { "data_location": "data2.json", "data": [ { "name", "id", "address" }, ... ] }
//!
//! `data_location` is optional on data files and `data` defaults to empty, so
//! a pure pointer file and a terminal payload file both decode as `DataFile`.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Root descriptor: only points at the next resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Descriptor {
    pub data_location: String,
}

/// A data file: optional forwarding pointer plus payload rows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub data_location: Option<String>,

    #[serde(default)]
    pub data: Vec<Record>,
}

/// One displayable row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub name: Cell,

    #[serde(default)]
    pub id: Cell,

    #[serde(default)]
    pub address: Cell,
}

impl Record {
    pub fn new(name: impl Into<Cell>, id: impl Into<Cell>, address: impl Into<Cell>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            address: address.into(),
        }
    }

    /// Cells in column order (Name, ID, Address).
    pub fn cells(&self) -> [&Cell; 3] {
        [&self.name, &self.id, &self.address]
    }
}

/// Display text of a record field.
///
/// Accepts any JSON value: strings are kept verbatim, numbers and booleans
/// use their JSON text, null renders empty. Arrays and objects are kept as
/// compact JSON rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell(pub String);

impl Cell {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self(s)
    }
}

macro_rules! cell_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Cell {
            fn from(n: $t) -> Self {
                Self(n.to_string())
            }
        })*
    };
}

cell_from_int!(i32, i64, u32, u64);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde_json::Value;

        let text = match Value::deserialize(deserializer)? {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        };
        Ok(Self(text))
    }
}
