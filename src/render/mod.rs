//! Output container and table rendering.
//!
//! The container is an explicit handle owned by the caller; every load and
//! reset receives it by `&mut`. Tables are appended, never replaced, so two
//! loads without a reset in between leave two tables behind.

pub mod html;

pub use html::{render_container, render_page};

use crate::model::Record;

pub const DEFAULT_CONTAINER_ID: &str = "output";

/// Column titles, in cell order.
pub const HEADER: [&str; 3] = ["Name", "ID", "Address"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<[String; 3]>,
}

impl Table {
    pub fn from_records(records: &[Record]) -> Self {
        let rows = records
            .iter()
            .map(|r| r.cells().map(|c| c.as_str().to_string()))
            .collect();
        Self { rows }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Table(Table),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputContainer {
    id: String,
    nodes: Vec<Node>,
}

impl Default for OutputContainer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID)
    }
}

impl OutputContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nodes: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Table(t) => Some(t),
            Node::Text(_) => None,
        })
    }

    pub fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Replace everything with a single line of text.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.nodes.clear();
        self.nodes.push(Node::Text(message.into()));
    }

    pub fn reset(&mut self) {
        self.nodes.clear();
    }
}

/// Append one table (header + a row per record) to `out`.
pub fn render_table(out: &mut OutputContainer, records: &[Record]) {
    out.append(Node::Table(Table::from_records(records)));
}
