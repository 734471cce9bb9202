//! chainfetch: follow a chain of JSON pointers over HTTP and render the
//! merged records as an HTML table.
//!
//! - `locator` walks reference.json -> data1 -> data2, then data3
//! - `transport` holds the three interchangeable ways of issuing a request
//! - `render` owns the output container and its HTML
//! - `page` wires them into the user-facing load and reset operations

pub mod error;
pub mod locator;
pub mod logging;
pub mod model;
pub mod page;
pub mod render;
pub mod serve;
pub mod transport;

pub use error::{ChainError, Result};
pub use locator::{Locations, resolve_chain};
pub use model::{Cell, DataFile, Descriptor, Record};
pub use page::{Action, load_blocking, load_with_fetch, load_with_promise, reset, run_actions};
pub use render::{OutputContainer, render_page, render_table};
pub use transport::{BlockingTransport, FetchTransport, PromiseTransport, Transport};
