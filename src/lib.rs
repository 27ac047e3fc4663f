//! Soup-style traversal and querying over parsed HTML trees.
//!
//! The crate is a thin query layer: html5ever parses the markup, the
//! resulting tree is frozen into a flat arena, and everything else is
//! read-only: a depth-first [`walk`](walk::walk) with three-way flow
//! control, a tag/attribute [`matcher`], and chainable
//! [`Queryable`] operations over single nodes and node sequences.
//!
//! ```
//! use domsoup::{Document, Queryable};
//!
//! let doc = Document::parse_str(
//!     "<ul><li><a href=\"/a\">first</a></li><li><a href=\"/b\">second</a></li></ul>",
//! );
//! let root = doc.root();
//!
//! let first = root.find("a", &[])?;
//! assert_eq!(first.href(), "/a");
//! assert_eq!(first.text(), "first");
//!
//! // Chains tolerate missing nodes without erroring.
//! let links = root.query("ul", &[]).query_all("a", &[]);
//! assert_eq!(links.len(), 2);
//! assert!(root.query("table", &[]).query("a", &[]).is_none());
//! # Ok::<(), domsoup::SoupError>(())
//! ```

mod arena;
pub mod error;
pub mod matcher;
pub mod node;
pub mod parse;
pub mod query;
mod render;
mod types;
pub mod walk;

pub use error::{Result, SoupError};
pub use node::{Children, Node};
pub use parse::Document;
pub use query::{Nodes, Queryable};
pub use types::NodeKind;
pub use walk::Flow;
