//! eltree - Element Tree Engine
//!
//! Arena-backed markup tree. Every node lives in an [`ElementTree`] and is
//! addressed by a [`NodeId`]; an arena can hold several independent trees.
//!
//! The engine keeps one invariant at all times: an `id` attribute value
//! appears at most once within any single tree.
//!
//! # Example
//! ```rust
//! use eltree::ElementTree;
//!
//! let mut tree = ElementTree::new();
//! let p1 = tree.new_node("p", "x", [("id", "1")])?;
//! let p2 = tree.new_node("p", "y", [("id", "2")])?;
//! let div = tree.new_node("div", vec![p1, p2], eltree::AttributeMap::new())?;
//!
//! assert_eq!(tree.find_by_tag(div, "p")?, vec![p1, p2]);
//! assert!(tree.render(div)?.contains("<p id=\"1\">"));
//! # Ok::<(), eltree::TreeError>(())
//! ```

mod attributes;
mod config;
mod node;
mod operations;
mod query;
mod registry;
mod serialize;
mod tree;
mod validate;

use std::fmt;

pub use attributes::{Attr, AttributeMap};
pub use config::RenderConfig;
pub use node::{Content, Node, Tag};
pub use operations::ContentInput;
pub use query::{Ancestors, Descendants};
pub use registry::IdSet;
pub use tree::ElementTree;
pub use validate::{ALLOWED_TAGS, validate_attributes, validate_content, validate_tag};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Tree construction, mutation and output errors
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Invalid element name: {name}")]
    InvalidTag { name: String },

    #[error("Invalid content: {reason}")]
    InvalidContentType { reason: String },

    /// An attribute name was given twice, or is empty, or contains
    /// whitespace, a control character, a quote, `=`, `<`, `>` or `/`.
    /// Values are never checked.
    #[error("Invalid attributes: {reason}")]
    InvalidAttributes { reason: String },

    #[error("ID '{id}' already exists in the tree")]
    DuplicateId { id: String },

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node {0} already has a parent")]
    AlreadyAttached(NodeId),

    #[error("Hierarchy request error: {reason}")]
    HierarchyRequest { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
