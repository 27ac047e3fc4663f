//! Core node record types stored in the arena.
//!
//! Records use u32 indices instead of pointers: the child list is the only
//! ownership edge, parent and sibling fields are back-references into the
//! same arena.

use smallvec::SmallVec;

/// Node identifier (index into the arena).
pub(crate) type NodeId = u32;

/// Node kind, covering everything the HTML parser can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Doctype,
    Element,
    Text,
    Comment,
    ProcessingInstruction,
}

/// One stored node.
///
/// For elements `name` is the tag name as parsed and `attrs` keeps the
/// attribute pairs in source order (keys may repeat; the first occurrence
/// wins for lookups). For text, comment, and processing-instruction nodes
/// `data` holds the raw character content.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord {
    pub kind: NodeKind,
    pub name: String,
    pub data: String,
    pub attrs: Vec<(String, String)>,
    pub parent: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>, // most nodes have <4 children
}

impl NodeRecord {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            data: String::new(),
            attrs: Vec::new(),
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            children: SmallVec::new(),
        }
    }
}
