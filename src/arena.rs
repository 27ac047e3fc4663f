//! Arena storage for parsed trees.
//!
//! All nodes of one document live sequentially in a single `Vec` and are
//! addressed by `NodeId`. Ids never leave the crate, so lookups index
//! directly. Once a document is built the arena is never touched again;
//! every public handle borrows it immutably.

use crate::types::{NodeId, NodeRecord};

#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<NodeRecord>,
}

impl Arena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a record and returns its id.
    pub fn push(&mut self, record: NodeRecord) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(record);
        id
    }

    pub fn get(&self, id: NodeId) -> &NodeRecord {
        &self.nodes[id as usize]
    }

    /// Appends `child` to `parent`'s child list and wires up the parent
    /// and sibling back-references.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev = self.nodes[parent as usize].children.last().copied();
        if let Some(prev) = prev {
            self.nodes[prev as usize].next_sibling = Some(child);
        }
        let record = &mut self.nodes[child as usize];
        record.parent = Some(parent);
        record.prev_sibling = prev;
        self.nodes[parent as usize].children.push(child);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
