//! Parsing seam: html5ever in, arena out.
//!
//! The HTML engine owns all the hard parts (error recovery, implied tags,
//! entities). Its `RcDom` output is converted once into the flat arena
//! and dropped; after that the document is a plain immutable structure.

use crate::arena::Arena;
use crate::error::Result;
use crate::node::Node;
use crate::types::{NodeId, NodeKind, NodeRecord};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::io::Read;

/// An immutable parsed HTML document owning its node arena.
#[derive(Debug)]
pub struct Document {
    arena: Arena,
    root: NodeId,
}

impl Document {
    /// Parses an HTML document from a reader. The input is assumed to be
    /// UTF-8 encoded; malformed markup is recovered by the parser, so
    /// only reader failures surface as errors.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(reader)?;
        Ok(Self::from_rcdom(dom))
    }

    /// Parses an HTML document from an in-memory string. Infallible: the
    /// parser recovers from any malformed input.
    pub fn parse_str(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self::from_rcdom(dom)
    }

    fn from_rcdom(dom: RcDom) -> Self {
        let mut arena = Arena::new();
        let root = convert(&mut arena, &dom.document, None);
        tracing::debug!(nodes = arena.len(), "parsed document");
        Self { arena, root }
    }

    /// The document root node.
    pub fn root(&self) -> Node<'_> {
        Node::new(&self.arena, self.root)
    }
}

fn convert(arena: &mut Arena, handle: &Handle, parent: Option<NodeId>) -> NodeId {
    let record = match &handle.data {
        NodeData::Document => NodeRecord::new(NodeKind::Document, "#document"),
        NodeData::Doctype { name, .. } => NodeRecord::new(NodeKind::Doctype, name.to_string()),
        NodeData::Text { contents } => {
            let mut record = NodeRecord::new(NodeKind::Text, "#text");
            record.data = contents.borrow().to_string();
            record
        }
        NodeData::Comment { contents } => {
            let mut record = NodeRecord::new(NodeKind::Comment, "#comment");
            record.data = contents.to_string();
            record
        }
        NodeData::Element { name, attrs, .. } => {
            let mut record = NodeRecord::new(NodeKind::Element, name.local.to_string());
            record.attrs = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            record
        }
        NodeData::ProcessingInstruction { target, contents } => {
            let mut record =
                NodeRecord::new(NodeKind::ProcessingInstruction, target.to_string());
            record.data = contents.to_string();
            record
        }
    };

    let id = arena.push(record);
    if let Some(parent) = parent {
        arena.append_child(parent, id);
    }
    for child in handle.children.borrow().iter() {
        convert(arena, child, Some(id));
    }
    id
}
