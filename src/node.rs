//! Borrowed node handles and their read-only structural accessors.

use crate::arena::Arena;
use crate::types::{NodeId, NodeKind, NodeRecord};
use crate::walk::{self, Flow};
use ahash::AHashMap;
use std::convert::Infallible;
use std::fmt;

/// A lightweight handle to one node of a parsed document.
///
/// Handles are `Copy` and borrow the arena of the [`Document`] they came
/// from. Every accessor is total: asking an inapplicable question (the
/// tag of a text node, the attributes of a comment) returns an empty or
/// absent value instead of failing.
///
/// Equality is identity: two handles are equal when they address the same
/// node of the same document, never by structural comparison.
///
/// [`Document`]: crate::Document
#[derive(Clone, Copy)]
pub struct Node<'a> {
    arena: &'a Arena,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub(crate) fn new(arena: &'a Arena, id: NodeId) -> Self {
        Self { arena, id }
    }

    fn record(&self) -> &'a NodeRecord {
        self.arena.get(self.id)
    }

    fn wrap(&self, id: Option<NodeId>) -> Option<Node<'a>> {
        id.map(|id| Node::new(self.arena, id))
    }

    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        self.record().kind
    }

    pub fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    pub fn is_text(&self) -> bool {
        self.kind() == NodeKind::Text
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.wrap(self.record().parent)
    }

    pub fn first_child(&self) -> Option<Node<'a>> {
        self.wrap(self.record().children.first().copied())
    }

    pub fn last_child(&self) -> Option<Node<'a>> {
        self.wrap(self.record().children.last().copied())
    }

    pub fn prev_sibling(&self) -> Option<Node<'a>> {
        self.wrap(self.record().prev_sibling)
    }

    pub fn next_sibling(&self) -> Option<Node<'a>> {
        self.wrap(self.record().next_sibling)
    }

    /// Iterates over the direct children in document order. Each call
    /// produces a fresh iterator.
    pub fn children(&self) -> Children<'a> {
        Children {
            arena: self.arena,
            ids: self.record().children.as_slice().iter(),
        }
    }

    /// Tag name for element nodes, `None` otherwise.
    pub fn tag(&self) -> Option<&'a str> {
        let record = self.record();
        if record.kind == NodeKind::Element {
            Some(&record.name)
        } else {
            None
        }
    }

    /// Raw character data of text, comment, and processing-instruction
    /// nodes; empty for everything else.
    pub fn data(&self) -> &'a str {
        &self.record().data
    }

    pub(crate) fn name(&self) -> &'a str {
        &self.record().name
    }

    /// Attribute pairs in source order, duplicates included.
    pub fn attr_pairs(&self) -> &'a [(String, String)] {
        &self.record().attrs
    }

    /// Attribute key/value map of an element. When a key repeats in the
    /// source the first occurrence wins, matching [`attribute`].
    ///
    /// [`attribute`]: Node::attribute
    pub fn attributes(&self) -> AHashMap<&'a str, &'a str> {
        let attrs = self.attr_pairs();
        let mut map = AHashMap::with_capacity(attrs.len());
        for (key, value) in attrs {
            map.entry(key.as_str()).or_insert(value.as_str());
        }
        map
    }

    /// First value stored under `key`, or the empty string when the key
    /// is absent or this is not an element.
    pub fn attribute(&self, key: &str) -> &'a str {
        self.attr_pairs()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// The `id` attribute of this node.
    pub fn id(&self) -> &'a str {
        self.attribute("id")
    }

    /// The `class` attribute of this node.
    pub fn class(&self) -> &'a str {
        self.attribute("class")
    }

    /// The `href` attribute of this node.
    pub fn href(&self) -> &'a str {
        self.attribute("href")
    }

    /// The `title` attribute of this node.
    pub fn title(&self) -> &'a str {
        self.attribute("title")
    }

    /// Concatenated content of the direct text-node children, skipping
    /// children whose content is nothing but whitespace. Text that merely
    /// starts or ends with whitespace is kept verbatim.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in self.children() {
            if !child.is_text() {
                continue;
            }
            let data = child.data();
            if is_blank(data) {
                continue;
            }
            out.push_str(data);
        }
        out
    }

    /// Concatenated raw content of every text node in this subtree, in
    /// document order, with no whitespace filtering.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        let _: Result<(), Infallible> = self.walk(|node| {
            if node.is_text() {
                out.push_str(node.data());
            }
            Ok(Flow::Continue)
        });
        out
    }

    /// Serializes this node and its subtree back to HTML text.
    pub fn html(&self) -> String {
        crate::render::render_node(self)
    }

    /// Walks the subtree rooted at this node, itself included, in
    /// depth-first pre-order. See [`walk::walk`](crate::walk::walk).
    pub fn walk<E, F>(&self, visit: F) -> Result<(), E>
    where
        F: FnMut(Node<'a>) -> Result<Flow, E>,
    {
        walk::walk(Some(*self), visit)
    }
}

/// Matches the `^\s+$` rule: one or more characters, all whitespace.
fn is_blank(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_whitespace)
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

/// Iterator over the direct children of a node, in document order.
pub struct Children<'a> {
    arena: &'a Arena,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| Node::new(self.arena, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| Node::new(self.arena, id))
    }
}

impl ExactSizeIterator for Children<'_> {}
