//! Chainable find / query / query_all operations built on the walker.

use crate::error::{Result, SoupError};
use crate::matcher::{matches, pretty_tag_attr};
use crate::node::Node;
use crate::walk::{walk, Flow};
use std::convert::Infallible;

/// An ordered collection of query results.
///
/// Member order follows the producing query: outer member order first,
/// then per-member match order. Duplicates are possible when two chains
/// reach the same node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nodes<'a>(Vec<Node<'a>>);

impl<'a> Nodes<'a> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node<'a>> {
        self.0.iter()
    }
}

impl<'a> std::ops::Deref for Nodes<'a> {
    type Target = [Node<'a>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for Nodes<'a> {
    type Item = Node<'a>;
    type IntoIter = std::vec::IntoIter<Node<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Nodes<'a> {
    type Item = &'b Node<'a>;
    type IntoIter = std::slice::Iter<'b, Node<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> FromIterator<Node<'a>> for Nodes<'a> {
    fn from_iter<I: IntoIterator<Item = Node<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Collects descendant elements of `root` matching the query, in visit
/// order. `root` itself is never a candidate.
///
/// A `limit` of zero collects every match; otherwise the walk aborts as
/// soon as `limit` matches have been found.
pub(crate) fn search<'a>(root: Node<'a>, tag: &str, attrs: &[&str], limit: usize) -> Nodes<'a> {
    let mut found = Vec::new();
    // The callback is infallible, so the walk is too.
    let _: std::result::Result<(), Infallible> = walk(Some(root), |node| {
        if node == root {
            return Ok(Flow::Continue);
        }
        if matches(node, tag, attrs) {
            found.push(node);
            if limit > 0 && found.len() >= limit {
                return Ok(Flow::Abort);
            }
        }
        Ok(Flow::Continue)
    });
    tracing::trace!(tag, limit, found = found.len(), "search done");
    Nodes(found)
}

/// Search capability shared by single nodes, optional nodes, and node
/// sequences, so call chains can mix all three freely.
pub trait Queryable<'a> {
    /// What `query` yields: one optional node for the single-node forms,
    /// a flattened sequence for the sequence form.
    type Output;

    /// First matching descendant element, or an error naming the query.
    fn find(&self, tag: &str, attrs: &[&str]) -> Result<Node<'a>>;

    /// First matching descendant element, absent instead of an error.
    fn query(&self, tag: &str, attrs: &[&str]) -> Self::Output;

    /// Every matching descendant element, in document order.
    fn query_all(&self, tag: &str, attrs: &[&str]) -> Nodes<'a>;
}

impl<'a> Queryable<'a> for Node<'a> {
    type Output = Option<Node<'a>>;

    fn find(&self, tag: &str, attrs: &[&str]) -> Result<Node<'a>> {
        self.query(tag, attrs).ok_or_else(|| SoupError::NotFound {
            selector: pretty_tag_attr(tag, attrs),
        })
    }

    fn query(&self, tag: &str, attrs: &[&str]) -> Option<Node<'a>> {
        search(*self, tag, attrs, 1).first().copied()
    }

    fn query_all(&self, tag: &str, attrs: &[&str]) -> Nodes<'a> {
        search(*self, tag, attrs, 0)
    }
}

/// Absent-tolerant forms: a `None` receiver yields `None` / an empty
/// sequence from the non-erroring operations, so chains rooted at a
/// failed `query` stay safe without guards.
impl<'a> Queryable<'a> for Option<Node<'a>> {
    type Output = Option<Node<'a>>;

    fn find(&self, tag: &str, attrs: &[&str]) -> Result<Node<'a>> {
        match self {
            Some(node) => node.find(tag, attrs),
            None => Err(SoupError::InvalidInput),
        }
    }

    fn query(&self, tag: &str, attrs: &[&str]) -> Option<Node<'a>> {
        match self {
            Some(node) => node.query(tag, attrs),
            None => None,
        }
    }

    fn query_all(&self, tag: &str, attrs: &[&str]) -> Nodes<'a> {
        match self {
            Some(node) => node.query_all(tag, attrs),
            None => Nodes::new(),
        }
    }
}

/// Sequence forms broadcast over the members in order and flatten the
/// results. `query` applies the per-member non-erroring variant, so a
/// member without a match contributes nothing instead of failing the
/// whole chain.
impl<'a> Queryable<'a> for Nodes<'a> {
    type Output = Nodes<'a>;

    fn find(&self, tag: &str, attrs: &[&str]) -> Result<Node<'a>> {
        self.iter()
            .find_map(|node| node.query(tag, attrs))
            .ok_or_else(|| SoupError::NotFound {
                selector: pretty_tag_attr(tag, attrs),
            })
    }

    fn query(&self, tag: &str, attrs: &[&str]) -> Nodes<'a> {
        self.iter()
            .filter_map(|node| node.query(tag, attrs))
            .collect()
    }

    fn query_all(&self, tag: &str, attrs: &[&str]) -> Nodes<'a> {
        self.iter()
            .flat_map(|node| node.query_all(tag, attrs))
            .collect()
    }
}
