//! Rendering seam: hands a node subtree back to html5ever's serializer.
//!
//! The `Serialize` impl mirrors the one `markup5ever_rcdom` ships for its
//! own handles, re-targeted at arena nodes. The engine handles escaping,
//! void elements, and raw-text elements.

use crate::node::Node;
use crate::types::NodeKind;
use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::{namespace_url, ns, LocalName, QualName};
use std::io;

/// Serializes `node` and its subtree to HTML text.
///
/// Rendering an in-memory tree is total: the only error source is the
/// writer, and a `Vec` writer does not fail.
pub(crate) fn render_node(node: &Node<'_>) -> String {
    let mut buf = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    serialize(&mut buf, node, opts).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

fn element_name(tag: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(tag))
}

impl Serialize for Node<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        match (&traversal_scope, self.kind()) {
            (_, NodeKind::Element) => {
                let include = traversal_scope == TraversalScope::IncludeNode;
                let tag = self.tag().unwrap_or("");
                if include {
                    let attrs: Vec<(QualName, &str)> = self
                        .attr_pairs()
                        .iter()
                        .map(|(key, value)| {
                            (
                                QualName::new(None, ns!(), LocalName::from(key.as_str())),
                                value.as_str(),
                            )
                        })
                        .collect();
                    serializer.start_elem(
                        element_name(tag),
                        attrs.iter().map(|(name, value)| (name, *value)),
                    )?;
                }
                for child in self.children() {
                    child.serialize(serializer, TraversalScope::IncludeNode)?;
                }
                if include {
                    serializer.end_elem(element_name(tag))?;
                }
                Ok(())
            }
            (_, NodeKind::Document) => {
                for child in self.children() {
                    child.serialize(serializer, TraversalScope::IncludeNode)?;
                }
                Ok(())
            }
            (&TraversalScope::ChildrenOnly(_), _) => Ok(()),
            (&TraversalScope::IncludeNode, NodeKind::Doctype) => {
                serializer.write_doctype(self.name())
            }
            (&TraversalScope::IncludeNode, NodeKind::Text) => serializer.write_text(self.data()),
            (&TraversalScope::IncludeNode, NodeKind::Comment) => {
                serializer.write_comment(self.data())
            }
            (&TraversalScope::IncludeNode, NodeKind::ProcessingInstruction) => {
                serializer.write_processing_instruction(self.name(), self.data())
            }
        }
    }
}
