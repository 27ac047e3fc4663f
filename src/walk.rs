//! Depth-first traversal with three-way flow control.

use crate::node::Node;

/// Control value returned by a walk callback for each visited node.
///
/// Skipping a subtree and aborting the walk are ordinary outcomes, kept
/// separate from the callback's error channel so that "stop early,
/// successfully" never reads as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Descend into this node's children, then continue with its siblings.
    Continue,
    /// Do not descend into this node's children; resume with its siblings.
    SkipSubtree,
    /// Stop the entire walk immediately.
    Abort,
}

/// Walks the tree rooted at `root` in depth-first pre-order, calling
/// `visit` once per node, `root` included, children left to right.
///
/// A `None` root is a successful no-op, which keeps walks rooted at a
/// failed lookup harmless. `Flow::Abort` and `Flow::SkipSubtree` end in a
/// successful return; only an `Err` from the callback surfaces, and it
/// stops the walk immediately.
///
/// The traversal runs on an explicit stack, so tree depth never threatens
/// the call stack.
pub fn walk<'a, E, F>(root: Option<Node<'a>>, mut visit: F) -> Result<(), E>
where
    F: FnMut(Node<'a>) -> Result<Flow, E>,
{
    let Some(root) = root else {
        return Ok(());
    };
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match visit(node)? {
            Flow::Continue => {
                // Reversed so the leftmost child is popped first.
                for child in node.children().rev() {
                    stack.push(child);
                }
            }
            Flow::SkipSubtree => {}
            Flow::Abort => return Ok(()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SoupError;
    use crate::parse::Document;

    const NESTED: &str = "<div id=\"a\"><p id=\"b\"><b id=\"c\"></b></p><p id=\"d\"></p></div><div id=\"e\"></div>";

    fn visited_ids(doc: &Document, flow_for: impl Fn(&str) -> Flow) -> Vec<String> {
        let mut ids = Vec::new();
        let walked: Result<(), SoupError> = walk(Some(doc.root()), |node| {
            if node.is_element() && !node.id().is_empty() {
                ids.push(node.id().to_string());
                return Ok(flow_for(node.id()));
            }
            Ok(Flow::Continue)
        });
        assert!(walked.is_ok());
        ids
    }

    #[test]
    fn visits_every_node_in_pre_order() {
        let doc = Document::parse_str(NESTED);
        let ids = visited_ids(&doc, |_| Flow::Continue);
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn visits_each_node_exactly_once() {
        let doc = Document::parse_str(NESTED);
        let mut total = 0usize;
        let walked: Result<(), SoupError> = walk(Some(doc.root()), |_| {
            total += 1;
            Ok(Flow::Continue)
        });
        assert!(walked.is_ok());
        // #document, html, head, body, plus the five fixture elements.
        assert_eq!(total, 9);
    }

    #[test]
    fn skip_subtree_is_local() {
        let doc = Document::parse_str(NESTED);
        let ids = visited_ids(&doc, |id| {
            if id == "b" {
                Flow::SkipSubtree
            } else {
                Flow::Continue
            }
        });
        // "c" lives under "b" and is skipped; siblings still run.
        assert_eq!(ids, ["a", "b", "d", "e"]);
    }

    #[test]
    fn abort_stops_everything() {
        let doc = Document::parse_str(NESTED);
        let ids = visited_ids(&doc, |id| if id == "b" { Flow::Abort } else { Flow::Continue });
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn callback_errors_propagate() {
        let doc = Document::parse_str(NESTED);
        let mut seen = 0usize;
        let walked = walk(Some(doc.root()), |node| {
            seen += 1;
            if node.is_element() && node.id() == "d" {
                return Err(SoupError::InvalidInput);
            }
            Ok(Flow::Continue)
        });
        assert!(matches!(walked, Err(SoupError::InvalidInput)));
        // "e" comes after "d" and was never visited.
        assert_eq!(seen, 8);
    }

    #[test]
    fn walking_nothing_is_a_no_op() {
        let walked: Result<(), SoupError> = walk(None, |_| Ok(Flow::Continue));
        assert!(walked.is_ok());
    }
}
