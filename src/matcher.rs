//! Element matching for tag and attribute queries.

use crate::node::Node;

/// Splits the optional attribute arguments into a `(key, value)` pair.
///
/// No arguments means "any attributes", a single argument means "key
/// present, any value", and anything past the second argument is ignored.
pub(crate) fn plain_attr<'s>(attrs: &[&'s str]) -> (&'s str, &'s str) {
    match attrs {
        [] => ("", ""),
        [key] => (key, ""),
        [key, value, ..] => (key, value),
    }
}

/// Renders a `tag[key=value]` descriptor for error messages.
pub(crate) fn pretty_tag_attr(tag: &str, attrs: &[&str]) -> String {
    let (key, value) = plain_attr(attrs);
    if key.is_empty() && value.is_empty() {
        tag.to_string()
    } else {
        format!("{tag}[{key}={value}]")
    }
}

/// Decides whether `node` satisfies a `(tag, attribute)` query.
///
/// Only elements can match. A non-empty `tag` must equal the node's tag
/// name exactly, as stored. The first attribute pair whose key equals the
/// requested key decides the attribute check: an empty expected value
/// accepts any stored value, an exact match accepts, and otherwise the
/// expected value is split on whitespace and every token must appear in
/// the stored value as a plain substring. The substring rule can match
/// across token boundaries (asking for class `ab` accepts `abc`); callers
/// depend on the loose behavior, so it is kept as is.
pub fn matches(node: Node<'_>, tag: &str, attrs: &[&str]) -> bool {
    if !node.is_element() {
        return false;
    }
    if !tag.is_empty() && node.tag() != Some(tag) {
        return false;
    }
    let (key, value) = plain_attr(attrs);
    if key.is_empty() {
        return true;
    }
    for (k, stored) in node.attr_pairs() {
        if k != key {
            continue;
        }
        if value.is_empty() || value == stored {
            return true;
        }
        return value
            .split_whitespace()
            .all(|token| stored.contains(token));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Document;
    use crate::query::Queryable;

    fn fixture() -> Document {
        Document::parse_str(
            "<a id=\"link\" class=\"btn btn-primary wide\" href=\"/home\">go</a><p>text</p>",
        )
    }

    #[test]
    fn non_elements_never_match() {
        let doc = fixture();
        let text = doc.root().find("p", &[]).unwrap().first_child().unwrap();
        assert!(!matches(text, "", &[]));
        assert!(!matches(text, "p", &[]));
    }

    #[test]
    fn tag_comparison_is_exact() {
        let doc = fixture();
        let a = doc.root().find("a", &[]).unwrap();
        assert!(matches(a, "a", &[]));
        assert!(!matches(a, "A", &[]));
        assert!(!matches(a, "p", &[]));
        // Empty tag matches any element.
        assert!(matches(a, "", &[]));
    }

    #[test]
    fn key_presence_is_enough_without_a_value() {
        let doc = fixture();
        let a = doc.root().find("a", &[]).unwrap();
        assert!(matches(a, "a", &["href"]));
        assert!(!matches(a, "a", &["rel"]));
    }

    #[test]
    fn exact_value_match() {
        let doc = fixture();
        let a = doc.root().find("a", &[]).unwrap();
        assert!(matches(a, "a", &["href", "/home"]));
        assert!(!matches(a, "a", &["href", "/away"]));
    }

    #[test]
    fn every_token_must_be_a_substring() {
        let doc = fixture();
        let a = doc.root().find("a", &[]).unwrap();
        assert!(matches(a, "a", &["class", "btn-primary"]));
        assert!(matches(a, "a", &["class", "btn wide"]));
        assert!(!matches(a, "a", &["class", "btn narrow"]));
        // Substring containment, not whole-token equality: "prim" is no
        // class of its own but lives inside "btn-primary".
        assert!(matches(a, "a", &["class", "prim"]));
    }

    #[test]
    fn extra_attribute_arguments_are_ignored() {
        let doc = fixture();
        let a = doc.root().find("a", &[]).unwrap();
        assert!(matches(a, "a", &["href", "/home", "ignored", "also-ignored"]));
    }

    #[test]
    fn descriptor_formatting() {
        assert_eq!(pretty_tag_attr("a", &[]), "a");
        assert_eq!(pretty_tag_attr("a", &["href"]), "a[href=]");
        assert_eq!(pretty_tag_attr("a", &["href", "/home"]), "a[href=/home]");
    }

    #[test]
    fn plain_attr_shapes() {
        assert_eq!(plain_attr(&[]), ("", ""));
        assert_eq!(plain_attr(&["k"]), ("k", ""));
        assert_eq!(plain_attr(&["k", "v"]), ("k", "v"));
        assert_eq!(plain_attr(&["k", "v", "w"]), ("k", "v"));
    }
}
