//! Minimal selector grammar for scope resolution.
//!
//! Supports the subset the runtime needs to resolve a scope option to an
//! element: a single compound selector with no combinators.
//!
//! | Form | Matches |
//! |------|---------|
//! | `div` | tag name |
//! | `#hero` | `id` attribute |
//! | `.card` | class in the space-separated `class` attribute |
//! | `[data-x]` | attribute present |
//! | `[data-x=y]`, `[data-x="y"]` | attribute equals value |
//! | `section.card[data-x=y]` | all parts of the compound |
//!
//! Parsing is total-or-nothing: anything outside this grammar (combinators,
//! comma lists, pseudo-classes) yields `None`, which callers treat as an
//! unresolvable selector rather than an error.

use crate::{Document, NodeId};

/// A parsed compound selector.
///
/// # Example
///
/// ```
/// use armature_dom::{Document, Selector};
///
/// let mut doc = Document::new();
/// let hero = doc.element("section", doc.root());
/// doc.set_attribute(hero, "class", "hero full-bleed");
///
/// let selector = Selector::parse(".hero").unwrap();
/// assert_eq!(doc.select_first(&selector), Some(hero));
/// assert!(Selector::parse("div > span").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Consumes a leading identifier, returning it and the rest.
fn take_ident(input: &str) -> Option<(&str, &str)> {
    let end = input
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(input.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    Some((&input[..end], &input[end..]))
}

impl Selector {
    /// Parses a selector string, returning `None` when the input is empty
    /// or falls outside the supported grammar.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut rest = input.trim();
        if rest.is_empty() {
            return None;
        }

        let mut selector = Selector {
            tag: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
        };

        if rest.starts_with(is_ident_char) {
            let (tag, after) = take_ident(rest)?;
            selector.tag = Some(tag.to_string());
            rest = after;
        }

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('#') {
                let (id, after) = take_ident(after)?;
                selector.id = Some(id.to_string());
                rest = after;
            } else if let Some(after) = rest.strip_prefix('.') {
                let (class, after) = take_ident(after)?;
                selector.classes.push(class.to_string());
                rest = after;
            } else if let Some(after) = rest.strip_prefix('[') {
                let (body, after) = after.split_once(']')?;
                selector.attributes.push(parse_attribute(body)?);
                rest = after;
            } else {
                return None;
            }
        }

        Some(selector)
    }

    /// Tests whether `node` satisfies every part of the compound.
    #[must_use]
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        if let Some(tag) = &self.tag {
            if doc.tag(node) != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if doc.attribute(node, "id") != Some(id.as_str()) {
                return false;
            }
        }
        for class in &self.classes {
            let has = doc
                .attribute(node, "class")
                .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class));
            if !has {
                return false;
            }
        }
        for (name, expected) in &self.attributes {
            match (doc.attribute(node, name), expected) {
                (Some(_), None) => {}
                (Some(actual), Some(expected)) if actual == expected => {}
                _ => return false,
            }
        }
        true
    }
}

/// Parses the body of an `[attr]` or `[attr=value]` part.
fn parse_attribute(body: &str) -> Option<(String, Option<String>)> {
    match body.split_once('=') {
        None => {
            let (name, rest) = take_ident(body.trim())?;
            rest.is_empty().then(|| (name.to_string(), None))
        }
        Some((name, value)) => {
            let (name, rest) = take_ident(name.trim())?;
            if !rest.is_empty() {
                return None;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            Some((name.to_string(), Some(value.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_node(f: impl FnOnce(&mut Document, NodeId)) -> (Document, NodeId) {
        let mut doc = Document::new();
        let node = doc.element("div", doc.root());
        f(&mut doc, node);
        (doc, node)
    }

    #[test]
    fn parses_tag() {
        let (doc, node) = doc_with_node(|_, _| {});
        assert!(Selector::parse("div").unwrap().matches(&doc, node));
        assert!(!Selector::parse("span").unwrap().matches(&doc, node));
    }

    #[test]
    fn parses_id() {
        let (doc, node) = doc_with_node(|d, n| d.set_attribute(n, "id", "hero"));
        assert!(Selector::parse("#hero").unwrap().matches(&doc, node));
        assert!(!Selector::parse("#other").unwrap().matches(&doc, node));
    }

    #[test]
    fn class_matches_within_list() {
        let (doc, node) = doc_with_node(|d, n| d.set_attribute(n, "class", "card wide"));
        assert!(Selector::parse(".card").unwrap().matches(&doc, node));
        assert!(Selector::parse(".wide").unwrap().matches(&doc, node));
        assert!(!Selector::parse(".narrow").unwrap().matches(&doc, node));
    }

    #[test]
    fn attribute_presence_and_value() {
        let (doc, node) = doc_with_node(|d, n| d.set_attribute(n, "data-component", "Card"));
        assert!(Selector::parse("[data-component]").unwrap().matches(&doc, node));
        assert!(Selector::parse("[data-component=Card]")
            .unwrap()
            .matches(&doc, node));
        assert!(Selector::parse("[data-component=\"Card\"]")
            .unwrap()
            .matches(&doc, node));
        assert!(!Selector::parse("[data-component=Other]")
            .unwrap()
            .matches(&doc, node));
    }

    #[test]
    fn compound_requires_every_part() {
        let (doc, node) = doc_with_node(|d, n| {
            d.set_attribute(n, "class", "card");
            d.set_attribute(n, "data-x", "1");
        });
        assert!(Selector::parse("div.card[data-x=1]").unwrap().matches(&doc, node));
        assert!(!Selector::parse("span.card[data-x=1]").unwrap().matches(&doc, node));
    }

    #[test]
    fn unsupported_grammar_is_none() {
        assert!(Selector::parse("").is_none());
        assert!(Selector::parse("   ").is_none());
        assert!(Selector::parse("div > span").is_none());
        assert!(Selector::parse("a, b").is_none());
        assert!(Selector::parse("div:hover").is_none());
        assert!(Selector::parse("[unclosed").is_none());
    }

    #[test]
    fn select_first_is_document_order() {
        let mut doc = Document::new();
        let first = doc.element("p", doc.root());
        doc.set_attribute(first, "class", "note");
        let second = doc.element("p", doc.root());
        doc.set_attribute(second, "class", "note");

        let selector = Selector::parse("p.note").unwrap();
        assert_eq!(doc.select_first(&selector), Some(first));
    }

    #[test]
    fn select_first_without_match() {
        let doc = Document::new();
        let selector = Selector::parse(".missing").unwrap();
        assert_eq!(doc.select_first(&selector), None);
    }
}
