//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` node references. The extraction engine works
//! on `NodeRef` handles and walks the tree in document order; these helpers
//! give it BeautifulSoup-like primitives (stripped strings, nearest ancestor,
//! first descendant by tag) with one consistent lowercase tag vocabulary.

pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for callers handling raw node text
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Deep copy of a document, re-parsed from its serialized HTML.
///
/// The copy shares nothing with the original, so it can be pruned freely.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

// === Tag/Attribute Information ===

/// Lowercase tag name of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check the tag name against one of several lowercase names.
#[must_use]
pub fn is_tag(node: &NodeRef, names: &[&str]) -> bool {
    tag_name(node).is_some_and(|t| names.contains(&t.as_str()))
}

/// Attribute value as an owned string.
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|v| v.to_string())
}

/// Check whether an attribute is present (possibly empty).
#[inline]
#[must_use]
pub fn has_attr(node: &NodeRef, name: &str) -> bool {
    node.attr(name).is_some()
}

/// Case-insensitive attribute equality.
#[must_use]
pub fn attr_eq(node: &NodeRef, name: &str, value: &str) -> bool {
    node.attr(name)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(value))
}

/// Lowercased class tokens.
#[must_use]
pub fn classes(node: &NodeRef) -> Vec<String> {
    node.attr("class")
        .map(|c| c.split_whitespace().map(str::to_lowercase).collect())
        .unwrap_or_default()
}

/// True if any class token contains `needle` (lowercase substring match).
#[must_use]
pub fn class_contains(node: &NodeRef, needle: &str) -> bool {
    classes(node).iter().any(|c| c.contains(needle))
}

/// True if the class list holds exactly `name`.
#[must_use]
pub fn has_class(node: &NodeRef, name: &str) -> bool {
    classes(node).iter().any(|c| c == name)
}

// === Tree Navigation ===

/// Child element nodes, skipping text and comments.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// All descendants in document (pre-)order, excluding the node itself.
#[must_use]
pub fn descendants<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = node.children().into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        stack.extend(current.children().into_iter().rev());
        out.push(current);
    }
    out
}

/// Descendant elements with one of the given tag names, in document order.
#[must_use]
pub fn find_all<'a>(node: &NodeRef<'a>, names: &[&str]) -> Vec<NodeRef<'a>> {
    descendants(node)
        .into_iter()
        .filter(|n| is_tag(n, names))
        .collect()
}

/// First descendant element with one of the given tag names.
#[must_use]
pub fn find_first<'a>(node: &NodeRef<'a>, names: &[&str]) -> Option<NodeRef<'a>> {
    descendants(node).into_iter().find(|n| is_tag(n, names))
}

/// Nearest ancestor with one of the given tag names.
#[must_use]
pub fn nearest_ancestor<'a>(node: &NodeRef<'a>, names: &[&str]) -> Option<NodeRef<'a>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if is_tag(&parent, names) {
            return Some(parent);
        }
        current = parent.parent();
    }
    None
}

/// True if `ancestor` is a strict ancestor of `node`.
#[must_use]
pub fn is_descendant_of(node: &NodeRef, ancestor: NodeId) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.id == ancestor {
            return true;
        }
        current = parent.parent();
    }
    false
}

/// First element matching a CSS selector anywhere in the document.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, css: &str) -> Option<NodeRef<'a>> {
    doc.select(css).nodes().first().copied()
}

/// First descendant element of `node` matching a CSS selector.
#[must_use]
pub fn select_first_in<'a>(node: &NodeRef<'a>, css: &str) -> Option<NodeRef<'a>> {
    Selection::from(*node).select(css).nodes().first().copied()
}

/// All descendant elements of `node` matching a CSS selector.
#[must_use]
pub fn select_in<'a>(node: &NodeRef<'a>, css: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select(css).nodes().to_vec()
}

// === Text Content ===

/// Raw text of a node and its descendants.
#[inline]
#[must_use]
pub fn text(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Every descendant text fragment, trimmed, empties dropped.
#[must_use]
pub fn stripped_strings(node: &NodeRef) -> Vec<String> {
    let fragments = if node.is_text() {
        vec![*node]
    } else {
        descendants(node).into_iter().filter(NodeRef::is_text).collect()
    };
    fragments
        .iter()
        .map(|n| text(n).trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Trimmed text fragments joined with `separator`.
#[must_use]
pub fn joined_text(node: &NodeRef, separator: &str) -> String {
    stripped_strings(node).join(separator)
}

/// Trimmed text fragments glued together without separator.
#[must_use]
pub fn stripped_text(node: &NodeRef) -> String {
    joined_text(node, "")
}
