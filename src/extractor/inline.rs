//! Inline text extraction with citation grouping.
//!
//! Consecutive bibliography citations (`<a role="doc-biblioref"><sup>3</sup></a>`)
//! are collapsed into one ` (Ref: 3, 4, 5)` marker. Separator-only
//! superscripts and formatting wrappers between citations keep the group
//! open; any real text closes it.

use std::collections::HashSet;

use super::footnotes::{candidate_ids, normalize_id, FootnoteIndex};
use super::tags::FORMATTING_TAGS;
use crate::dom::{self, NodeRef};
use crate::normalize::{collapse_spaces, flatten_paragraph};
use crate::options::DEFAULT_MAX_TREE_DEPTH;

/// Tokens that separate two citations without ending the group.
pub const SEPARATOR_TOKENS: [&str; 6] = [",", ";", "and", "&", "–", "-"];

fn is_separator(text: &str) -> bool {
    SEPARATOR_TOKENS.contains(&text)
}

/// Citation numbers waiting to be rendered as one marker.
#[derive(Debug, Default)]
struct CitationGroup {
    pending: Vec<String>,
}

impl CitationGroup {
    fn push(&mut self, number: String) {
        self.pending.push(number);
    }

    fn flush_into(&mut self, parts: &mut Vec<String>) {
        if self.pending.is_empty() {
            return;
        }
        parts.push(format!(" (Ref: {})", self.pending.join(", ")));
        self.pending.clear();
    }
}

/// Text fragments of `node`'s children with citation markers inserted.
///
/// Fragments keep their original spacing; callers decide how to join them.
/// Elements nested more than `DEFAULT_MAX_TREE_DEPTH` levels below `node`
/// contribute nothing.
#[must_use]
pub fn extract(node: &NodeRef) -> Vec<String> {
    extract_at(node, 0)
}

fn extract_at(node: &NodeRef, depth: usize) -> Vec<String> {
    if depth > DEFAULT_MAX_TREE_DEPTH {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut group = CitationGroup::default();

    for child in node.children() {
        if child.is_text() {
            let text = dom::text(&child).to_string();
            // whitespace between citations keeps the group open
            if !text.trim().is_empty() {
                group.flush_into(&mut parts);
                parts.push(text);
            }
            continue;
        }
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };

        if tag == "div" && dom::has_class(&child, "dropblock__holder") {
            continue;
        }

        if tag == "a" && dom::attr_eq(&child, "role", "doc-biblioref") {
            if let Some(sup) = dom::find_first(&child, &["sup"]) {
                let number = dom::stripped_text(&sup);
                if !number.is_empty() {
                    group.push(number);
                }
            }
            continue;
        }

        if tag == "sup" || tag == "sub" {
            let text = dom::stripped_text(&child);
            if is_separator(&text) {
                continue;
            }
            group.flush_into(&mut parts);
            if !text.is_empty() {
                parts.push(text);
            }
            continue;
        }

        if FORMATTING_TAGS.contains(&tag.as_str()) {
            let child_parts = extract_at(&child, depth + 1);
            let child_text = child_parts.concat();
            let child_text = child_text.trim();
            if is_separator(child_text) {
                continue;
            }
            if !child_text.is_empty() {
                group.flush_into(&mut parts);
                parts.extend(child_parts);
            }
            continue;
        }

        group.flush_into(&mut parts);
        parts.extend(extract_at(&child, depth + 1));
    }

    group.flush_into(&mut parts);
    parts
}

/// Inline text joined, space runs collapsed and trimmed.
///
/// Used for headings, list items and table cells.
#[must_use]
pub fn plain_text(node: &NodeRef) -> String {
    collapse_spaces(&extract(node).concat())
}

/// Paragraph line with punctuation spacing repaired.
#[must_use]
pub fn paragraph_text(node: &NodeRef) -> String {
    flatten_paragraph(&extract(node))
}

/// Texts of non-bibliography footnotes referenced by superscripts in `node`.
#[must_use]
pub fn collect_inline_footnotes(node: &NodeRef, index: &FootnoteIndex) -> Vec<String> {
    if index.is_empty() {
        return Vec::new();
    }
    let mut notes = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for sup in dom::find_all(node, &["sup"]) {
        let mut ids = candidate_ids(&sup);
        if ids.is_empty() {
            for anchor in dom::find_all(&sup, &["a"]) {
                ids.extend(candidate_ids(&anchor));
            }
        }
        for raw in ids {
            let id = normalize_id(&raw);
            if id.is_empty() || seen.contains(&id) {
                continue;
            }
            let Some(entry) = index.get(&id) else {
                continue;
            };
            if entry.in_references {
                continue;
            }
            notes.push(entry.text.clone());
            seen.insert(id);
        }
    }
    notes
}

/// Append `" (Footnote: a; b)"` when there are notes.
#[must_use]
pub fn annotate_footnotes(text: String, notes: &[String]) -> String {
    if notes.is_empty() {
        text
    } else {
        format!("{text} (Footnote: {})", notes.join("; "))
    }
}
