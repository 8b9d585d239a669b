//! Footnote and reference index.
//!
//! Publishers mark bibliography entries and footnotes in many ways: anchors
//! with `bib`/`ref` ids, list items with reference classes, or data
//! attributes pointing at a target. The index maps every normalized
//! identifier to the cleaned entry text, records whether the entry lives in
//! the references section, and remembers which nodes it consumed so the
//! content walker does not print a footnote twice.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::normalize::clean;
use crate::patterns::{FIRST_NUMBER, ID_SEPARATORS, LEADING_ORDINAL};
use crate::Options;

/// Selectors for reference and footnote targets, in priority order.
pub const INDEX_SELECTORS: [&str; 8] = [
    r#"a[id^="bib"]"#,
    r#"a[id^="ref"]"#,
    r#"a[name^="bib"]"#,
    r#"a[name^="ref"]"#,
    r#"[id^="bib"]"#,
    r#"[id^="ref"]"#,
    "li.reference",
    "li.bibliography__item",
];

/// Attributes that may carry an identifier. `href` contributes its fragment.
pub const ID_ATTRIBUTES: [&str; 14] = [
    "id",
    "name",
    "href",
    "data-rid",
    "data-ref",
    "data-reference",
    "data-footnote-id",
    "data-id",
    "data-target",
    "data-uuid",
    "data-bib",
    "data-bib-id",
    "data-citation-id",
    "data-annotation-id",
];

/// Inline tags whose entry text lives in an enclosing block.
const INLINE_TARGET_TAGS: [&str; 3] = ["a", "span", "sup"];

/// Blocks that hold the text of an inline target.
const ENTRY_CONTAINER_TAGS: [&str; 4] = ["li", "div", "section", "p"];

/// One indexed footnote or reference entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteEntry {
    /// Normalized identifier the entry was first indexed under.
    pub id: String,
    pub text: String,
    pub in_references: bool,
}

/// Identifier to entry map, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FootnoteIndex {
    entries: IndexMap<String, FootnoteEntry>,
    marked: HashSet<NodeId>,
}

impl FootnoteIndex {
    /// Index every footnote and reference target in `doc`.
    ///
    /// `references` is the document's references section, if any. It is
    /// never indexed as an entry itself.
    #[must_use]
    pub fn build(doc: &Document, references: Option<&NodeRef>, opts: &Options) -> Self {
        let mut index = Self::default();
        let refs_id = references.map(|r| r.id);

        for selector in INDEX_SELECTORS {
            for candidate in doc.select(selector).nodes() {
                if Some(candidate.id) == refs_id {
                    continue;
                }
                index.add_candidate(candidate, refs_id, opts);
            }
        }

        log::debug!(
            "footnote index: {} entries, {} nodes consumed",
            index.entries.len(),
            index.marked.len()
        );
        index
    }

    fn add_candidate(&mut self, candidate: &NodeRef, refs_id: Option<NodeId>, opts: &Options) {
        let ids = match own_identifier(candidate) {
            Some(id) => vec![id],
            None => candidate_ids(candidate),
        };
        let ids: Vec<String> = ids
            .iter()
            .map(|id| normalize_id(id))
            .filter(|id| !id.is_empty())
            .collect();
        if ids.is_empty() {
            return;
        }

        let container = if dom::is_tag(candidate, &INLINE_TARGET_TAGS) {
            dom::nearest_ancestor(candidate, &ENTRY_CONTAINER_TAGS).unwrap_or(*candidate)
        } else {
            *candidate
        };
        let text = clean_reference_entry(&container, &opts.reference_skip_phrases);
        if text.is_empty() {
            return;
        }

        let in_references = refs_id.is_some_and(|r| dom::is_descendant_of(&container, r));
        for id in ids {
            self.entries.entry(id.clone()).or_insert_with(|| FootnoteEntry {
                id,
                text: text.clone(),
                in_references,
            });
        }
        if !in_references {
            self.mark(&container);
        }
    }

    fn mark(&mut self, container: &NodeRef) {
        self.marked.insert(container.id);
        self.marked
            .extend(dom::descendants(container).iter().map(|n| n.id));
    }

    /// Entry for an already normalized identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FootnoteEntry> {
        self.entries.get(id)
    }

    /// Nodes consumed as footnote content.
    #[must_use]
    pub fn marked(&self) -> &HashSet<NodeId> {
        &self.marked
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FootnoteEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Texts of entries inside the references section, ordered by the first
    /// number in their id.
    #[must_use]
    pub fn reference_texts_by_id(&self) -> Vec<&str> {
        let mut ids: Vec<&String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.in_references)
            .map(|(id, _)| id)
            .collect();
        ids.sort_by_cached_key(|id| reference_sort_key(id));
        ids.iter()
            .filter_map(|id| self.entries.get(*id))
            .map(|entry| entry.text.as_str())
            .collect()
    }
}

/// The candidate's own `id`/`name`, else that of its first descendant anchor.
fn own_identifier(candidate: &NodeRef) -> Option<String> {
    if let Some(id) = non_empty_id(candidate) {
        return Some(id);
    }
    let anchors = dom::find_all(candidate, &["a"]);
    anchors
        .iter()
        .find(|a| dom::attr(a, "id").is_some_and(|v| !v.is_empty()))
        .or_else(|| {
            anchors
                .iter()
                .find(|a| dom::attr(a, "name").is_some_and(|v| !v.is_empty()))
        })
        .and_then(non_empty_id)
}

fn non_empty_id(node: &NodeRef) -> Option<String> {
    ["id", "name"]
        .iter()
        .filter_map(|name| dom::attr(node, name))
        .find(|v| !v.is_empty())
}

/// Lowercase, strip one leading `#`, remove all whitespace.
#[must_use]
pub fn normalize_id(value: &str) -> String {
    let lower = value.trim().to_lowercase();
    let bare = lower.strip_prefix('#').unwrap_or(&lower);
    bare.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split one attribute value into identifier tokens.
///
/// A leading `#` is dropped and absolute URLs keep only their fragment.
#[must_use]
pub fn split_identifier_values(raw: &str) -> Vec<String> {
    let value = raw.trim();
    let value = value.strip_prefix('#').unwrap_or(value);
    let value = match value.split_once('#') {
        Some((_, fragment)) if value.starts_with("http") => fragment,
        _ => value,
    };
    ID_SEPARATORS
        .split(value)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every identifier value found in the node's identifier attributes.
#[must_use]
pub fn candidate_ids(node: &NodeRef) -> Vec<String> {
    let mut ids = Vec::new();
    for name in ID_ATTRIBUTES {
        let Some(raw) = dom::attr(node, name) else {
            continue;
        };
        let raw = if name == "href" {
            match raw.split_once('#') {
                Some((_, fragment)) => fragment.to_string(),
                None => continue,
            }
        } else {
            raw
        };
        ids.extend(split_identifier_values(&raw));
    }
    ids
}

/// Entry text of a reference or footnote node.
///
/// Fragments mentioning a link label ("Google Scholar", "PubMed", ...) are
/// dropped, then the leading list ordinal is removed.
#[must_use]
pub fn clean_reference_entry(node: &NodeRef, skip_phrases: &[String]) -> String {
    let fragments: Vec<String> = dom::stripped_strings(node)
        .iter()
        .map(|s| clean(s))
        .filter(|f| !f.is_empty())
        .filter(|f| {
            let lower = f.to_lowercase();
            !skip_phrases.iter().any(|p| lower.contains(p.as_str()))
        })
        .collect();
    if fragments.is_empty() {
        return String::new();
    }
    let combined = clean(&fragments.join(" "));
    LEADING_ORDINAL
        .replace(&combined, "")
        .replace(" ,", ",")
}

/// Numeric ids first by their first number, the rest after; ties by id.
///
/// The number is compared as a digit string (length after stripping
/// leading zeros, then lexically) so arbitrarily long runs never overflow.
fn reference_sort_key(id: &str) -> (u8, usize, String, String) {
    match FIRST_NUMBER.find(id) {
        Some(m) => {
            let digits = m.as_str().trim_start_matches('0');
            (0, digits.len(), digits.to_string(), id.to_string())
        }
        None => (1, 0, String::new(), id.to_string()),
    }
}
