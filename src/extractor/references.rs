//! Reference list builder.

use std::collections::HashSet;

use super::footnotes::{clean_reference_entry, FootnoteIndex};
use crate::dom::{self, Document, NodeRef};
use crate::Options;

/// Selector for the document's references section.
pub const REFERENCES_SELECTOR: &str = "section#references";

/// The references section, if the page has one.
#[must_use]
pub fn find_container(doc: &Document) -> Option<NodeRef<'_>> {
    dom::select_first(doc, REFERENCES_SELECTOR)
}

/// Case-insensitive de-duplicating collector.
#[derive(Default)]
struct EntryList {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl EntryList {
    fn push(&mut self, text: &str) {
        if text.is_empty() || !self.seen.insert(text.to_lowercase()) {
            return;
        }
        self.entries.push(text.to_string());
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered reference entries, without numbering.
///
/// Reads the references section first. When it yields nothing, falls back
/// to indexed entries inside the section ordered by id number, then to
/// every indexed entry in discovery order.
#[must_use]
pub fn build_reference_list(
    container: Option<&NodeRef>,
    index: &FootnoteIndex,
    opts: &Options,
) -> Vec<String> {
    let mut list = EntryList::default();

    if let Some(container) = container {
        for candidate in section_candidates(container) {
            list.push(&clean_reference_entry(&candidate, &opts.reference_skip_phrases));
        }
        if !list.is_empty() {
            return list.entries;
        }
    }

    if index.is_empty() {
        return list.entries;
    }
    for text in index.reference_texts_by_id() {
        list.push(text);
    }
    if !list.is_empty() {
        return list.entries;
    }

    for (_, entry) in index.iter() {
        list.push(&entry.text);
    }
    list.entries
}

/// Entry nodes of a references section: direct `li` children, else
/// `div[role=listitem]` descendants, else direct `div`/`p` children.
fn section_candidates<'a>(container: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let children = dom::element_children(container);

    let items: Vec<NodeRef> = children
        .iter()
        .filter(|c| dom::is_tag(c, &["li"]))
        .copied()
        .collect();
    if !items.is_empty() {
        return items;
    }

    let list_items: Vec<NodeRef> = dom::find_all(container, &["div"])
        .into_iter()
        .filter(|d| dom::attr_eq(d, "role", "listitem"))
        .collect();
    if !list_items.is_empty() {
        return list_items;
    }

    children
        .into_iter()
        .filter(|c| dom::is_tag(c, &["div", "p"]))
        .collect()
}

/// `"1. entry"` lines joined by newlines.
#[must_use]
pub fn numbered(entries: &[String]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {entry}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
