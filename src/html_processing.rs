//! Document cleaning ahead of extraction.
//!
//! Removes interface chrome (buttons, navigation, scripts, asides and
//! elements whose classes mark UI widgets) from a copy of the document.
//! The caller's tree is left untouched.

use crate::dom::{self, Document, NodeRef, Selection};
use crate::Options;

/// Return a pruned copy of the document.
///
/// Removes every element named in `opts.pruned_tags` and every element whose
/// class attribute contains one of `opts.ui_class_keywords`
/// (case-insensitive substring).
#[must_use]
pub fn doc_cleaning(doc: &Document, opts: &Options) -> Document {
    let cleaned = dom::clone_document(doc);

    if !opts.pruned_tags.is_empty() {
        cleaned.select(&opts.pruned_tags.join(", ")).remove();
    }

    let keywords: Vec<String> = opts
        .ui_class_keywords
        .iter()
        .map(|k| k.to_lowercase())
        .collect();
    let doomed: Vec<NodeRef> = cleaned
        .select("[class]")
        .nodes()
        .iter()
        .filter(|node| has_ui_class(node, &keywords))
        .copied()
        .collect();

    log::debug!("pruning {} UI elements by class", doomed.len());
    for node in doomed {
        Selection::from(node).remove();
    }

    cleaned
}

fn has_ui_class(node: &NodeRef, keywords: &[String]) -> bool {
    let Some(class) = node.attr("class") else {
        return false;
    };
    let class = class.to_lowercase();
    keywords.iter().any(|k| class.contains(k.as_str()))
}
