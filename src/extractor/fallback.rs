//! Fallback Extraction
//!
//! Older article templates have no `data-core-wrapper` markup. For those
//! pages the body is read from fixed section ids instead. The fallback only
//! runs when the primary pass produced no lines, and its output goes through
//! the same line sink so sections and the transcript stay consistent.

use super::state::ExtractionContext;
use super::tags::heading_level;
use crate::dom::{self, Document, NodeRef};
use crate::normalize::clean;
use crate::result::ArticleMetadata;

/// Legacy title selectors, in order.
const TITLE_SELECTORS: [&str; 2] = [r#"h1[property="name"]"#, "h1"];

const AUTHORS_SELECTOR: &str = "div.contributors";

/// Legacy sections: selector, section heading, heading tags to keep.
const LEGACY_SECTIONS: [(&str, &str, &[&str]); 3] = [
    ("section#author-abstract", "ABSTRACT", &[]),
    ("section#introduction", "INTRODUCTION", &["h2", "h3", "h4"]),
    ("section#bodymatter", "MAIN CONTENT", &["h2", "h3", "h4", "h5", "h6"]),
];

/// Tags read as text blocks inside a legacy section.
const BLOCK_TAGS: [&str; 2] = ["p", "div"];

/// Read a page without article wrappers into `ctx`.
///
/// Fills `metadata.title` and `metadata.authors` when they are still empty.
pub fn extract_legacy(doc: &Document, ctx: &mut ExtractionContext, metadata: &mut ArticleMetadata) {
    if let Some(title) = legacy_title(doc) {
        ctx.append_heading(1, &title);
        metadata.title.get_or_insert(title);
    }

    if let Some(contributors) = dom::select_first(doc, AUTHORS_SELECTOR) {
        let names = dom::stripped_strings(&contributors);
        if !names.is_empty() {
            ctx.append_line(&format!("Authors: {}", names.join(", ")), 0, true);
            if metadata.authors.is_empty() {
                metadata.authors = names;
            }
        }
    }

    for (selector, heading, heading_tags) in LEGACY_SECTIONS {
        let Some(section) = dom::select_first(doc, selector) else {
            continue;
        };
        ctx.append_heading(2, heading);
        if heading_tags.is_empty() {
            read_leaf_blocks(ctx, &section);
        } else {
            read_headed_blocks(ctx, &section, heading_tags);
        }
        ctx.ensure_paragraph_break();
    }
}

fn legacy_title(doc: &Document) -> Option<String> {
    TITLE_SELECTORS
        .iter()
        .find_map(|css| dom::select_first(doc, css))
        .map(|h1| clean(&dom::joined_text(&h1, " ")))
        .filter(|t| !t.is_empty())
}

/// Blocks without nested blocks, so wrapper divs do not repeat their
/// children's text.
fn read_leaf_blocks(ctx: &mut ExtractionContext, section: &NodeRef) {
    for block in dom::find_all(section, &BLOCK_TAGS) {
        if dom::find_first(&block, &BLOCK_TAGS).is_some() {
            continue;
        }
        append_block_text(ctx, &block);
    }
}

/// Headings and paragraphs in document order; paragraphs inside figures
/// are left to the figure collector.
fn read_headed_blocks(ctx: &mut ExtractionContext, section: &NodeRef, heading_tags: &[&str]) {
    let mut wanted: Vec<&str> = heading_tags.to_vec();
    wanted.push("p");

    for node in dom::find_all(section, &wanted) {
        let tag = dom::tag_name(&node).unwrap_or_default();
        if let Some(level) = heading_level(&tag) {
            let text = clean(&dom::stripped_text(&node));
            if !text.is_empty() {
                ctx.append_subheading(level, &text);
            }
        } else if dom::nearest_ancestor(&node, &["figure"]).is_none() {
            append_block_text(ctx, &node);
        }
    }
}

fn append_block_text(ctx: &mut ExtractionContext, node: &NodeRef) {
    let text = clean(&dom::joined_text(node, " "));
    if !text.is_empty() {
        ctx.append_line(&text, 0, true);
    }
}
