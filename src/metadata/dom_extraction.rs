//! DOM-based metadata extraction.
//!
//! Fallbacks for header fields that meta tags did not provide, read from
//! the visible article header.

use crate::dom::{self, NodeRef};
use crate::normalize::{clean, should_skip};
use crate::result::ArticleMetadata;
use crate::Options;

use super::meta_tags::push_unique;

/// Visible author name elements inside an article header.
const AUTHOR_SELECTOR: &str = r#"a[rel="author"], span[data-test="author-name"], span.author-name, span[itemprop="name"], a[itemprop="name"]"#;

/// Link label some publishers append to every author name.
const AUTHOR_SEARCH_LABEL: &str = "Search for articles by this author";

/// Title from the header's first `h1`, if none is known yet.
#[must_use]
pub fn extract_dom_title(header: &NodeRef, original: ArticleMetadata) -> ArticleMetadata {
    let mut result = original;
    if result.title.is_some() {
        return result;
    }
    result.title = dom::find_first(header, &["h1"])
        .map(|h1| clean(&dom::joined_text(&h1, " ")))
        .filter(|t| !t.is_empty());
    result
}

/// Authors from visible name elements, if meta tags listed none.
#[must_use]
pub fn extract_dom_author(
    header: &NodeRef,
    original: ArticleMetadata,
    opts: &Options,
) -> ArticleMetadata {
    let mut result = original;
    if !result.authors.is_empty() {
        return result;
    }
    for node in dom::select_in(header, AUTHOR_SELECTOR) {
        let name = clean(&dom::joined_text(&node, " ").replace(AUTHOR_SEARCH_LABEL, ""));
        if should_skip(&name, &opts.unwanted_phrases) {
            continue;
        }
        push_unique(&mut result.authors, name);
    }
    result
}
