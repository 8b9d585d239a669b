//! Metadata extraction module.
//!
//! Builds the article header (title, authors, journal, date, DOI,
//! keywords) from meta tags first and the visible header markup second.

pub mod dom_extraction;
pub mod meta_tags;

use dom_query::Document;

use crate::dom::NodeRef;
use crate::result::ArticleMetadata;
use crate::Options;

pub use dom_extraction::{extract_dom_author, extract_dom_title};
pub use meta_tags::examine_meta;

/// Extract header metadata for an article with a header wrapper.
///
/// Meta tags take priority; the wrapper's `h1` and author elements fill
/// the title and authors when the head carries none.
#[must_use]
pub fn extract_metadata(doc: &Document, header: &NodeRef, opts: &Options) -> ArticleMetadata {
    let mut metadata = examine_meta(doc, ArticleMetadata::default());
    metadata = extract_dom_title(header, metadata);
    metadata = extract_dom_author(header, metadata, opts);
    metadata
}

/// Labelled header lines in output order; the title is not included.
#[must_use]
pub fn header_lines(metadata: &ArticleMetadata) -> Vec<String> {
    let mut lines = Vec::new();
    if !metadata.authors.is_empty() {
        lines.push(format!("Authors: {}", metadata.authors.join(", ")));
    }
    if let Some(journal) = &metadata.journal {
        lines.push(format!("Journal: {journal}"));
    }
    if let Some(date) = &metadata.publication_date {
        lines.push(format!("Publication Date: {date}"));
    }
    if let Some(doi) = &metadata.doi {
        lines.push(format!("DOI: {doi}"));
    }
    if !metadata.keywords.is_empty() {
        lines.push(format!("Keywords: {}", metadata.keywords.join(", ")));
    }
    lines
}
