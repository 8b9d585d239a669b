//! # article-extract
//!
//! Section-keyed full-text extraction for rendered scientific article pages.
//!
//! The extractor walks an article's header and content wrappers and emits
//! plain text organised by top-level headings. In-text citations become
//! `(Ref: 1, 2)` markers, footnote bodies are folded into the paragraph that
//! cites them, and figure captions and the reference list get sections of
//! their own.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_extract::extract;
//!
//! let html = r#"<html><body><article><div data-core-wrapper="content">
//!   <h2>Results</h2><p>Cells divided.</p>
//! </div></article></body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.section("results"), Some("Cells divided."));
//! println!("{}", result.text);
//! # Ok::<(), article_extract::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Section map**: Ordered `slug -> text` map, starting with `"header"`
//! - **Citations**: Adjacent citations grouped into one marker
//! - **Footnotes**: Inline notes resolved and appended to their paragraph
//! - **Figures and references**: Dedicated sections and structured values
//! - **Legacy layouts**: Fixed-selector fallback for older page templates

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Text cleaning, skip filter and heading slugs.
pub mod normalize;

/// Document cleaning ahead of extraction.
pub mod html_processing;

/// Body extraction (classifier, line sink, walker, footnotes, figures).
pub mod extractor;

/// Header metadata from meta tags and the visible header.
pub mod metadata;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_MAX_TREE_DEPTH};
pub use result::{
    ArticleMetadata, ExtractResult, Figure, SectionMap, FIGURES_SECTION, HEADER_SECTION,
    REFERENCES_SECTION,
};

pub use dom_query::Document;

/// Extracts an article page using default options.
///
/// # Example
///
/// ```rust
/// use article_extract::{extract, Error};
///
/// let result = extract("<html><body></body></html>");
/// assert!(matches!(result, Err(Error::NoContent)));
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts an article page with custom options.
///
/// # Example
///
/// ```rust
/// use article_extract::{extract_with_options, Options};
///
/// let html = r#"<article><div data-core-wrapper="content"><p>Body text.</p></div></article>"#;
/// let options = Options {
///     include_figures: false,
///     ..Options::for_url("https://journal.example.org/article/1")
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.section("header"), Some("Body text."));
/// # Ok::<(), article_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts an already parsed page. The document is not modified.
#[allow(clippy::missing_errors_doc)]
pub fn extract_document(doc: &Document, options: &Options) -> Result<ExtractResult> {
    extract::extract_document(doc, options)
}

/// Section map for a page, or `None` when nothing could be extracted.
///
/// `url` is used only to label log messages.
#[must_use]
pub fn extract_sections(html: &str, url: &str) -> Option<SectionMap> {
    match extract_with_options(html, &Options::for_url(url)) {
        Ok(result) => Some(result.sections),
        Err(err) => {
            log::debug!("no sections for {url}: {err}");
            None
        }
    }
}
