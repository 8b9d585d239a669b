//! Result types for extraction output.
//!
//! This module defines the structured output of article extraction: the
//! section-keyed text map plus the header metadata, figures and references
//! it was assembled from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Section name to section text, in order of first appearance.
///
/// Re-inserting an existing name replaces the text but keeps the position.
pub type SectionMap = IndexMap<String, String>;

/// Section key for content seen before the first top-level heading.
pub const HEADER_SECTION: &str = "header";

/// Section key for collected figure captions.
pub const FIGURES_SECTION: &str = "figures";

/// Section key for the numbered reference list.
pub const REFERENCES_SECTION: &str = "references";

/// Bibliographic metadata read from the article header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Article title.
    pub title: Option<String>,

    /// Author names, deduplicated, in page order.
    pub authors: Vec<String>,

    /// Journal name (`citation_journal_title`).
    pub journal: Option<String>,

    /// Publication date as written by the publisher.
    pub publication_date: Option<String>,

    /// Digital Object Identifier.
    pub doi: Option<String>,

    /// Keywords, deduplicated.
    pub keywords: Vec<String>,
}

/// One figure caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    /// Figure label such as "Figure 2". `None` when the caption has neither
    /// label nor title markup.
    pub label: Option<String>,

    /// Caption title following the label.
    pub title: Option<String>,

    /// Caption body paragraphs.
    pub paragraphs: Vec<String>,
}

impl Figure {
    /// Caption heading line: `"label: title"`, or just the label.
    #[must_use]
    pub fn heading(&self) -> Option<String> {
        match (&self.label, &self.title) {
            (Some(label), Some(title)) => Some(format!("{label}: {title}")),
            (Some(label), None) => Some(label.clone()),
            _ => None,
        }
    }

    /// Caption as stored in the `"figures"` section: heading then paragraphs,
    /// one per line.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.heading()
            .into_iter()
            .chain(self.paragraphs.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when the caption produced no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.paragraphs.is_empty()
    }
}

/// Result of extracting one article page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Section-keyed text: `"header"` or title/heading slugs, body sections,
    /// `"figures"` and `"references"`.
    pub sections: SectionMap,

    /// Full flattened transcript with banner lines, headings, tables,
    /// figures and numbered references.
    pub text: String,

    /// Header metadata.
    pub metadata: ArticleMetadata,

    /// Figure captions in document order.
    pub figures: Vec<Figure>,

    /// Reference entries in list order, without numbering.
    pub references: Vec<String>,

    /// True when the legacy-selector fallback produced the body.
    pub used_fallback: bool,
}

impl ExtractResult {
    /// Text of a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    /// Section names in output order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// The section map as pretty-printed JSON, the shape handed to the
    /// persistence layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.sections)
    }
}
