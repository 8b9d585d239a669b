//! Configuration options for article extraction.
//!
//! The `Options` struct carries every tunable of the engine as plain data:
//! tag and phrase lists, indentation settings and the dedup window size.
//! The engine never reads configuration from the environment or from files.

/// Default nesting limit for the content walker and inline extraction.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 100;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_extract::Options;
///
/// let options = Options {
///     indent_step: 4,
///     include_figures: false,
///     ..Options::default()
/// };
/// assert_eq!(options.max_indent, 12);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Tag names the content walker ignores entirely.
    ///
    /// Default: `script, style, svg, noscript, form, hr, iframe`
    pub skip_tags: Vec<String>,

    /// Tag names removed from the document before any other processing.
    ///
    /// Default: `button, nav, script, style, iframe, aside`
    pub pruned_tags: Vec<String>,

    /// Class-name fragments marking UI chrome. Elements whose class attribute
    /// contains one of these (case-insensitive) are pruned.
    pub ui_class_keywords: Vec<String>,

    /// Phrases that mark an emitted line as boilerplate (case-insensitive
    /// substring match).
    pub unwanted_phrases: Vec<String>,

    /// Phrases that drop a text fragment from a reference or footnote entry.
    pub reference_skip_phrases: Vec<String>,

    /// Class-name fragments marking structural containers that indent their
    /// children.
    pub container_keywords: Vec<String>,

    /// Caption control labels that never count as caption text.
    pub caption_control_phrases: Vec<String>,

    /// Indentation added per container level.
    ///
    /// Default: `2`
    pub indent_step: usize,

    /// Indentation cap; deeper nesting clamps instead of growing.
    ///
    /// Default: `12`
    pub max_indent: usize,

    /// Number of recent line fingerprints kept for duplicate suppression.
    ///
    /// Default: `60`
    pub recent_lines_capacity: usize,

    /// Maximum element depth below the content wrapper the walker descends.
    ///
    /// Deeper subtrees are dropped instead of overflowing the stack.
    /// Default: `100`
    pub max_tree_depth: usize,

    /// Caption paragraphs must be longer than this many characters.
    ///
    /// Default: `10`
    pub min_caption_len: usize,

    /// Collect figure captions into the `"figures"` section.
    ///
    /// Default: `true`
    pub include_figures: bool,

    /// Build the `"references"` section.
    ///
    /// Default: `true`
    pub include_references: bool,

    /// URL the document was fetched from. Used for log messages only.
    ///
    /// Default: `None`
    pub url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            skip_tags: strings(&["script", "style", "svg", "noscript", "form", "hr", "iframe"]),
            pruned_tags: strings(&["button", "nav", "script", "style", "iframe", "aside"]),
            ui_class_keywords: strings(&[
                "show-more",
                "show-less",
                "expand",
                "collapse",
                "toggle",
                "button",
                "nav",
                "menu",
                "footer",
                "sidebar",
                "advertisement",
                "social-share",
                "download-link",
                "metrics",
                "altmetric",
            ]),
            unwanted_phrases: strings(&[
                "search for articles by this author",
                "crossref",
                "scopus",
                "google scholar",
                "show more",
                "show less",
                "supplementary material",
                "supplementary information",
                "metrics",
                "copyright",
                "licence",
                "license",
            ]),
            reference_skip_phrases: strings(&[
                "full text",
                "full text (pdf)",
                "pdf",
                "crossref",
                "scopus",
                "pubmed",
                "google scholar",
                "open table in a new tab",
                "view abstract",
                "supplementary information",
            ]),
            container_keywords: strings(&[
                "core-container",
                "section",
                "subsection",
                "article__section",
                "article-section",
                "body-section",
                "content-block",
            ]),
            caption_control_phrases: strings(&[
                "Hide caption",
                "Figure viewer",
                "Show caption",
                "Collapse",
                "Expand",
            ]),
            indent_step: 2,
            max_indent: 12,
            recent_lines_capacity: 60,
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
            min_caption_len: 10,
            include_figures: true,
            include_references: true,
            url: None,
        }
    }
}

impl Options {
    /// Default options tagged with the page URL for diagnostics.
    #[must_use]
    pub fn for_url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Self::default()
        }
    }

    /// Indentation for one more container level, clamped at `max_indent`.
    #[must_use]
    pub fn next_indent(&self, indent: usize) -> usize {
        (indent + self.indent_step).min(self.max_indent)
    }

    /// Check if a tag name is on the walker's skip list.
    #[must_use]
    pub fn is_skip_tag(&self, tag: &str) -> bool {
        self.skip_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.indent_step, 2);
        assert_eq!(opts.max_indent, 12);
        assert_eq!(opts.recent_lines_capacity, 60);
        assert_eq!(opts.max_tree_depth, 100);
        assert!(opts.include_figures);
        assert!(opts.include_references);
        assert!(opts.url.is_none());
        assert!(opts.unwanted_phrases.iter().any(|p| p == "google scholar"));
        assert!(opts.reference_skip_phrases.iter().any(|p| p == "open table in a new tab"));
    }

    #[test]
    fn test_next_indent_clamps() {
        let opts = Options::default();
        assert_eq!(opts.next_indent(0), 2);
        assert_eq!(opts.next_indent(10), 12);
        assert_eq!(opts.next_indent(12), 12);
    }

    #[test]
    fn test_skip_tags_case_insensitive() {
        let opts = Options::default();
        assert!(opts.is_skip_tag("script"));
        assert!(opts.is_skip_tag("SVG"));
        assert!(!opts.is_skip_tag("p"));
    }

    #[test]
    fn test_for_url() {
        let opts = Options::for_url("https://www.cell.com/article/fulltext");
        assert_eq!(opts.url.as_deref(), Some("https://www.cell.com/article/fulltext"));
        assert_eq!(opts.indent_step, Options::default().indent_step);
    }
}
