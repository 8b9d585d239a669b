//! HTML Meta Tag Extraction
//!
//! Reads the Highwire Press `citation_*` tags most journal platforms emit,
//! with Open Graph and Dublin Core as secondary sources.

use dom_query::Document;

use crate::dom;
use crate::normalize::clean;
use crate::result::ArticleMetadata;

/// Examine HTML meta tags for article metadata.
///
/// `citation_title` wins over `og:title` and `citation_publication_date`
/// over `dc.Date` wherever they appear in the head. Authors and keywords
/// accumulate in page order without duplicates. Fields already set in
/// `original` are kept.
#[must_use]
pub fn examine_meta(doc: &Document, original: ArticleMetadata) -> ArticleMetadata {
    let mut result = original;

    let mut citation_title = None;
    let mut og_title = None;
    let mut citation_date = None;
    let mut dc_date = None;

    for node in doc.select("meta").nodes() {
        let name = dom::attr(node, "name")
            .or_else(|| dom::attr(node, "property"))
            .unwrap_or_default()
            .to_lowercase();
        let content = clean(&dom::attr(node, "content").unwrap_or_default());

        if name.is_empty() || content.is_empty() {
            continue;
        }

        match name.as_str() {
            "citation_title" => {
                citation_title.get_or_insert(content);
            }
            "og:title" => {
                og_title.get_or_insert(content);
            }
            "citation_author" => push_unique(&mut result.authors, content),
            "citation_journal_title" => {
                result.journal.get_or_insert(content);
            }
            "citation_publication_date" => {
                citation_date.get_or_insert(content);
            }
            "dc.date" => {
                dc_date.get_or_insert(content);
            }
            "citation_doi" => {
                result.doi.get_or_insert(content);
            }
            "citation_keywords" => push_unique(&mut result.keywords, content),
            _ => {}
        }
    }

    if result.title.is_none() {
        result.title = citation_title.or(og_title);
    }
    if result.publication_date.is_none() {
        result.publication_date = citation_date.or(dc_date);
    }
    result
}

/// Append `value` unless it is already present.
pub fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_tags() {
        let doc = Document::from(
            r#"<html><head>
            <meta property="og:title" content="OG Title">
            <meta name="citation_title" content="  Citation   Title ">
            <meta name="citation_author" content="Lee, Ann">
            <meta name="citation_author" content="Kim, Bo">
            <meta name="citation_author" content="Lee, Ann">
            <meta name="citation_journal_title" content="Cell">
            <meta name="dc.Date" content="2024-01-02">
            <meta name="citation_publication_date" content="2024/01/05">
            <meta name="citation_doi" content="10.1016/j.cell.2024.01.001">
            <meta name="citation_keywords" content="autophagy">
            <meta name="citation_keywords" content="mTOR">
            </head><body></body></html>"#,
        );
        let meta = examine_meta(&doc, ArticleMetadata::default());

        assert_eq!(meta.title.as_deref(), Some("Citation Title"));
        assert_eq!(meta.authors, vec!["Lee, Ann", "Kim, Bo"]);
        assert_eq!(meta.journal.as_deref(), Some("Cell"));
        assert_eq!(meta.publication_date.as_deref(), Some("2024/01/05"));
        assert_eq!(meta.doi.as_deref(), Some("10.1016/j.cell.2024.01.001"));
        assert_eq!(meta.keywords, vec!["autophagy", "mTOR"]);
    }

    #[test]
    fn test_secondary_sources() {
        let doc = Document::from(
            r#"<head><meta property="og:title" content="OG Title">
               <meta name="dc.Date" content="2023-05-01"></head>"#,
        );
        let meta = examine_meta(&doc, ArticleMetadata::default());
        assert_eq!(meta.title.as_deref(), Some("OG Title"));
        assert_eq!(meta.publication_date.as_deref(), Some("2023-05-01"));
    }

    #[test]
    fn test_keeps_existing_values() {
        let doc = Document::from(r#"<head><meta name="citation_title" content="Meta"></head>"#);
        let original = ArticleMetadata {
            title: Some("Existing".into()),
            ..ArticleMetadata::default()
        };
        assert_eq!(examine_meta(&doc, original).title.as_deref(), Some("Existing"));
    }

    #[test]
    fn test_empty_content_ignored() {
        let doc = Document::from(r#"<head><meta name="citation_doi" content="  "></head>"#);
        assert_eq!(examine_meta(&doc, ArticleMetadata::default()).doi, None);
    }
}
