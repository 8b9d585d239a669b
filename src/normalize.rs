//! Text normalization primitives.
//!
//! Whitespace cleanup, boilerplate detection, section slugs and the
//! paragraph punctuation fixups shared by every extraction stage.

use crate::patterns::{
    MISSING_SPACE_AFTER_PUNCT, MULTI_SPACE, SPACE_BEFORE_PUNCT, WHITESPACE,
};

/// Bullet glyphs that are kept even though they are short and letterless.
pub const BULLET_GLYPHS: [&str; 2] = ["•", "·"];

/// Sign characters glued onto the previous line instead of standing alone.
pub const SIGN_GLYPHS: [&str; 3] = ["+", "-", "−"];

/// Fragments consisting of an ellipsis only.
const ELLIPSIS_FRAGMENTS: [&str; 3] = ["…", "...", "∙"];

/// Collapse every whitespace run to one space and trim.
#[must_use]
pub fn clean(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Collapse runs of spaces (not newlines) and trim.
#[must_use]
pub fn collapse_spaces(text: &str) -> String {
    MULTI_SPACE.replace_all(text, " ").trim().to_string()
}

/// Check whether a line is boilerplate that should not be emitted.
///
/// `unwanted_phrases` are matched as lowercase substrings.
#[must_use]
pub fn should_skip(text: &str, unwanted_phrases: &[String]) -> bool {
    let stripped = text.trim();
    if stripped.is_empty() {
        return true;
    }
    let lower = stripped.to_lowercase();
    if lower.starts_with("/* lines") && lower.ends_with(" omitted */") {
        return true;
    }
    if unwanted_phrases
        .iter()
        .any(|phrase| lower.contains(&phrase.to_lowercase()))
    {
        return true;
    }
    if BULLET_GLYPHS.contains(&stripped) {
        return false;
    }
    if lower.chars().count() <= 2 && !lower.chars().any(char::is_alphabetic) {
        return true;
    }
    ELLIPSIS_FRAGMENTS.contains(&lower.as_str())
}

/// Section key for a heading: lowercase, spaces to underscores, stars removed.
///
/// ```rust
/// use article_extract::normalize::slugify;
///
/// assert_eq!(slugify("Results And Discussion"), "results_and_discussion");
/// ```
#[must_use]
pub fn slugify(heading: &str) -> String {
    clean(heading).to_lowercase().replace(' ', "_").replace('★', "")
}

/// Flattened paragraph text from inline fragments.
///
/// Joins the fragments, collapses space runs, removes whitespace before
/// closing punctuation and restores the space after it.
#[must_use]
pub fn flatten_paragraph(parts: &[String]) -> String {
    let joined = collapse_spaces(&parts.concat());
    let tightened = SPACE_BEFORE_PUNCT.replace_all(&joined, "$1");
    MISSING_SPACE_AFTER_PUNCT
        .replace_all(&tightened, "$1 $2")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn phrases() -> Vec<String> {
        Options::default().unwanted_phrases
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean("  Deep \n\t learning  "), "Deep learning");
        assert_eq!(clean(""), "");
        assert_eq!(clean(" \n "), "");
    }

    #[test]
    fn test_should_skip_boilerplate() {
        let p = phrases();
        assert!(should_skip("Search for articles by this author", &p));
        assert!(should_skip("Google Scholar", &p));
        assert!(should_skip("Show more", &p));
        assert!(should_skip("© 2024 Copyright Elsevier", &p));
        assert!(should_skip("/* lines 10-20 omitted */", &p));
        assert!(!should_skip("Cells were cultured overnight.", &p));
    }

    #[test]
    fn test_should_skip_short_fragments() {
        let p = phrases();
        assert!(should_skip("", &p));
        assert!(should_skip("  ", &p));
        assert!(should_skip(",", &p));
        assert!(should_skip("12", &p));
        assert!(should_skip("...", &p));
        assert!(should_skip("…", &p));
        assert!(!should_skip("•", &p));
        assert!(!should_skip("·", &p));
        assert!(!should_skip("A", &p));
        assert!(!should_skip("p53", &p));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Results And Discussion"), "results_and_discussion");
        assert_eq!(slugify("  STAR★Methods "), "starmethods");
        assert_eq!(slugify("Introduction"), slugify("Introduction"));
    }

    #[test]
    fn test_flatten_paragraph() {
        let parts = vec![
            "Tumors grew ".to_string(),
            " quickly".to_string(),
            " (Ref: 1, 2)".to_string(),
            " .Then".to_string(),
            " they shrank".to_string(),
        ];
        assert_eq!(flatten_paragraph(&parts), "Tumors grew quickly (Ref: 1, 2). Then they shrank");
    }
}
