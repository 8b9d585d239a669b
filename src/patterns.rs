//! Compiled regex patterns for text cleanup.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Whitespace
// =============================================================================

/// Any whitespace run, newlines included.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Runs of plain spaces only; newlines are left alone.
pub static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("MULTI_SPACE regex"));

// =============================================================================
// Paragraph Punctuation
// =============================================================================

/// Whitespace sitting before closing punctuation: `"word ,"`.
pub static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:!?])").expect("SPACE_BEFORE_PUNCT regex"));

/// Punctuation glued to the next word: `"end.Next"`.
pub static MISSING_SPACE_AFTER_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([.,;:!?])([A-Za-z])").expect("MISSING_SPACE_AFTER_PUNCT regex")
});

// =============================================================================
// References and Identifiers
// =============================================================================

/// Leading list ordinal on a reference entry: `"12. "`, `"12: "`, `"12 "`.
pub static LEADING_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.:]?\s*").expect("LEADING_ORDINAL regex"));

/// First digit run of an identifier, used to order reference ids.
pub static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("FIRST_NUMBER regex"));

/// Separators between identifier values packed into one attribute.
pub static ID_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,;]+").expect("ID_SEPARATORS regex"));

// =============================================================================
// Tables
// =============================================================================

/// A pipe with surrounding whitespace inside a cell.
pub static CELL_PIPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*").expect("CELL_PIPE regex"));
