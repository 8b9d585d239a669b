//! Extraction state tracking.
//!
//! `ExtractionContext` owns everything one extraction call mutates: the
//! footnote index, the recent-line window used for duplicate suppression,
//! the section accumulator and the flattened transcript. It is created per
//! call and consumed by `finish`.

use std::collections::{HashSet, VecDeque};

use dom_query::NodeId;

use super::footnotes::FootnoteIndex;
use crate::normalize::{clean, should_skip, slugify, BULLET_GLYPHS, SIGN_GLYPHS};
use crate::result::{SectionMap, HEADER_SECTION};
use crate::Options;

/// Width of the banner rule framing transcript parts.
const BANNER_WIDTH: usize = 80;

/// Fixed-capacity FIFO of recently emitted line fingerprints.
#[derive(Debug, Clone)]
pub struct RecentLines {
    window: VecDeque<String>,
    capacity: usize,
}

impl RecentLines {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.window.iter().any(|k| k == key)
    }

    /// Record a fingerprint, evicting the oldest one when full.
    pub fn push(&mut self, key: String) {
        if self.capacity == 0 {
            return;
        }
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(key);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Splits emitted text into named sections at top-level headings.
#[derive(Debug, Clone)]
pub struct SectionAccumulator {
    current: String,
    buffer: Vec<String>,
    sections: SectionMap,
}

impl SectionAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: HEADER_SECTION.to_string(),
            buffer: Vec::new(),
            sections: SectionMap::new(),
        }
    }

    /// Name of the section currently receiving text.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Level 1-2 opens a new section; deeper levels become markdown lines.
    pub fn heading(&mut self, level: usize, text: &str) {
        if level <= 2 {
            self.flush();
            self.current = slugify(text);
        } else {
            self.buffer.push(format!("{} {text}\n\n", "#".repeat(level)));
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.buffer.push(format!("{line}\n"));
    }

    pub fn push_raw(&mut self, raw: &str) {
        self.buffer.push(raw.to_string());
    }

    /// Append `suffix` to the last buffered line.
    fn glue_to_last(&mut self, suffix: &str) {
        if let Some(last) = self.buffer.last_mut() {
            let trimmed_len = last.trim_end_matches('\n').len();
            last.truncate(trimmed_len);
            last.push(' ');
            last.push_str(suffix);
            last.push('\n');
        }
    }

    fn flush(&mut self) {
        let content = self.buffer.concat();
        let content = content.trim();
        if !content.is_empty() {
            self.sections.insert(self.current.clone(), content.to_string());
        }
        self.buffer.clear();
    }

    /// Flush the open section and return the map.
    #[must_use]
    pub fn finish(mut self) -> SectionMap {
        self.flush();
        self.sections
    }
}

impl Default for SectionAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// What remains of a context once the content pass is over.
#[derive(Debug)]
pub struct ContextOutput {
    pub sections: SectionMap,
    pub transcript: String,
    pub footnotes: FootnoteIndex,
    pub lines_emitted: usize,
}

/// Per-call extraction state.
pub struct ExtractionContext<'o> {
    pub opts: &'o Options,
    pub footnotes: FootnoteIndex,
    recent: RecentLines,
    sections: SectionAccumulator,
    transcript: Vec<String>,
    pending_bullet: Option<String>,
    lines_emitted: usize,
}

impl<'o> ExtractionContext<'o> {
    #[must_use]
    pub fn new(opts: &'o Options, footnotes: FootnoteIndex) -> Self {
        Self {
            opts,
            footnotes,
            recent: RecentLines::new(opts.recent_lines_capacity),
            sections: SectionAccumulator::new(),
            transcript: Vec::new(),
            pending_bullet: None,
            lines_emitted: 0,
        }
    }

    /// Nodes the footnote indexer consumed; the walker skips them.
    #[must_use]
    pub fn footnote_nodes(&self) -> &HashSet<NodeId> {
        self.footnotes.marked()
    }

    /// Number of content lines written so far. Banners do not count.
    #[must_use]
    pub fn lines_emitted(&self) -> usize {
        self.lines_emitted
    }

    /// Name of the open section.
    #[must_use]
    pub fn current_section(&self) -> &str {
        self.sections.current()
    }

    /// Emit one line of text at `indent`.
    ///
    /// Lone bullet glyphs prefix the next line, lone sign glyphs are glued to
    /// the previous one. Unless `allow_repeat` is set, a line already in the
    /// recent window is dropped.
    pub fn append_line(&mut self, text: &str, indent: usize, allow_repeat: bool) {
        let cleaned = clean(text);
        if cleaned.is_empty() {
            return;
        }
        if BULLET_GLYPHS.contains(&cleaned.as_str()) {
            self.pending_bullet = Some(format!("{}• ", " ".repeat(indent)));
            return;
        }
        if SIGN_GLYPHS.contains(&cleaned.as_str()) {
            self.glue_sign(&cleaned);
            return;
        }
        if should_skip(&cleaned, &self.opts.unwanted_phrases) {
            return;
        }

        let line = match self.pending_bullet.take() {
            Some(prefix) => format!("{prefix}{cleaned}"),
            None => format!("{}{cleaned}", " ".repeat(indent)),
        };
        let key = clean(&line);
        if !allow_repeat && self.recent.contains(&key) {
            return;
        }
        self.recent.push(key);
        self.write_line(&line);
    }

    /// Emit a line without glyph handling, skip filter or dedup.
    pub fn append_verbatim(&mut self, text: &str, indent: usize) {
        let line = format!("{}{text}", " ".repeat(indent));
        self.recent.push(clean(&line));
        self.write_line(&line);
    }

    /// Emit a heading. Levels 1-2 open a new section.
    pub fn append_heading(&mut self, level: usize, text: &str) {
        let heading = clean(text);
        if should_skip(&heading, &self.opts.unwanted_phrases) {
            return;
        }
        let level = level.clamp(1, 6);
        self.ensure_paragraph_break();
        self.sections.heading(level, &heading);
        self.transcript
            .push(format!("{} {heading}\n", "#".repeat(level)));
        self.transcript.push("\n".to_string());
        self.lines_emitted += 1;
    }

    /// Emit a markdown heading line that stays inside the open section.
    pub fn append_subheading(&mut self, level: usize, text: &str) {
        let level = level.clamp(3, 6);
        self.append_heading(level, text);
    }

    /// Blank line in the transcript unless one is already there.
    pub fn ensure_paragraph_break(&mut self) {
        let Some(last) = self.transcript.last() else {
            return;
        };
        if last == "\n" || last.ends_with("\n\n") {
            return;
        }
        self.transcript.push("\n".to_string());
    }

    /// Write a rendered table block. Rows bypass dedup and the skip filter.
    pub fn append_table(&mut self, rows: &[String]) {
        if rows.is_empty() {
            return;
        }
        let mut block = String::from("\n[Table]\n");
        for row in rows {
            block.push_str(row);
            block.push('\n');
        }
        block.push('\n');
        self.sections.push_raw(&block);
        self.transcript.push(block);
        self.lines_emitted += rows.len();
    }

    /// Banner framing a transcript part. Not part of any section.
    pub fn banner(&mut self, title: &str) {
        if !self.transcript.is_empty() {
            self.transcript.push("\n".to_string());
        }
        self.transcript.push(banner(title));
    }

    #[must_use]
    pub fn finish(self) -> ContextOutput {
        ContextOutput {
            sections: self.sections.finish(),
            transcript: self.transcript.concat(),
            footnotes: self.footnotes,
            lines_emitted: self.lines_emitted,
        }
    }

    fn write_line(&mut self, line: &str) {
        self.sections.push_line(line);
        self.transcript.push(format!("{line}\n"));
        self.lines_emitted += 1;
    }

    fn glue_sign(&mut self, sign: &str) {
        let Some(last) = self.transcript.last_mut() else {
            return;
        };
        let glued = format!("{} {sign}", last.trim_end_matches('\n'));
        *last = format!("{glued}\n");
        self.recent.push(clean(&glued));
        self.sections.glue_to_last(sign);
    }
}

/// Banner block: rule, title, rule, blank line.
#[must_use]
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{title}\n{rule}\n\n")
}
