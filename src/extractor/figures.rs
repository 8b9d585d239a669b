//! Figure caption collection.
//!
//! Every `<figure>` with a `<figcaption>` contributes one `Figure`: a label
//! ("Figure 3"), an optional title and the caption body paragraphs.
//! Citation dropdowns embedded in captions are removed first so only the
//! citation markers remain.

use super::inline::plain_text;
use crate::dom::{self, Document, NodeRef, Selection};
use crate::normalize::clean;
use crate::result::Figure;
use crate::Options;

/// Caption body containers, most specific first.
const CAPTION_CONTENT_SELECTORS: [&str; 2] = [
    "div.figure__caption__text__content",
    "div.accordion__content",
];

/// Collect all figure captions in document order.
///
/// Mutates `doc`: citation dropdowns inside captions are removed.
#[must_use]
pub fn collect_figures(doc: &Document, opts: &Options) -> Vec<Figure> {
    let figures: Vec<NodeRef> = doc.select("figure").nodes().to_vec();
    let mut out = Vec::new();

    for (position, figure) in figures.iter().enumerate() {
        let Some(caption) = dom::find_first(figure, &["figcaption"]) else {
            continue;
        };
        strip_citation_dropdowns(&caption);

        let parsed = read_caption(&caption, position + 1, opts);
        if !parsed.is_empty() {
            out.push(parsed);
        }
    }

    log::debug!("collected {} figure captions", out.len());
    out
}

fn strip_citation_dropdowns(caption: &NodeRef) {
    for holder in dom::select_in(caption, "div.dropBlock__holder") {
        Selection::from(holder).remove();
    }
    for block in dom::select_in(caption, "span.dropBlock") {
        if dom::select_first_in(&block, r#"a[role="doc-biblioref"]"#).is_none() {
            Selection::from(block).remove();
        }
    }
}

fn read_caption(caption: &NodeRef, position: usize, opts: &Options) -> Figure {
    let label = dom::select_first_in(caption, "span.label").map(|l| clean(&plain_text(&l)));
    let title = dom::select_first_in(caption, "span.figure__title__text")
        .map(|t| clean(&plain_text(&t)))
        .filter(|t| !t.is_empty());

    let label = match label {
        Some(l) if !l.is_empty() => Some(l),
        _ if title.is_some() => Some(format!("Figure {position}")),
        _ => None,
    };

    Figure {
        label,
        title,
        paragraphs: caption_paragraphs(caption, opts),
    }
}

fn caption_paragraphs(caption: &NodeRef, opts: &Options) -> Vec<String> {
    let content = CAPTION_CONTENT_SELECTORS
        .iter()
        .find_map(|css| dom::select_first_in(caption, css))
        .unwrap_or(*caption);

    let blocks = dom::find_all(&content, &["div", "p"]);
    if blocks.is_empty() {
        return whole_caption_text(caption, opts).into_iter().collect();
    }

    let mut paragraphs: Vec<String> = Vec::new();
    for block in blocks {
        if dom::has_class(&block, "button") || inside_label(&block) {
            continue;
        }
        let text = clean(&plain_text(&block));
        if text.chars().count() <= opts.min_caption_len || is_control_phrase(&text, opts) {
            continue;
        }
        if !paragraphs.contains(&text) {
            paragraphs.push(text);
        }
    }
    paragraphs
}

fn inside_label(node: &NodeRef) -> bool {
    dom::nearest_ancestor(node, &["span"]).is_some_and(|span| dom::class_contains(&span, "label"))
}

fn is_control_phrase(text: &str, opts: &Options) -> bool {
    opts.caption_control_phrases.iter().any(|p| p == text)
}

/// Caption text with control labels removed, for captions without blocks.
fn whole_caption_text(caption: &NodeRef, opts: &Options) -> Option<String> {
    let mut text = plain_text(caption);
    for phrase in &opts.caption_control_phrases {
        text = text.replace(phrase.as_str(), "");
    }
    let text = clean(&text);
    (!text.is_empty()).then_some(text)
}
