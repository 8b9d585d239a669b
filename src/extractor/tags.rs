//! Tag vocabularies and block-level node classification.
//!
//! `classify` maps one DOM node to a `NodeKind`, applying the walker's
//! precedence rules in a single place so the dispatch in `pipeline::visit`
//! can be an exhaustive `match`.

use std::collections::HashSet;

use crate::dom::{self, NodeId, NodeRef};
use crate::Options;

/// Heading tags, index + 1 is the level.
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Inline tags that only carry meaning inside a paragraph or heading.
pub static INLINE_TAGS: [&str; 8] = ["sup", "sub", "span", "a", "strong", "em", "i", "b"];

/// Formatting wrappers the inline extractor looks through.
pub static FORMATTING_TAGS: [&str; 5] = ["span", "strong", "em", "i", "b"];

/// Paragraph-like block tags.
pub static PARAGRAPH_TAGS: [&str; 2] = ["p", "blockquote"];

/// List tags.
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// Block containers that may hold a standalone footnote.
pub static FOOTNOTE_HOLDER_TAGS: [&str; 3] = ["aside", "div", "section"];

/// What the content walker does with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Bare text directly inside a block container.
    Text,
    /// Ignored together with its subtree.
    Skip,
    /// Figure wrapper; only a nested table is rendered.
    Figure,
    /// Inline formatting seen at block level.
    InlineOnly,
    /// `<br>`, a soft space.
    LineBreak,
    /// `h1`-`h6` with its level.
    Heading(usize),
    /// Paragraph rendered as one line.
    Paragraph,
    /// `ul` / `ol`.
    List,
    /// `table`.
    Table,
    /// Anything else; children are visited. `structural` containers indent
    /// their children and close with a paragraph break.
    Container { structural: bool },
}

/// Heading level of an `h1`-`h6` tag name.
#[must_use]
pub fn heading_level(tag: &str) -> Option<usize> {
    HEADING_TAGS.iter().position(|h| *h == tag).map(|i| i + 1)
}

/// Decide whether a node is a structural container.
///
/// Returns the flag and the indent delta its children receive. A node is a
/// container when it is a `section`, carries a `data-core-component`
/// attribute, or one of its class tokens contains a container keyword.
#[must_use]
pub fn container_indent(node: &NodeRef, opts: &Options) -> (bool, usize) {
    let is_section = dom::tag_name(node).is_some_and(|t| t == "section");
    let is_container = is_section
        || dom::has_attr(node, "data-core-component")
        || dom::classes(node).iter().any(|class| {
            opts.container_keywords
                .iter()
                .any(|keyword| class.contains(keyword.as_str()))
        });

    if is_container {
        (true, opts.indent_step)
    } else {
        (false, 0)
    }
}

/// True for `figure`, `data-component="figure"`, or a class mentioning figures.
#[must_use]
pub fn is_figure_like(node: &NodeRef) -> bool {
    dom::is_tag(node, &["figure"])
        || dom::attr_eq(node, "data-component", "figure")
        || dom::class_contains(node, "figure")
}

/// Classify a node for the content walker.
///
/// `footnote_nodes` holds the nodes the footnote indexer already consumed.
#[must_use]
pub fn classify(node: &NodeRef, opts: &Options, footnote_nodes: &HashSet<NodeId>) -> NodeKind {
    if node.is_text() {
        return NodeKind::Text;
    }
    let Some(tag) = dom::tag_name(node) else {
        return NodeKind::Skip;
    };

    if footnote_nodes.contains(&node.id) || opts.is_skip_tag(&tag) {
        return NodeKind::Skip;
    }
    if dom::attr_eq(node, "aria-hidden", "true") || dom::attr_eq(node, "id", "references") {
        return NodeKind::Skip;
    }
    if is_figure_like(node) {
        return NodeKind::Figure;
    }
    if dom::class_contains(node, "sidebar")
        || (FOOTNOTE_HOLDER_TAGS.contains(&tag.as_str()) && dom::class_contains(node, "footnote"))
    {
        return NodeKind::Skip;
    }
    if INLINE_TAGS.contains(&tag.as_str()) {
        return NodeKind::InlineOnly;
    }
    if tag == "br" {
        return NodeKind::LineBreak;
    }
    if let Some(level) = heading_level(&tag) {
        return NodeKind::Heading(level);
    }

    let role = dom::attr(node, "role").unwrap_or_default().to_lowercase();
    if role == "doc-footnote" {
        return NodeKind::Skip;
    }
    // A paragraph wrapping a table is walked like a container so the table
    // keeps its rows.
    if (PARAGRAPH_TAGS.contains(&tag.as_str()) || role == "paragraph")
        && dom::find_first(node, &["table"]).is_none()
    {
        return NodeKind::Paragraph;
    }
    if LIST_TAGS.contains(&tag.as_str()) {
        return NodeKind::List;
    }
    if tag == "table" {
        return NodeKind::Table;
    }

    NodeKind::Container {
        structural: container_indent(node, opts).0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse, select_first, Document};

    fn kind_of(doc: &Document, css: &str) -> NodeKind {
        let node = select_first(doc, css).unwrap();
        classify(&node, &Options::default(), &HashSet::new())
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("h6"), Some(6));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("p"), None);
    }

    #[test]
    fn test_container_indent() {
        let doc = parse(
            r#"<section id="a"></section><div id="b" class="Article-Section__Body"></div>
               <div id="c" data-core-component="x"></div><div id="d" class="plain"></div>"#,
        );
        let opts = Options::default();
        for id in ["#a", "#b", "#c"] {
            let node = select_first(&doc, id).unwrap();
            assert_eq!(container_indent(&node, &opts), (true, 2), "{id}");
        }
        let plain = select_first(&doc, "#d").unwrap();
        assert_eq!(container_indent(&plain, &opts), (false, 0));
    }

    #[test]
    fn test_skip_rules() {
        let doc = parse(
            r#"<div id="h" aria-hidden="true">x</div><section id="references">r</section>
               <div id="s" class="article-sidebar">s</div><div id="f" class="footnotes">f</div>
               <div id="d" role="doc-footnote">d</div><svg id="v"></svg>"#,
        );
        for css in ["#h", "#references", "#s", "#f", "#d", "#v"] {
            assert_eq!(kind_of(&doc, css), NodeKind::Skip, "{css}");
        }
    }

    #[test]
    fn test_footnote_nodes_are_skipped() {
        let doc = parse("<p id='p'>note</p>");
        let node = select_first(&doc, "#p").unwrap();
        let consumed: HashSet<NodeId> = [node.id].into_iter().collect();
        assert_eq!(classify(&node, &Options::default(), &consumed), NodeKind::Skip);
    }

    #[test]
    fn test_block_kinds() {
        let doc = parse(
            r#"<h3 id="h">T</h3><p id="p">x</p><blockquote id="q">q</blockquote>
               <div id="r" role="paragraph">x</div><ul id="u"><li>a</li></ul>
               <table id="t"><tr><td>1</td></tr></table><span id="i">s</span>
               <div id="c" class="core-container">c</div><div id="g">g</div>"#,
        );
        assert_eq!(kind_of(&doc, "#h"), NodeKind::Heading(3));
        assert_eq!(kind_of(&doc, "#p"), NodeKind::Paragraph);
        assert_eq!(kind_of(&doc, "#q"), NodeKind::Paragraph);
        assert_eq!(kind_of(&doc, "#r"), NodeKind::Paragraph);
        assert_eq!(kind_of(&doc, "#u"), NodeKind::List);
        assert_eq!(kind_of(&doc, "#t"), NodeKind::Table);
        assert_eq!(kind_of(&doc, "#i"), NodeKind::InlineOnly);
        assert_eq!(kind_of(&doc, "#c"), NodeKind::Container { structural: true });
        assert_eq!(kind_of(&doc, "#g"), NodeKind::Container { structural: false });
    }

    #[test]
    fn test_paragraph_with_table_falls_through() {
        let doc = parse(
            r#"<div id="p" role="paragraph"><table><tr><td>1</td></tr></table></div>"#,
        );
        assert_eq!(kind_of(&doc, "#p"), NodeKind::Container { structural: false });
    }

    #[test]
    fn test_figure_kinds() {
        let doc = parse(
            r#"<figure id="a"><img src="x.png"></figure>
               <div id="b" class="figure-wrap"><table id="t"><tr><td>1</td></tr></table></div>
               <div id="c" data-component="Figure">c</div>"#,
        );
        for css in ["#a", "#b", "#c"] {
            assert_eq!(kind_of(&doc, css), NodeKind::Figure, "{css}");
        }
    }
}
