//! Block element handlers: paragraphs, lists and tables.
//!
//! Each handler renders one block node into the extraction context. Lists
//! and tables are first read into small models (`ListModel`, `TableModel`)
//! so their shape can be tested without a context.

use super::inline::{annotate_footnotes, collect_inline_footnotes, paragraph_text, plain_text};
use super::state::ExtractionContext;
use super::tags::LIST_TAGS;
use crate::dom::{self, NodeRef};
use crate::normalize::{clean, collapse_spaces};
use crate::options::DEFAULT_MAX_TREE_DEPTH;
use crate::patterns::{CELL_PIPE, WHITESPACE};

/// Render a paragraph as one line, with its footnotes appended.
///
/// Paragraph lines may repeat: two identical sentences in different
/// sections are both real content.
pub fn handle_paragraphs(ctx: &mut ExtractionContext, node: &NodeRef, indent: usize) {
    let text = paragraph_text(node);
    if text.is_empty() {
        return;
    }
    let notes = collect_inline_footnotes(node, &ctx.footnotes);
    let line = annotate_footnotes(text, &notes);
    ctx.append_line(&line, indent, true);
}

/// One list item: its own text and any lists nested directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub nested: Vec<ListModel>,
}

/// A `ul`/`ol` read into plain text items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListModel {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

impl ListModel {
    /// Read the direct `li` children of a list element.
    ///
    /// Lists nested more than `DEFAULT_MAX_TREE_DEPTH` levels deep are not read.
    #[must_use]
    pub fn from_element(list: &NodeRef) -> Self {
        Self::read(list, 0)
    }

    fn read(list: &NodeRef, depth: usize) -> Self {
        let ordered = dom::is_tag(list, &["ol"]);
        let items = dom::element_children(list)
            .iter()
            .filter(|child| dom::is_tag(child, &["li"]))
            .map(|item| read_item(item, depth))
            .collect();
        Self { ordered, items }
    }

    /// Bullet for the 1-based item position.
    #[must_use]
    pub fn bullet(&self, position: usize) -> String {
        if self.ordered {
            format!("{position}. ")
        } else {
            "- ".to_string()
        }
    }
}

fn read_item(item: &NodeRef, depth: usize) -> ListItem {
    let nested_nodes: Vec<NodeRef> = dom::element_children(item)
        .into_iter()
        .filter(|child| dom::is_tag(child, &LIST_TAGS))
        .collect();

    let mut text = plain_text(item);
    for nested in &nested_nodes {
        let nested_text = plain_text(nested);
        if !nested_text.is_empty() {
            text = text.replace(&nested_text, "");
        }
    }

    let nested = if depth < DEFAULT_MAX_TREE_DEPTH {
        nested_nodes
            .iter()
            .map(|nested| ListModel::read(nested, depth + 1))
            .collect()
    } else {
        Vec::new()
    };
    ListItem {
        text: clean(&text),
        nested,
    }
}

/// Render a list element and its nested lists.
pub fn handle_lists(ctx: &mut ExtractionContext, list: &NodeRef, indent: usize) {
    let model = ListModel::from_element(list);
    if model.items.is_empty() {
        return;
    }
    render_list(ctx, &model, indent);
}

fn render_list(ctx: &mut ExtractionContext, model: &ListModel, indent: usize) {
    for (position, item) in model.items.iter().enumerate() {
        let bullet = model.bullet(position + 1);
        if item.text.is_empty() {
            ctx.append_verbatim(bullet.trim_end(), indent);
        } else {
            ctx.append_line(&format!("{bullet}{}", item.text), indent, true);
        }

        let nested_indent = ctx.opts.next_indent(indent);
        for nested in &item.nested {
            render_list(ctx, nested, nested_indent);
        }
    }
    ctx.ensure_paragraph_break();
}

/// A table read into rows of cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableModel {
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Read every `tr` of the table; rows whose cells are all empty are dropped.
    #[must_use]
    pub fn from_element(table: &NodeRef) -> Self {
        let rows = dom::find_all(table, &["tr"])
            .iter()
            .map(|tr| {
                dom::find_all(tr, &["th", "td"])
                    .iter()
                    .map(cell_text)
                    .collect::<Vec<_>>()
            })
            .filter(|cells| cells.iter().any(|c| !c.is_empty()))
            .collect();
        Self { rows }
    }

    /// One line per row: non-empty cells joined by `" | "`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|cells| {
                cells
                    .iter()
                    .filter(|c| !c.is_empty())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell_text(cell: &NodeRef) -> String {
    let text = collapse_spaces(&plain_text(cell));
    let text = WHITESPACE.replace_all(&text, " ");
    CELL_PIPE.replace_all(&text, " ").trim().to_string()
}

/// Render a table as a `[Table]` block.
pub fn handle_table(ctx: &mut ExtractionContext, table: &NodeRef) {
    let model = TableModel::from_element(table);
    if model.is_empty() {
        return;
    }
    ctx.append_table(&model.lines());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse, select_first};
    use crate::extractor::footnotes::FootnoteIndex;
    use crate::Options;

    #[test]
    fn test_list_model_subtracts_nested_text() {
        let doc = parse(
            "<ul id='l'><li>Parent item<ul><li>Child one</li><li>Child two</li></ul></li>\
             <li>Second</li></ul>",
        );
        let list = select_first(&doc, "#l").unwrap();
        let model = ListModel::from_element(&list);

        assert!(!model.ordered);
        assert_eq!(model.items.len(), 2);
        assert_eq!(model.items[0].text, "Parent item");
        assert_eq!(model.items[0].nested[0].items[1].text, "Child two");
        assert_eq!(model.items[1].text, "Second");
    }

    #[test]
    fn test_list_nesting_depth_is_bounded() {
        let levels = DEFAULT_MAX_TREE_DEPTH + 20;
        let mut html = String::from("<ul id='l'>");
        for _ in 0..levels {
            html.push_str("<li>Item<ul>");
        }
        for _ in 0..levels {
            html.push_str("</ul></li>");
        }
        html.push_str("</ul>");
        let doc = parse(&html);
        let list = select_first(&doc, "#l").unwrap();

        let mut model = ListModel::from_element(&list);
        let mut depth = 0;
        while let Some(item) = model.items.first() {
            let Some(nested) = item.nested.first() else {
                break;
            };
            model = nested.clone();
            depth += 1;
        }
        assert_eq!(depth, DEFAULT_MAX_TREE_DEPTH);
    }

    #[test]
    fn test_render_nested_ordered_list() {
        let doc = parse(
            "<ol id='l'><li>Collect samples<ul><li>Blood</li></ul></li><li>Sequence</li></ol>",
        );
        let list = select_first(&doc, "#l").unwrap();
        let opts = Options::default();
        let mut ctx = ExtractionContext::new(&opts, FootnoteIndex::default());
        handle_lists(&mut ctx, &list, 0);
        let out = ctx.finish();
        assert_eq!(out.transcript, "1. Collect samples\n  - Blood\n\n2. Sequence\n\n");
    }

    #[test]
    fn test_empty_item_emits_bare_bullet() {
        let doc = parse("<ol id='l'><li></li><li>Filled</li></ol>");
        let list = select_first(&doc, "#l").unwrap();
        let opts = Options::default();
        let mut ctx = ExtractionContext::new(&opts, FootnoteIndex::default());
        handle_lists(&mut ctx, &list, 2);
        let out = ctx.finish();
        assert_eq!(out.transcript, "  1.\n  2. Filled\n\n");
    }

    #[test]
    fn test_table_model_rows() {
        let doc = parse(
            "<table><thead><tr><th>Gene</th><th>Fold | change</th></tr></thead>\
             <tbody><tr><td></td><td></td></tr><tr><td>TP53</td><td></td><td>2.1</td></tr></tbody></table>",
        );
        let table = select_first(&doc, "table").unwrap();
        let model = TableModel::from_element(&table);

        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.lines(), vec!["Gene | Fold change", "TP53 | 2.1"]);
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let doc = parse("<table><tr><td> </td></tr></table>");
        let table = select_first(&doc, "table").unwrap();
        let opts = Options::default();
        let mut ctx = ExtractionContext::new(&opts, FootnoteIndex::default());
        handle_table(&mut ctx, &table);
        assert_eq!(ctx.lines_emitted(), 0);
    }

    #[test]
    fn test_paragraph_lines_may_repeat() {
        let doc = parse("<p id='a'>Same sentence.</p><p id='b'>Same sentence.</p>");
        let opts = Options::default();
        let mut ctx = ExtractionContext::new(&opts, FootnoteIndex::default());
        for id in ["#a", "#b"] {
            let p = select_first(&doc, id).unwrap();
            handle_paragraphs(&mut ctx, &p, 0);
        }
        assert_eq!(ctx.lines_emitted(), 2);
    }
}
