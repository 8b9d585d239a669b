//! Recursive content walker.
//!
//! Visits the content wrapper in document order and dispatches every node
//! on its `NodeKind`. Containers nested deeper than
//! `Options::max_tree_depth` are dropped.

use super::handlers::{handle_lists, handle_paragraphs, handle_table};
use super::inline::plain_text;
use super::state::ExtractionContext;
use super::tags::{classify, container_indent, NodeKind};
use crate::dom::{self, NodeRef};

/// Render one node and its subtree at `indent`.
pub fn visit(ctx: &mut ExtractionContext, node: &NodeRef, indent: usize) {
    visit_at(ctx, node, indent, 0);
}

/// Render every child of `node` at `indent`.
pub fn visit_children(ctx: &mut ExtractionContext, node: &NodeRef, indent: usize) {
    children_at(ctx, node, indent, 0);
}

fn visit_at(ctx: &mut ExtractionContext, node: &NodeRef, indent: usize, depth: usize) {
    if depth > ctx.opts.max_tree_depth {
        log::debug!("content deeper than {} levels dropped", ctx.opts.max_tree_depth);
        return;
    }
    match classify(node, ctx.opts, ctx.footnote_nodes()) {
        NodeKind::Text => {
            let text = dom::text(node);
            ctx.append_line(&text, indent, false);
        }
        NodeKind::Skip | NodeKind::InlineOnly | NodeKind::LineBreak => {}
        NodeKind::Figure => {
            if let Some(table) = dom::find_first(node, &["table"]) {
                handle_table(ctx, &table);
            }
        }
        NodeKind::Heading(level) => {
            let text = plain_text(node);
            if !text.is_empty() {
                ctx.append_heading(level, &text);
            }
        }
        NodeKind::Paragraph => handle_paragraphs(ctx, node, indent),
        NodeKind::List => handle_lists(ctx, node, indent),
        NodeKind::Table => handle_table(ctx, node),
        NodeKind::Container { structural } => {
            let child_indent = if structural {
                let (_, delta) = container_indent(node, ctx.opts);
                (indent + delta).min(ctx.opts.max_indent)
            } else {
                indent
            };
            children_at(ctx, node, child_indent, depth + 1);
            if structural {
                ctx.ensure_paragraph_break();
            }
        }
    }
}

fn children_at(ctx: &mut ExtractionContext, node: &NodeRef, indent: usize, depth: usize) {
    for child in node.children() {
        visit_at(ctx, &child, indent, depth);
    }
}
