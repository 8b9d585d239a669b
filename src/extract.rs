//! Output assembly.
//!
//! Runs the passes over one parsed page in order: cleaning, footnote
//! indexing, the header and content walk (or the legacy fallback), figure
//! captions and the reference list. The result carries both the section
//! map and the flattened transcript.

use std::panic::{self, AssertUnwindSafe};

use url::Url;

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};
use crate::extractor::state::banner;
use crate::extractor::{fallback, figures, pipeline, references, ExtractionContext, FootnoteIndex};
use crate::html_processing;
use crate::metadata;
use crate::options::Options;
use crate::result::{ArticleMetadata, ExtractResult, Figure, FIGURES_SECTION, REFERENCES_SECTION};

const HEADER_WRAPPER: &str = r#"div[data-core-wrapper="header"]"#;
const CONTENT_WRAPPER: &str = r#"div[data-core-wrapper="content"]"#;

/// Parse `html` and extract it.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    let document = dom::parse(html);
    extract_document(&document, options)
}

/// Extract an already parsed page.
///
/// The caller's document is not modified. A panic anywhere in the passes is
/// caught here and reported as `Error::ExtractionError`.
pub(crate) fn extract_document(doc: &Document, options: &Options) -> Result<ExtractResult> {
    let label = source_label(options.url.as_deref());

    match panic::catch_unwind(AssertUnwindSafe(|| assemble(doc, options, &label))) {
        Ok(result) => result,
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            log::error!("[{label}] extraction aborted: {reason}");
            Err(Error::ExtractionError(reason))
        }
    }
}

fn assemble(doc: &Document, opts: &Options, label: &str) -> Result<ExtractResult> {
    let cleaned = html_processing::doc_cleaning(doc, opts);

    let refs_container = references::find_container(&cleaned);
    let footnotes = FootnoteIndex::build(&cleaned, refs_container.as_ref(), opts);
    log::debug!("[{label}] indexed {} footnote entries", footnotes.len());

    let mut ctx = ExtractionContext::new(opts, footnotes);
    let mut metadata = ArticleMetadata::default();

    if let Some(article) = dom::select_first(&cleaned, "article") {
        log::debug!("[{label}] reading article wrappers");
        read_wrappers(&cleaned, &article, &mut ctx, &mut metadata);
    }

    let used_fallback = ctx.lines_emitted() == 0;
    if used_fallback {
        log::warn!("[{label}] no article wrapper content, using legacy selectors");
        fallback::extract_legacy(&cleaned, &mut ctx, &mut metadata);
    }

    let figures = if opts.include_figures {
        figures::collect_figures(&cleaned, opts)
    } else {
        Vec::new()
    };

    let output = ctx.finish();
    let mut sections = output.sections;
    let mut text = output.transcript;

    if !figures.is_empty() {
        text.push_str(&render_figures(&figures));
        let joined = figures
            .iter()
            .map(Figure::to_text)
            .collect::<Vec<_>>()
            .join("\n\n");
        sections.insert(FIGURES_SECTION.to_string(), joined);
    }

    let reference_list = if opts.include_references {
        references::build_reference_list(refs_container.as_ref(), &output.footnotes, opts)
    } else {
        Vec::new()
    };
    if !reference_list.is_empty() {
        text.push('\n');
        text.push_str(&banner("REFERENCES"));
        for (i, entry) in reference_list.iter().enumerate() {
            text.push_str(&format!("{}. {entry}\n", i + 1));
        }
        sections.insert(REFERENCES_SECTION.to_string(), references::numbered(&reference_list));
    }

    // banners alone are not content
    if sections.is_empty() && output.lines_emitted == 0 {
        log::warn!("[{label}] no extractable content");
        return Err(Error::NoContent);
    }

    log::debug!(
        "[{label}] {} sections, {} figures, {} references",
        sections.len(),
        figures.len(),
        reference_list.len()
    );

    Ok(ExtractResult {
        sections,
        text,
        metadata,
        figures,
        references: reference_list,
        used_fallback,
    })
}

/// Primary path: header wrapper then content wrapper of the first article.
fn read_wrappers(
    doc: &Document,
    article: &NodeRef,
    ctx: &mut ExtractionContext,
    meta: &mut ArticleMetadata,
) {
    if let Some(header) = dom::select_first_in(article, HEADER_WRAPPER) {
        ctx.banner("ARTICLE HEADER");
        *meta = metadata::extract_metadata(doc, &header, ctx.opts);
        if let Some(title) = &meta.title {
            ctx.append_heading(1, title);
        }
        for line in metadata::header_lines(meta) {
            ctx.append_line(&line, 0, true);
        }
        ctx.ensure_paragraph_break();
    }

    if let Some(content) = dom::select_first_in(article, CONTENT_WRAPPER) {
        ctx.banner("ARTICLE CONTENT");
        pipeline::visit_children(ctx, &content, 0);
    }
}

fn render_figures(figures: &[Figure]) -> String {
    let mut out = String::from("\n");
    out.push_str(&banner("FIGURES"));
    for figure in figures {
        if let Some(heading) = figure.heading() {
            out.push_str(&format!("\n### {heading}\n\n"));
        }
        for para in &figure.paragraphs {
            out.push_str(para);
            out.push_str("\n\n");
        }
    }
    out
}

/// Host and path of the page URL, or the raw string when it does not parse.
fn source_label(url: Option<&str>) -> String {
    let Some(raw) = url else {
        return "unknown source".to_string();
    };
    match Url::parse(raw) {
        Ok(parsed) => format!("{}{}", parsed.host_str().unwrap_or_default(), parsed.path()),
        Err(_) => raw.to_string(),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
