//! Article body extraction.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs and the node classifier
//! - `state`: Per-call extraction context (line sink, dedup window, sections)
//! - `footnotes`: Footnote and reference target index
//! - `inline`: Citation-aware inline text extraction
//! - `handlers`: Paragraph, list and table renderers
//! - `pipeline`: Recursive content walker
//! - `references`: Reference list builder
//! - `figures`: Figure caption collection
//! - `fallback`: Legacy-layout extraction
//!
//! # Usage
//!
//! ```rust,ignore
//! use article_extract::extractor::{pipeline, ExtractionContext, FootnoteIndex};
//!
//! let footnotes = FootnoteIndex::build(&doc, None, &options);
//! let mut ctx = ExtractionContext::new(&options, footnotes);
//! pipeline::visit_children(&mut ctx, &content, 0);
//! let output = ctx.finish();
//! println!("{}", output.transcript);
//! ```

pub mod fallback;
pub mod figures;
pub mod footnotes;
pub mod handlers;
pub mod inline;
pub mod pipeline;
pub mod references;
pub mod state;
pub mod tags;

pub use footnotes::{FootnoteEntry, FootnoteIndex};
pub use state::{ContextOutput, ExtractionContext};
pub use tags::NodeKind;
