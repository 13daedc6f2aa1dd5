//! # richstack
//!
//! Rich-text rendering by composition, without a platform rich-text object.
//!
//! A document is a tree of blocks. Plain-text blocks hold inline runs, each
//! with one fixed attribute set; quote blocks nest further blocks. The
//! renderer concatenates styled runs into inline units and stacks blocks
//! vertically into containers, producing a presentation tree that a host
//! display layer draws.
//!
//! ## Quick Start
//!
//! ```
//! use richstack::model::{InlineText, RichTextBlock};
//! use richstack::render;
//!
//! let block = RichTextBlock::plain_text([
//!     InlineText::plain("Hi"),
//!     InlineText::italic(" there"),
//! ]);
//!
//! let unit = render::render(&block);
//! let inline = unit.as_inline().unwrap();
//! assert_eq!(inline.plain_text(), "Hi there");
//! assert_eq!(inline.len(), 2);
//! ```
//!
//! ## Loading documents
//!
//! Documents can be loaded from JSON produced by an external parser:
//!
//! ```
//! let json = r#"{
//!     "title": "Example",
//!     "blocks": [
//!         {"type": "plain_text", "runs": [{"text": "Bold", "attributes": "BOLD"}]},
//!         {"type": "quote", "children": []}
//!     ]
//! }"#;
//!
//! let doc = richstack::parse_json(json)?;
//! let text = richstack::to_text(&doc, &richstack::RenderOptions::default());
//! assert_eq!(text, "Bold\n>");
//! # Ok::<(), richstack::Error>(())
//! ```

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Document, InlineText, RichTextBlock, TextAttribute};
pub use render::{
    ContainerUnit, InlineUnit, JsonFormat, PresentationUnit, QuoteDecoration, RenderOptions,
    RenderResult, RenderStats, Renderer, StyledFragment,
};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a document from a JSON string.
///
/// Quotes deeper than about 60 levels are rejected with [`Error::Json`]
/// ("recursion limit exceeded"), since serde_json caps input nesting at 128.
///
/// # Example
///
/// ```
/// let doc = richstack::parse_json(r#"{"blocks": []}"#).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn parse_json(json: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(json)?;
    log::debug!("Parsed document with {} top-level blocks", doc.blocks.len());
    Ok(doc)
}

/// Parse a document from a reader yielding JSON.
///
/// Subject to the same nesting limit as [`parse_json`].
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let doc: Document = serde_json::from_reader(reader)?;
    log::debug!("Parsed document with {} top-level blocks", doc.blocks.len());
    Ok(doc)
}

/// Parse a document from a JSON file.
///
/// # Example
///
/// ```no_run
/// let doc = richstack::parse_file("document.json").unwrap();
/// println!("Blocks: {}", doc.blocks().len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("Loading document from {}", path.display());
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Render every top-level block of a document.
pub fn render_document(doc: &Document, options: &RenderOptions) -> Vec<PresentationUnit> {
    Renderer::new(*options).render_document(doc)
}

/// Render a document and flatten it to plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> String {
    render::to_text(&render_document(doc, options))
}

/// Render a document and serialize the presentation tree to JSON.
pub fn to_json(doc: &Document, options: &RenderOptions, format: JsonFormat) -> Result<String> {
    render::to_json(&render_document(doc, options), format)
}
