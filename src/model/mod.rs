//! Document model types for rich-text content.
//!
//! The model is an immutable value tree: block nodes that either hold
//! inline runs or nest further blocks, and inline runs carrying one
//! attribute set each. Renderers only read it.

mod attribute;
mod block;
mod document;
pub mod sample;

pub use attribute::TextAttribute;
pub use block::{Descendants, InlineText, RichTextBlock};
pub use document::Document;
