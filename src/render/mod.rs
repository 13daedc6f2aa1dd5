//! Rendering module for converting block trees into presentation units.

mod json;
mod options;
mod renderer;
mod result;
mod text;
mod unit;
pub mod visitor;

pub use json::{to_json, JsonFormat};
pub use options::{QuoteDecoration, RenderOptions};
pub use renderer::Renderer;
pub use result::{RenderResult, RenderStats};
pub use text::to_text;
pub use unit::{ContainerUnit, Decoration, InlineUnit, PresentationUnit, StyledFragment};
pub use visitor::{walk, UnitVisitor, VisitorAction};

use crate::model::RichTextBlock;

/// Render a block with default options.
pub fn render(block: &RichTextBlock) -> PresentationUnit {
    Renderer::default().render(block)
}

/// Render sibling blocks with default options, preserving order.
pub fn render_children(blocks: &[RichTextBlock]) -> Vec<PresentationUnit> {
    Renderer::default().render_children(blocks)
}
