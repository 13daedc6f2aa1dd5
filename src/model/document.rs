//! Document-level types.

use serde::{Deserialize, Serialize};

use super::RichTextBlock;

/// A rich-text document: an ordered sequence of top-level blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    /// Optional document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Top-level blocks, stacked vertically in this order
    #[serde(default)]
    pub blocks: Vec<RichTextBlock>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from top-level blocks.
    pub fn from_blocks(blocks: impl IntoIterator<Item = RichTextBlock>) -> Self {
        Self {
            title: None,
            blocks: blocks.into_iter().collect(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a top-level block.
    pub fn add_block(&mut self, block: RichTextBlock) {
        self.blocks.push(block);
    }

    /// Top-level blocks.
    pub fn blocks(&self) -> &[RichTextBlock] {
        &self.blocks
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content, blocks separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(RichTextBlock::plain_text_content)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Deepest quote nesting across all blocks.
    pub fn max_depth(&self) -> usize {
        self.blocks.iter().map(RichTextBlock::depth).max().unwrap_or(0)
    }
}
