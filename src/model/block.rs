//! Block and inline-run types.

use serde::{Deserialize, Serialize};

use super::TextAttribute;

/// A block-level node of a rich-text document.
///
/// The tree is an owned value, so it is always finite and acyclic.
/// Blocks compare and hash structurally and can be used as stable keys.
///
/// Dropping a block never recurses, however deep the quotes nest. The derived
/// `Clone`, `PartialEq`, `Hash` and `Debug` impls do recurse and are meant for
/// trees of ordinary depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextBlock {
    /// Paragraph-like leaf holding inline runs
    PlainText {
        /// Runs in reading order
        #[serde(default)]
        runs: Vec<InlineText>,
    },

    /// Container of nested blocks, drawn with a border and indent
    Quote {
        /// Child blocks in reading order
        #[serde(default)]
        children: Vec<RichTextBlock>,
    },
}

impl RichTextBlock {
    /// Create a plain-text block from runs.
    pub fn plain_text(runs: impl IntoIterator<Item = InlineText>) -> Self {
        RichTextBlock::PlainText {
            runs: runs.into_iter().collect(),
        }
    }

    /// Create a quote block from children.
    pub fn quote(children: impl IntoIterator<Item = RichTextBlock>) -> Self {
        RichTextBlock::Quote {
            children: children.into_iter().collect(),
        }
    }

    /// Check if this is a quote container.
    pub fn is_quote(&self) -> bool {
        matches!(self, RichTextBlock::Quote { .. })
    }

    /// Check if the block has no runs or no children.
    pub fn is_empty(&self) -> bool {
        match self {
            RichTextBlock::PlainText { runs } => runs.is_empty(),
            RichTextBlock::Quote { children } => children.is_empty(),
        }
    }

    /// Text of every plain-text block in document order, one per line.
    pub fn plain_text_content(&self) -> String {
        self.descendants()
            .filter_map(|(block, _)| match block {
                RichTextBlock::PlainText { runs } => {
                    Some(runs.iter().map(InlineText::text).collect::<String>())
                }
                RichTextBlock::Quote { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of nested quote levels (0 for a plain-text block).
    pub fn depth(&self) -> usize {
        self.descendants()
            .map(|(block, depth)| if block.is_quote() { depth + 1 } else { depth })
            .max()
            .unwrap_or(0)
    }

    /// Total number of blocks in this subtree, including itself.
    pub fn block_count(&self) -> usize {
        self.descendants().count()
    }

    /// Pre-order walk over this subtree yielding each block with its quote depth.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![(self, 0)],
        }
    }
}

impl Drop for RichTextBlock {
    fn drop(&mut self) {
        let RichTextBlock::Quote { children } = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut block) = pending.pop() {
            if let RichTextBlock::Quote { children } = &mut block {
                pending.append(children);
            }
        }
    }
}

/// Pre-order iterator over a block subtree.
///
/// Uses an explicit stack, so arbitrarily deep trees are walked without
/// recursion.
pub struct Descendants<'a> {
    stack: Vec<(&'a RichTextBlock, usize)>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (&'a RichTextBlock, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (block, depth) = self.stack.pop()?;
        if let RichTextBlock::Quote { children } = block {
            self.stack
                .extend(children.iter().rev().map(|child| (child, depth + 1)));
        }
        Some((block, depth))
    }
}

/// An atomic run of text with one fixed style.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineText {
    text: String,
    #[serde(default)]
    attributes: TextAttribute,
}

impl InlineText {
    /// Create a run with the given attributes.
    pub fn new(text: impl Into<String>, attributes: TextAttribute) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextAttribute::empty())
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, TextAttribute::BOLD)
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, TextAttribute::ITALIC)
    }

    /// Create a heading run.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, TextAttribute::HEADING)
    }

    /// Return a copy of this run with additional attributes.
    pub fn with_attributes(&self, extra: TextAttribute) -> Self {
        Self::new(self.text.clone(), self.attributes | extra)
    }

    /// The raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The attribute set.
    pub fn attributes(&self) -> TextAttribute {
        self.attributes
    }

    /// Check if the run carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
