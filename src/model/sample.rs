//! Built-in demo document.

use super::{Document, InlineText, RichTextBlock, TextAttribute};

/// A small document exercising every block kind and attribute combination.
///
/// Includes a run with no attributes, an empty quote, and a quote nested
/// inside a quote.
pub fn demo_document() -> Document {
    Document::from_blocks([
        RichTextBlock::plain_text([InlineText::heading("Rich text without a rich-text view")]),
        RichTextBlock::plain_text([
            InlineText::plain("Inline runs are "),
            InlineText::bold("composed"),
            InlineText::plain(" by "),
            InlineText::italic("concatenation"),
            InlineText::plain(", "),
            InlineText::new("each with its own style", TextAttribute::BOLD | TextAttribute::ITALIC),
            InlineText::plain("."),
        ]),
        RichTextBlock::quote([
            RichTextBlock::plain_text([
                InlineText::plain("Blocks are "),
                InlineText::bold("stacked"),
                InlineText::plain(" vertically."),
            ]),
            RichTextBlock::quote([RichTextBlock::plain_text([
                InlineText::italic("Quotes nest to any depth."),
            ])]),
            RichTextBlock::quote([]),
        ]),
        RichTextBlock::plain_text([
            InlineText::plain("Hi"),
            InlineText::italic(" there"),
        ]),
    ])
    .with_title("richstack demo")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_document_shape() {
        let doc = demo_document();
        assert_eq!(doc.blocks().len(), 4);
        assert_eq!(doc.max_depth(), 2);
        assert!(doc.plain_text().contains("Hi there"));
    }

    #[test]
    fn test_demo_contains_unstyled_run() {
        let doc = demo_document();
        let has_plain = doc.blocks().iter().any(|b| match b {
            RichTextBlock::PlainText { runs } => runs.iter().any(|r| r.attributes().is_empty()),
            RichTextBlock::Quote { .. } => false,
        });
        assert!(has_plain);
    }
}
