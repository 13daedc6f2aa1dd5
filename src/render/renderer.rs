//! Block tree to presentation tree rendering.

use crate::model::{Document, InlineText, RichTextBlock};

use super::{
    ContainerUnit, InlineUnit, PresentationUnit, RenderOptions, RenderResult, RenderStats,
    StyledFragment,
};

/// Pending work while walking a block tree.
enum Step<'a> {
    /// Render this block
    Visit(&'a RichTextBlock),
    /// Wrap the last `n` built units in a quote container
    Close(usize),
}

/// Renderer from rich-text blocks to presentation units.
///
/// Holds only its options; every call is a pure function of its input, so
/// a renderer can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options this renderer was built with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a single block.
    pub fn render(&self, block: &RichTextBlock) -> PresentationUnit {
        match block {
            RichTextBlock::PlainText { runs } => PresentationUnit::Inline(self.compose_runs(runs)),
            RichTextBlock::Quote { children } => {
                PresentationUnit::Container(self.quote(self.render_children(children)))
            }
        }
    }

    /// Render sibling blocks, preserving their order.
    ///
    /// Nested quotes are handled with an explicit work stack rather than
    /// recursion, so nesting depth is bounded only by memory.
    pub fn render_children(&self, blocks: &[RichTextBlock]) -> Vec<PresentationUnit> {
        let mut steps: Vec<Step<'_>> = blocks.iter().rev().map(Step::Visit).collect();
        let mut built: Vec<PresentationUnit> = Vec::with_capacity(blocks.len());

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(RichTextBlock::PlainText { runs }) => {
                    built.push(PresentationUnit::Inline(self.compose_runs(runs)));
                }
                Step::Visit(RichTextBlock::Quote { children }) => {
                    steps.push(Step::Close(children.len()));
                    steps.extend(children.iter().rev().map(Step::Visit));
                }
                Step::Close(count) => {
                    // Children were pushed in order and each collapsed to one unit.
                    let children = built.split_off(built.len() - count);
                    built.push(PresentationUnit::Container(self.quote(children)));
                }
            }
        }

        log::trace!("Rendered {} blocks into {} units", blocks.len(), built.len());
        built
    }

    /// Render every top-level block of a document.
    pub fn render_document(&self, doc: &Document) -> Vec<PresentationUnit> {
        log::debug!(
            "Rendering document {:?} with {} top-level blocks",
            doc.title.as_deref().unwrap_or("<untitled>"),
            doc.blocks.len()
        );
        self.render_children(&doc.blocks)
    }

    /// Render blocks and collect statistics about input and output.
    pub fn render_with_stats(&self, blocks: &[RichTextBlock]) -> RenderResult {
        let mut stats = RenderStats::new();
        for (block, depth) in blocks.iter().flat_map(RichTextBlock::descendants) {
            match block {
                RichTextBlock::PlainText { runs } => stats.add_plain_text(runs.len()),
                RichTextBlock::Quote { .. } => stats.add_quote(depth + 1),
            }
        }

        let units = self.render_children(blocks);
        for unit in &units {
            let text = unit.plain_text();
            stats.count_text(&text);
        }
        stats.add_fragments(count_fragments(&units));

        RenderResult::new(units, stats)
    }

    /// Concatenate styled runs onto an initially empty unit.
    fn compose_runs(&self, runs: &[InlineText]) -> InlineUnit {
        let mut unit = InlineUnit::empty();
        for run in runs {
            if self.options.skip_empty_runs && run.is_empty() {
                continue;
            }
            unit += style_run(run);
        }

        if self.options.merge_adjacent_runs {
            unit.merged()
        } else {
            unit
        }
    }

    fn quote(&self, children: Vec<PresentationUnit>) -> ContainerUnit {
        ContainerUnit::quote(children, self.options.quote)
    }
}

/// Build a fragment carrying the run's text with each of its attributes applied.
fn style_run(run: &InlineText) -> StyledFragment {
    run.attributes()
        .applied()
        .fold(StyledFragment::new(run.text()), StyledFragment::apply)
}

fn count_fragments(units: &[PresentationUnit]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&PresentationUnit> = units.iter().collect();
    while let Some(unit) = stack.pop() {
        match unit {
            PresentationUnit::Inline(inline) => count += inline.len(),
            PresentationUnit::Container(container) => stack.extend(container.children()),
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextAttribute;
    use crate::render::QuoteDecoration;

    fn leaf(text: &str) -> RichTextBlock {
        RichTextBlock::plain_text([InlineText::plain(text)])
    }

    #[test]
    fn test_style_run_applies_exact_set() {
        let run = InlineText::new("x", TextAttribute::BOLD | TextAttribute::HEADING);
        let fragment = style_run(&run);
        assert_eq!(fragment.style(), run.attributes());
        assert!(!fragment.has(TextAttribute::ITALIC));
    }

    #[test]
    fn test_render_plain_text() {
        let renderer = Renderer::default();
        let block = RichTextBlock::plain_text([InlineText::plain("Hi"), InlineText::italic(" there")]);
        let unit = renderer.render(&block);
        let inline = unit.as_inline().unwrap();
        assert_eq!(inline.plain_text(), "Hi there");
        assert_eq!(inline.fragments()[0].style(), TextAttribute::empty());
        assert_eq!(inline.fragments()[1].style(), TextAttribute::ITALIC);
    }

    #[test]
    fn test_render_children_preserves_nesting() {
        let renderer = Renderer::default();
        let blocks = vec![
            leaf("a"),
            RichTextBlock::quote([leaf("b"), RichTextBlock::quote([leaf("c")]), leaf("d")]),
            leaf("e"),
        ];
        let units = renderer.render_children(&blocks);
        assert_eq!(units.len(), 3);

        let quote = units[1].as_container().unwrap();
        assert_eq!(quote.len(), 3);
        assert_eq!(quote.children()[0].plain_text(), "b");
        assert_eq!(quote.children()[1].as_container().unwrap().len(), 1);
        assert_eq!(quote.children()[2].plain_text(), "d");
        assert_eq!(units[2].plain_text(), "e");
    }

    #[test]
    fn test_render_matches_render_children() {
        let renderer = Renderer::default();
        let block = RichTextBlock::quote([leaf("x"), RichTextBlock::quote([])]);
        let single = renderer.render(&block);
        let many = renderer.render_children(std::slice::from_ref(&block));
        assert_eq!(many, vec![single]);
    }

    #[test]
    fn test_quote_decoration_from_options() {
        let decoration = QuoteDecoration::new(5, 3);
        let renderer = Renderer::new(RenderOptions::new().with_quote(decoration));
        let unit = renderer.render(&RichTextBlock::quote([]));
        let container = unit.as_container().unwrap();
        assert!(container.is_empty());
        assert_eq!(
            container.decoration(),
            crate::render::Decoration::Quote(decoration)
        );
    }

    #[test]
    fn test_merge_adjacent_runs() {
        let renderer = Renderer::new(RenderOptions::new().with_merged_runs(true));
        let block = RichTextBlock::plain_text([
            InlineText::plain("a"),
            InlineText::plain("b"),
            InlineText::bold("c"),
        ]);
        let unit = renderer.render(&block);
        let inline = unit.as_inline().unwrap();
        assert_eq!(inline.len(), 2);
        assert_eq!(inline.plain_text(), "abc");
    }

    #[test]
    fn test_skip_empty_runs() {
        let block = RichTextBlock::plain_text([
            InlineText::plain(""),
            InlineText::bold("x"),
            InlineText::italic(""),
        ]);

        let kept = Renderer::default().render(&block);
        assert_eq!(kept.as_inline().unwrap().len(), 3);

        let skipped = Renderer::new(RenderOptions::new().with_skip_empty(true)).render(&block);
        assert_eq!(skipped.as_inline().unwrap().len(), 1);
    }

    #[test]
    fn test_render_with_stats() {
        let renderer = Renderer::default();
        let blocks = vec![
            RichTextBlock::plain_text([InlineText::plain("one two"), InlineText::bold(" three")]),
            RichTextBlock::quote([RichTextBlock::quote([leaf("four")])]),
        ];
        let result = renderer.render_with_stats(&blocks);

        assert_eq!(result.units.len(), 2);
        assert_eq!(result.stats.plain_text_blocks, 2);
        assert_eq!(result.stats.quote_blocks, 2);
        assert_eq!(result.stats.run_count, 3);
        assert_eq!(result.stats.fragment_count, 3);
        assert_eq!(result.stats.word_count, 4);
        assert_eq!(result.stats.max_depth, 2);
    }

    #[test]
    fn test_render_document() {
        let doc = Document::from_blocks([leaf("a"), leaf("b")]).with_title("t");
        let units = Renderer::default().render_document(&doc);
        assert_eq!(units.len(), 2);
    }
}
