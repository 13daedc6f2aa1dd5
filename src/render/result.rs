//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use super::PresentationUnit;

/// Result of rendering a sequence of blocks, including statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Rendered units, top to bottom
    pub units: Vec<PresentationUnit>,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(units: Vec<PresentationUnit>, stats: RenderStats) -> Self {
        Self { units, stats }
    }
}

/// Statistics collected during rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of plain-text blocks rendered
    pub plain_text_blocks: u32,

    /// Number of quote blocks rendered
    pub quote_blocks: u32,

    /// Number of inline runs read
    pub run_count: u32,

    /// Number of styled fragments emitted
    pub fragment_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,

    /// Deepest quote nesting seen
    pub max_depth: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment plain-text block count.
    pub fn add_plain_text(&mut self, runs: usize) {
        self.plain_text_blocks += 1;
        self.run_count += runs as u32;
    }

    /// Increment quote count and track depth.
    pub fn add_quote(&mut self, depth: usize) {
        self.quote_blocks += 1;
        self.max_depth = self.max_depth.max(depth as u32);
    }

    /// Add emitted fragments.
    pub fn add_fragments(&mut self, count: usize) {
        self.fragment_count += count as u32;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of blocks rendered.
    pub fn block_count(&self) -> u32 {
        self.plain_text_blocks + self.quote_blocks
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.plain_text_blocks += other.plain_text_blocks;
        self.quote_blocks += other.quote_blocks;
        self.run_count += other.run_count;
        self.fragment_count += other.fragment_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}
