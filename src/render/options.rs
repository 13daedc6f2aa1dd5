//! Rendering options and configuration.

use serde::{Deserialize, Serialize};

/// Options for rendering a document tree into presentation units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Border and padding handed to the host for quote containers
    pub quote: QuoteDecoration,

    /// Merge consecutive fragments that share the same style
    pub merge_adjacent_runs: bool,

    /// Drop runs whose text is empty
    pub skip_empty_runs: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote decoration.
    pub fn with_quote(mut self, quote: QuoteDecoration) -> Self {
        self.quote = quote;
        self
    }

    /// Set the quote border width.
    pub fn with_quote_border(mut self, width: u8) -> Self {
        self.quote.border_width = width;
        self
    }

    /// Set the quote padding.
    pub fn with_quote_padding(mut self, padding: u8) -> Self {
        self.quote.padding = padding;
        self
    }

    /// Enable or disable merging of same-style neighbouring fragments.
    pub fn with_merged_runs(mut self, merge: bool) -> Self {
        self.merge_adjacent_runs = merge;
        self
    }

    /// Enable or disable dropping of empty runs.
    pub fn with_skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty_runs = skip;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            quote: QuoteDecoration::default(),
            merge_adjacent_runs: false,
            skip_empty_runs: false,
        }
    }
}

/// Visual decoration of a quote container, in host units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteDecoration {
    /// Width of the leading border
    pub border_width: u8,

    /// Space between the border and the content
    pub padding: u8,
}

impl QuoteDecoration {
    /// Create a decoration with explicit border and padding.
    pub fn new(border_width: u8, padding: u8) -> Self {
        Self {
            border_width,
            padding,
        }
    }
}

impl Default for QuoteDecoration {
    fn default() -> Self {
        Self {
            border_width: 2,
            padding: 8,
        }
    }
}
