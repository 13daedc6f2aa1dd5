//! JSON rendering for presentation trees.

use crate::error::{Error, Result};

use super::PresentationUnit;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert presentation units to JSON.
pub fn to_json(units: &[PresentationUnit], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(units),
        JsonFormat::Compact => serde_json::to_string(units),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
