//! Error types for richstack library.
//!
//! Rendering itself is total and never fails. These errors come from the
//! surfaces around it: loading documents and serializing presentation trees.

use std::io;
use thiserror::Error;

/// Result type alias for richstack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or emitting documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a valid JSON document tree.
    #[error("Document parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while emitting a presentation tree (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Render("bad host".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad host");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Document parsing error"));
    }
}
