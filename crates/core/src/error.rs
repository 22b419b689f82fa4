//! Error types for slide layout extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around layout extraction.
///
/// Extraction itself never fails; these cover decoding slides and
/// resolving template identifiers explicitly.
#[derive(Error, Debug)]
pub enum Error {
    /// Slide JSON could not be decoded.
    #[error("Failed to decode slide JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A template identifier that is not in the registry.
    #[error("Unknown template identifier: {0}")]
    UnknownTemplate(String),

    /// The input is JSON but not a usable slide.
    #[error("Invalid slide: {0}")]
    InvalidSlide(String),
}

/// A single prop that could not be read as the expected shape.
///
/// These never escape extraction: the props layer logs them and treats
/// the field as missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropError {
    /// The field exists but holds the wrong JSON type.
    #[error("prop `{key}` should be {expected}, found {found}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
