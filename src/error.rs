//! Error types for hilite

use thiserror::Error;

/// Result type alias for hilite operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
///
/// Unknown language identifiers are deliberately not represented here:
/// they resolve to the default catalog entry and never fail.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme file: {0}")]
    Theme(#[from] toml::de::Error),

    #[error("{0}")]
    Usage(String),
}
