//! Error types for loading a named character reference table.
//!
//! Queries against a loaded table never fail; every variant here describes a
//! problem with the table artifact itself.

/// Errors produced while building a reference table.
#[derive(Debug, thiserror::Error)]
pub enum CharRefError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reference table is empty")]
    EmptyTable,

    #[error("invalid reference name: {0:?}")]
    InvalidName(String),

    #[error("invalid code point {value:?} for reference {name:?}")]
    InvalidCodePoint { name: String, value: String },

    #[error("glyph does not match code points for reference {name:?}")]
    GlyphMismatch { name: String },
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CharRefError>;
