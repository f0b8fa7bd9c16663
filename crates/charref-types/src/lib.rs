//! Foundation types for HTML named character references.
//!
//! Shared by the reference index and anything that consumes its records:
//! the [`CharInfo`] record, `U+XXXXX` code point string helpers, and the
//! error type produced when a reference table fails to load.

pub mod char_info;
pub mod error;

pub use char_info::CharInfo;
pub use error::{CharRefError, Result};
