//! HTML named character reference lookup.
//!
//! Answers "is this a named character reference, and what does it denote?"
//! against the WHATWG table of named references, embedded at compile time.
//! References may be given bare (`copy`) or as markup (`&copy;`):
//!
//! ```
//! assert!(charref::is_named_char("&copy;"));
//! assert_eq!(charref::get_char_info("copy").unwrap().glyph, "\u{00A9}");
//! assert!(!charref::is_named_char("&copy"));
//! ```
//!
//! The process-wide table is built on first use and is read-only afterwards,
//! so queries may run from any number of threads. Lookups are
//! case-sensitive; `AMP` and `amp` are separate entries of the table.

pub mod index;
pub mod name;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use charref_types::{CharInfo, CharRefError, Result};
pub use index::{Iter, ReferenceIndex};
pub use name::normalize_name;

// -----------------------------------------------------------------------
// Process-wide table
// -----------------------------------------------------------------------

use std::sync::LazyLock;

/// The named reference table artifact, keyed by canonical name.
const REFERENCES_JSON: &str = include_str!("../data/references.json");

static INDEX: LazyLock<Result<ReferenceIndex>> = LazyLock::new(|| {
    let index = ReferenceIndex::from_json(REFERENCES_JSON);
    if let Err(e) = &index {
        log::error!("Failed to load embedded reference table: {e}");
    }
    index
});

/// The process-wide index, or the error the embedded table failed with.
pub fn try_index() -> std::result::Result<&'static ReferenceIndex, &'static CharRefError> {
    INDEX.as_ref()
}

/// The process-wide index.
///
/// # Panics
///
/// Panics if the embedded table artifact is malformed. This is a build
/// defect rather than a query error, so it surfaces on first use.
pub fn index() -> &'static ReferenceIndex {
    match try_index() {
        Ok(index) => index,
        Err(e) => panic!("embedded reference table is invalid: {e}"),
    }
}

/// True if `reference` (`amp` or `&amp;`) is a named character reference.
pub fn is_named_char(reference: &str) -> bool {
    index().contains(reference)
}

/// Look up a named character reference (`copy` or `&copy;`).
pub fn get_char_info(reference: &str) -> Option<&'static CharInfo> {
    index().get(reference)
}

/// Every named character reference, in table order.
pub fn get_char_refs() -> Iter<'static> {
    index().iter()
}
