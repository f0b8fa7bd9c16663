//! The record stored for every named character reference, plus helpers for
//! the `U+XXXXX` code point strings it carries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CharRefError, Result};

/// Minimum number of hex digits in a formatted code point.
const CODE_POINT_WIDTH: usize = 5;

/// A named character reference: canonical name, code point string and glyph.
///
/// `name` never carries the `&`/`;` delimiters. `unicode` lists one
/// `U+XXXXX` token per code point, separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharInfo {
    pub name: String,
    pub unicode: String,
    pub glyph: String,
}

impl CharInfo {
    /// Build a record from its three fields as given.
    pub fn new(
        name: impl Into<String>,
        unicode: impl Into<String>,
        glyph: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unicode: unicode.into(),
            glyph: glyph.into(),
        }
    }

    /// Build a record whose `unicode` string is derived from `glyph`.
    pub fn from_glyph(name: impl Into<String>, glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        Self {
            name: name.into(),
            unicode: format_code_points(&glyph),
            glyph,
        }
    }

    /// Parse the `unicode` string into the characters it names.
    pub fn code_points(&self) -> Result<Vec<char>> {
        parse_code_points(&self.unicode).ok_or_else(|| CharRefError::InvalidCodePoint {
            name: self.name.clone(),
            value: self.unicode.clone(),
        })
    }

    /// The reference as it appears in markup, e.g. `&copy;`.
    pub fn markup(&self) -> String {
        format!("&{};", self.name)
    }
}

impl fmt::Display for CharInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{}; {} {}", self.name, self.unicode, self.glyph)
    }
}

/// Format every character of `glyph` as a space-separated `U+XXXXX` list.
pub fn format_code_points(glyph: &str) -> String {
    glyph
        .chars()
        .map(|c| format!("U+{:0width$X}", c as u32, width = CODE_POINT_WIDTH))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a single `U+XXXX` token. Returns `None` for anything that is not a
/// Unicode scalar value.
pub fn parse_code_point(token: &str) -> Option<char> {
    let hex = token.strip_prefix("U+")?;
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Parse a space-separated list of `U+XXXX` tokens. An empty list is invalid.
pub fn parse_code_points(unicode: &str) -> Option<Vec<char>> {
    if unicode.is_empty() {
        return None;
    }
    unicode.split(' ').map(parse_code_point).collect()
}
