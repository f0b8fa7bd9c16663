//! The reference index: an immutable, insertion-ordered map from canonical
//! name to [`CharInfo`].
//!
//! An index is built once from a table artifact, validated, and never
//! mutated afterwards. Every query accepts either a bare name (`copy`) or
//! wrapped markup (`&copy;`); see [`normalize_name`].

use std::iter::FusedIterator;

use charref_types::{CharInfo, CharRefError, Result};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::name::normalize_name;

/// One record of the table artifact. The name is the enclosing JSON key.
#[derive(Debug, Deserialize)]
struct RawReference {
    unicode: String,
    glyph: String,
}

/// Immutable lookup table of named character references.
#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    entries: IndexMap<String, CharInfo>,
}

impl ReferenceIndex {
    /// Build an index from a JSON object of the form
    /// `{ "copy": { "unicode": "U+000A9", "glyph": "©" }, ... }`.
    ///
    /// Entry order in the index follows the order of keys in `json`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: IndexMap<String, RawReference> = serde_json::from_str(json)?;
        Self::from_entries(raw.into_iter().map(|(name, r)| CharInfo {
            name,
            unicode: r.unicode,
            glyph: r.glyph,
        }))
    }

    /// Build an index from records, validating each one.
    ///
    /// A repeated name replaces the earlier record but keeps its position.
    pub fn from_entries<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = CharInfo>,
    {
        let mut entries = IndexMap::new();
        for info in records {
            validate(&info)?;
            entries.insert(info.name.clone(), info);
        }
        if entries.is_empty() {
            return Err(CharRefError::EmptyTable);
        }
        log::debug!("Built reference index with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// True if `reference` (bare or `&...;`-wrapped) names an entry.
    pub fn contains(&self, reference: &str) -> bool {
        self.entries.contains_key(normalize_name(reference))
    }

    /// Look up `reference` (bare or `&...;`-wrapped).
    pub fn get(&self, reference: &str) -> Option<&CharInfo> {
        self.entries.get(normalize_name(reference))
    }

    /// Exact key test, without stripping delimiters.
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All entries in table order. Each call starts a fresh iteration.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.values(),
        }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a successfully built index.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReferenceIndex {
    type Item = &'a CharInfo;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the records of a [`ReferenceIndex`], in table order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Values<'a, String, CharInfo>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CharInfo;

    fn next(&mut self) -> Option<&'a CharInfo> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

fn validate(info: &CharInfo) -> Result<()> {
    if info.name.is_empty() || info.name.contains(['&', ';']) {
        return Err(CharRefError::InvalidName(info.name.clone()));
    }
    let code_points = info.code_points()?;
    if !info.glyph.chars().eq(code_points) {
        return Err(CharRefError::GlyphMismatch {
            name: info.name.clone(),
        });
    }
    Ok(())
}
