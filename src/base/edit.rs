//! Single text replacements applied to a host buffer.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// Replace `range` with `insert`.
///
/// An insertion is an edit with an empty range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextEdit {
    pub range: TextRange,
    pub insert: SmolStr,
}

impl TextEdit {
    /// Insert `text` at `offset`.
    pub fn insert(offset: TextSize, text: impl Into<SmolStr>) -> Self {
        Self {
            range: TextRange::empty(offset),
            insert: text.into(),
        }
    }

    /// Replace `range` with `text`.
    pub fn replace(range: TextRange, text: impl Into<SmolStr>) -> Self {
        Self {
            range,
            insert: text.into(),
        }
    }

    /// Whether this edit only inserts text.
    pub fn is_insert(&self) -> bool {
        self.range.is_empty()
    }

    /// Apply the edit in place.
    ///
    /// Returns `false` and leaves `text` untouched when the range does not
    /// fit the text or splits a character.
    pub fn apply(&self, text: &mut String) -> bool {
        let start = usize::from(self.range.start());
        let end = usize::from(self.range.end());
        if end > text.len() || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return false;
        }
        text.replace_range(start..end, &self.insert);
        true
    }

    /// Apply the edit to a copy of `text`.
    pub fn applied(&self, text: &str) -> Option<String> {
        let mut result = text.to_owned();
        self.apply(&mut result).then_some(result)
    }
}
