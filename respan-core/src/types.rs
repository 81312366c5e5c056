//! Core types: codepoint-indexed entities and spans

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::emoji::EmojiCategory;

/// Anything that occupies a half-open codepoint range `[start, end)`
///
/// Every entity producer implements this so the rewriter never has to care
/// how a particular entity stores its indices.
pub trait Indexed {
    /// First codepoint covered
    fn start(&self) -> usize;

    /// One past the last codepoint covered
    fn end(&self) -> usize;

    /// `(start, end)` pair
    fn indices(&self) -> (usize, usize) {
        (self.start(), self.end())
    }
}

impl<E: Indexed + ?Sized> Indexed for &E {
    fn start(&self) -> usize {
        (**self).start()
    }

    fn end(&self) -> usize {
        (**self).end()
    }
}

impl Indexed for (usize, usize) {
    fn start(&self) -> usize {
        self.0
    }

    fn end(&self) -> usize {
        self.1
    }
}

impl Indexed for Range<usize> {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

/// A located entity with caller data attached
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity<T> {
    /// First codepoint of the entity
    pub start: usize,
    /// One past the last codepoint
    pub end: usize,
    /// Category-specific data (screen name, hashtag, URL, ...)
    pub payload: T,
}

impl<T> Entity<T> {
    /// Create a new entity
    pub fn new(start: usize, end: usize, payload: T) -> Self {
        debug_assert!(start <= end, "entity start {start} is past its end {end}");
        Self {
            start,
            end,
            payload,
        }
    }

    /// Number of codepoints covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the entity covers no codepoints
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Replace the payload, keeping the range
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Entity<U> {
        Entity {
            start: self.start,
            end: self.end,
            payload: f(self.payload),
        }
    }
}

impl<T> Indexed for Entity<T> {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

/// One matched emoji sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiSpan {
    /// First codepoint of the sequence
    pub start: usize,
    /// Length in codepoints
    pub length: usize,
    /// How the sequence was recognized
    pub category: EmojiCategory,
}

impl EmojiSpan {
    /// Create a new span
    pub fn new(start: usize, length: usize, category: EmojiCategory) -> Self {
        Self {
            start,
            length,
            category,
        }
    }
}

impl Indexed for EmojiSpan {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A text decoded into Unicode scalar values
///
/// Index `i` always addresses the i-th codepoint, never a byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Codepoints {
    chars: Vec<char>,
    offsets: Vec<usize>,
}

impl Codepoints {
    /// Decode `text`
    pub fn new(text: &str) -> Self {
        let (offsets, chars) = text.char_indices().unzip();
        Self { chars, offsets }
    }

    /// Number of codepoints
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether there are no codepoints
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// All codepoints
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Codepoint at `index`
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Slice `[start, end)`, clamped to the text
    ///
    /// Inverted or out-of-range bounds produce an empty slice instead of a
    /// panic.
    pub fn slice(&self, start: usize, end: usize) -> &[char] {
        let end = end.min(self.chars.len());
        if start >= end {
            return &[];
        }
        &self.chars[start..end]
    }

    /// Materialize `[start, end)` as a string
    pub fn substring(&self, start: usize, end: usize) -> String {
        self.slice(start, end).iter().collect()
    }

    /// Map a byte offset in the source text to a codepoint index
    ///
    /// An offset inside a multi-byte character maps to the character after
    /// it. Offsets past the end map to `len()`.
    pub fn byte_to_codepoint(&self, byte_offset: usize) -> usize {
        self.offsets.partition_point(|&b| b < byte_offset)
    }
}

impl From<&str> for Codepoints {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for Codepoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        self.chars.iter().try_for_each(|&c| f.write_char(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_indexed() {
        let entity = Entity::new(6, 10, "bob");
        assert_eq!(entity.indices(), (6, 10));
        assert_eq!(entity.len(), 4);
        assert!(!entity.is_empty());
    }

    #[test]
    fn test_entity_map_keeps_range() {
        let entity = Entity::new(1, 3, 7u32).map(|n| n.to_string());
        assert_eq!(entity, Entity::new(1, 3, "7".to_string()));
    }

    #[test]
    fn test_emoji_span_end() {
        let span = EmojiSpan::new(4, 7, EmojiCategory::ZwjSequence);
        assert_eq!(span.indices(), (4, 11));
    }

    #[test]
    fn test_tuple_and_range_indexed() {
        assert_eq!((2usize, 5usize).indices(), (2, 5));
        assert_eq!((2..5).indices(), (2, 5));
        let entity = Entity::new(0, 1, ());
        assert_eq!((&entity).indices(), (0, 1));
    }

    #[test]
    fn test_codepoints_astral_indexing() {
        let cps = Codepoints::new("\u{1F600}abc");
        assert_eq!(cps.len(), 4);
        assert_eq!(cps.get(1), Some('a'));
        assert_eq!(cps.substring(1, 3), "ab");
    }

    #[test]
    fn test_codepoints_slice_is_clamped() {
        let cps = Codepoints::new("abc");
        assert_eq!(cps.slice(1, 99), &['b', 'c']);
        assert!(cps.slice(2, 1).is_empty());
        assert!(cps.slice(10, 12).is_empty());
    }

    #[test]
    fn test_byte_to_codepoint() {
        let cps = Codepoints::new("\u{1F600}ab");
        assert_eq!(cps.byte_to_codepoint(0), 0);
        assert_eq!(cps.byte_to_codepoint(2), 1);
        assert_eq!(cps.byte_to_codepoint(4), 1);
        assert_eq!(cps.byte_to_codepoint(5), 2);
        assert_eq!(cps.byte_to_codepoint(6), 3);
        assert_eq!(cps.byte_to_codepoint(60), 3);
    }

    #[test]
    fn test_display_materializes_text() {
        let text = "h\u{E9}llo \u{1F44B}";
        assert_eq!(Codepoints::new(text).to_string(), text);
    }
}
