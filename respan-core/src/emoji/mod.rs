//! Emoji classification
//!
//! Recognizes single and compound emoji sequences (skin tones, ZWJ families,
//! flags, keycaps, variation selectors) as atomic codepoint spans. The
//! sequence data lives in [`tables`]; [`EmojiPattern`] compiles it once and
//! answers "does an emoji start here, and how long is it".
//!
//! # Example
//!
//! ```rust
//! use respan_core::emoji::{EmojiCategory, EmojiPattern};
//!
//! let text: Vec<char> = "3\u{FE0F}\u{20E3} go".chars().collect();
//! let m = EmojiPattern::global().match_at(&text, 0).unwrap();
//! assert_eq!(m.length, 3);
//! assert_eq!(m.category, EmojiCategory::Keycap);
//! ```

mod pattern;
pub mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use pattern::{EmojiIter, EmojiPattern};
pub use tables::EMOJI_VERSION;

use crate::types::EmojiSpan;

/// Kind of emoji sequence a match was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiCategory {
    /// Codepoints joined by U+200D (families, couples, roles)
    ZwjSequence,
    /// `#`, `*` or a digit followed by U+20E3
    Keycap,
    /// Regional indicator pair or subdivision tag flag
    Flag,
    /// Modifier base, optionally followed by a skin tone
    Modifier,
    /// Single codepoint emoji
    Presentation,
    /// A lone U+FE0F
    VariationSelector,
}

impl EmojiCategory {
    /// All categories in precedence order
    pub const ALL: [EmojiCategory; 6] = [
        EmojiCategory::ZwjSequence,
        EmojiCategory::Keycap,
        EmojiCategory::Flag,
        EmojiCategory::Modifier,
        EmojiCategory::Presentation,
        EmojiCategory::VariationSelector,
    ];

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            EmojiCategory::ZwjSequence => "zwj_sequence",
            EmojiCategory::Keycap => "keycap",
            EmojiCategory::Flag => "flag",
            EmojiCategory::Modifier => "modifier",
            EmojiCategory::Presentation => "presentation",
            EmojiCategory::VariationSelector => "variation_selector",
        }
    }
}

impl fmt::Display for EmojiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmojiCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmojiCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| crate::Error::Configuration(format!("unknown emoji category: {s}")))
    }
}

/// Result of a successful match at one offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMatch {
    /// Matched length in codepoints, always at least 1
    pub length: usize,
    /// Category of the rule that produced the match
    pub category: EmojiCategory,
}

/// Find every emoji in `text` using the bundled tables
pub fn find_emoji(text: &str) -> Vec<EmojiSpan> {
    EmojiPattern::global().find_in(text)
}

/// Whether `text` is exactly one emoji sequence
pub fn is_emoji(text: &str) -> bool {
    EmojiPattern::global().is_emoji(text)
}

/// Whether `text` contains any emoji sequence
pub fn contains_emoji(text: &str) -> bool {
    EmojiPattern::global().contains_emoji(text)
}
