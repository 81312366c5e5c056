//! Static emoji sequence tables
//!
//! The tables are pure data: each rule is a lead codepoint set followed by a
//! short list of atoms. Everything that changes with a new emoji revision
//! lives here; the matcher in [`super::pattern`] does not.

mod flag;
mod keycap;
mod modifier;
mod presentation;
mod sets;
mod zwj;

use super::EmojiCategory;

/// Emoji data revision the tables were generated from.
pub const EMOJI_VERSION: &str = "12.1";

/// Inclusive codepoint ranges. Singletons are written as `(c, c)`.
pub type CodepointSet = &'static [(char, char)];

/// One step of a rule after its lead codepoint.
#[derive(Debug, Clone, Copy)]
pub enum Atom {
    /// Exactly one codepoint from the set.
    One(CodepointSet),
    /// Zero or one codepoint from the set.
    Opt(CodepointSet),
    /// Consume U+FE0F, or consume nothing as long as the next codepoint is
    /// not the text-presentation selector U+FE0E.
    Presentation,
}

/// A single table entry.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub lead: CodepointSet,
    pub tail: &'static [Atom],
}

static LONE_SELECTOR: &[Rule] = &[Rule {
    lead: sets::VS16,
    tail: &[],
}];

/// Rule groups in precedence order. Among matches of equal length the
/// earlier rule wins.
pub static RULE_GROUPS: &[(EmojiCategory, &[Rule])] = &[
    (EmojiCategory::ZwjSequence, zwj::ZWJ_SEQUENCES),
    (EmojiCategory::Keycap, keycap::KEYCAP_SEQUENCES),
    (EmojiCategory::Flag, flag::FLAG_SEQUENCES),
    (EmojiCategory::Modifier, modifier::MODIFIER_SEQUENCES),
    (EmojiCategory::Presentation, presentation::PRESENTATION_SEQUENCES),
    (EmojiCategory::VariationSelector, LONE_SELECTOR),
];

/// Check whether `ch` falls in any range of `set`.
#[inline]
pub fn set_contains(set: CodepointSet, ch: char) -> bool {
    set.iter().any(|&(lo, hi)| lo <= ch && ch <= hi)
}
