//! Compiled emoji matcher
//!
//! The rule tables are compiled once into a lead-codepoint dispatch index:
//! sorted, disjoint codepoint intervals, each carrying the rules whose lead
//! set covers it. Matching at an offset is then a binary search followed by
//! a bounded walk over a handful of short rules, so scanning a text is
//! linear in its length.

use std::sync::OnceLock;

use super::tables::{set_contains, Atom, Rule, RULE_GROUPS};
use super::{EmojiCategory, EmojiMatch};
use crate::types::EmojiSpan;

static GLOBAL: OnceLock<EmojiPattern> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
struct Candidate {
    category: EmojiCategory,
    rule: &'static Rule,
}

#[derive(Debug)]
struct LeadInterval {
    lo: char,
    hi: char,
    candidates: Vec<Candidate>,
}

/// Precompiled emoji classification pattern
#[derive(Debug)]
pub struct EmojiPattern {
    dispatch: Vec<LeadInterval>,
    rule_count: usize,
}

impl EmojiPattern {
    /// Compile rule groups given in precedence order
    pub fn compile(groups: &'static [(EmojiCategory, &'static [Rule])]) -> Self {
        let candidates: Vec<Candidate> = groups
            .iter()
            .flat_map(|&(category, rules)| rules.iter().map(move |rule| Candidate { category, rule }))
            .collect();

        // Every range edge starts a new elementary interval.
        let mut points: Vec<u32> = candidates
            .iter()
            .flat_map(|c| c.rule.lead.iter())
            .flat_map(|&(lo, hi)| [lo as u32, hi as u32 + 1])
            .collect();
        points.sort_unstable();
        points.dedup();

        let mut dispatch = Vec::new();
        for window in points.windows(2) {
            let (Some(lo), Some(hi)) = (char::from_u32(window[0]), char::from_u32(window[1] - 1))
            else {
                continue;
            };

            let covering: Vec<Candidate> = candidates
                .iter()
                .filter(|c| set_contains(c.rule.lead, lo))
                .copied()
                .collect();

            if !covering.is_empty() {
                dispatch.push(LeadInterval {
                    lo,
                    hi,
                    candidates: covering,
                });
            }
        }

        log::debug!(
            "compiled emoji pattern: {} rules, {} lead intervals",
            candidates.len(),
            dispatch.len()
        );

        Self {
            dispatch,
            rule_count: candidates.len(),
        }
    }

    /// The shared pattern built from the bundled tables
    pub fn global() -> &'static EmojiPattern {
        GLOBAL.get_or_init(|| Self::compile(RULE_GROUPS))
    }

    /// Number of rules compiled into this pattern
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    fn candidates(&self, ch: char) -> &[Candidate] {
        let idx = self.dispatch.partition_point(|iv| iv.hi < ch);
        match self.dispatch.get(idx) {
            Some(iv) if iv.lo <= ch => &iv.candidates,
            _ => &[],
        }
    }

    /// Match the longest emoji sequence starting at `offset`
    ///
    /// Returns `None` when no sequence starts there, including when `offset`
    /// is past the end of `text`.
    pub fn match_at(&self, text: &[char], offset: usize) -> Option<EmojiMatch> {
        let &lead = text.get(offset)?;

        let mut best: Option<EmojiMatch> = None;
        for candidate in self.candidates(lead) {
            let Some(end) = match_tail(candidate.rule.tail, text, offset + 1) else {
                continue;
            };
            let length = end - offset;
            // Strictly longer only: equal lengths keep the earlier rule.
            if best.map_or(true, |b| length > b.length) {
                best = Some(EmojiMatch {
                    length,
                    category: candidate.category,
                });
            }
        }
        best
    }

    /// Iterate over non-overlapping emoji spans from left to right
    pub fn find_iter<'p, 't>(&'p self, text: &'t [char]) -> EmojiIter<'p, 't> {
        EmojiIter {
            pattern: self,
            text,
            pos: 0,
        }
    }

    /// Collect every emoji span in `text`, indexed in codepoints
    pub fn find_in(&self, text: &str) -> Vec<EmojiSpan> {
        let chars: Vec<char> = text.chars().collect();
        let spans: Vec<EmojiSpan> = self.find_iter(&chars).collect();
        log::trace!("found {} emoji in {} codepoints", spans.len(), chars.len());
        spans
    }

    /// Whether the whole of `text` is exactly one emoji sequence
    pub fn is_emoji(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        self.match_at(&chars, 0)
            .is_some_and(|m| m.length == chars.len())
    }

    /// Whether `text` contains at least one emoji sequence
    pub fn contains_emoji(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        self.find_iter(&chars).next().is_some()
    }
}

/// Walk `atoms` from `pos`, returning the furthest end position reachable.
fn match_tail(atoms: &[Atom], text: &[char], pos: usize) -> Option<usize> {
    let Some((first, rest)) = atoms.split_first() else {
        return Some(pos);
    };

    match *first {
        Atom::One(set) => {
            let &ch = text.get(pos)?;
            if set_contains(set, ch) {
                match_tail(rest, text, pos + 1)
            } else {
                None
            }
        }
        Atom::Opt(set) => {
            let taken = match text.get(pos) {
                Some(&ch) if set_contains(set, ch) => match_tail(rest, text, pos + 1),
                _ => None,
            };
            taken.max(match_tail(rest, text, pos))
        }
        Atom::Presentation => match text.get(pos) {
            Some('\u{FE0F}') => match_tail(rest, text, pos + 1).max(match_tail(rest, text, pos)),
            Some('\u{FE0E}') => None,
            _ => match_tail(rest, text, pos),
        },
    }
}

/// Iterator returned by [`EmojiPattern::find_iter`]
#[derive(Debug)]
pub struct EmojiIter<'p, 't> {
    pattern: &'p EmojiPattern,
    text: &'t [char],
    pos: usize,
}

impl Iterator for EmojiIter<'_, '_> {
    type Item = EmojiSpan;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let start = self.pos;
            match self.pattern.match_at(self.text, start) {
                Some(m) => {
                    self.pos = start + m.length;
                    return Some(EmojiSpan::new(start, m.length, m.category));
                }
                None => self.pos += 1,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn match_len(s: &str) -> Option<usize> {
        EmojiPattern::global()
            .match_at(&chars(s), 0)
            .map(|m| m.length)
    }

    #[test]
    fn test_family_is_one_match() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        let m = EmojiPattern::global().match_at(&chars(family), 0).unwrap();
        assert_eq!(m.length, 7);
        assert_eq!(m.category, EmojiCategory::ZwjSequence);
    }

    #[test]
    fn test_keycap() {
        let m = EmojiPattern::global()
            .match_at(&chars("3\u{FE0F}\u{20E3}"), 0)
            .unwrap();
        assert_eq!(m.length, 3);
        assert_eq!(m.category, EmojiCategory::Keycap);

        // The selector is optional inside a keycap sequence.
        assert_eq!(match_len("#\u{20E3}"), Some(2));
        // A bare digit is not an emoji.
        assert_eq!(match_len("3"), None);
        assert_eq!(match_len("3\u{FE0F}"), None);
    }

    #[test]
    fn test_skin_tone_modifier_attaches() {
        // Thumbs up + medium skin tone
        assert_eq!(match_len("\u{1F44D}\u{1F3FD}"), Some(2));
        // Waving hand without modifier
        assert_eq!(match_len("\u{1F44B}"), Some(1));
    }

    #[test]
    fn test_text_presentation_selector_blocks_match() {
        // Sun with emoji presentation
        assert_eq!(match_len("\u{2600}\u{FE0F}"), Some(2));
        // Sun alone still counts
        assert_eq!(match_len("\u{2600}"), Some(1));
        // Sun forced to text presentation does not
        assert_eq!(match_len("\u{2600}\u{FE0E}"), None);
    }

    #[test]
    fn test_copyright_needs_selector() {
        assert_eq!(match_len("\u{A9}"), None);
        assert_eq!(match_len("\u{A9}\u{FE0F}"), Some(2));
    }

    #[test]
    fn test_circled_m_in_both_cases() {
        assert_eq!(match_len("\u{24C2}"), Some(1));
        assert_eq!(match_len("\u{24DC}\u{FE0F}"), Some(2));
        assert_eq!(match_len("\u{24DC}\u{FE0E}"), None);
    }

    #[test]
    fn test_flags() {
        // Japan
        let m = EmojiPattern::global()
            .match_at(&chars("\u{1F1EF}\u{1F1F5}"), 0)
            .unwrap();
        assert_eq!(m.length, 2);
        assert_eq!(m.category, EmojiCategory::Flag);

        // Scotland
        let scotland = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}";
        assert_eq!(match_len(scotland), Some(7));

        // Rainbow flag
        assert_eq!(match_len("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}"), Some(4));
    }

    #[test]
    fn test_gendered_role_with_skin_tone() {
        // Woman facepalming, dark skin tone
        let s = "\u{1F926}\u{1F3FF}\u{200D}\u{2640}\u{FE0F}";
        let m = EmojiPattern::global().match_at(&chars(s), 0).unwrap();
        assert_eq!(m.length, 5);
        assert_eq!(m.category, EmojiCategory::ZwjSequence);
    }

    #[test]
    fn test_profession_sequence() {
        // Woman technologist, light skin tone
        assert_eq!(match_len("\u{1F469}\u{1F3FB}\u{200D}\u{1F4BB}"), Some(4));
    }

    #[test]
    fn test_lone_variation_selector() {
        let m = EmojiPattern::global()
            .match_at(&chars("\u{FE0F}"), 0)
            .unwrap();
        assert_eq!(m.category, EmojiCategory::VariationSelector);
    }

    #[test]
    fn test_offset_out_of_range() {
        assert!(EmojiPattern::global().match_at(&chars("ab"), 5).is_none());
        assert!(EmojiPattern::global().match_at(&[], 0).is_none());
    }

    #[test]
    fn test_find_iter_skips_plain_text() {
        let text = chars("hi \u{1F600} there 1\u{FE0F}\u{20E3}!");
        let spans: Vec<_> = EmojiPattern::global().find_iter(&text).collect();
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start, spans[0].length), (3, 1));
        assert_eq!((spans[1].start, spans[1].length), (11, 3));
    }

    #[test]
    fn test_is_emoji_and_contains() {
        let pattern = EmojiPattern::global();
        assert!(pattern.is_emoji("\u{1F600}"));
        assert!(!pattern.is_emoji("\u{1F600}a"));
        assert!(!pattern.is_emoji(""));
        assert!(pattern.contains_emoji("a\u{1F600}"));
        assert!(!pattern.contains_emoji("plain text 123"));
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(EmojiPattern::global(), EmojiPattern::global()));
        assert!(EmojiPattern::global().rule_count() > 90);
    }
}
