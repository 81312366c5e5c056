//! Emoji modifier bases with an optional skin tone.
//!
//! Generated from the Unicode emoji data files. Regenerate instead of
//! editing by hand.

use super::sets::*;
use super::Atom::{One, Opt, Presentation};
use super::Rule;

pub(crate) static MODIFIER_SEQUENCES: &[Rule] = &[
    Rule { lead: &[('\u{1F46B}', '\u{1F46B}')], tail: &[One(SKIN_TONE)] },
    Rule { lead: &[('\u{1F46C}', '\u{1F46C}')], tail: &[One(SKIN_TONE)] },
    Rule { lead: &[('\u{1F46D}', '\u{1F46D}')], tail: &[One(SKIN_TONE)] },
    Rule {
        lead: &[
            ('\u{261D}', '\u{261D}'), ('\u{26F7}', '\u{26F7}'), ('\u{26F9}', '\u{26F9}'),
            ('\u{270C}', '\u{270C}'), ('\u{270D}', '\u{270D}'), ('\u{1F3CB}', '\u{1F3CB}'),
            ('\u{1F3CC}', '\u{1F3CC}'), ('\u{1F574}', '\u{1F574}'), ('\u{1F575}', '\u{1F575}'),
            ('\u{1F590}', '\u{1F590}'),
        ],
        tail: &[Presentation, Opt(SKIN_TONE)],
    },
    Rule {
        lead: &[
            ('\u{270A}', '\u{270A}'), ('\u{270B}', '\u{270B}'), ('\u{1F385}', '\u{1F385}'),
            ('\u{1F3C2}', '\u{1F3C4}'), ('\u{1F3C7}', '\u{1F3C7}'), ('\u{1F3CA}', '\u{1F3CA}'),
            ('\u{1F442}', '\u{1F442}'), ('\u{1F443}', '\u{1F443}'), ('\u{1F446}', '\u{1F450}'),
            ('\u{1F466}', '\u{1F469}'), ('\u{1F46E}', '\u{1F46E}'), ('\u{1F470}', '\u{1F478}'),
            ('\u{1F47C}', '\u{1F47C}'), ('\u{1F481}', '\u{1F483}'), ('\u{1F485}', '\u{1F487}'),
            ('\u{1F4AA}', '\u{1F4AA}'), ('\u{1F57A}', '\u{1F57A}'), ('\u{1F595}', '\u{1F595}'),
            ('\u{1F596}', '\u{1F596}'), ('\u{1F645}', '\u{1F647}'), ('\u{1F64B}', '\u{1F64F}'),
            ('\u{1F6A3}', '\u{1F6A3}'), ('\u{1F6B4}', '\u{1F6B6}'), ('\u{1F6C0}', '\u{1F6C0}'),
            ('\u{1F6CC}', '\u{1F6CC}'), ('\u{1F90F}', '\u{1F90F}'), ('\u{1F918}', '\u{1F91C}'),
            ('\u{1F91E}', '\u{1F91E}'), ('\u{1F91F}', '\u{1F91F}'), ('\u{1F926}', '\u{1F926}'),
            ('\u{1F930}', '\u{1F939}'), ('\u{1F93D}', '\u{1F93D}'), ('\u{1F93E}', '\u{1F93E}'),
            ('\u{1F9B5}', '\u{1F9B5}'), ('\u{1F9B6}', '\u{1F9B6}'), ('\u{1F9B8}', '\u{1F9B8}'),
            ('\u{1F9B9}', '\u{1F9B9}'), ('\u{1F9BB}', '\u{1F9BB}'), ('\u{1F9CD}', '\u{1F9CF}'),
            ('\u{1F9D1}', '\u{1F9DD}'),
        ],
        tail: &[Opt(SKIN_TONE)],
    },
];
