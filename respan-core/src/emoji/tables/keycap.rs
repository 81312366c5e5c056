//! Keycap sequences.
//!
//! Generated from the Unicode emoji data files. Regenerate instead of
//! editing by hand.

use super::sets::*;
use super::Atom::{One, Opt};
use super::Rule;

pub(crate) static KEYCAP_SEQUENCES: &[Rule] = &[
    Rule { lead: &[('#', '#'), ('*', '*'), ('0', '9')], tail: &[Opt(VS16), One(KEYCAP)] },
];
