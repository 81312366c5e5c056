//! Named codepoint sets shared by the sequence tables.

use super::CodepointSet;

pub(crate) const ZWJ: CodepointSet = &[('\u{200D}', '\u{200D}')];
pub(crate) const VS16: CodepointSet = &[('\u{FE0F}', '\u{FE0F}')];
pub(crate) const KEYCAP: CodepointSet = &[('\u{20E3}', '\u{20E3}')];
pub(crate) const CANCEL_TAG: CodepointSet = &[('\u{E007F}', '\u{E007F}')];

pub(crate) const SKIN_TONE: CodepointSet = &[('\u{1F3FB}', '\u{1F3FF}')];
pub(crate) const SKIN_LIGHT: CodepointSet = &[('\u{1F3FB}', '\u{1F3FB}')];
pub(crate) const SKIN_MEDIUM_LIGHT: CodepointSet = &[('\u{1F3FC}', '\u{1F3FC}')];
pub(crate) const SKIN_MEDIUM: CodepointSet = &[('\u{1F3FD}', '\u{1F3FD}')];
pub(crate) const SKIN_MEDIUM_DARK: CodepointSet = &[('\u{1F3FE}', '\u{1F3FE}')];
pub(crate) const SKIN_DARK: CodepointSet = &[('\u{1F3FF}', '\u{1F3FF}')];

pub(crate) const MAN: CodepointSet = &[('\u{1F468}', '\u{1F468}')];
pub(crate) const WOMAN: CodepointSet = &[('\u{1F469}', '\u{1F469}')];
pub(crate) const PERSON: CodepointSet = &[('\u{1F9D1}', '\u{1F9D1}')];
pub(crate) const BOY: CodepointSet = &[('\u{1F466}', '\u{1F466}')];
pub(crate) const GIRL: CodepointSet = &[('\u{1F467}', '\u{1F467}')];
pub(crate) const CHILD: CodepointSet = &[('\u{1F466}', '\u{1F467}')];
pub(crate) const MAN_OR_WOMAN: CodepointSet = &[('\u{1F468}', '\u{1F469}')];
pub(crate) const ADULT: CodepointSet = &[('\u{1F468}', '\u{1F469}'), ('\u{1F9D1}', '\u{1F9D1}')];

pub(crate) const HANDSHAKE: CodepointSet = &[('\u{1F91D}', '\u{1F91D}')];
pub(crate) const HEAVY_HEART: CodepointSet = &[('\u{2764}', '\u{2764}')];
pub(crate) const KISS_MARK: CodepointSet = &[('\u{1F48B}', '\u{1F48B}')];
pub(crate) const FEMALE_SIGN: CodepointSet = &[('\u{2640}', '\u{2640}')];
pub(crate) const MALE_SIGN: CodepointSet = &[('\u{2642}', '\u{2642}')];
pub(crate) const GENDER_SIGN: CodepointSet = &[('\u{2640}', '\u{2640}'), ('\u{2642}', '\u{2642}')];
pub(crate) const BLACK_FLAG: CodepointSet = &[('\u{1F3F4}', '\u{1F3F4}')];
pub(crate) const WHITE_FLAG: CodepointSet = &[('\u{1F3F3}', '\u{1F3F3}')];
