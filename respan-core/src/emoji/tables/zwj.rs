//! Zero-width-joiner sequences: couples, families, professions and gendered roles.
//!
//! Generated from the Unicode emoji data files. Regenerate instead of
//! editing by hand.

use super::sets::*;
use super::Atom::{One, Opt};
use super::Rule;

pub(crate) static ZWJ_SEQUENCES: &[Rule] = &[
    Rule {
        lead: MAN,
        tail: &[
            One(SKIN_LIGHT),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[('\u{1F3FC}', '\u{1F3FF}')]),
        ],
    },
    Rule {
        lead: MAN,
        tail: &[
            One(SKIN_MEDIUM_LIGHT),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[('\u{1F3FB}', '\u{1F3FB}'), ('\u{1F3FD}', '\u{1F3FF}')]),
        ],
    },
    Rule {
        lead: MAN,
        tail: &[
            One(SKIN_MEDIUM),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[
                ('\u{1F3FB}', '\u{1F3FB}'), ('\u{1F3FC}', '\u{1F3FC}'),
                ('\u{1F3FE}', '\u{1F3FE}'), ('\u{1F3FF}', '\u{1F3FF}'),
            ]),
        ],
    },
    Rule {
        lead: MAN,
        tail: &[
            One(SKIN_MEDIUM_DARK),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[('\u{1F3FB}', '\u{1F3FD}'), ('\u{1F3FF}', '\u{1F3FF}')]),
        ],
    },
    Rule {
        lead: MAN,
        tail: &[
            One(SKIN_DARK),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[('\u{1F3FB}', '\u{1F3FE}')]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_LIGHT),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[('\u{1F3FC}', '\u{1F3FF}')]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_LIGHT),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(WOMAN),
            One(&[('\u{1F3FC}', '\u{1F3FF}')]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_MEDIUM_LIGHT),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[('\u{1F3FB}', '\u{1F3FB}'), ('\u{1F3FD}', '\u{1F3FF}')]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_MEDIUM_LIGHT),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(WOMAN),
            One(&[('\u{1F3FB}', '\u{1F3FB}'), ('\u{1F3FD}', '\u{1F3FF}')]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_MEDIUM),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[
                ('\u{1F3FB}', '\u{1F3FB}'), ('\u{1F3FC}', '\u{1F3FC}'),
                ('\u{1F3FE}', '\u{1F3FE}'), ('\u{1F3FF}', '\u{1F3FF}'),
            ]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_MEDIUM),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(WOMAN),
            One(&[
                ('\u{1F3FB}', '\u{1F3FB}'), ('\u{1F3FC}', '\u{1F3FC}'),
                ('\u{1F3FE}', '\u{1F3FE}'), ('\u{1F3FF}', '\u{1F3FF}'),
            ]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_MEDIUM_DARK),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[('\u{1F3FB}', '\u{1F3FD}'), ('\u{1F3FF}', '\u{1F3FF}')]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_MEDIUM_DARK),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(WOMAN),
            One(&[('\u{1F3FB}', '\u{1F3FD}'), ('\u{1F3FF}', '\u{1F3FF}')]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_DARK),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(MAN),
            One(&[('\u{1F3FB}', '\u{1F3FE}')]),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(SKIN_DARK),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(WOMAN),
            One(&[('\u{1F3FB}', '\u{1F3FE}')]),
        ],
    },
    Rule {
        lead: PERSON,
        tail: &[One(SKIN_LIGHT), One(ZWJ), One(HANDSHAKE), One(ZWJ), One(PERSON), One(SKIN_TONE)],
    },
    Rule {
        lead: PERSON,
        tail: &[
            One(SKIN_MEDIUM_LIGHT),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(PERSON),
            One(SKIN_TONE),
        ],
    },
    Rule {
        lead: PERSON,
        tail: &[One(SKIN_MEDIUM), One(ZWJ), One(HANDSHAKE), One(ZWJ), One(PERSON), One(SKIN_TONE)],
    },
    Rule {
        lead: PERSON,
        tail: &[
            One(SKIN_MEDIUM_DARK),
            One(ZWJ),
            One(HANDSHAKE),
            One(ZWJ),
            One(PERSON),
            One(SKIN_TONE),
        ],
    },
    Rule {
        lead: PERSON,
        tail: &[One(SKIN_DARK), One(ZWJ), One(HANDSHAKE), One(ZWJ), One(PERSON), One(SKIN_TONE)],
    },
    Rule { lead: PERSON, tail: &[One(ZWJ), One(HANDSHAKE), One(ZWJ), One(PERSON)] },
    Rule {
        lead: ADULT,
        tail: &[Opt(SKIN_TONE), One(ZWJ), One(&[('\u{2695}', '\u{2695}')]), One(VS16)],
    },
    Rule {
        lead: ADULT,
        tail: &[Opt(SKIN_TONE), One(ZWJ), One(&[('\u{2696}', '\u{2696}')]), One(VS16)],
    },
    Rule {
        lead: ADULT,
        tail: &[Opt(SKIN_TONE), One(ZWJ), One(&[('\u{2708}', '\u{2708}')]), One(VS16)],
    },
    Rule {
        lead: ADULT,
        tail: &[
            Opt(SKIN_TONE),
            One(ZWJ),
            One(&[
                ('\u{1F33E}', '\u{1F33E}'), ('\u{1F373}', '\u{1F373}'),
                ('\u{1F393}', '\u{1F393}'), ('\u{1F3A4}', '\u{1F3A4}'),
                ('\u{1F3A8}', '\u{1F3A8}'), ('\u{1F3EB}', '\u{1F3EB}'),
                ('\u{1F3ED}', '\u{1F3ED}'), ('\u{1F4BB}', '\u{1F4BB}'),
                ('\u{1F4BC}', '\u{1F4BC}'), ('\u{1F527}', '\u{1F527}'),
                ('\u{1F52C}', '\u{1F52C}'), ('\u{1F680}', '\u{1F680}'),
                ('\u{1F692}', '\u{1F692}'), ('\u{1F9AF}', '\u{1F9B3}'),
                ('\u{1F9BC}', '\u{1F9BC}'), ('\u{1F9BD}', '\u{1F9BD}'),
            ]),
        ],
    },
    Rule {
        lead: &[
            ('\u{26F9}', '\u{26F9}'), ('\u{1F3CB}', '\u{1F3CB}'), ('\u{1F3CC}', '\u{1F3CC}'),
            ('\u{1F574}', '\u{1F574}'), ('\u{1F575}', '\u{1F575}'),
        ],
        tail: &[
            One(&[('\u{FE0F}', '\u{FE0F}'), ('\u{1F3FB}', '\u{1F3FF}')]),
            One(ZWJ),
            One(GENDER_SIGN),
            One(VS16),
        ],
    },
    Rule {
        lead: &[
            ('\u{1F3C3}', '\u{1F3C3}'), ('\u{1F3C4}', '\u{1F3C4}'), ('\u{1F3CA}', '\u{1F3CA}'),
            ('\u{1F46E}', '\u{1F46E}'), ('\u{1F471}', '\u{1F471}'), ('\u{1F473}', '\u{1F473}'),
            ('\u{1F477}', '\u{1F477}'), ('\u{1F481}', '\u{1F481}'), ('\u{1F482}', '\u{1F482}'),
            ('\u{1F486}', '\u{1F486}'), ('\u{1F487}', '\u{1F487}'), ('\u{1F645}', '\u{1F647}'),
            ('\u{1F64B}', '\u{1F64B}'), ('\u{1F64D}', '\u{1F64D}'), ('\u{1F64E}', '\u{1F64E}'),
            ('\u{1F6A3}', '\u{1F6A3}'), ('\u{1F6B4}', '\u{1F6B6}'), ('\u{1F926}', '\u{1F926}'),
            ('\u{1F935}', '\u{1F935}'), ('\u{1F937}', '\u{1F939}'), ('\u{1F93D}', '\u{1F93D}'),
            ('\u{1F93E}', '\u{1F93E}'), ('\u{1F9B8}', '\u{1F9B8}'), ('\u{1F9B9}', '\u{1F9B9}'),
            ('\u{1F9CD}', '\u{1F9CF}'), ('\u{1F9D6}', '\u{1F9DD}'),
        ],
        tail: &[Opt(SKIN_TONE), One(ZWJ), One(GENDER_SIGN), One(VS16)],
    },
    Rule {
        lead: MAN,
        tail: &[
            One(ZWJ),
            One(HEAVY_HEART),
            One(VS16),
            One(ZWJ),
            One(KISS_MARK),
            One(ZWJ),
            One(MAN),
        ],
    },
    Rule {
        lead: WOMAN,
        tail: &[
            One(ZWJ),
            One(HEAVY_HEART),
            One(VS16),
            One(ZWJ),
            One(KISS_MARK),
            One(ZWJ),
            One(MAN_OR_WOMAN),
        ],
    },
    Rule { lead: MAN, tail: &[One(ZWJ), One(MAN), One(ZWJ), One(BOY), One(ZWJ), One(BOY)] },
    Rule { lead: MAN, tail: &[One(ZWJ), One(MAN), One(ZWJ), One(GIRL), One(ZWJ), One(CHILD)] },
    Rule { lead: MAN, tail: &[One(ZWJ), One(WOMAN), One(ZWJ), One(BOY), One(ZWJ), One(BOY)] },
    Rule { lead: MAN, tail: &[One(ZWJ), One(WOMAN), One(ZWJ), One(GIRL), One(ZWJ), One(CHILD)] },
    Rule { lead: WOMAN, tail: &[One(ZWJ), One(WOMAN), One(ZWJ), One(BOY), One(ZWJ), One(BOY)] },
    Rule { lead: WOMAN, tail: &[One(ZWJ), One(WOMAN), One(ZWJ), One(GIRL), One(ZWJ), One(CHILD)] },
    Rule { lead: MAN, tail: &[One(ZWJ), One(HEAVY_HEART), One(VS16), One(ZWJ), One(MAN)] },
    Rule {
        lead: WOMAN,
        tail: &[One(ZWJ), One(HEAVY_HEART), One(VS16), One(ZWJ), One(MAN_OR_WOMAN)],
    },
    Rule {
        lead: WHITE_FLAG,
        tail: &[One(VS16), One(ZWJ), One(&[('\u{26A7}', '\u{26A7}')]), One(VS16)],
    },
    Rule { lead: MAN, tail: &[One(ZWJ), One(BOY), One(ZWJ), One(BOY)] },
    Rule { lead: MAN, tail: &[One(ZWJ), One(GIRL), One(ZWJ), One(CHILD)] },
    Rule { lead: MAN, tail: &[One(ZWJ), One(MAN), One(ZWJ), One(CHILD)] },
    Rule { lead: MAN, tail: &[One(ZWJ), One(WOMAN), One(ZWJ), One(CHILD)] },
    Rule { lead: WOMAN, tail: &[One(ZWJ), One(BOY), One(ZWJ), One(BOY)] },
    Rule { lead: WOMAN, tail: &[One(ZWJ), One(GIRL), One(ZWJ), One(CHILD)] },
    Rule { lead: WOMAN, tail: &[One(ZWJ), One(WOMAN), One(ZWJ), One(CHILD)] },
    Rule { lead: WHITE_FLAG, tail: &[One(VS16), One(ZWJ), One(&[('\u{1F308}', '\u{1F308}')])] },
    Rule { lead: BLACK_FLAG, tail: &[One(ZWJ), One(&[('\u{2620}', '\u{2620}')]), One(VS16)] },
    Rule { lead: &[('\u{1F46F}', '\u{1F46F}')], tail: &[One(ZWJ), One(FEMALE_SIGN), One(VS16)] },
    Rule { lead: &[('\u{1F46F}', '\u{1F46F}')], tail: &[One(ZWJ), One(MALE_SIGN), One(VS16)] },
    Rule { lead: &[('\u{1F93C}', '\u{1F93C}')], tail: &[One(ZWJ), One(FEMALE_SIGN), One(VS16)] },
    Rule { lead: &[('\u{1F93C}', '\u{1F93C}')], tail: &[One(ZWJ), One(MALE_SIGN), One(VS16)] },
    Rule { lead: &[('\u{1F9DE}', '\u{1F9DE}')], tail: &[One(ZWJ), One(FEMALE_SIGN), One(VS16)] },
    Rule { lead: &[('\u{1F9DE}', '\u{1F9DE}')], tail: &[One(ZWJ), One(MALE_SIGN), One(VS16)] },
    Rule { lead: &[('\u{1F9DF}', '\u{1F9DF}')], tail: &[One(ZWJ), One(FEMALE_SIGN), One(VS16)] },
    Rule { lead: &[('\u{1F9DF}', '\u{1F9DF}')], tail: &[One(ZWJ), One(MALE_SIGN), One(VS16)] },
    Rule {
        lead: &[('\u{1F415}', '\u{1F415}')],
        tail: &[One(ZWJ), One(&[('\u{1F9BA}', '\u{1F9BA}')])],
    },
    Rule {
        lead: &[('\u{1F441}', '\u{1F441}')],
        tail: &[One(ZWJ), One(&[('\u{1F5E8}', '\u{1F5E8}')])],
    },
    Rule { lead: MAN, tail: &[One(ZWJ), One(CHILD)] },
    Rule { lead: WOMAN, tail: &[One(ZWJ), One(CHILD)] },
];
