//! Flag sequences: subdivision tag flags and regional indicator pairs.
//!
//! Generated from the Unicode emoji data files. Regenerate instead of
//! editing by hand.

use super::sets::*;
use super::Atom::One;
use super::Rule;

pub(crate) static FLAG_SEQUENCES: &[Rule] = &[
    Rule {
        lead: BLACK_FLAG,
        tail: &[
            One(&[('\u{E0067}', '\u{E0067}')]),
            One(&[('\u{E0062}', '\u{E0062}')]),
            One(&[('\u{E0065}', '\u{E0065}')]),
            One(&[('\u{E006E}', '\u{E006E}')]),
            One(&[('\u{E0067}', '\u{E0067}')]),
            One(CANCEL_TAG),
        ],
    },
    Rule {
        lead: BLACK_FLAG,
        tail: &[
            One(&[('\u{E0067}', '\u{E0067}')]),
            One(&[('\u{E0062}', '\u{E0062}')]),
            One(&[('\u{E0073}', '\u{E0073}')]),
            One(&[('\u{E0063}', '\u{E0063}')]),
            One(&[('\u{E0074}', '\u{E0074}')]),
            One(CANCEL_TAG),
        ],
    },
    Rule {
        lead: BLACK_FLAG,
        tail: &[
            One(&[('\u{E0067}', '\u{E0067}')]),
            One(&[('\u{E0062}', '\u{E0062}')]),
            One(&[('\u{E0077}', '\u{E0077}')]),
            One(&[('\u{E006C}', '\u{E006C}')]),
            One(&[('\u{E0073}', '\u{E0073}')]),
            One(CANCEL_TAG),
        ],
    },
    Rule {
        lead: &[('\u{1F1E6}', '\u{1F1E6}')],
        tail: &[
            One(&[
                ('\u{1F1E8}', '\u{1F1EC}'), ('\u{1F1EE}', '\u{1F1EE}'),
                ('\u{1F1F1}', '\u{1F1F1}'), ('\u{1F1F2}', '\u{1F1F2}'),
                ('\u{1F1F4}', '\u{1F1F4}'), ('\u{1F1F6}', '\u{1F1FA}'),
                ('\u{1F1FC}', '\u{1F1FC}'), ('\u{1F1FD}', '\u{1F1FD}'),
                ('\u{1F1FF}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1E7}', '\u{1F1E7}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1E7}', '\u{1F1E7}'),
                ('\u{1F1E9}', '\u{1F1EF}'), ('\u{1F1F1}', '\u{1F1F4}'),
                ('\u{1F1F6}', '\u{1F1F9}'), ('\u{1F1FB}', '\u{1F1FB}'),
                ('\u{1F1FC}', '\u{1F1FC}'), ('\u{1F1FE}', '\u{1F1FE}'),
                ('\u{1F1FF}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1E8}', '\u{1F1E8}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1E8}', '\u{1F1E8}'),
                ('\u{1F1E9}', '\u{1F1E9}'), ('\u{1F1EB}', '\u{1F1EE}'),
                ('\u{1F1F0}', '\u{1F1F5}'), ('\u{1F1F7}', '\u{1F1F7}'),
                ('\u{1F1FA}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1E9}', '\u{1F1E9}')],
        tail: &[
            One(&[
                ('\u{1F1EA}', '\u{1F1EA}'), ('\u{1F1EC}', '\u{1F1EC}'),
                ('\u{1F1EF}', '\u{1F1EF}'), ('\u{1F1F0}', '\u{1F1F0}'),
                ('\u{1F1F2}', '\u{1F1F2}'), ('\u{1F1F4}', '\u{1F1F4}'),
                ('\u{1F1FF}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1EA}', '\u{1F1EA}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1E8}', '\u{1F1E8}'),
                ('\u{1F1EA}', '\u{1F1EA}'), ('\u{1F1EC}', '\u{1F1EC}'),
                ('\u{1F1ED}', '\u{1F1ED}'), ('\u{1F1F7}', '\u{1F1FA}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1EB}', '\u{1F1EB}')],
        tail: &[
            One(&[
                ('\u{1F1EE}', '\u{1F1F0}'), ('\u{1F1F2}', '\u{1F1F2}'),
                ('\u{1F1F4}', '\u{1F1F4}'), ('\u{1F1F7}', '\u{1F1F7}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1EC}', '\u{1F1EC}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1E7}', '\u{1F1E7}'),
                ('\u{1F1E9}', '\u{1F1EE}'), ('\u{1F1F1}', '\u{1F1F3}'),
                ('\u{1F1F5}', '\u{1F1FA}'), ('\u{1F1FC}', '\u{1F1FC}'),
                ('\u{1F1FE}', '\u{1F1FE}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1ED}', '\u{1F1ED}')],
        tail: &[
            One(&[
                ('\u{1F1F0}', '\u{1F1F0}'), ('\u{1F1F2}', '\u{1F1F2}'),
                ('\u{1F1F3}', '\u{1F1F3}'), ('\u{1F1F7}', '\u{1F1F7}'),
                ('\u{1F1F9}', '\u{1F1F9}'), ('\u{1F1FA}', '\u{1F1FA}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1EE}', '\u{1F1EE}')],
        tail: &[
            One(&[
                ('\u{1F1E8}', '\u{1F1EA}'), ('\u{1F1F1}', '\u{1F1F4}'),
                ('\u{1F1F6}', '\u{1F1F9}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1EF}', '\u{1F1EF}')],
        tail: &[
            One(&[
                ('\u{1F1EA}', '\u{1F1EA}'), ('\u{1F1F2}', '\u{1F1F2}'),
                ('\u{1F1F4}', '\u{1F1F4}'), ('\u{1F1F5}', '\u{1F1F5}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1F0}', '\u{1F1F0}')],
        tail: &[
            One(&[
                ('\u{1F1EA}', '\u{1F1EA}'), ('\u{1F1EC}', '\u{1F1EE}'),
                ('\u{1F1F2}', '\u{1F1F2}'), ('\u{1F1F3}', '\u{1F1F3}'),
                ('\u{1F1F5}', '\u{1F1F5}'), ('\u{1F1F7}', '\u{1F1F7}'),
                ('\u{1F1FC}', '\u{1F1FC}'), ('\u{1F1FE}', '\u{1F1FE}'),
                ('\u{1F1FF}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1F1}', '\u{1F1F1}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E8}'), ('\u{1F1EE}', '\u{1F1EE}'),
                ('\u{1F1F0}', '\u{1F1F0}'), ('\u{1F1F7}', '\u{1F1FB}'),
                ('\u{1F1FE}', '\u{1F1FE}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1F2}', '\u{1F1F2}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1E8}', '\u{1F1ED}'),
                ('\u{1F1F0}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1F3}', '\u{1F1F3}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1E8}', '\u{1F1E8}'),
                ('\u{1F1EA}', '\u{1F1EC}'), ('\u{1F1EE}', '\u{1F1EE}'),
                ('\u{1F1F1}', '\u{1F1F1}'), ('\u{1F1F4}', '\u{1F1F4}'),
                ('\u{1F1F5}', '\u{1F1F5}'), ('\u{1F1F7}', '\u{1F1F7}'),
                ('\u{1F1FA}', '\u{1F1FA}'), ('\u{1F1FF}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule { lead: &[('\u{1F1F4}', '\u{1F1F4}')], tail: &[One(&[('\u{1F1F2}', '\u{1F1F2}')])] },
    Rule {
        lead: &[('\u{1F1F5}', '\u{1F1F5}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1EA}', '\u{1F1ED}'),
                ('\u{1F1F0}', '\u{1F1F3}'), ('\u{1F1F7}', '\u{1F1F9}'),
                ('\u{1F1FC}', '\u{1F1FC}'), ('\u{1F1FE}', '\u{1F1FE}'),
            ]),
        ],
    },
    Rule { lead: &[('\u{1F1F6}', '\u{1F1F6}')], tail: &[One(&[('\u{1F1E6}', '\u{1F1E6}')])] },
    Rule {
        lead: &[('\u{1F1F7}', '\u{1F1F7}')],
        tail: &[
            One(&[
                ('\u{1F1EA}', '\u{1F1EA}'), ('\u{1F1F4}', '\u{1F1F4}'),
                ('\u{1F1F8}', '\u{1F1F8}'), ('\u{1F1FA}', '\u{1F1FA}'),
                ('\u{1F1FC}', '\u{1F1FC}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1F8}', '\u{1F1F8}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1EA}'), ('\u{1F1EC}', '\u{1F1F4}'),
                ('\u{1F1F7}', '\u{1F1F9}'), ('\u{1F1FB}', '\u{1F1FB}'),
                ('\u{1F1FD}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1F9}', '\u{1F1F9}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1E8}', '\u{1F1E8}'),
                ('\u{1F1E9}', '\u{1F1E9}'), ('\u{1F1EB}', '\u{1F1ED}'),
                ('\u{1F1EF}', '\u{1F1F4}'), ('\u{1F1F7}', '\u{1F1F7}'),
                ('\u{1F1F9}', '\u{1F1F9}'), ('\u{1F1FB}', '\u{1F1FB}'),
                ('\u{1F1FC}', '\u{1F1FC}'), ('\u{1F1FF}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1FA}', '\u{1F1FA}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1EC}', '\u{1F1EC}'),
                ('\u{1F1F2}', '\u{1F1F2}'), ('\u{1F1F3}', '\u{1F1F3}'),
                ('\u{1F1F8}', '\u{1F1F8}'), ('\u{1F1FE}', '\u{1F1FE}'),
                ('\u{1F1FF}', '\u{1F1FF}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1FB}', '\u{1F1FB}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1E8}', '\u{1F1E8}'),
                ('\u{1F1EA}', '\u{1F1EA}'), ('\u{1F1EC}', '\u{1F1EC}'),
                ('\u{1F1EE}', '\u{1F1EE}'), ('\u{1F1F3}', '\u{1F1F3}'),
                ('\u{1F1FA}', '\u{1F1FA}'),
            ]),
        ],
    },
    Rule {
        lead: &[('\u{1F1FC}', '\u{1F1FC}')],
        tail: &[One(&[('\u{1F1EB}', '\u{1F1EB}'), ('\u{1F1F8}', '\u{1F1F8}')])],
    },
    Rule { lead: &[('\u{1F1FD}', '\u{1F1FD}')], tail: &[One(&[('\u{1F1F0}', '\u{1F1F0}')])] },
    Rule {
        lead: &[('\u{1F1FE}', '\u{1F1FE}')],
        tail: &[One(&[('\u{1F1EA}', '\u{1F1EA}'), ('\u{1F1F9}', '\u{1F1F9}')])],
    },
    Rule {
        lead: &[('\u{1F1FF}', '\u{1F1FF}')],
        tail: &[
            One(&[
                ('\u{1F1E6}', '\u{1F1E6}'), ('\u{1F1F2}', '\u{1F1F2}'),
                ('\u{1F1FC}', '\u{1F1FC}'),
            ]),
        ],
    },
];
