//! Single codepoint emoji, with text-presentation guards where needed.
//!
//! Generated from the Unicode emoji data files. Regenerate instead of
//! editing by hand.

use super::sets::*;
use super::Atom::{One, Presentation};
use super::Rule;

pub(crate) static PRESENTATION_SEQUENCES: &[Rule] = &[
    Rule { lead: &[('\u{1F46B}', '\u{1F46D}')], tail: &[] },
    Rule {
        lead: &[
            ('\u{A9}', '\u{A9}'), ('\u{AE}', '\u{AE}'), ('\u{2122}', '\u{2122}'),
            ('\u{265F}', '\u{265F}'),
        ],
        tail: &[One(VS16)],
    },
    Rule {
        lead: &[
            ('\u{203C}', '\u{203C}'), ('\u{2049}', '\u{2049}'), ('\u{2139}', '\u{2139}'),
            ('\u{2194}', '\u{2199}'), ('\u{21A9}', '\u{21A9}'), ('\u{21AA}', '\u{21AA}'),
            ('\u{231A}', '\u{231A}'), ('\u{231B}', '\u{231B}'), ('\u{2328}', '\u{2328}'),
            ('\u{23CF}', '\u{23CF}'), ('\u{23ED}', '\u{23EF}'), ('\u{23F1}', '\u{23F1}'),
            ('\u{23F2}', '\u{23F2}'), ('\u{23F8}', '\u{23FA}'), ('\u{24C2}', '\u{24C2}'),
            // Case fold of U+24C2, matched like it.
            ('\u{24DC}', '\u{24DC}'),
            ('\u{25AA}', '\u{25AA}'), ('\u{25AB}', '\u{25AB}'), ('\u{25B6}', '\u{25B6}'),
            ('\u{25C0}', '\u{25C0}'), ('\u{25FB}', '\u{25FE}'), ('\u{2600}', '\u{2604}'),
            ('\u{260E}', '\u{260E}'), ('\u{2611}', '\u{2611}'), ('\u{2614}', '\u{2614}'),
            ('\u{2615}', '\u{2615}'), ('\u{2618}', '\u{2618}'), ('\u{2620}', '\u{2620}'),
            ('\u{2622}', '\u{2622}'), ('\u{2623}', '\u{2623}'), ('\u{2626}', '\u{2626}'),
            ('\u{262A}', '\u{262A}'), ('\u{262E}', '\u{262E}'), ('\u{262F}', '\u{262F}'),
            ('\u{2638}', '\u{263A}'), ('\u{2640}', '\u{2640}'), ('\u{2642}', '\u{2642}'),
            ('\u{2648}', '\u{2653}'), ('\u{2660}', '\u{2660}'), ('\u{2663}', '\u{2663}'),
            ('\u{2665}', '\u{2665}'), ('\u{2666}', '\u{2666}'), ('\u{2668}', '\u{2668}'),
            ('\u{267B}', '\u{267B}'), ('\u{267F}', '\u{267F}'), ('\u{2692}', '\u{2697}'),
            ('\u{2699}', '\u{2699}'), ('\u{269B}', '\u{269B}'), ('\u{269C}', '\u{269C}'),
            ('\u{26A0}', '\u{26A0}'), ('\u{26A1}', '\u{26A1}'), ('\u{26A7}', '\u{26A7}'),
            ('\u{26AA}', '\u{26AA}'), ('\u{26AB}', '\u{26AB}'), ('\u{26B0}', '\u{26B0}'),
            ('\u{26B1}', '\u{26B1}'), ('\u{26BD}', '\u{26BD}'), ('\u{26BE}', '\u{26BE}'),
            ('\u{26C4}', '\u{26C4}'), ('\u{26C5}', '\u{26C5}'), ('\u{26C8}', '\u{26C8}'),
            ('\u{26CF}', '\u{26CF}'), ('\u{26D1}', '\u{26D1}'), ('\u{26D3}', '\u{26D3}'),
            ('\u{26D4}', '\u{26D4}'), ('\u{26E9}', '\u{26E9}'), ('\u{26EA}', '\u{26EA}'),
            ('\u{26F0}', '\u{26F5}'), ('\u{26F8}', '\u{26F8}'), ('\u{26FA}', '\u{26FA}'),
            ('\u{26FD}', '\u{26FD}'), ('\u{2702}', '\u{2702}'), ('\u{2708}', '\u{2708}'),
            ('\u{2709}', '\u{2709}'), ('\u{270F}', '\u{270F}'), ('\u{2712}', '\u{2712}'),
            ('\u{2714}', '\u{2714}'), ('\u{2716}', '\u{2716}'), ('\u{271D}', '\u{271D}'),
            ('\u{2721}', '\u{2721}'), ('\u{2733}', '\u{2733}'), ('\u{2734}', '\u{2734}'),
            ('\u{2744}', '\u{2744}'), ('\u{2747}', '\u{2747}'), ('\u{2757}', '\u{2757}'),
            ('\u{2763}', '\u{2763}'), ('\u{2764}', '\u{2764}'), ('\u{27A1}', '\u{27A1}'),
            ('\u{2934}', '\u{2934}'), ('\u{2935}', '\u{2935}'), ('\u{2B05}', '\u{2B07}'),
            ('\u{2B1B}', '\u{2B1B}'), ('\u{2B1C}', '\u{2B1C}'), ('\u{2B50}', '\u{2B50}'),
            ('\u{2B55}', '\u{2B55}'), ('\u{3030}', '\u{3030}'), ('\u{303D}', '\u{303D}'),
            ('\u{3297}', '\u{3297}'), ('\u{3299}', '\u{3299}'), ('\u{1F004}', '\u{1F004}'),
            ('\u{1F170}', '\u{1F170}'), ('\u{1F171}', '\u{1F171}'), ('\u{1F17E}', '\u{1F17E}'),
            ('\u{1F17F}', '\u{1F17F}'), ('\u{1F202}', '\u{1F202}'), ('\u{1F21A}', '\u{1F21A}'),
            ('\u{1F22F}', '\u{1F22F}'), ('\u{1F237}', '\u{1F237}'), ('\u{1F321}', '\u{1F321}'),
            ('\u{1F324}', '\u{1F32C}'), ('\u{1F336}', '\u{1F336}'), ('\u{1F37D}', '\u{1F37D}'),
            ('\u{1F396}', '\u{1F396}'), ('\u{1F397}', '\u{1F397}'), ('\u{1F399}', '\u{1F39B}'),
            ('\u{1F39E}', '\u{1F39E}'), ('\u{1F39F}', '\u{1F39F}'), ('\u{1F3CD}', '\u{1F3CD}'),
            ('\u{1F3CE}', '\u{1F3CE}'), ('\u{1F3D4}', '\u{1F3DF}'), ('\u{1F3F3}', '\u{1F3F3}'),
            ('\u{1F3F5}', '\u{1F3F5}'), ('\u{1F3F7}', '\u{1F3F7}'), ('\u{1F43F}', '\u{1F43F}'),
            ('\u{1F441}', '\u{1F441}'), ('\u{1F4FD}', '\u{1F4FD}'), ('\u{1F549}', '\u{1F549}'),
            ('\u{1F54A}', '\u{1F54A}'), ('\u{1F56F}', '\u{1F56F}'), ('\u{1F570}', '\u{1F570}'),
            ('\u{1F573}', '\u{1F573}'), ('\u{1F576}', '\u{1F579}'), ('\u{1F587}', '\u{1F587}'),
            ('\u{1F58A}', '\u{1F58D}'), ('\u{1F5A5}', '\u{1F5A5}'), ('\u{1F5A8}', '\u{1F5A8}'),
            ('\u{1F5B1}', '\u{1F5B1}'), ('\u{1F5B2}', '\u{1F5B2}'), ('\u{1F5BC}', '\u{1F5BC}'),
            ('\u{1F5C2}', '\u{1F5C4}'), ('\u{1F5D1}', '\u{1F5D3}'), ('\u{1F5DC}', '\u{1F5DE}'),
            ('\u{1F5E1}', '\u{1F5E1}'), ('\u{1F5E3}', '\u{1F5E3}'), ('\u{1F5E8}', '\u{1F5E8}'),
            ('\u{1F5EF}', '\u{1F5EF}'), ('\u{1F5F3}', '\u{1F5F3}'), ('\u{1F5FA}', '\u{1F5FA}'),
            ('\u{1F6CB}', '\u{1F6CB}'), ('\u{1F6CD}', '\u{1F6CF}'), ('\u{1F6E0}', '\u{1F6E5}'),
            ('\u{1F6E9}', '\u{1F6E9}'), ('\u{1F6F0}', '\u{1F6F0}'), ('\u{1F6F3}', '\u{1F6F3}'),
        ],
        tail: &[Presentation],
    },
    Rule {
        lead: &[
            ('\u{23E9}', '\u{23EC}'), ('\u{23F0}', '\u{23F0}'), ('\u{23F3}', '\u{23F3}'),
            ('\u{267E}', '\u{267E}'), ('\u{26CE}', '\u{26CE}'), ('\u{2705}', '\u{2705}'),
            ('\u{2728}', '\u{2728}'), ('\u{274C}', '\u{274C}'), ('\u{274E}', '\u{274E}'),
            ('\u{2753}', '\u{2755}'), ('\u{2795}', '\u{2797}'), ('\u{27B0}', '\u{27B0}'),
            ('\u{27BF}', '\u{27BF}'), ('\u{E50A}', '\u{E50A}'), ('\u{1F0CF}', '\u{1F0CF}'),
            ('\u{1F18E}', '\u{1F18E}'), ('\u{1F191}', '\u{1F19A}'), ('\u{1F1E6}', '\u{1F1FF}'),
            ('\u{1F201}', '\u{1F201}'), ('\u{1F232}', '\u{1F236}'), ('\u{1F238}', '\u{1F23A}'),
            ('\u{1F250}', '\u{1F250}'), ('\u{1F251}', '\u{1F251}'), ('\u{1F300}', '\u{1F320}'),
            ('\u{1F32D}', '\u{1F335}'), ('\u{1F337}', '\u{1F37C}'), ('\u{1F37E}', '\u{1F384}'),
            ('\u{1F386}', '\u{1F393}'), ('\u{1F3A0}', '\u{1F3C1}'), ('\u{1F3C5}', '\u{1F3C5}'),
            ('\u{1F3C6}', '\u{1F3C6}'), ('\u{1F3C8}', '\u{1F3C8}'), ('\u{1F3C9}', '\u{1F3C9}'),
            ('\u{1F3CF}', '\u{1F3D3}'), ('\u{1F3E0}', '\u{1F3F0}'), ('\u{1F3F4}', '\u{1F3F4}'),
            ('\u{1F3F8}', '\u{1F43E}'), ('\u{1F440}', '\u{1F440}'), ('\u{1F444}', '\u{1F444}'),
            ('\u{1F445}', '\u{1F445}'), ('\u{1F451}', '\u{1F465}'), ('\u{1F46A}', '\u{1F46A}'),
            ('\u{1F46F}', '\u{1F46F}'), ('\u{1F479}', '\u{1F47B}'), ('\u{1F47D}', '\u{1F480}'),
            ('\u{1F484}', '\u{1F484}'), ('\u{1F488}', '\u{1F4A9}'), ('\u{1F4AB}', '\u{1F4FC}'),
            ('\u{1F4FF}', '\u{1F53D}'), ('\u{1F54B}', '\u{1F54E}'), ('\u{1F550}', '\u{1F567}'),
            ('\u{1F5A4}', '\u{1F5A4}'), ('\u{1F5FB}', '\u{1F644}'), ('\u{1F648}', '\u{1F64A}'),
            ('\u{1F680}', '\u{1F6A2}'), ('\u{1F6A4}', '\u{1F6B3}'), ('\u{1F6B7}', '\u{1F6BF}'),
            ('\u{1F6C1}', '\u{1F6C5}'), ('\u{1F6D0}', '\u{1F6D2}'), ('\u{1F6D5}', '\u{1F6D5}'),
            ('\u{1F6EB}', '\u{1F6EB}'), ('\u{1F6EC}', '\u{1F6EC}'), ('\u{1F6F4}', '\u{1F6FA}'),
            ('\u{1F7E0}', '\u{1F7EB}'), ('\u{1F90D}', '\u{1F90D}'), ('\u{1F90E}', '\u{1F90E}'),
            ('\u{1F910}', '\u{1F917}'), ('\u{1F91D}', '\u{1F91D}'), ('\u{1F920}', '\u{1F925}'),
            ('\u{1F927}', '\u{1F92F}'), ('\u{1F93A}', '\u{1F93A}'), ('\u{1F93C}', '\u{1F93C}'),
            ('\u{1F93F}', '\u{1F945}'), ('\u{1F947}', '\u{1F971}'), ('\u{1F973}', '\u{1F976}'),
            ('\u{1F97A}', '\u{1F9A2}'), ('\u{1F9A5}', '\u{1F9AA}'), ('\u{1F9AE}', '\u{1F9B4}'),
            ('\u{1F9B7}', '\u{1F9B7}'), ('\u{1F9BA}', '\u{1F9BA}'), ('\u{1F9BC}', '\u{1F9CA}'),
            ('\u{1F9D0}', '\u{1F9D0}'), ('\u{1F9DE}', '\u{1F9FF}'), ('\u{1FA70}', '\u{1FA73}'),
            ('\u{1FA78}', '\u{1FA7A}'), ('\u{1FA80}', '\u{1FA82}'), ('\u{1FA90}', '\u{1FA95}'),
        ],
        tail: &[],
    },
];
