//! 3-byte tier (U+0800 ..= U+FFFF): Georgian + Mtavruli, Cherokee +
//! Supplement, Greek Extended, circled Latin, Roman numerals, Glagolitic,
//! Fullwidth Latin, Latin Extended Additional, Coptic, Cyrillic
//! Extended-B, Latin Extended-D, ligature presentation forms.

use super::{decode_row, parity_fold};
use crate::rune::Folded;
use phf::phf_map;

static IRREGULAR: phf::Map<u32, (u32, u32, u32, u8)> = phf_map! {
    // Greek Extended: breathing-mark-only pairs that don't form a clean
    // contiguous range (the members in between are unassigned).
    0x1F59u32 => (0x1F51, 0, 0, 1),
    0x1F5Bu32 => (0x1F53, 0, 0, 1),
    0x1F5Du32 => (0x1F55, 0, 0, 1),
    0x1F5Fu32 => (0x1F57, 0, 0, 1),
    // U+1FBE GREEK PROSGEGRAMMENI full-folds to iota — a genuine
    // one-to-one fold per Unicode 17 CaseFolding.txt, not the copy-paste
    // artifact the source comments imply (see SPEC_FULL.md §9).
    0x1FBEu32 => (0x03B9, 0, 0, 1),
    // Iota-subscript capital forms (1F88..8F, 1F98..9F, 1FA8..AF) are full
    // 8-member delta -8 ranges, handled below alongside the other
    // Greek Extended minus-8 blocks. These three are each the single
    // surviving capital form in their sub-group, not part of a -8 range.
    0x1FBCu32 => (0x1FB3, 0, 0, 1),
    0x1FCCu32 => (0x1FC3, 0, 0, 1),
    0x1FFCu32 => (0x1FF3, 0, 0, 1),

    // Latin ligature presentation forms expand to their base letters.
    0xFB00u32 => (0x0066, 0x0066, 0, 2), // ﬀ -> ff
    0xFB01u32 => (0x0066, 0x0069, 0, 2), // ﬁ -> fi
    0xFB02u32 => (0x0066, 0x006C, 0, 2), // ﬂ -> fl
    0xFB03u32 => (0x0066, 0x0066, 0x0069, 3), // ﬃ -> ffi
    0xFB04u32 => (0x0066, 0x0066, 0x006C, 3), // ﬄ -> ffl
    0xFB05u32 => (0x0073, 0x0074, 0, 2), // ﬅ long-s-t -> st
    0xFB06u32 => (0x0073, 0x0074, 0, 2), // ﬆ -> st

    // Armenian ligature presentation forms.
    0xFB13u32 => (0x0574, 0x0576, 0, 2), // ﬓ men-now -> մն
    0xFB14u32 => (0x0574, 0x0565, 0, 2), // ﬔ men-ech -> մե
    0xFB15u32 => (0x0574, 0x056B, 0, 2), // ﬕ men-ini -> մի
    0xFB16u32 => (0x057E, 0x0576, 0, 2), // ﬖ vew-now -> վն
    0xFB17u32 => (0x0574, 0x056D, 0, 2), // ﬗ men-xeh -> մխ

    // Capital sharp S full-folds the same as lowercase ß.
    0x1E9Eu32 => (0x0073, 0x0073, 0, 2), // ẞ -> ss

    // Letterlike symbols that fold into an ordinary cased letter one or
    // two byte-width tiers narrower than themselves — see
    // `rune::cross_width_aliases`.
    0x212Au32 => (0x006B, 0, 0, 1), // KELVIN SIGN -> k
    0x212Bu32 => (0x00E5, 0, 0, 1), // ANGSTROM SIGN -> å
    0x2126u32 => (0x03C9, 0, 0, 1), // OHM SIGN -> ω
};

const fn offset_range(cp: u32, start: u32, end: u32, delta: i32) -> Option<char> {
    if cp < start || cp > end {
        return None;
    }
    char::from_u32((cp as i32 + delta) as u32)
}

#[inline]
pub(crate) fn fold(c: char) -> Folded {
    let cp = c as u32;
    debug_assert!((0x800..=0xFFFF).contains(&cp));

    if let Some(&row) = IRREGULAR.get(&cp) {
        return decode_row(row);
    }

    // Georgian Asomtavruli -> Mkhedruli.
    if let Some(folded) = offset_range(cp, 0x10A0, 0x10C5, 0x1C60) {
        return Folded::one(folded);
    }
    // Georgian Mtavruli -> Mkhedruli.
    if let Some(folded) = offset_range(cp, 0x1C90, 0x1CBF, -0xBC0) {
        return Folded::one(folded);
    }
    // Cherokee -> Cherokee Supplement.
    if let Some(folded) = offset_range(cp, 0x13A0, 0x13F5, 0x97D0) {
        return Folded::one(folded);
    }
    // Circled Latin capitals.
    if let Some(folded) = offset_range(cp, 0x24B6, 0x24CF, 0x1A) {
        return Folded::one(folded);
    }
    // Roman numerals.
    if let Some(folded) = offset_range(cp, 0x2160, 0x216B, 0x10) {
        return Folded::one(folded);
    }
    // Glagolitic.
    if let Some(folded) = offset_range(cp, 0x2C00, 0x2C2F, 0x30) {
        return Folded::one(folded);
    }
    // Fullwidth Latin.
    if let Some(folded) = offset_range(cp, 0xFF21, 0xFF3A, 0x20) {
        return Folded::one(folded);
    }
    // Greek Extended, delta -8 contiguous sub-ranges.
    for &(start, end) in GREEK_EXTENDED_MINUS_8 {
        if let Some(folded) = offset_range(cp, start, end, -8) {
            return Folded::one(folded);
        }
    }
    // Greek Extended, the Ὲ..Ή outlier range (delta -86).
    if let Some(folded) = offset_range(cp, 0x1FC8, 0x1FCB, -86) {
        return Folded::one(folded);
    }

    // Tier (ii): parity-based folds.
    for &(start, end) in PARITY_RANGES {
        if let Some(folded) = parity_fold(cp, start, end, PARITY_EXCEPTIONS) {
            return Folded::one(folded);
        }
    }

    Folded::one(c)
}

const GREEK_EXTENDED_MINUS_8: &[(u32, u32)] = &[
    (0x1F08, 0x1F0F),
    (0x1F18, 0x1F1D),
    (0x1F28, 0x1F2F),
    (0x1F38, 0x1F3F),
    (0x1F48, 0x1F4D),
    (0x1F68, 0x1F6F),
    (0x1F88, 0x1F8F), // iota-subscript capitals, ᾈ-group
    (0x1F98, 0x1F9F), // iota-subscript capitals, ᾘ-group
    (0x1FA8, 0x1FAF), // iota-subscript capitals, ᾨ-group
];

/// Latin Extended Additional, Coptic, Cyrillic Extended-B, Latin
/// Extended-D: parity-shaped blocks where even-offset codepoints are
/// uppercase and fold `+1`.
const PARITY_RANGES: &[(u32, u32)] = &[
    (0x1E00, 0x1E95), // Latin Extended Additional (part; 1E96.. are combining-letter forms, not cased pairs)
    (0x1EA0, 0x1EFF),
    (0x2C80, 0x2CE3), // Coptic
    (0xA640, 0xA66D), // Cyrillic Extended-B (part)
    (0xA680, 0xA69B),
    (0xA722, 0xA72F), // Latin Extended-D (part)
    (0xA732, 0xA76F),
    (0xA779, 0xA77C),
    (0xA77E, 0xA787),
    (0xA790, 0xA793),
    (0xA796, 0xA7A9),
];

const PARITY_EXCEPTIONS: &[u32] = &[0x1E9E]; // capital sharp S, full-folds to "ss" (irregular, see two-rune IRREGULAR in the 2-byte tier — but 1E9E itself is 3-byte)
