//! 2-byte tier (U+0080 ..= U+07FF): Latin-1 Supplement, Latin Extended-A/B,
//! IPA Extensions, Greek/Coptic, Cyrillic + Cyrillic Supplement, Armenian.

use super::{decode_row, parity_fold};
use crate::rune::Folded;
use phf::phf_map;

// ── Tier (iii): exhaustive irregular one-to-one and one-to-many table ──
//
// Keyed by source codepoint; value is `(rune0, rune1, rune2, populated_len)`,
// with unused trailing slots set to 0.
static IRREGULAR: phf::Map<u32, (u32, u32, u32, u8)> = phf_map! {
    // Latin-1 Supplement
    0x00DFu32 => (0x0073, 0x0073, 0, 2), // ß -> ss
    0x00B5u32 => (0x03BC, 0, 0, 1),       // µ MICRO SIGN -> μ (cross-block, stays 2-byte both sides)

    // Latin Extended-A irregulars / expansions
    0x0130u32 => (0x0069, 0x0307, 0, 2), // İ -> i + COMBINING DOT ABOVE
    0x0131u32 => (0x0131, 0, 0, 1),       // ı DOTLESS I has no uppercase pair; self
    0x0178u32 => (0x00FF, 0, 0, 1),       // Ÿ -> ÿ (delta -0x79, not parity-shaped)
    0x0149u32 => (0x02BC, 0x006E, 0, 2), // ŉ -> ʼ + n

    // Latin Extended-B digraphs (three-letter-case families collapse to one)
    0x01C4u32 => (0x01C6, 0, 0, 1), // DŽ -> dž
    0x01C5u32 => (0x01C6, 0, 0, 1), // Dž -> dž
    0x01C7u32 => (0x01C9, 0, 0, 1), // LJ -> lj
    0x01C8u32 => (0x01C9, 0, 0, 1), // Lj -> lj
    0x01CAu32 => (0x01CCu32, 0, 0, 1), // NJ -> nj
    0x01CBu32 => (0x01CC, 0, 0, 1), // Nj -> nj
    0x01F1u32 => (0x01F3, 0, 0, 1), // DZ -> dz
    0x01F2u32 => (0x01F3, 0, 0, 1), // Dz -> dz
    0x01F0u32 => (0x006A, 0x030C, 0, 2), // ǰ -> j + COMBINING CARON

    // Greek/Coptic irregulars
    0x03C2u32 => (0x03C3, 0, 0, 1), // final sigma ς -> σ
    0x03F9u32 => (0x03F2, 0, 0, 1), // Ϲ LUNATE SIGMA SYMBOL -> ϲ
    0x0345u32 => (0x03B9, 0, 0, 1), // COMBINING GREEK YPOGEGRAMMENI -> ι
    0x0386u32 => (0x03AC, 0, 0, 1), // Ά -> ά (tonos, not in the plain +0x20 range)
    0x0388u32 => (0x03AD, 0, 0, 1), // Έ -> έ
    0x0389u32 => (0x03AE, 0, 0, 1), // Ή -> ή
    0x038Au32 => (0x03AF, 0, 0, 1), // Ί -> ί
    0x038Cu32 => (0x03CC, 0, 0, 1), // Ό -> ό
    0x038Eu32 => (0x03CD, 0, 0, 1), // Ύ -> ύ
    0x038Fu32 => (0x03CE, 0, 0, 1), // Ώ -> ώ

    // Cyrillic irregulars outside the plain offset ranges
    0x04C0u32 => (0x04CF, 0, 0, 1), // Ӏ PALOCHKA -> ӏ

    // Armenian ligature expansion
    0x0587u32 => (0x0565, 0x0582, 0, 2), // և -> ե + ւ

    // Greek vowel + dialytika + tonos: full fold decomposes to base vowel
    // plus the two combining marks (not a simple case pair).
    0x0390u32 => (0x03B9, 0x0308, 0x0301, 3), // ΐ -> ι + COMBINING DIAERESIS + COMBINING ACUTE ACCENT
    0x03B0u32 => (0x03C5, 0x0308, 0x0301, 3), // ΰ -> υ + COMBINING DIAERESIS + COMBINING ACUTE ACCENT
};

// ── Tier (i): single-range contiguous offset folds ──
const fn offset_range(cp: u32, start: u32, end: u32, delta: i32) -> Option<char> {
    if cp < start || cp > end {
        return None;
    }
    char::from_u32((cp as i32 + delta) as u32)
}

#[inline]
pub(crate) fn fold(c: char) -> Folded {
    let cp = c as u32;
    debug_assert!((0x80..=0x7FF).contains(&cp));

    if let Some(&row) = IRREGULAR.get(&cp) {
        return decode_row(row);
    }

    // Latin-1 Supplement uppercase (skip U+00D7 MULTIPLICATION SIGN, which
    // is not a letter and falls inside the naive range).
    if cp != 0x00D7 {
        if let Some(folded) = offset_range(cp, 0x00C0, 0x00DE, 0x20) {
            return Folded::one(folded);
        }
    }

    // Cyrillic basic block.
    if let Some(folded) = offset_range(cp, 0x0410, 0x042F, 0x20) {
        return Folded::one(folded);
    }
    if let Some(folded) = offset_range(cp, 0x0400, 0x040F, 0x50) {
        return Folded::one(folded);
    }

    // Armenian basic block.
    if let Some(folded) = offset_range(cp, 0x0531, 0x0556, 0x30) {
        return Folded::one(folded);
    }

    // Greek basic block (Α..Ρ, Σ..Ϋ — U+03A2 is unassigned and never reached).
    if let Some(folded) = offset_range(cp, 0x0391, 0x03A1, 0x20) {
        return Folded::one(folded);
    }
    if let Some(folded) = offset_range(cp, 0x03A3, 0x03AB, 0x20) {
        return Folded::one(folded);
    }

    // Tier (ii): parity-based folds — every second codepoint is the
    // uppercase half of a pair and folds `+1`.
    for &(start, end) in PARITY_RANGES {
        if let Some(folded) = parity_fold(cp, start, end, PARITY_EXCEPTIONS) {
            return Folded::one(folded);
        }
    }

    Folded::one(c)
}

/// Latin Extended-A, most of Latin Extended-B, and the Cyrillic
/// Supplement/Extended blocks are parity-shaped: even offset from the
/// range start is uppercase and folds to `self + 1`.
const PARITY_RANGES: &[(u32, u32)] = &[
    (0x0100, 0x012F), // Latin Extended-A (part)
    (0x0132, 0x0137),
    (0x0139, 0x0148),
    (0x014A, 0x0177),
    (0x0179, 0x017E),
    (0x0182, 0x0185),
    (0x0187, 0x0188),
    (0x018B, 0x018C),
    (0x0191, 0x0192),
    (0x0198, 0x0199),
    (0x01A0, 0x01A5),
    (0x01A7, 0x01A8),
    (0x01AC, 0x01AD),
    (0x01AF, 0x01B0),
    (0x01B3, 0x01B6),
    (0x01B8, 0x01B9),
    (0x01BC, 0x01BD),
    (0x01CD, 0x01DC),
    (0x01DE, 0x01EF),
    (0x01F4, 0x01F5),
    (0x01F8, 0x021F),
    (0x0222, 0x0233),
    (0x0460, 0x0481), // Cyrillic Extended / Historic letters
    (0x048A, 0x04BF),
    (0x04C1, 0x04CE),
    (0x04D0, 0x052F),
];

/// Codepoints inside `PARITY_RANGES` that are *not* actually parity pairs
/// (handled irregularly above, or have no case pair at all).
const PARITY_EXCEPTIONS: &[u32] = &[0x0130, 0x0131, 0x0178, 0x0149, 0x04C0];
