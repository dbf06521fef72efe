//! agnostic.rs — the case-agnostic classifier (C3).
//!
//! A string is case-agnostic iff every codepoint folds to itself *and* is
//! not itself a fold target of any other codepoint (spec.md §4.3,
//! invariant 4). The second clause matters: `fold_codepoint('a') == 'a'`
//! but `'a'` is still the fold target of `'A'`, so `"a"` is not
//! case-agnostic — a caller doing a naive byte search for `"a"` in
//! `"A"` would miss the match.
//!
//! Implemented as a block-membership test rather than a fold-table probe
//! for every codepoint that already folds to itself: a codepoint is a
//! fold target only if it sits in a script with a case distinction, so
//! "outside every bicameral block" is a cheap, branch-predictable, and
//! exactly equivalent precondition once combined with the self-fold check.

use crate::rune::fold_codepoint;

#[inline]
pub fn is_case_agnostic(s: &str) -> bool {
    #[cfg(feature = "ascii-fast")]
    if s.is_ascii() {
        return s.bytes().all(|b| !b.is_ascii_alphabetic());
    }
    s.chars().all(is_case_agnostic_char)
}

#[inline]
fn is_case_agnostic_char(c: char) -> bool {
    let folded = fold_codepoint(c);
    folded.len() == 1 && folded.first() == c && !in_bicameral_block(c as u32)
}

/// Every Unicode 17 block containing at least one codepoint with a
/// case distinction. Membership here means "this codepoint *could* be a
/// fold source or target"; it is deliberately coarse at block
/// granularity (a handful of non-letter codepoints inside these blocks
/// are harmlessly treated as non-agnostic too) — spec.md §4.3 only
/// requires the classifier be conservative, never a false positive.
#[inline]
fn in_bicameral_block(cp: u32) -> bool {
    matches!(cp,
        0x0041..=0x005A | 0x0061..=0x007A |       // Basic Latin letters
        0x0080..=0x00FF |                          // Latin-1 Supplement
        0x0100..=0x017F |                          // Latin Extended-A
        0x0180..=0x024F |                          // Latin Extended-B
        0x0250..=0x02AF |                          // IPA Extensions
        0x0370..=0x03FF |                          // Greek and Coptic
        0x0400..=0x04FF | 0x0500..=0x052F |        // Cyrillic + Supplement
        0x0530..=0x058F |                          // Armenian
        0x10A0..=0x10FF | 0x1C90..=0x1CBF | 0x2D00..=0x2D2F | // Georgian + Extended + Supplement
        0x13A0..=0x13FF | 0xAB70..=0xABBF |        // Cherokee + Supplement
        0x1E00..=0x1EFF |                          // Latin Extended Additional
        0x1F00..=0x1FFF |                          // Greek Extended
        0x2C00..=0x2C5F | 0x1E000..=0x1E02F |      // Glagolitic + Supplement
        0x2C60..=0x2C7F |                          // Latin Extended-C
        0x2C80..=0x2CFF |                          // Coptic
        0xA640..=0xA69F |                          // Cyrillic Extended-B
        0x1E030..=0x1E08F |                        // Cyrillic Extended-D
        0xA720..=0xA7FF |                          // Latin Extended-D
        0xAB30..=0xAB6F |                          // Latin Extended-E
        0x10780..=0x107BF |                        // Latin Extended-F
        0x1DF00..=0x1DFFF |                        // Latin Extended-G
        0xFB00..=0xFB06 | 0xFB13..=0xFB17 |        // Ligature presentation forms
        0xFF00..=0xFFEF |                          // Halfwidth/Fullwidth forms
        0x10400..=0x1044F |                        // Deseret
        0x104B0..=0x104FF |                        // Osage
        0x10570..=0x105BC |                        // Vithkuqi
        0x10C80..=0x10CFF |                        // Old Hungarian
        0x10D40..=0x10D8F |                        // Garay + Beria Erfe
        0x118A0..=0x118FF |                        // Warang Citi
        0x16E40..=0x16E9F |                        // Medefaidrin
        0x1E900..=0x1E95F                          // Adlam
    )
}
