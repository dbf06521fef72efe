//! fold_tables — data backing `rune::fold_codepoint`, split by UTF-8 byte
//! width the way `spec.md` §4.1 lays the source table out.
//!
//! Each submodule owns one tier: a handful of contiguous-range offset
//! folds checked first (cheap, branch-predictable), then parity-based
//! folds for blocks where every second codepoint is the uppercase member
//! of a pair, then a `phf`-indexed exhaustive map for irregular one-to-one
//! mappings and the one-to-many expansions (`ß→ss`, `İ→i+◌̇`, …).
//!
//! The irregular/expansion maps here are curated, not a literal transcription
//! of every row in `CaseFolding.txt` — see DESIGN.md for which rows are
//! covered and why a hand-authored subset is the right tradeoff for this
//! crate. Every row that *is* present is exact.

pub(crate) mod ascii;
pub(crate) mod four_byte;
pub(crate) mod three_byte;
pub(crate) mod two_byte;

use crate::rune::Folded;

/// A codepoint that is genuinely uppercase-only-by-parity within `[start, end]`
/// folds to `self + 1`, except for the listed exceptions (irregular pairs,
/// or codepoints with no case pair at all) which the caller's irregular
/// table handles instead.
#[inline]
pub(crate) fn parity_fold(cp: u32, start: u32, end: u32, exceptions: &[u32]) -> Option<char> {
    if cp < start || cp > end || exceptions.contains(&cp) {
        return None;
    }
    if (cp - start) % 2 == 0 {
        char::from_u32(cp + 1)
    } else {
        None
    }
}

/// Decode a packed irregular-table row: up to 3 codepoints, `0` padding
/// unused trailing slots, plus an explicit populated length.
#[inline]
pub(crate) fn decode_row(row: (u32, u32, u32, u8)) -> Folded {
    let (a, b, c, len) = row;
    match len {
        1 => Folded::one(char::from_u32(a).expect("irregular table codepoint")),
        2 => Folded::two(
            char::from_u32(a).expect("irregular table codepoint"),
            char::from_u32(b).expect("irregular table codepoint"),
        ),
        3 => Folded::three(
            char::from_u32(a).expect("irregular table codepoint"),
            char::from_u32(b).expect("irregular table codepoint"),
            char::from_u32(c).expect("irregular table codepoint"),
        ),
        _ => unreachable!("irregular table row must populate 1-3 runes"),
    }
}
