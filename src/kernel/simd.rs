//! kernel/simd.rs — the real vectorized pre-filter, gated behind the
//! `portable-simd` feature (nightly-only `core::simd`).
//!
//! This is a pure performance short-circuit: it narrows candidates before
//! [`super::find_with_kernel`]'s full scalar fold-rune comparison runs,
//! but never substitutes for it. A lane mismatch here means "definitely
//! not a match" and the caller `continue`s; a lane match here means
//! nothing stronger than "worth paying for the scalar check" — the
//! scalar check is what actually decides. That asymmetry is what keeps
//! P6 (kernel results agree with the serial engine) true by construction
//! rather than by replicating per-script byte arithmetic in two places.

use std::simd::cmp::SimdPartialEq;
use std::simd::u32x8;

const LANES: usize = 8;

/// Compares up to the first 8 runes of an already-folded candidate
/// register against an already-folded needle register, lane-wise, as
/// `u32` codepoints. Returns `false` only when a compared lane definitely
/// mismatches; `true` otherwise (including when there's nothing to
/// compare, e.g. a register shorter than a single lane). Both slices are
/// post-fold output, so there's no positional assumption about the source
/// bytes that produced them — only that equal-length folded prefixes
/// agree or don't.
#[inline]
pub(super) fn quick_reject(candidate: &[char], needle: &[char]) -> bool {
    let len = candidate.len().min(needle.len()).min(LANES);
    if len == 0 {
        return true;
    }

    let mut w = [u32::MAX; LANES];
    let mut n = [u32::MAX; LANES];
    for i in 0..len {
        w[i] = candidate[i] as u32;
        n[i] = needle[i] as u32;
    }

    let wv = u32x8::from_array(w);
    let nv = u32x8::from_array(n);
    let mask = wv.simd_eq(nv);
    (0..len).all(|i| mask.test(i))
}
