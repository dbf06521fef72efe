//! kernel/mod.rs — the SIMD script kernels (C8).
//!
//! Each kernel owns a *fold-register operation*: given a byte span of the
//! safe window the analyzer (C7) found for this class, decode it codepoint
//! by codepoint, reject the span outright if any codepoint falls outside
//! `char_allowed` (this kernel's recognized range — basic Cyrillic but not
//! Historical Cyrillic Extended-A, Greek and Coptic but not Polytonic
//! Greek, and so on, matching each script's notes below), and fold what's
//! left through the same oracle `rune::fold_codepoint` the serial engine
//! trusts. The fold is capped at [`REGISTER_BYTES`] — one SIMD register's
//! worth of window, the same cap spec.md's kernel skeleton puts on a
//! single register load; a window longer than that only gets the fold
//! treatment on its first register's worth, with the remainder folded into
//! the tail and checked by the rune-level comparator instead.
//!
//! `find_with_kernel` is the shared search loop every kernel uses: slide a
//! fixed-byte-length window across `haystack` at codepoint boundaries,
//! fold-register each candidate, and accept the first one whose folded
//! output equals the needle's folded register — then verify the needle's
//! unsafe head and tail (outside the window) against the haystack on
//! either side using the serial engine's own rune-level comparators
//! (`serial_search::verify_head`/`verify_tail`), exactly as spec.md's
//! kernel skeleton describes for the window/head/tail split.
//!
//! This crate's fold-register does not reproduce the lead-byte-arithmetic
//! encoding spec.md sketches in bytes (`D1 80..8F -> D0 A0..AF`, second
//! byte `+0x20`, and similar) literally — working through the actual
//! arithmetic surfaces internal inconsistencies in those examples (see
//! DESIGN.md's C8 entry), and reusing the already-verified per-codepoint
//! oracle is what keeps every kernel's fold correct without hand-deriving
//! new byte deltas that can't be checked by compiling and running them.
//! Decoding through `char` rather than raw bytes also avoids hard-coding a
//! positional assumption the real byte trick can't make either: a fold
//! expansion (`ß -> ss`) can shift how many *source* bytes a given *folded*
//! rune corresponds to, so the needle's register and a haystack candidate
//! of matching byte length may not have 1:1 corresponding codepoints at
//! every offset. The shared probe-byte pre-filter this module used before
//! this revision assumed that correspondence and is gone; each candidate's
//! full register is folded and compared directly instead.
//!
//! The default build runs this as a plain scalar loop. With the
//! `portable-simd` feature, the final full-register equality check first
//! runs an 8-lane `core::simd` prefix compare (`simd::quick_reject`) over
//! the two already-folded rune sequences as a fast reject; either way, a
//! candidate is only ever reported once the scalar comparison — the same
//! oracle `serial_search.rs` uses — agrees, so enabling the feature can
//! only change performance, never the result (P6).

pub(crate) mod armenian;
pub(crate) mod ascii;
pub(crate) mod cyrillic;
pub(crate) mod greek;
pub(crate) mod latin1ab;
pub(crate) mod vietnamese;

#[cfg(feature = "portable-simd")]
mod simd;

use crate::analyzer::{SafeWindow, ScriptClass};
use crate::rune::fold_codepoint;
use crate::rune_iter::FoldedRunes;
use crate::serial_search::{verify_head, verify_tail};
use smallvec::SmallVec;

/// One SIMD register's worth of window bytes, per spec.md's kernel
/// skeleton. A safe window longer than this only gets fold-register
/// treatment on its first `REGISTER_BYTES` bytes (rounded down to a
/// codepoint boundary); the rest is folded into the tail instead.
const REGISTER_BYTES: usize = 64;

/// Upper bound on runes a folded register can produce. Every codepoint
/// this crate's kernels accept expands to at most 2 runes (`ß -> ss`,
/// `İ -> i` + combining dot), so a `REGISTER_BYTES`-byte window of
/// 2-byte-or-wider codepoints (at most `REGISTER_BYTES / 2` of them) never
/// produces more than `REGISTER_BYTES` runes; the all-ASCII case produces
/// at most `REGISTER_BYTES` runes 1:1. The margin above that is headroom,
/// not a requirement.
const REGISTER_RUNES: usize = 96;

pub(crate) trait ScriptKernel {
    const CLASS: ScriptClass;

    /// Whether this kernel's fold-register operation transforms `c`
    /// correctly and byte-length-preservingly. Gates the short-needle fast
    /// path in `dispatch.rs`, and gates every codepoint a window fold is
    /// willing to touch in [`fold_register`]: a haystack span containing a
    /// codepoint this returns `false` for is never treated as this
    /// kernel's match, win or lose — it falls through to the analyzer's
    /// general path or the serial engine.
    fn char_allowed(c: char) -> bool;
}

/// Generates one zero-sized kernel type plus its `ScriptKernel` impl from
/// a name, a `ScriptClass` variant, and a codepoint-allowed predicate.
macro_rules! define_kernel {
    ($name:ident, $class:expr, $allowed:expr) => {
        paste::paste! {
            pub(crate) struct [<$name Kernel>];

            impl crate::kernel::ScriptKernel for [<$name Kernel>] {
                const CLASS: crate::analyzer::ScriptClass = $class;

                #[inline]
                fn char_allowed(c: char) -> bool {
                    let allowed: fn(char) -> bool = $allowed;
                    allowed(c)
                }
            }
        }
    };
}

pub(crate) use define_kernel;

/// Search `haystack` for `needle` restricted to `window`, the safe window
/// the analyzer computed for `K::CLASS`. `window` must be valid
/// (`window.is_valid()`); callers (the dispatcher) never invoke a kernel
/// on an invalid window.
pub(crate) fn find_with_kernel<K: ScriptKernel>(
    haystack: &str,
    needle: &str,
    window: &SafeWindow,
) -> Option<(usize, usize)> {
    debug_assert!(window.is_valid());

    if needle.is_empty() {
        return Some((0, 0));
    }

    let window_end = window.start_byte + window.length_bytes;
    let register_end = cap_to_register_bytes(needle, window.start_byte, window_end);
    let register = &needle[window.start_byte..register_end];
    let Some(needle_folded) = fold_register::<K>(register) else {
        return None;
    };
    let register_len = register_end - window.start_byte;

    let head: SmallVec<[char; 32]> = FoldedRunes::new(&needle[..window.start_byte])
        .map(|r| r.rune)
        .collect();
    let tail: SmallVec<[char; 32]> = FoldedRunes::new(&needle[register_end..])
        .map(|r| r.rune)
        .collect();

    for (h, _) in haystack.char_indices() {
        let Some(candidate_end) = h.checked_add(register_len) else {
            continue;
        };
        if candidate_end > haystack.len() || !haystack.is_char_boundary(candidate_end) {
            continue;
        }
        let candidate = &haystack[h..candidate_end];
        let Some(candidate_folded) = fold_register::<K>(candidate) else {
            continue;
        };

        #[cfg(feature = "portable-simd")]
        if !simd::quick_reject(&candidate_folded, &needle_folded) {
            continue;
        }
        if candidate_folded != needle_folded {
            continue;
        }

        let Some(match_start) = verify_head(haystack, h, &head) else {
            continue;
        };
        let Some(match_end) = verify_tail(haystack, candidate_end, &tail) else {
            continue;
        };
        return Some((match_start, match_end - match_start));
    }
    None
}

/// Decodes `window` codepoint by codepoint, folding each through the
/// verified oracle `rune::fold_codepoint`. Returns `None` the instant a
/// codepoint falls outside `K::char_allowed` — such a span is not
/// something this kernel's fold covers, so the caller treats it as a
/// non-match rather than a false reject of the whole search.
fn fold_register<K: ScriptKernel>(window: &str) -> Option<SmallVec<[char; REGISTER_RUNES]>> {
    let mut out: SmallVec<[char; REGISTER_RUNES]> = SmallVec::new();
    for c in window.chars() {
        if !K::char_allowed(c) {
            return None;
        }
        out.extend_from_slice(fold_codepoint(c).as_slice());
    }
    Some(out)
}

/// Caps `needle[start..window_end]` to at most `REGISTER_BYTES`, rounded
/// down to the nearest codepoint boundary so the capped span is always
/// valid UTF-8 on its own.
fn cap_to_register_bytes(needle: &str, start: usize, window_end: usize) -> usize {
    if window_end - start <= REGISTER_BYTES {
        return window_end;
    }
    let mut end = start;
    for (i, c) in needle[start..window_end].char_indices() {
        let next = start + i + c.len_utf8();
        if next - start > REGISTER_BYTES {
            break;
        }
        end = next;
    }
    end
}
