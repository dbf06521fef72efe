//! serial_search.rs — the serial search engine (C6).
//!
//! The authoritative reference: every SIMD kernel's output is checked
//! against this implementation in debug builds (`debug_check`). Folds the
//! needle once, then dispatches to a specialized scan by its folded-rune
//! count — a direct 1-rune scan, a small sliding window for 2/3 runes, or
//! a rolling-hash Rabin–Karp ring for everything longer. All three share
//! the same boundary rule: a match may only start and end on a source
//! codepoint boundary, never inside a one-to-many fold expansion.

use crate::agnostic::is_case_agnostic;
use crate::rune::fold_codepoint;
use crate::rune_iter::{FoldedRunes, RuneOut};
use memchr::memmem;
use smallvec::SmallVec;

const SHORT_NEEDLE_MAX_BYTES: usize = 12;
const RING_CAPACITY: usize = 32;
const HASH_BASE: u64 = 257;

/// Fixed-capacity circular buffer of the last `N` folded runes seen, no
/// heap allocation at any capacity. Used in place of a `VecDeque` for both
/// the small fixed-width window (`N` = 3) and the Rabin–Karp ring (`N` =
/// [`RING_CAPACITY`]) — the only difference between the two call sites is
/// how large `N` is.
struct RuneRing<const N: usize> {
    slots: [Option<RuneOut>; N],
    head: usize,
    len: usize,
    cap: usize,
}

impl<const N: usize> RuneRing<N> {
    /// `cap` is the ring's effective capacity for this scan, `<= N`. Kept
    /// separate from `N` so `scan_small_window` can reuse one array size
    /// (3) for both 2- and 3-folded-rune needles.
    fn new(cap: usize) -> Self {
        debug_assert!(cap <= N && cap > 0);
        RuneRing {
            slots: [None; N],
            head: 0,
            len: 0,
            cap,
        }
    }

    /// Pushes `r`, evicting the oldest entry once full. Returns the
    /// evicted entry, if any.
    fn push(&mut self, r: RuneOut) -> Option<RuneOut> {
        if self.len < self.cap {
            let idx = (self.head + self.len) % N;
            self.slots[idx] = Some(r);
            self.len += 1;
            None
        } else {
            let evicted = self.slots[self.head].take();
            self.slots[self.head] = Some(r);
            self.head = (self.head + 1) % N;
            evicted
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn front(&self) -> Option<RuneOut> {
        if self.len == 0 {
            None
        } else {
            self.slots[self.head]
        }
    }

    fn back(&self) -> Option<RuneOut> {
        if self.len == 0 {
            None
        } else {
            self.slots[(self.head + self.len - 1) % N]
        }
    }

    fn iter(&self) -> impl Iterator<Item = RuneOut> + '_ {
        (0..self.len).map(move |i| self.slots[(self.head + i) % N].unwrap())
    }
}

pub(crate) fn find_serial(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return Some((0, 0));
    }
    if is_case_agnostic(needle) {
        return find_bytes(haystack.as_bytes(), needle.as_bytes()).map(|start| (start, needle.len()));
    }

    let folded_needle: SmallVec<[char; 24]> = FoldedRunes::new(needle).map(|r| r.rune).collect();

    if needle.len() <= SHORT_NEEDLE_MAX_BYTES {
        match folded_needle.len() {
            1 => return scan_one_rune(haystack, folded_needle[0]),
            2 | 3 => return scan_small_window(haystack, &folded_needle),
            _ => {}
        }
    }

    scan_ring_buffer(haystack, &folded_needle)
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    memmem::find(haystack, needle)
}

/// 1-folded-rune scan: walk one source codepoint at a time; a match is a
/// single codepoint whose entire fold is the target rune.
fn scan_one_rune(haystack: &str, target: char) -> Option<(usize, usize)> {
    for (start, c) in haystack.char_indices() {
        let folded = fold_codepoint(c);
        if folded.len() == 1 && folded.first() == target {
            return Some((start, c.len_utf8()));
        }
    }
    None
}

/// 2- and 3-folded-rune scan: a fixed-size sliding window over the folded
/// rune stream. A window only counts as a match if it starts on a fresh
/// source codepoint and the rune immediately after it also starts a fresh
/// codepoint (or the haystack ends there) — otherwise the candidate match
/// would begin or end mid-expansion.
fn scan_small_window(haystack: &str, target: &[char]) -> Option<(usize, usize)> {
    debug_assert!(target.len() <= 3);
    let mut runes = FoldedRunes::new(haystack).peekable();
    let mut window: RuneRing<3> = RuneRing::new(target.len());

    while let Some(r) = runes.next() {
        window.push(r);
        if window.len() == target.len()
            && window.front().unwrap().is_first
            && window.iter().map(|w| w.rune).eq(target.iter().copied())
        {
            let boundary_ok = runes.peek().map_or(true, |next| next.is_first);
            if boundary_ok {
                let start = window.front().unwrap().source_start;
                let end = window.back().unwrap().source_end;
                return Some((start, end - start));
            }
        }
    }
    None
}

/// Rabin–Karp over the first `RING_CAPACITY` folded runes of the needle,
/// for needles that either exceed the short-needle byte budget or fold to
/// more than 3 runes. The needle's remaining runes (if any) are verified
/// separately once a ring hit passes its boundary check.
fn scan_ring_buffer(haystack: &str, target: &[char]) -> Option<(usize, usize)> {
    let prefix_len = target.len().min(RING_CAPACITY);
    let prefix = &target[..prefix_len];
    let tail = &target[prefix_len..];

    let prefix_hash = polynomial_hash(prefix);
    let drop_multiplier = HASH_BASE.wrapping_pow(prefix_len as u32 - 1);

    let mut runes = FoldedRunes::new(haystack).peekable();
    let mut ring: RuneRing<RING_CAPACITY> = RuneRing::new(prefix_len);
    let mut hash: u64 = 0;

    while let Some(r) = runes.next() {
        if ring.len() == prefix_len {
            let dropped = ring.push(r).unwrap();
            hash = hash.wrapping_sub((dropped.rune as u64).wrapping_mul(drop_multiplier));
        } else {
            ring.push(r);
        }
        hash = hash.wrapping_mul(HASH_BASE).wrapping_add(r.rune as u64);

        if ring.len() != prefix_len || hash != prefix_hash {
            continue;
        }
        if !ring.front().unwrap().is_first {
            continue;
        }
        if !ring.iter().map(|r| r.rune).eq(prefix.iter().copied()) {
            continue;
        }

        let window_start = ring.front().unwrap().source_start;
        let window_end = ring.back().unwrap().source_end;

        if tail.is_empty() {
            let boundary_ok = runes.peek().map_or(true, |next| next.is_first);
            if boundary_ok {
                return Some((window_start, window_end - window_start));
            }
        } else if let Some(end) = verify_tail(haystack, window_end, tail) {
            return Some((window_start, end - window_start));
        }
    }
    None
}

/// Continue folding the haystack from `after_byte`, checking it produces
/// exactly `tail`'s runes, then checking the following rune (if any)
/// starts a new codepoint. Also used by the SIMD kernels (`kernel/mod.rs`)
/// to verify a needle's unsafe tail once its safe window has matched.
pub(crate) fn verify_tail(haystack: &str, after_byte: usize, tail: &[char]) -> Option<usize> {
    let mut it = FoldedRunes::new(&haystack[after_byte..]);
    let mut last_end = after_byte;
    for &want in tail {
        match it.next() {
            Some(r) if r.rune == want => last_end = after_byte + r.source_end,
            _ => return None,
        }
    }
    match it.next() {
        None => Some(last_end),
        Some(r) if r.is_first => Some(last_end),
        _ => None,
    }
}

/// Walk `haystack[..before_byte]` backward one source codepoint at a time
/// (via `CharIndices`' `DoubleEndedIterator` impl, no allocation) checking
/// it ends with exactly `head`'s folded runes, and return the byte offset
/// where that match begins. Used by the SIMD kernels to verify a needle's
/// unsafe head once its safe window has matched — the mirror of
/// [`verify_tail`], but backward and bounded by `head.len()` rather than by
/// the haystack's own length.
pub(crate) fn verify_head(haystack: &str, before_byte: usize, head: &[char]) -> Option<usize> {
    if head.is_empty() {
        return Some(before_byte);
    }
    let mut remaining = head.len();
    let mut match_start = before_byte;
    let mut chars = haystack[..before_byte].char_indices().rev();

    while remaining > 0 {
        let (start, c) = chars.next()?;
        let folded = fold_codepoint(c);
        let runes = folded.as_slice();
        if runes.len() > remaining {
            return None;
        }
        let expected = &head[remaining - runes.len()..remaining];
        if runes != expected {
            return None;
        }
        remaining -= runes.len();
        match_start = start;
    }
    Some(match_start)
}

fn polynomial_hash(runes: &[char]) -> u64 {
    runes
        .iter()
        .fold(0u64, |acc, &r| acc.wrapping_mul(HASH_BASE).wrapping_add(r as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_at_start() {
        assert_eq!(find_serial("anything", ""), Some((0, 0)));
    }

    #[test]
    fn case_agnostic_needle_uses_byte_search() {
        assert_eq!(find_serial("价格：¥1234", "¥1234"), Some((9, 6)));
    }

    #[test]
    fn scenario_strasse_vs_strasse_expansion() {
        assert_eq!(find_serial("STRASSE", "straße"), Some((0, 7)));
        assert_eq!(find_serial("straße", "STRASSE"), Some((0, 7)));
    }

    #[test]
    fn scenario_ascii_substring() {
        assert_eq!(find_serial("HELLO, WORLD.", "world"), Some((7, 5)));
    }

    #[test]
    fn scenario_cyrillic_substring() {
        assert_eq!(find_serial("ПРИВЕТ, МИР!", "мир"), Some((14, 6)));
    }

    #[test]
    fn single_codepoint_expansion_needle_matches_two_codepoint_haystack() {
        // needle "ss" (2 folded runes) must match haystack "ß" (1
        // codepoint whose fold is the 2-rune expansion "ss").
        assert_eq!(find_serial("straße", "ss"), None); // no literal "ss"/"ß" run here
        assert_eq!(find_serial("groß", "ss"), Some((3, 2)));
    }

    #[test]
    fn expansion_target_needle_matches_expansion_source_haystack() {
        assert_eq!(find_serial("ß", "ss"), Some((0, 2)));
        assert_eq!(find_serial("ß", "SS"), Some((0, 2)));
    }

    #[test]
    fn match_cannot_start_mid_expansion() {
        // haystack "ß" folds to "ss"; needle "s" alone must not match
        // because that would start inside the expansion.
        assert_eq!(find_serial("ß", "s"), None);
    }

    #[test]
    fn not_found_returns_none() {
        assert_eq!(find_serial("hello", "xyz"), None);
    }

    #[test]
    fn long_needle_uses_ring_buffer_path() {
        let haystack = "the quick brown FOX jumps over the lazy dog, said the Quick Brown Fox again";
        assert_eq!(
            find_serial(haystack, "quick brown fox"),
            Some((4, 15))
        );
    }

    #[test]
    fn verify_head_walks_backward_over_an_expansion() {
        // "ß" folds to "ss"; a head of ['s','s'] ending right before byte 2
        // (the byte right after "ß") must resolve back to source start 0.
        let head: SmallVec<[char; 2]> = SmallVec::from_slice(&['s', 's']);
        assert_eq!(verify_head("groß", 4, &head), Some(3));
    }

    #[test]
    fn verify_head_rejects_mismatched_prefix() {
        let head: SmallVec<[char; 2]> = SmallVec::from_slice(&['x', 'y']);
        assert_eq!(verify_head("hello", 2, &head), None);
    }

    #[test]
    fn long_needle_with_expansion_inside() {
        let haystack = "Der GROSSE STRASSENBAU beginnt";
        // "straße" (folds to "strasse", 7 runes) should find "STRASSE"
        // inside "STRASSENBAU".
        let m = find_serial(haystack, "straße");
        assert_eq!(m, Some((11, 7)));
    }
}
