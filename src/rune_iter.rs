//! rune_iter.rs — the folded-rune iterator (C2).
//!
//! A lazy sequence of folded runes over a `&str`, transparently buffering
//! `rune::fold_codepoint`'s up-to-3-rune expansions. UTF-8 decoding itself
//! is delegated to `str::char_indices` — that decode step is the
//! `rune_parse` collaborator spec.md places outside this core's scope, and
//! the standard library already implements it correctly.
//!
//! Each yielded rune carries the byte range, in the source `&str`, of the
//! *source codepoint* it came from. This is what lets callers (the serial
//! search engine and every SIMD kernel) map a match expressed in folded
//! runes back to a contiguous byte span in the original haystack — the
//! critical bit spec.md §4.2 calls out: a match's reported length is a
//! byte span, not a rune count, and a one-to-many expansion (`ß → ss`)
//! must not let a match start or end mid-expansion.

use crate::rune::fold_codepoint;
use std::str::CharIndices;

/// One folded rune, plus the byte range of the source codepoint it came
/// from and whether it is the *first* rune produced from that codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuneOut {
    pub rune: char,
    pub is_first: bool,
    pub source_start: usize,
    pub source_end: usize,
}

/// Finite, single-pass, not restartable.
pub struct FoldedRunes<'a> {
    chars: CharIndices<'a>,
    pending: [char; 3],
    pending_len: u8,
    pending_idx: u8,
    source_start: usize,
    source_end: usize,
}

impl<'a> FoldedRunes<'a> {
    #[inline]
    pub fn new(s: &'a str) -> Self {
        FoldedRunes {
            chars: s.char_indices(),
            pending: ['\0'; 3],
            pending_len: 0,
            pending_idx: 0,
            source_start: 0,
            source_end: 0,
        }
    }
}

impl<'a> Iterator for FoldedRunes<'a> {
    type Item = RuneOut;

    #[inline]
    fn next(&mut self) -> Option<RuneOut> {
        if self.pending_idx < self.pending_len {
            let rune = self.pending[self.pending_idx as usize];
            let is_first = self.pending_idx == 0;
            self.pending_idx += 1;
            return Some(RuneOut {
                rune,
                is_first,
                source_start: self.source_start,
                source_end: self.source_end,
            });
        }

        let (start, c) = self.chars.next()?;
        let end = start + c.len_utf8();
        let (runes, len) = fold_codepoint(c).parts();

        self.pending = runes;
        self.pending_len = len;
        self.pending_idx = 1;
        self.source_start = start;
        self.source_end = end;

        Some(RuneOut {
            rune: runes[0],
            is_first: true,
            source_start: start,
            source_end: end,
        })
    }
}

impl<'a> std::iter::FusedIterator for FoldedRunes<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_runes(s: &str) -> Vec<char> {
        FoldedRunes::new(s).map(|r| r.rune).collect()
    }

    #[test]
    fn ascii_passthrough_lowercased() {
        assert_eq!(collect_runes("HELLO"), vec!['h', 'e', 'l', 'l', 'o']);
    }

    #[test]
    fn sharp_s_expands_and_tracks_one_source() {
        let out: Vec<_> = FoldedRunes::new("ß").collect();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].rune, 's');
        assert!(out[0].is_first);
        assert_eq!(out[1].rune, 's');
        assert!(!out[1].is_first);
        // Both runes come from the same 2-byte source codepoint.
        assert_eq!(out[0].source_start, 0);
        assert_eq!(out[0].source_end, 2);
        assert_eq!(out[1].source_start, 0);
        assert_eq!(out[1].source_end, 2);
    }

    #[test]
    fn source_ranges_advance_across_multiple_codepoints() {
        let out: Vec<_> = FoldedRunes::new("AB").collect();
        assert_eq!(out[0].source_start, 0);
        assert_eq!(out[0].source_end, 1);
        assert_eq!(out[1].source_start, 1);
        assert_eq!(out[1].source_end, 2);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(collect_runes(""), Vec::<char>::new());
    }
}
