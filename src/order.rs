//! order.rs — the serial comparator (C5).
//!
//! Lexicographic order over two inputs' folded rune streams, pulled in
//! lockstep via `rune_iter::FoldedRunes` — never materializes either
//! fully-folded string. First mismatching rune decides by unsigned
//! codepoint value; early exhaustion is less-than; empty equals empty.

use crate::rune_iter::FoldedRunes;
use std::cmp::Ordering;

pub fn order(a: &[u8], b: &[u8]) -> Ordering {
    let a = std::str::from_utf8(a).unwrap_or("");
    let b = std::str::from_utf8(b).unwrap_or("");
    order_str(a, b)
}

pub fn order_str(a: &str, b: &str) -> Ordering {
    let mut ra = FoldedRunes::new(a);
    let mut rb = FoldedRunes::new(b);

    loop {
        match (ra.next(), rb.next()) {
            (Some(x), Some(y)) => {
                let cmp = (x.rune as u32).cmp(&(y.rune as u32));
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_equal() {
        assert_eq!(order_str("Hello", "HELLO"), Ordering::Equal);
        assert_eq!(order_str("straße", "STRASSE"), Ordering::Equal);
    }

    #[test]
    fn basic_ordering() {
        assert_eq!(order_str("a", "b"), Ordering::Less);
        assert_eq!(order_str("b", "a"), Ordering::Greater);
    }

    #[test]
    fn empty_equals_empty() {
        assert_eq!(order_str("", ""), Ordering::Equal);
    }

    #[test]
    fn prefix_is_less_than_longer_string() {
        assert_eq!(order_str("ab", "abc"), Ordering::Less);
        assert_eq!(order_str("abc", "ab"), Ordering::Greater);
    }

    #[test]
    fn expansion_lengthens_the_shorter_side() {
        // "ß" folds to two runes ("ss"), so it is not automatically less
        // than a two-codepoint string purely by source length.
        assert_eq!(order_str("ß", "ss"), Ordering::Equal);
        assert_eq!(order_str("ß", "st"), Ordering::Less);
    }

    #[test]
    fn reflexive_and_antisymmetric() {
        for (x, y) in [("Hello", "World"), ("мир", "МИР"), ("a", "A")] {
            assert_eq!(order_str(x, x), Ordering::Equal);
            let fwd = order_str(x, y);
            let back = order_str(y, x);
            assert_eq!(fwd, back.reverse());
        }
    }
}
