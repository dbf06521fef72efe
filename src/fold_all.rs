//! fold_all.rs — serial fold-all (C4).
//!
//! Streams `src` to `dst` codepoint-by-codepoint via `rune::fold_codepoint`,
//! with an inner loop that folds runs of ASCII bytes without decoding them
//! as `char`. The caller-owned `dst` must be sized `≥ 3 × src.len()`;
//! running out of room degrades by truncating at the last fully written
//! codepoint rather than writing a partial UTF-8 sequence, matching the
//! insufficient-buffer policy for release builds. Debug builds additionally
//! assert the capacity contract up front, since a caller passing too small
//! a `dst` is almost always a bug worth catching immediately rather than
//! silently truncating.

use crate::rune::fold_codepoint;

/// Fold every codepoint of `src` into `dst`. Returns the number of bytes
/// written.
///
/// `src` is expected to be well-formed UTF-8 (a precondition, not
/// validated here); a malformed byte sequence decodes defensively as a
/// single self-folding byte so a bad suffix degrades the output instead
/// of corrupting bytes already written for a good prefix.
pub fn fold(src: &[u8], dst: &mut [u8]) -> usize {
    debug_assert!(
        dst.len() >= src.len().saturating_mul(3),
        "fold: dst must be at least 3x src"
    );

    let mut written = 0;
    let mut rest = src;
    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                written += fold_str_into(valid, &mut dst[written..]);
                break;
            }
            Err(e) => {
                let valid_len = e.valid_up_to();
                if valid_len > 0 {
                    let valid =
                        std::str::from_utf8(&rest[..valid_len]).expect("valid_up_to is exact");
                    written += fold_str_into(valid, &mut dst[written..]);
                }
                let bad_len = e.error_len().unwrap_or(1);
                for &b in &rest[valid_len..valid_len + bad_len] {
                    if written >= dst.len() {
                        return written;
                    }
                    dst[written] = b;
                    written += 1;
                }
                rest = &rest[valid_len + bad_len..];
            }
        }
    }
    written
}

/// `fold`'s `&str`-in owned-`String`-out counterpart: sizes its own output
/// buffer, so callers working in `&str` never have to compute `3 × len`
/// themselves.
pub fn fold_str(src: &str) -> String {
    let mut dst = vec![0u8; src.len() * 3];
    let written = fold_str_into(src, &mut dst);
    dst.truncate(written);
    String::from_utf8(dst).expect("fold_str_into only ever writes well-formed UTF-8")
}

fn fold_str_into(s: &str, dst: &mut [u8]) -> usize {
    let bytes = s.as_bytes();
    let mut src_i = 0;
    let mut written = 0;

    while src_i < bytes.len() {
        if bytes[src_i] < 0x80 {
            let run_start = src_i;
            while src_i < bytes.len() && bytes[src_i] < 0x80 {
                src_i += 1;
            }
            for &ascii in &bytes[run_start..src_i] {
                if written >= dst.len() {
                    return written;
                }
                dst[written] = ascii.to_ascii_lowercase();
                written += 1;
            }
        } else {
            let c = s[src_i..].chars().next().expect("src_i is a char boundary");
            src_i += c.len_utf8();

            for &folded in fold_codepoint(c).as_slice() {
                let mut buf = [0u8; 4];
                let encoded = folded.encode_utf8(&mut buf).as_bytes();
                if written + encoded.len() > dst.len() {
                    return written;
                }
                dst[written..written + encoded.len()].copy_from_slice(encoded);
                written += encoded.len();
            }
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold_to_string(src: &str) -> String {
        let mut dst = vec![0u8; src.len() * 3];
        let n = fold(src.as_bytes(), &mut dst);
        String::from_utf8(dst[..n].to_vec()).unwrap()
    }

    #[test]
    fn ascii_run_lowercases() {
        assert_eq!(fold_to_string("HELLO"), "hello");
    }

    #[test]
    fn capital_sharp_s_expands() {
        let mut dst = [0u8; 16];
        let n = fold("ẞ".as_bytes(), &mut dst);
        assert_eq!(&dst[..n], b"ss");
    }

    #[test]
    fn dotted_capital_i_expands_to_three_bytes() {
        let s = fold_to_string("İ");
        let mut chars = s.chars();
        assert_eq!(chars.next(), Some('i'));
        assert_eq!(chars.next(), Some('\u{0307}'));
        assert_eq!(chars.next(), None);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn idempotent_on_already_folded_input() {
        let once = fold_to_string("Straße");
        let twice = fold_to_string(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut dst = [0u8; 8];
        assert_eq!(fold(b"", &mut dst), 0);
    }

    #[test]
    fn truncates_rather_than_overruns_when_dst_is_short() {
        let mut dst = [0u8; 1];
        let n = fold("ß".as_bytes(), &mut dst);
        assert!(n <= dst.len());
    }

    #[test]
    fn fold_str_matches_byte_oriented_fold() {
        assert_eq!(fold_str("HELLO"), "hello");
        assert_eq!(fold_str("ẞ"), "ss");
    }
}
