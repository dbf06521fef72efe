#![forbid(unsafe_code)]
#![cfg_attr(feature = "portable-simd", feature(portable_simd))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Locale-independent Unicode case-insensitive UTF-8 substring search.
//!
//! Four operations, all synchronous, all pure in their inputs: [`fold`]
//! (Unicode 17 full case folding), [`find`] (case-insensitive substring
//! search), [`order`] (case-insensitive lexicographic comparison), and
//! [`is_case_agnostic`] (detects strings no fold can ever touch, enabling
//! a byte-identical fast path). No normalization, no locale sensitivity,
//! no UTF-8 validation — see each function's docs for its exact contract.

mod agnostic;
mod analyzer;
mod dispatch;
mod fold_all;
mod fold_tables;
mod kernel;
mod order;
mod rune;
mod rune_iter;
mod serial_search;

#[cfg(debug_assertions)]
mod debug_check;

pub use rune::{fold_codepoint, Folded};

/// Fold every codepoint of `src` into `dst`.
///
/// `dst` must be at least `3 * src.len()` bytes — the worst case for a
/// Unicode 17 full-fold expansion, e.g. ligature presentation forms like
/// `ﬃ` expand one 3-byte codepoint into three 1-byte runes. Returns the
/// number of bytes written.
///
/// `src` is expected to be well-formed UTF-8; a malformed sequence decodes
/// defensively as a single self-folding byte so a bad suffix degrades the
/// output instead of corrupting a good prefix already written.
pub fn fold(src: &[u8], dst: &mut [u8]) -> usize {
    fold_all::fold(src, dst)
}

/// [`fold`]'s owned, `&str`-in/`String`-out counterpart.
pub fn fold_str(src: &str) -> String {
    fold_all::fold_str(src)
}

/// Case-insensitive substring search.
///
/// Returns the byte offset into `haystack` and the matched byte length on
/// a hit — the matched length may differ from `needle.len()` because of
/// one-to-many fold expansions (`find("groß", "ss")` matches the 2-byte
/// `ß` and reports length 2). A match always begins and ends on a source
/// codepoint boundary; it never starts or ends inside an expansion.
///
/// `haystack` and `needle` are expected to be well-formed UTF-8.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<(usize, usize)> {
    let haystack = std::str::from_utf8(haystack).ok()?;
    let needle = std::str::from_utf8(needle).ok()?;
    find_str(haystack, needle)
}

/// [`find`]'s `&str` counterpart.
pub fn find_str(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    dispatch::find(haystack, needle)
}

/// `true` iff [`find_str`] finds `needle` anywhere in `haystack`.
pub fn contains(haystack: &str, needle: &str) -> bool {
    find_str(haystack, needle).is_some()
}

/// Case-insensitive lexicographic order.
///
/// Equivalent to comparing `fold(a)` and `fold(b)` codepoint-by-codepoint,
/// but never materializes either fold.
pub fn order(a: &[u8], b: &[u8]) -> std::cmp::Ordering {
    order::order(a, b)
}

/// [`order`]'s `&str` counterpart.
pub fn order_str(a: &str, b: &str) -> std::cmp::Ordering {
    order::order_str(a, b)
}

/// `true` iff every codepoint of `s` folds to itself and is not a fold
/// target of any other codepoint — a string for which case folding is
/// entirely a no-op in both directions, enabling a byte-identical search
/// fast path.
pub fn is_case_agnostic(s: &[u8]) -> bool {
    match std::str::from_utf8(s) {
        Ok(s) => is_case_agnostic_str(s),
        Err(_) => false,
    }
}

/// [`is_case_agnostic`]'s `&str` counterpart.
pub fn is_case_agnostic_str(s: &str) -> bool {
    agnostic::is_case_agnostic(s)
}

#[cfg(test)]
mod tests {
    include!("tests/integration.rs");
    include!("tests/unit.rs");
    include!("tests/proptest.rs");
}
