//! dispatch.rs — the top-level dispatcher (C9).
//!
//! Picks among the case-agnostic fast path, the short-needle 128-bit
//! entry, the full analyzer-plus-kernel path, and the serial fallback.
//! This is the only place that knows about all nine components at once;
//! everything else only needs its immediate neighbors.

use crate::agnostic::is_case_agnostic;
use crate::analyzer::{self, ScriptClass};
use crate::kernel::{
    self, armenian::ArmenianKernel, ascii::AsciiKernel, cyrillic::CyrillicKernel,
    greek::GreekKernel, latin1ab::Latin1AbKernel, vietnamese::VietnameseKernel, ScriptKernel,
};
use crate::serial_search::find_serial;

/// Needles at or under this byte length skip the full analyzer pass and
/// try each kernel's class-allowance predicate directly, with a default
/// window spanning the whole needle.
const SHORT_PATH_MAX_BYTES: usize = 16;

pub(crate) fn find(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return Some((0, 0));
    }
    if is_case_agnostic(needle) {
        return memchr::memmem::find(haystack.as_bytes(), needle.as_bytes())
            .map(|start| (start, needle.len()));
    }
    if needle.len() <= SHORT_PATH_MAX_BYTES {
        if let Some(result) = try_short_path(haystack, needle) {
            #[cfg(debug_assertions)]
            crate::debug_check::assert_kernel_contract!(haystack, needle, result);
            if let Some(hit) = result {
                return Some(hit);
            }
        }
    }

    let analysis = analyzer::analyze(needle);
    if let Some((class, window)) = analysis
        .windows
        .iter()
        .zip(ScriptClass::ALL)
        .filter(|(w, _)| w.is_valid())
        .max_by_key(|(w, _)| w.length_bytes)
        .map(|(w, class)| (class, *w))
    {
        let result = dispatch_to_kernel(class, haystack, needle, &window);
        #[cfg(debug_assertions)]
        crate::debug_check::assert_kernel_contract!(haystack, needle, result);
        if let Some(hit) = result {
            return Some(hit);
        }
    }

    find_serial(haystack, needle)
}

/// Try each kernel's class-allowance predicate in priority order; the
/// first whose predicate holds for every needle codepoint gets a default
/// window spanning the whole needle (probes at `0`, `len/2`, `len-1`,
/// matching §4.9's short-path description). The outer `Option` says
/// whether any kernel ran at all — `None` means no kernel's predicate
/// matched and the caller should fall through without drawing any
/// conclusion; `Some(inner)` is that kernel's full, authoritative answer
/// (the whole needle fits in its window, so `inner` being `None` means
/// genuinely not found, not "didn't check").
fn try_short_path(haystack: &str, needle: &str) -> Option<Option<(usize, usize)>> {
    if needle.chars().all(AsciiKernel::char_allowed) {
        return Some(kernel::find_with_kernel::<AsciiKernel>(
            haystack,
            needle,
            &whole_needle_window(needle),
        ));
    }
    if needle.chars().all(Latin1AbKernel::char_allowed) {
        return Some(kernel::find_with_kernel::<Latin1AbKernel>(
            haystack,
            needle,
            &whole_needle_window(needle),
        ));
    }
    if needle.chars().all(CyrillicKernel::char_allowed) {
        return Some(kernel::find_with_kernel::<CyrillicKernel>(
            haystack,
            needle,
            &whole_needle_window(needle),
        ));
    }
    if needle.chars().all(GreekKernel::char_allowed) {
        return Some(kernel::find_with_kernel::<GreekKernel>(
            haystack,
            needle,
            &whole_needle_window(needle),
        ));
    }
    if needle.chars().all(ArmenianKernel::char_allowed) {
        return Some(kernel::find_with_kernel::<ArmenianKernel>(
            haystack,
            needle,
            &whole_needle_window(needle),
        ));
    }
    if needle.chars().all(VietnameseKernel::char_allowed) {
        return Some(kernel::find_with_kernel::<VietnameseKernel>(
            haystack,
            needle,
            &whole_needle_window(needle),
        ));
    }
    None
}

fn whole_needle_window(needle: &str) -> analyzer::SafeWindow {
    let last_start = needle
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0);
    let mid_idx = needle.chars().count() / 2;
    let mid_start = needle
        .char_indices()
        .nth(mid_idx)
        .map(|(i, _)| i)
        .unwrap_or(0);

    analyzer::SafeWindow {
        start_byte: 0,
        length_bytes: needle.len(),
        probe_first: 0,
        probe_mid: mid_start,
        probe_last: last_start,
        prefix_first: 0,
        prefix_mid: 0,
        prefix_last: 0,
    }
}

fn dispatch_to_kernel(
    class: ScriptClass,
    haystack: &str,
    needle: &str,
    window: &analyzer::SafeWindow,
) -> Option<(usize, usize)> {
    match class {
        ScriptClass::Ascii => kernel::find_with_kernel::<AsciiKernel>(haystack, needle, window),
        ScriptClass::Latin1Ab => kernel::find_with_kernel::<Latin1AbKernel>(haystack, needle, window),
        ScriptClass::Cyrillic => kernel::find_with_kernel::<CyrillicKernel>(haystack, needle, window),
        ScriptClass::Greek => kernel::find_with_kernel::<GreekKernel>(haystack, needle, window),
        ScriptClass::Armenian => kernel::find_with_kernel::<ArmenianKernel>(haystack, needle, window),
        ScriptClass::Vietnamese => {
            kernel::find_with_kernel::<VietnameseKernel>(haystack, needle, window)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle() {
        assert_eq!(find("anything", ""), Some((0, 0)));
    }

    #[test]
    fn ascii_short_path() {
        assert_eq!(find("HELLO, WORLD.", "world"), Some((7, 5)));
    }

    #[test]
    fn expansion_via_full_path() {
        assert_eq!(find("STRASSE", "straße"), Some((0, 7)));
    }

    #[test]
    fn cyrillic_short_path() {
        assert_eq!(find("ПРИВЕТ, МИР!", "мир"), Some((14, 6)));
    }

    #[test]
    fn case_agnostic_fast_path() {
        assert_eq!(find("价格：¥1234", "¥1234"), Some((9, 6)));
    }

    #[test]
    fn not_found() {
        assert_eq!(find("hello world", "xyz"), None);
    }

    #[test]
    fn agrees_with_serial_engine_on_mixed_script_haystack() {
        let haystack = "Mixed ТЕКСТ with Ελληνικά and straße inside";
        for needle in ["текст", "ελληνικά", "STRASSE", "missing"] {
            assert_eq!(
                find(haystack, needle),
                find_serial(haystack, needle),
                "mismatch for needle {needle:?}"
            );
        }
    }
}
