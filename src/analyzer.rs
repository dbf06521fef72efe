//! analyzer.rs — the needle analyzer (C7).
//!
//! One linear pass over the needle, one codepoint of lookahead, producing
//! for each of the six script classes the longest contiguous *safe
//! window*: a run of codepoints whose class-specific SIMD fold is
//! guaranteed length-preserving and byte-local. The dispatcher (C9) picks
//! the kernel backed by the longest valid window; the kernels (C8)
//! restrict their vectorized fold to that window and fall back to the
//! serial comparator for the needle's head and tail.

use smallvec::SmallVec;

pub(crate) const NUM_SCRIPT_CLASSES: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScriptClass {
    Ascii,
    Latin1Ab,
    Cyrillic,
    Greek,
    Armenian,
    Vietnamese,
}

impl ScriptClass {
    pub(crate) const ALL: [ScriptClass; NUM_SCRIPT_CLASSES] = [
        ScriptClass::Ascii,
        ScriptClass::Latin1Ab,
        ScriptClass::Cyrillic,
        ScriptClass::Greek,
        ScriptClass::Armenian,
        ScriptClass::Vietnamese,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Byte range inside the needle, plus the three Raita-style probe
/// positions and their continuation-byte prefixes. `length_bytes == 0`
/// means this class has no usable window in this needle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SafeWindow {
    pub start_byte: usize,
    pub length_bytes: usize,
    pub probe_first: usize,
    pub probe_mid: usize,
    pub probe_last: usize,
    pub prefix_first: u8,
    pub prefix_mid: u8,
    pub prefix_last: u8,
}

impl SafeWindow {
    #[inline]
    pub(crate) fn is_valid(&self) -> bool {
        self.length_bytes > 0
    }
}

pub(crate) struct NeedleAnalysis {
    pub windows: [SafeWindow; NUM_SCRIPT_CLASSES],
}

impl NeedleAnalysis {
    pub(crate) fn window(&self, class: ScriptClass) -> &SafeWindow {
        &self.windows[class.index()]
    }
}

const MAX_PROBE_OFFSET: usize = 63;

const LATIN1AB_RANGE: std::ops::RangeInclusive<u32> = 0x0080..=0x02FF;
const KELVIN_SIGN_ALIAS: u32 = 0x00E5; // å — also reached by U+212B, a 3-byte codepoint.
const CYRILLIC_RANGE: std::ops::RangeInclusive<u32> = 0x0400..=0x04FF;
// Historical Cyrillic Extended-A: forcing the kernel's D1->D0 lead-byte
// substitution on this range would alias it onto U+0420..U+043F, so the
// kernel routes needles touching it to the serial engine instead.
const CYRILLIC_EXCLUDED: std::ops::RangeInclusive<u32> = 0x0460..=0x047F;
const GREEK_RANGE: std::ops::RangeInclusive<u32> = 0x0370..=0x03FF;
const ARMENIAN_RANGE: std::ops::RangeInclusive<u32> = 0x0530..=0x058F;
const VIETNAMESE_RANGE: std::ops::RangeInclusive<u32> = 0x1E00..=0x1EFF;
const VIETNAMESE_EXCLUDED: std::ops::RangeInclusive<u32> = 0x1E96..=0x1E9F;

struct CharInfo {
    start: usize,
    end: usize,
    safe: [bool; NUM_SCRIPT_CLASSES],
    specific: [bool; NUM_SCRIPT_CLASSES],
}

pub(crate) fn analyze(needle: &str) -> NeedleAnalysis {
    let chars: SmallVec<[char; 64]> = needle.chars().collect();
    let infos = build_char_infos(needle, &chars);

    let mut windows = [SafeWindow::default(); NUM_SCRIPT_CLASSES];
    for class in ScriptClass::ALL {
        windows[class.index()] = best_window_for_class(&infos, class);
    }
    NeedleAnalysis { windows }
}

fn build_char_infos(needle: &str, chars: &[char]) -> Vec<CharInfo> {
    let mut infos = Vec::with_capacity(chars.len());
    let mut byte_pos = 0usize;
    for (i, &c) in chars.iter().enumerate() {
        let start = byte_pos;
        let end = start + c.len_utf8();
        byte_pos = end;

        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();

        let mut safe = [false; NUM_SCRIPT_CLASSES];
        let mut specific = [false; NUM_SCRIPT_CLASSES];

        let ascii_ok = c.is_ascii() && is_ascii_safe(c, prev, next);
        safe[ScriptClass::Ascii.index()] = ascii_ok;
        specific[ScriptClass::Ascii.index()] = c.is_ascii_alphabetic();

        let cp = c as u32;
        let latin1ab_specific = LATIN1AB_RANGE.contains(&cp) && cp != KELVIN_SIGN_ALIAS;
        let latin1ab_ok = ascii_ok || latin1ab_specific;
        safe[ScriptClass::Latin1Ab.index()] = latin1ab_ok;
        specific[ScriptClass::Latin1Ab.index()] = latin1ab_specific;

        let cyrillic_specific = CYRILLIC_RANGE.contains(&cp) && !CYRILLIC_EXCLUDED.contains(&cp);
        safe[ScriptClass::Cyrillic.index()] = ascii_ok || cyrillic_specific;
        specific[ScriptClass::Cyrillic.index()] = cyrillic_specific;

        let greek_specific = GREEK_RANGE.contains(&cp);
        safe[ScriptClass::Greek.index()] = ascii_ok || greek_specific;
        specific[ScriptClass::Greek.index()] = greek_specific;

        let armenian_specific = ARMENIAN_RANGE.contains(&cp);
        safe[ScriptClass::Armenian.index()] = ascii_ok || armenian_specific;
        specific[ScriptClass::Armenian.index()] = armenian_specific;

        let vietnamese_specific =
            VIETNAMESE_RANGE.contains(&cp) && !VIETNAMESE_EXCLUDED.contains(&cp);
        safe[ScriptClass::Vietnamese.index()] = latin1ab_ok || vietnamese_specific;
        specific[ScriptClass::Vietnamese.index()] = vietnamese_specific || latin1ab_specific;

        infos.push(CharInfo {
            start,
            end,
            safe,
            specific,
        });
    }
    debug_assert_eq!(byte_pos, needle.len());
    infos
}

fn ascii_letter_safe(c: char, prev: Option<char>, next: Option<char>) -> bool {
    let lower = c.to_ascii_lowercase();
    if "bcdegkmopqruvxz".contains(lower) {
        return true;
    }
    let next_ascii = next.map_or(true, |n| n.is_ascii());
    let prev_ascii = prev.map_or(true, |p| p.is_ascii());
    let prev_lower = prev.map(|p| p.to_ascii_lowercase());
    let next_lower = next.map(|n| n.to_ascii_lowercase());

    match lower {
        'a' | 'h' | 'j' | 'w' | 'y' => next_ascii,
        'n' => prev_ascii,
        'i' => next_ascii && prev_lower != Some('f'),
        'l' => prev_lower != Some('f'),
        't' => next_ascii && prev_lower != Some('s'),
        'f' => {
            let prev_ok = prev.map_or(true, |p| p.is_ascii()) && prev_lower != Some('f');
            let next_ok = next_ascii
                && !matches!(next_lower, Some('f') | Some('i') | Some('l'));
            prev_ok && next_ok
        }
        's' => {
            let prev_ok = prev.map_or(true, |p| p.is_ascii()) && prev_lower != Some('s');
            let next_ok = next_ascii && !matches!(next_lower, Some('s') | Some('t'));
            prev_ok && next_ok
        }
        _ => true,
    }
}

fn is_ascii_safe(c: char, prev: Option<char>, next: Option<char>) -> bool {
    debug_assert!(c.is_ascii());
    if !c.is_ascii_alphabetic() {
        return true;
    }
    ascii_letter_safe(c, prev, next)
}

fn best_window_for_class(infos: &[CharInfo], class: ScriptClass) -> SafeWindow {
    let idx = class.index();
    let mut best: Option<(usize, usize, bool)> = None; // (start_idx, end_idx_exclusive, has_specific)
    let mut cur_start: Option<usize> = None;
    let mut cur_has_specific = false;

    for (i, info) in infos.iter().enumerate() {
        if info.safe[idx] {
            if cur_start.is_none() {
                cur_start = Some(i);
                cur_has_specific = false;
            }
            cur_has_specific |= info.specific[idx];
        } else {
            close_run(&mut best, &mut cur_start, cur_has_specific, i);
            cur_has_specific = false;
        }
    }
    close_run(&mut best, &mut cur_start, cur_has_specific, infos.len());

    match best {
        Some((start_idx, end_idx, true)) if end_idx > start_idx => {
            build_safe_window(infos, start_idx, end_idx)
        }
        _ => SafeWindow::default(),
    }
}

fn close_run(
    best: &mut Option<(usize, usize, bool)>,
    cur_start: &mut Option<usize>,
    has_specific: bool,
    end_idx: usize,
) {
    if let Some(start_idx) = cur_start.take() {
        let len = end_idx - start_idx;
        let better = match best {
            Some((bs, be, _)) => len > *be - *bs,
            None => true,
        };
        if better {
            *best = Some((start_idx, end_idx, has_specific));
        }
    }
}

fn build_safe_window(infos: &[CharInfo], start_idx: usize, end_idx: usize) -> SafeWindow {
    let start_byte = infos[start_idx].start;
    let end_byte = infos[end_idx - 1].end;
    let length_bytes = end_byte - start_byte;

    let mid_idx = start_idx + (end_idx - start_idx) / 2;
    let probe = |i: usize| -> (usize, u8) {
        let info = &infos[i];
        let last_byte_offset = info.end - 1 - start_byte;
        let prefix = (info.end - info.start - 1) as u8;
        (last_byte_offset.min(MAX_PROBE_OFFSET), prefix)
    };

    let (probe_first, prefix_first) = probe(start_idx);
    let (probe_mid, prefix_mid) = probe(mid_idx);
    let (probe_last, prefix_last) = probe(end_idx - 1);

    SafeWindow {
        start_byte,
        length_bytes,
        probe_first,
        probe_mid: probe_mid.max(probe_first),
        probe_last: probe_last.max(probe_mid).max(probe_first),
        prefix_first,
        prefix_mid,
        prefix_last,
    }
}
