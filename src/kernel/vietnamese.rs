//! Vietnamese kernel: Latin-1AB plus Latin Extended Additional
//! (U+1E00..U+1EFF), excluding U+1E96..U+1E9F (multi-codepoint
//! expansions). Haystack chunks under this kernel may mix 2- and 3-byte
//! codepoints; the analyzer's safe-window selection already accounts for
//! that when it builds this class's window.

use crate::kernel::define_kernel;

define_kernel!(Vietnamese, crate::analyzer::ScriptClass::Vietnamese, |c| {
    let cp = c as u32;
    let latin1ab = c.is_ascii() || matches!(cp, 0x0080..=0x02FF if c != 'å');
    let extended = matches!(cp, 0x1E00..=0x1EFF) && !matches!(cp, 0x1E96..=0x1E9F);
    latin1ab || extended
});
