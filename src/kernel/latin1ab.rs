//! Latin-1AB kernel: Latin-1 Supplement, Latin Extended-A/B, IPA
//! Extensions (2-byte sequences, lead bytes `C2`..`CA`). Excludes `å`
//! (U+00E5) because the Kelvin sign (U+212B, 3-byte) also folds to it —
//! a cross-byte-width alias this kernel's length-preserving fold can't
//! represent (see `rune::cross_width_aliases`).

use crate::kernel::define_kernel;

define_kernel!(Latin1Ab, crate::analyzer::ScriptClass::Latin1Ab, |c| {
    c.is_ascii() || matches!(c as u32, 0x0080..=0x02FF if c != 'å')
});
