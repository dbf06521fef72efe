//! Greek kernel: Greek and Coptic block (U+0370..U+03FF). Polytonic Greek
//! (`E1 BC..BF`, Greek Extended) is outside this kernel's domain and
//! routed to the serial engine.

use crate::kernel::define_kernel;

define_kernel!(Greek, crate::analyzer::ScriptClass::Greek, |c| {
    c.is_ascii() || matches!(c as u32, 0x0370..=0x03FF)
});
