//! Cyrillic kernel: basic Cyrillic block (U+0400..U+04FF). Rejects
//! Historical Cyrillic Extended-A (`D1 A0..BF`, U+0460..U+047F territory
//! reached through lead-byte folding): forcing `D1 -> D0` on folded
//! positions would alias U+0420..U+043F onto that range, so needles
//! touching it are routed to the serial engine instead.

use crate::kernel::define_kernel;

define_kernel!(Cyrillic, crate::analyzer::ScriptClass::Cyrillic, |c| {
    let cp = c as u32;
    (c.is_ascii() || matches!(cp, 0x0400..=0x04FF)) && !matches!(cp, 0x0460..=0x047F)
});
