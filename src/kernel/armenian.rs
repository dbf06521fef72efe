//! Armenian kernel: basic Armenian block (U+0530..U+058F). Excludes the
//! ligature U+0587 and the ligature presentation forms U+FB13..U+FB17,
//! both one-to-many fold expansions outside this kernel's length-
//! preserving domain.

use crate::kernel::define_kernel;

define_kernel!(Armenian, crate::analyzer::ScriptClass::Armenian, |c| {
    let cp = c as u32;
    (c.is_ascii() || matches!(cp, 0x0530..=0x058F)) && cp != 0x0587
});
