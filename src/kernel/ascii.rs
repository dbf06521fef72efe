//! ASCII kernel: the fold-register is just `to_ascii_lowercase`. Because
//! ASCII letters can appear inside multibyte fold expansions (`fi`, `ß`),
//! the analyzer's safe-window gating for this class is strict (see the
//! contextual letter rules in `analyzer.rs`).

use crate::kernel::define_kernel;

define_kernel!(Ascii, crate::analyzer::ScriptClass::Ascii, |c| c.is_ascii());
