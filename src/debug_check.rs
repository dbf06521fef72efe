//! debug_check.rs — the `cfg(debug_assertions)` cross-verification harness.
//!
//! Every `ScriptKernel`'s output must agree with the serial engine's
//! (P6, spec's SIMD ≡ Serial law). This module is compiled only into
//! debug builds, exactly as the teacher's `src/testing/stage_contract.rs`
//! compiled its `assert_stage_contract!` macro only for test runs — the
//! release build carries none of this.

use crate::serial_search::find_serial;
use std::fmt;

/// Disagreement between a kernel's result and the serial engine's, for a
/// given `(haystack, needle)` pair. Implements `Display` via `thiserror`
/// so the contract macro's `panic!` gets a readable message; this is the
/// one place in the crate with a fallible-shaped type, and it is never
/// part of the public API.
#[derive(Debug, thiserror::Error)]
#[error(
    "kernel/serial disagreement on needle {needle:?} in haystack of {haystack_len} bytes: \
     kernel={kernel_result:?} serial={serial_result:?}"
)]
pub(crate) struct KernelMismatch {
    pub needle: String,
    pub haystack_len: usize,
    pub kernel_result: Option<(usize, usize)>,
    pub serial_result: Option<(usize, usize)>,
}

/// Run `kernel_find` and the serial engine on the same input and return
/// `Err` describing the mismatch if they disagree. A no-op in release
/// builds' call sites, which skip calling this entirely.
pub(crate) fn check_kernel_agrees(
    haystack: &str,
    needle: &str,
    kernel_result: Option<(usize, usize)>,
) -> Result<(), KernelMismatch> {
    let serial_result = find_serial(haystack, needle);
    if kernel_result == serial_result {
        Ok(())
    } else {
        Err(KernelMismatch {
            needle: needle.to_string(),
            haystack_len: haystack.len(),
            kernel_result,
            serial_result,
        })
    }
}

/// Asserts a kernel's result agrees with the serial engine's, panicking
/// with the mismatch's `Display` output otherwise. Only ever invoked from
/// `#[cfg(debug_assertions)]` call sites.
macro_rules! assert_kernel_contract {
    ($haystack:expr, $needle:expr, $kernel_result:expr) => {
        if let Err(mismatch) =
            $crate::debug_check::check_kernel_agrees($haystack, $needle, $kernel_result)
        {
            panic!("{}", mismatch);
        }
    };
}

pub(crate) use assert_kernel_contract;
