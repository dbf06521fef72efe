//! 1-byte tier (≤ U+007F). Only `A..Z` fold; everything else is self.

use crate::rune::Folded;

#[inline]
pub(crate) fn fold(c: char) -> Folded {
    debug_assert!((c as u32) <= 0x7F);
    if c.is_ascii_uppercase() {
        Folded::one(c.to_ascii_lowercase())
    } else {
        Folded::one(c)
    }
}
