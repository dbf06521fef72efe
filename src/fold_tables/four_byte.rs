//! 4-byte tier (U+10000 ..= U+10FFFF): the supplementary-plane bicameral
//! scripts — Deseret, Osage, Vithkuqi, Old Hungarian, Garay, Warang Citi,
//! Medefaidrin, Beria Erfe, Adlam.

use super::decode_row;
use crate::rune::Folded;
use phf::phf_map;

static IRREGULAR: phf::Map<u32, (u32, u32, u32, u8)> = phf_map! {
    // Vithkuqi isolated irregulars that fall outside the three
    // contiguous sub-ranges below.
    0x10570u32 => (0x10597, 0, 0, 1),
    0x10595u32 => (0x105BC, 0, 0, 1),
};

const fn offset_range(cp: u32, start: u32, end: u32, delta: i32) -> Option<char> {
    if cp < start || cp > end {
        return None;
    }
    char::from_u32((cp as i64 + delta as i64) as u32)
}

#[inline]
pub(crate) fn fold(c: char) -> Folded {
    let cp = c as u32;
    debug_assert!(cp > 0xFFFF);

    if let Some(&row) = IRREGULAR.get(&cp) {
        return decode_row(row);
    }

    if let Some(folded) = offset_range(cp, 0x10400, 0x10427, 0x28) {
        return Folded::one(folded); // Deseret
    }
    if let Some(folded) = offset_range(cp, 0x104B0, 0x104D3, 0x28) {
        return Folded::one(folded); // Osage
    }
    // Vithkuqi: three contiguous capital sub-ranges, delta +0x27.
    for &(start, end) in VITHKUQI_RANGES {
        if let Some(folded) = offset_range(cp, start, end, 0x27) {
            return Folded::one(folded);
        }
    }
    if let Some(folded) = offset_range(cp, 0x10C80, 0x10CB2, 0x40) {
        return Folded::one(folded); // Old Hungarian
    }
    if let Some(folded) = offset_range(cp, 0x10D50, 0x10D65, 0x20) {
        return Folded::one(folded); // Garay
    }
    if let Some(folded) = offset_range(cp, 0x118A0, 0x118BF, 0x20) {
        return Folded::one(folded); // Warang Citi
    }
    if let Some(folded) = offset_range(cp, 0x16E40, 0x16E5F, 0x20) {
        return Folded::one(folded); // Medefaidrin
    }
    if let Some(folded) = offset_range(cp, 0x10D40, 0x10D4F, 0x1B) {
        return Folded::one(folded); // Beria Erfe
    }
    if let Some(folded) = offset_range(cp, 0x1E900, 0x1E921, 0x22) {
        return Folded::one(folded); // Adlam
    }

    Folded::one(c)
}

const VITHKUQI_RANGES: &[(u32, u32)] = &[(0x10571, 0x10574), (0x10576, 0x1057A), (0x1057C, 0x1058A)];

#[cfg(test)]
mod tests {
    use super::fold;

    #[test]
    fn deseret_capital_folds() {
        let c = char::from_u32(0x10400).unwrap();
        assert_eq!(fold(c).as_slice(), &[char::from_u32(0x10428).unwrap()]);
    }

    #[test]
    fn adlam_capital_folds() {
        let c = char::from_u32(0x1E900).unwrap();
        assert_eq!(fold(c).as_slice(), &[char::from_u32(0x1E922).unwrap()]);
    }
}
