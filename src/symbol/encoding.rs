//! # Digit Encoding
//!
//! Every digit of an EAN/UPC symbol occupies seven modules. The module
//! pattern comes from one of three code sets, all derived from the L-code
//! table:
//!
//! | Set | Derivation | Used for |
//! |-----|------------|----------|
//! | L | table value | left half (EAN-8, UPC-A, EAN-13 by parity) |
//! | G | `!reverse7(L)` | left half of EAN-13 by parity |
//! | R | `!L` | right half of every symbol |
//!
//! ```
//! use oled_barcode::symbol::{encode, Variant};
//!
//! assert_eq!(encode(0, Variant::L).bits(), 0b0001101);
//! assert_eq!(encode(0, Variant::R).bits(), 0b1110010);
//! assert_eq!(encode(0, Variant::G).bits(), 0b0100111);
//! ```

use super::tables::{EAN13_PARITY, L_CODES};

/// Number of modules (and pixels) per encoded digit.
pub const MODULES_PER_DIGIT: usize = 7;

const MASK7: u8 = 0x7F;

/// Code set used to encode a single digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Odd parity, left half
    L,
    /// Even parity, left half (EAN-13 only)
    G,
    /// Right half
    R,
}

/// Seven bar/space modules of one digit, most significant bit on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModulePattern(u8);

impl ModulePattern {
    /// Wrap a raw value, discarding everything above the low seven bits.
    #[inline]
    pub const fn new(bits: u8) -> Self {
        Self(bits & MASK7)
    }

    /// The 7-bit pattern value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether module `index` (0 = leftmost) is a bar.
    #[inline]
    pub const fn is_bar(self, index: usize) -> bool {
        index < MODULES_PER_DIGIT && self.0 & (1 << (6 - index)) != 0
    }

    /// Modules from left to right, `true` for a bar.
    pub fn modules(self) -> impl Iterator<Item = bool> {
        (0..MODULES_PER_DIGIT).map(move |i| self.is_bar(i))
    }
}

/// Reverse the order of the seven low bits (bit 0 ↔ bit 6, bit 3 stays).
///
/// The high bit of the input is ignored.
pub const fn reverse7(value: u8) -> u8 {
    (value & MASK7).reverse_bits() >> 1
}

/// Bitwise complement restricted to seven bits.
#[inline]
pub const fn complement7(value: u8) -> u8 {
    !value & MASK7
}

/// Encode a digit in the requested code set.
///
/// Digits are validated by the classifier; anything above 9 is a caller bug.
pub fn encode(digit: u8, variant: Variant) -> ModulePattern {
    debug_assert!(digit <= 9, "digit out of range: {digit}");
    let l = L_CODES[usize::from(digit % 10)];
    let bits = match variant {
        Variant::L => l,
        Variant::R => complement7(l),
        Variant::G => complement7(reverse7(l)),
    };
    ModulePattern::new(bits)
}

/// Code set for an EAN-13 left-half data digit.
///
/// `position` counts left-hand data digits from 1 to 6; the leading digit of
/// the 13-digit string selects the parity pattern.
pub fn parity_variant(first_digit: u8, position: usize) -> Variant {
    debug_assert!((1..=6).contains(&position), "position out of range: {position}");
    let selector = EAN13_PARITY[usize::from(first_digit % 10)];
    let bit = 5 - (position.clamp(1, 6) - 1);
    if selector & (1 << bit) != 0 {
        Variant::G
    } else {
        Variant::L
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse7_swaps_mirror_bits() {
        assert_eq!(reverse7(0b1000000), 0b0000001);
        assert_eq!(reverse7(0b0100000), 0b0000010);
        assert_eq!(reverse7(0b0001000), 0b0001000);
        assert_eq!(reverse7(0b0001101), 0b1011000);
        // High bit never leaks into the result
        assert_eq!(reverse7(0b1000_0000), 0);
    }

    #[test]
    fn test_reverse7_is_involution() {
        for v in 0..=MASK7 {
            assert_eq!(reverse7(reverse7(v)), v);
        }
    }

    #[test]
    fn test_complement_masks_to_seven_bits() {
        assert_eq!(complement7(0b0001101), 0b1110010);
        assert_eq!(complement7(0), MASK7);
        assert_eq!(complement7(0xFF), 0);
    }

    #[test]
    fn test_code_set_laws() {
        for d in 0..=9u8 {
            let l = encode(d, Variant::L).bits();
            assert_eq!(l, L_CODES[d as usize]);
            assert_eq!(encode(d, Variant::R).bits(), !l & 0x7F);
            assert_eq!(encode(d, Variant::G).bits(), !reverse7(l) & 0x7F);
            // G is the mirror image of R
            assert_eq!(encode(d, Variant::G).bits(), reverse7(encode(d, Variant::R).bits()));
        }
    }

    #[test]
    fn test_known_patterns() {
        assert_eq!(encode(0, Variant::R).bits(), 0b1110010);
        assert_eq!(encode(9, Variant::R).bits(), 0b1110100);
        assert_eq!(encode(1, Variant::G).bits(), 0b0110011);
        assert_eq!(encode(5, Variant::G).bits(), 0b0111001);
    }

    #[test]
    fn test_right_codes_start_with_bar() {
        for d in 0..=9u8 {
            let r = encode(d, Variant::R);
            assert!(r.is_bar(0));
            assert!(!r.is_bar(6));
            let l = encode(d, Variant::L);
            assert!(!l.is_bar(0));
            assert!(l.is_bar(6));
        }
    }

    #[test]
    fn test_modules_msb_first() {
        let modules: Vec<bool> = ModulePattern::new(0b0001101).modules().collect();
        assert_eq!(modules, vec![false, false, false, true, true, false, true]);
        assert!(!ModulePattern::new(0x7F).is_bar(7));
    }

    #[test]
    fn test_parity_first_digit_zero_is_all_l() {
        for position in 1..=6 {
            assert_eq!(parity_variant(0, position), Variant::L);
        }
    }

    #[test]
    fn test_parity_first_digit_one() {
        // Selector 0b001011: position 1 -> bit 5 ... position 6 -> bit 0
        let variants: Vec<Variant> = (1..=6).map(|p| parity_variant(1, p)).collect();
        assert_eq!(
            variants,
            vec![Variant::L, Variant::L, Variant::G, Variant::L, Variant::G, Variant::G]
        );
    }
}
