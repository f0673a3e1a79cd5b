//! Symbol classification: validate a digit string and decide its symbology.

use serde::Serialize;
use std::fmt;

use super::encoding::{ModulePattern, Variant, encode, parity_variant};
use crate::error::SymbolError;

/// Supported retail symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbology {
    #[serde(rename = "EAN-8")]
    Ean8,
    #[serde(rename = "EAN-13")]
    Ean13,
    #[serde(rename = "UPC-A")]
    UpcA,
}

impl Symbology {
    /// Determine the symbology from the number of digits.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            8 => Some(Self::Ean8),
            12 => Some(Self::UpcA),
            13 => Some(Self::Ean13),
            _ => None,
        }
    }

    /// Total digit count, including the EAN-13 leading digit.
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Ean8 => 8,
            Self::UpcA => 12,
            Self::Ean13 => 13,
        }
    }

    /// Index of the first right-half digit.
    pub const fn midpoint(self) -> usize {
        match self {
            Self::Ean8 => 4,
            Self::UpcA => 6,
            Self::Ean13 => 7,
        }
    }

    /// Index of the first bar-encoded digit.
    ///
    /// The EAN-13 leading digit is carried by the left-half parity pattern
    /// instead of bars of its own.
    pub const fn first_data_index(self) -> usize {
        match self {
            Self::Ean13 => 1,
            Self::Ean8 | Self::UpcA => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ean8 => "EAN-8",
            Self::Ean13 => "EAN-13",
            Self::UpcA => "UPC-A",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a digit string, returning its symbology and midpoint.
///
/// The length is checked before the characters, so an overlong string with
/// letters in it is always `InvalidSize`.
pub fn classify(input: &str) -> Result<(Symbology, usize), SymbolError> {
    let symbol = Symbol::parse(input)?;
    Ok((symbol.symbology(), symbol.midpoint()))
}

/// A validated barcode digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    symbology: Symbology,
    digits: Vec<u8>,
}

impl Symbol {
    /// Validate `input` and convert it to digit values.
    ///
    /// Length is measured in bytes, so a multi-byte character counts once
    /// per byte.
    pub fn parse(input: &str) -> Result<Self, SymbolError> {
        let symbology =
            Symbology::from_len(input.len()).ok_or(SymbolError::InvalidSize(input.len()))?;
        let digits = digit_values(input)?;
        Ok(Self { symbology, digits })
    }

    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    pub fn midpoint(&self) -> usize {
        self.symbology.midpoint()
    }

    /// Digit values, leading digit included.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Positions drawn as bars, in left-to-right order.
    pub fn data_positions(&self) -> std::ops::Range<usize> {
        self.symbology.first_data_index()..self.digits.len()
    }

    /// Character at `index`, for human-readable text.
    pub fn char_at(&self, index: usize) -> char {
        char::from(b'0' + self.digits[index])
    }

    /// Code set for the digit at `index`.
    pub fn variant_at(&self, index: usize) -> Variant {
        if index >= self.midpoint() {
            Variant::R
        } else if self.symbology == Symbology::Ean13 {
            parity_variant(self.digits[0], index)
        } else {
            Variant::L
        }
    }

    /// Module pattern for the digit at `index`.
    pub fn pattern_at(&self, index: usize) -> ModulePattern {
        encode(self.digits[index], self.variant_at(index))
    }

    /// UPC-A draws its first and last digits as long bars without text.
    pub fn is_long_digit(&self, index: usize) -> bool {
        self.symbology == Symbology::UpcA && (index == 0 || index + 1 == self.digits.len())
    }
}

/// Convert ASCII digits to values.
///
/// `index` in the error is the byte offset of the first offending character.
pub(crate) fn digit_values(input: &str) -> Result<Vec<u8>, SymbolError> {
    input
        .char_indices()
        .map(|(index, found)| {
            if found.is_ascii_digit() {
                Ok(found as u8 - b'0')
            } else {
                Err(SymbolError::InvalidDigit { index, found })
            }
        })
        .collect()
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.digits.len() {
            write!(f, "{}", self.char_at(i))?;
        }
        Ok(())
    }
}
