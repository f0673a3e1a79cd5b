//! Fixed lookup tables for EAN/UPC symbol encoding.

/// L-code module patterns, indexed by digit.
///
/// Bit 6 is the leftmost module of the digit, 1 = bar, 0 = space.
/// Every entry starts with a space and ends with a bar.
pub const L_CODES: [u8; 10] = [
    0b0001101, // 0
    0b0011001, // 1
    0b0010011, // 2
    0b0111101, // 3
    0b0100011, // 4
    0b0110001, // 5
    0b0101111, // 6
    0b0111011, // 7
    0b0110111, // 8
    0b0001011, // 9
];

/// EAN-13 left-half parity selectors, indexed by the leading digit.
///
/// Bit 5 governs the first left-hand data digit, bit 0 the sixth.
/// A set bit selects the G-code, a clear bit the L-code.
pub const EAN13_PARITY: [u8; 10] = [
    0b000000, // 0
    0b001011, // 1
    0b001101, // 2
    0b001110, // 3
    0b010011, // 4
    0b011001, // 5
    0b011100, // 6
    0b010101, // 7
    0b010110, // 8
    0b011010, // 9
];
