//! # Symbol Encoding
//!
//! Everything needed to turn a digit string into bar/space modules, with no
//! knowledge of pixels.
//!
//! ## Modules
//!
//! - [`tables`]: L-code and EAN-13 parity lookup tables
//! - [`encoding`]: L/G/R code sets and the parity resolver
//! - [`classify`]: input validation and symbology detection
//! - [`check`]: optional mod-10 check digits
//!
//! ## Symbol Structure
//!
//! ```text
//! EAN-13:  d0 | 101 | d1..d6 (L/G) | 01010 | d7..d12 (R) | 101
//! UPC-A:        101 | d0..d5 (L)   | 01010 | d6..d11 (R) | 101
//! EAN-8:        101 | d0..d3 (L)   | 01010 | d4..d7  (R) | 101
//! ```

pub mod check;
pub mod classify;
pub mod encoding;
pub mod tables;

pub use classify::{Symbol, Symbology, classify};
pub use encoding::{MODULES_PER_DIGIT, ModulePattern, Variant, encode, parity_variant};
