//! # Error Types
//!
//! This module defines error types used throughout the oled-barcode library.

use thiserror::Error;

/// Input validation failures for a barcode digit string.
///
/// These are raised before any pixel is touched, so a failed render leaves
/// the drawing surface exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Length is not 8 (EAN-8), 12 (UPC-A) or 13 (EAN-13)
    #[error("Invalid size: expected 8, 12 or 13 digits, got {0}")]
    InvalidSize(usize),

    /// A character outside '0'..='9'
    #[error("Invalid digit {found:?} at position {index}")]
    InvalidDigit { index: usize, found: char },

    /// Mod-10 check digit does not match (only when verification is enabled)
    #[error("Check digit mismatch: expected {expected}, found {found}")]
    CheckDigit { expected: u8, found: u8 },

    /// Payload passed to check digit completion is not 7, 11 or 12 digits
    #[error("Invalid payload size: expected 7, 11 or 12 digits, got {0}")]
    InvalidPayloadSize(usize),
}

/// Main error type for oled-barcode operations
#[derive(Debug, Error)]
pub enum OledError {
    /// Barcode input rejected
    #[error("Symbol error: {0}")]
    Symbol(#[from] SymbolError),

    /// Glyph font could not be loaded
    #[error("Font error: {0}")]
    Font(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Transport-level errors (device open, write)
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON report serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
