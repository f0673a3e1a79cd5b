//! # oled-barcode - Retail Barcodes on Small Monochrome Panels
//!
//! oled-barcode lays out EAN-8, EAN-13 and UPC-A symbols pixel by pixel on
//! small OLED panels such as the 128x32 SSD1306. It provides:
//!
//! - **Symbol encoding**: L/G/R code sets, EAN-13 parity, input validation
//! - **Layout engine**: centered guards, modules and human-readable digits
//! - **Canvas**: in-memory framebuffer with PBM, PNG and SSD1306 page export
//! - **Console**: the `barcode` / `dump` command shell of the panel
//! - **Transport**: chunked frame writes to a device or file
//!
//! ## Quick Start
//!
//! ```
//! use oled_barcode::{
//!     display::{Canvas, DisplayConfig},
//!     render::BarcodeRenderer,
//! };
//!
//! // Panel geometry
//! let config = DisplayConfig::SSD1306_128X32;
//!
//! // Blank framebuffer for that panel
//! let mut canvas = Canvas::for_display(&config)?;
//!
//! // Lay out a UPC-A symbol
//! let report = BarcodeRenderer::new(config).render(&mut canvas, "036000291452")?;
//! assert_eq!(report.layout.start, 16);
//!
//! // Inspect the result
//! let pbm = canvas.to_pbm();
//! assert!(pbm.starts_with("P1\n128 32\n"));
//!
//! # Ok::<(), oled_barcode::error::OledError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbol`] | Digit encoding and classification |
//! | [`render`] | Layout engine |
//! | [`display`] | Drawing surface trait, canvas, panel presets |
//! | [`console`] | Command shell |
//! | [`transport`] | Frame output |
//! | [`error`] | Error types |
//!
//! ## Check Digits
//!
//! The last digit is drawn as given. Enable
//! [`RenderOptions::verify_check_digit`](render::RenderOptions) to reject
//! codes whose mod-10 check digit is wrong.

pub mod console;
pub mod display;
pub mod error;
pub mod render;
pub mod symbol;
pub mod transport;

// Re-exports for convenience
pub use display::{Canvas, DisplayConfig, DrawColor, DrawSurface};
pub use error::{OledError, SymbolError};
pub use render::{BarcodeRenderer, RenderOptions, RenderReport};
pub use symbol::{Symbol, Symbology};
