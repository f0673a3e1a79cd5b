//! # Display Module
//!
//! The drawing surface the layout engine paints on, and an in-memory
//! implementation of it.
//!
//! ## Modules
//!
//! - [`config`]: Panel dimensions and colour presets
//! - [`canvas`]: Monochrome framebuffer with PBM/PNG/SSD1306 export
//! - [`font`]: Digit glyphs for human-readable text
//! - [`recording`]: Surface that records draw calls instead of pixels
//!
//! ## Coordinates
//!
//! Origin is the top-left pixel, x grows right and y grows down. Coordinates
//! are signed so that a symbol wider than the panel can start left of column
//! zero; surfaces clip anything outside the panel.

pub mod canvas;
pub mod config;
pub mod font;
pub mod recording;

pub use canvas::Canvas;
pub use config::DisplayConfig;
pub use recording::{DrawOp, RecordingSurface};

/// Logical pixel state of a monochrome panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawColor {
    /// Pixel dark (index 0)
    #[default]
    Off,
    /// Pixel lit (index 1)
    On,
}

impl DrawColor {
    /// The other colour.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Drawing primitives needed to lay out a barcode.
///
/// Implementations own the pixel buffer; callers only issue operations.
/// Strokes and glyphs use the colour last passed to
/// [`set_draw_color`](Self::set_draw_color).
pub trait DrawSurface {
    /// Fill a rectangle with an explicit colour.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: DrawColor);

    /// Select the colour for subsequent strokes and glyphs.
    fn set_draw_color(&mut self, color: DrawColor);

    /// Draw a one pixel wide vertical line of `len` pixels starting at `(x, y)`.
    fn draw_vline(&mut self, x: i32, y: i32, len: u32);

    /// Draw a single character whose bottom row sits on `baseline`.
    fn draw_glyph(&mut self, x: i32, baseline: i32, ch: char);

    /// Height of a glyph cell in pixels.
    fn glyph_height(&self) -> u32;

    /// Publish the drawn buffer to the panel.
    fn send_buffer(&mut self);
}
