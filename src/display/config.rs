//! # Display Configuration
//!
//! This module defines the panels a barcode can be laid out on.
//!
//! ## Supported Panels
//!
//! | Preset | Width | Height | Background |
//! |--------|-------|--------|------------|
//! | SSD1306_128X32 | 128 | 32 | lit |
//! | SSD1306_128X64 | 128 | 64 | lit |
//!
//! ## Usage
//!
//! ```
//! use oled_barcode::display::DisplayConfig;
//!
//! let config = DisplayConfig::SSD1306_128X32;
//! println!("{}: {}x{}, bars {} px tall",
//!          config.name,
//!          config.width,
//!          config.height,
//!          config.bar_height());
//! ```

use super::DrawColor;

/// Rows reserved under the short bars for human-readable digits.
pub const TEXT_BAND: u32 = 8;

/// # Display Configuration
///
/// Panel geometry and the colour used for the quiet background. Bars,
/// guards and digits are drawn in the inverse colour.
///
/// ## Vertical Layout
///
/// ```text
/// row 0            ┬ guards, long bars, short bars
///                  │
/// height - 9       ┴ last row of short bars
/// height - 8       ┬ text band
/// height - 1       ┴ glyph baseline
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Panel name
    pub name: &'static str,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Colour of the quiet zone and spaces
    pub background: DrawColor,
}

impl DisplayConfig {
    /// # SSD1306 128x32
    ///
    /// 0.91" I2C OLED. Dark bars on a lit background read best with phone
    /// scanners.
    pub const SSD1306_128X32: Self = Self {
        name: "SSD1306 128x32",
        width: 128,
        height: 32,
        background: DrawColor::On,
    };

    /// # SSD1306 128x64
    ///
    /// 0.96" I2C OLED, same width with taller bars.
    pub const SSD1306_128X64: Self = Self {
        name: "SSD1306 128x64",
        width: 128,
        height: 64,
        background: DrawColor::On,
    };

    /// Arbitrary panel size with a lit background.
    pub const fn custom(width: u32, height: u32) -> Self {
        Self {
            name: "custom",
            width,
            height,
            background: DrawColor::On,
        }
    }

    /// Swap background and bar colours.
    pub const fn inverted(mut self) -> Self {
        self.background = self.background.inverse();
        self
    }

    /// Colour of bars, guards and glyphs.
    #[inline]
    pub const fn foreground(&self) -> DrawColor {
        self.background.inverse()
    }

    /// Height of regular data bars, leaving room for the text band.
    #[inline]
    pub const fn bar_height(&self) -> u32 {
        self.height.saturating_sub(TEXT_BAND)
    }

    /// Row that glyphs sit on.
    #[inline]
    pub const fn baseline(&self) -> i32 {
        self.height as i32 - 1
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::SSD1306_128X32
    }
}
