//! Horizontal geometry of a rendered symbol.

use serde::Serialize;

use std::ops::Range;

use crate::display::DisplayConfig;
use crate::display::font::GLYPH_WIDTH;
use crate::symbol::{MODULES_PER_DIGIT, Symbology};

/// Fixed pixel cost on top of seven pixels per digit.
///
/// Start guard (3) + center guard (5) + end guard (3).
pub const GUARD_PIXELS: usize = 11;

/// Gap between the leading digit glyph and the start guard.
pub const LEADING_GLYPH_OFFSET: i32 = 6;

/// Gap between the end guard and the UPC-A trailing glyph.
pub const TRAILING_GLYPH_GAP: i32 = 1;

/// Pixel width budgeted for a symbol with `digits` digits.
///
/// For EAN-13 the leading digit has no bars; its seven columns hold the
/// standalone glyph left of the start guard.
pub const fn symbol_width(digits: usize) -> usize {
    digits * MODULES_PER_DIGIT + GUARD_PIXELS
}

/// Column of the start guard for a symbol centered on a panel.
///
/// Negative when the symbol is wider than the panel.
pub fn start_column(display_width: u32, digits: usize) -> i32 {
    (display_width as i32 - symbol_width(digits) as i32) / 2
}

/// Geometry computed before drawing starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub symbology: Symbology,
    /// First right-half digit index
    pub midpoint: usize,
    /// Column of the first start guard bar
    pub start: i32,
    /// Budgeted symbol width, `digits * 7 + 11`
    pub width: usize,
    /// Height of regular data bars
    pub bar_height: u32,
    /// Height of guards and UPC-A edge digits
    pub full_height: u32,
    /// Glyph baseline row
    pub baseline: i32,
}

impl Layout {
    pub fn new(config: &DisplayConfig, symbology: Symbology) -> Self {
        let digits = symbology.digit_count();
        Self {
            symbology,
            midpoint: symbology.midpoint(),
            start: start_column(config.width, digits),
            width: symbol_width(digits),
            bar_height: config.bar_height(),
            full_height: config.height,
            baseline: config.baseline(),
        }
    }

    /// Columns covered by guards and data bars.
    pub fn bar_columns(&self) -> Range<i32> {
        let bar_digits = self.symbology.digit_count() - self.symbology.first_data_index();
        let width = (bar_digits * MODULES_PER_DIGIT + GUARD_PIXELS) as i32;
        self.start..self.start + width
    }

    /// Columns that may receive ink, including glyphs outside the guards.
    pub fn ink_columns(&self, human_readable: bool) -> Range<i32> {
        let bars = self.bar_columns();
        if !human_readable {
            return bars;
        }
        match self.symbology {
            Symbology::Ean8 => bars,
            Symbology::Ean13 => bars.start - LEADING_GLYPH_OFFSET..bars.end,
            Symbology::UpcA => {
                bars.start - LEADING_GLYPH_OFFSET
                    ..bars.end + TRAILING_GLYPH_GAP + GLYPH_WIDTH as i32
            }
        }
    }

    /// Whether everything drawn lands on the panel.
    pub fn fits(&self, config: &DisplayConfig, human_readable: bool) -> bool {
        let ink = self.ink_columns(human_readable);
        ink.start >= 0 && ink.end <= config.width as i32
    }
}
