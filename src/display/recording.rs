//! Drawing surface that records operations instead of pixels.
//!
//! Useful for asserting exact coordinates issued by the layout engine.
//!
//! ```
//! use oled_barcode::display::{DisplayConfig, DrawOp, RecordingSurface};
//! use oled_barcode::render;
//!
//! let mut surface = RecordingSurface::new();
//! render::render(&mut surface, &DisplayConfig::SSD1306_128X32, "96385074").unwrap();
//! assert_eq!(surface.ops().last(), Some(&DrawOp::SendBuffer));
//! ```

use super::font::GLYPH_HEIGHT;
use super::{DrawColor, DrawSurface};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    FillRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: DrawColor,
    },
    SetDrawColor(DrawColor),
    VLine {
        x: i32,
        y: i32,
        len: u32,
    },
    Glyph {
        x: i32,
        baseline: i32,
        ch: char,
    },
    SendBuffer,
}

/// Records every draw call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded vertical lines as `(x, y, len)`.
    pub fn vlines(&self) -> Vec<(i32, i32, u32)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::VLine { x, y, len } => Some((x, y, len)),
                _ => None,
            })
            .collect()
    }

    /// Recorded glyphs as `(x, baseline, ch)`.
    pub fn glyphs(&self) -> Vec<(i32, i32, char)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Glyph { x, baseline, ch } => Some((x, baseline, ch)),
                _ => None,
            })
            .collect()
    }

    /// Leftmost and rightmost stroked columns.
    pub fn stroke_extent(&self) -> Option<(i32, i32)> {
        let xs = self.vlines().into_iter().map(|(x, _, _)| x);
        xs.fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: DrawColor) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn set_draw_color(&mut self, color: DrawColor) {
        self.ops.push(DrawOp::SetDrawColor(color));
    }

    fn draw_vline(&mut self, x: i32, y: i32, len: u32) {
        self.ops.push(DrawOp::VLine { x, y, len });
    }

    fn draw_glyph(&mut self, x: i32, baseline: i32, ch: char) {
        self.ops.push(DrawOp::Glyph { x, baseline, ch });
    }

    fn glyph_height(&self) -> u32 {
        GLYPH_HEIGHT as u32
    }

    fn send_buffer(&mut self) {
        self.ops.push(DrawOp::SendBuffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut s = RecordingSurface::new();
        s.set_draw_color(DrawColor::Off);
        s.draw_vline(5, 0, 10);
        s.draw_glyph(7, 31, '4');
        s.draw_vline(2, 0, 3);
        s.send_buffer();

        assert_eq!(s.ops().len(), 5);
        assert_eq!(s.vlines(), vec![(5, 0, 10), (2, 0, 3)]);
        assert_eq!(s.glyphs(), vec![(7, 31, '4')]);
        assert_eq!(s.stroke_extent(), Some((2, 5)));
    }

    #[test]
    fn test_empty_extent() {
        assert_eq!(RecordingSurface::new().stroke_extent(), None);
    }
}
