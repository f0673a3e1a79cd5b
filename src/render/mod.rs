//! # Barcode Layout Engine
//!
//! Lays out a validated symbol left to right and issues draw calls against a
//! [`DrawSurface`].
//!
//! ## Pixel Layout (EAN-13 on 128x32)
//!
//! ```text
//! column:  7     13    16           58      63            105   108
//!          │     │     │            │       │             │     │
//!          d0    101   d1 .. d6     01010   d7 .. d12     101   end
//!                      (L/G, 7px)           (R, 7px)
//! ```
//!
//! Guards are full height, data bars stop 8 rows short of the bottom and
//! digit glyphs sit on the last row.
//!
//! ## Usage
//!
//! ```
//! use oled_barcode::display::{Canvas, DisplayConfig};
//! use oled_barcode::render::BarcodeRenderer;
//! use oled_barcode::symbol::Symbology;
//!
//! let config = DisplayConfig::SSD1306_128X32;
//! let mut canvas = Canvas::for_display(&config)?;
//!
//! let report = BarcodeRenderer::new(config).render(&mut canvas, "5901234123457")?;
//! assert_eq!(report.layout.symbology, Symbology::Ean13);
//! assert_eq!(canvas.frames_sent(), 1);
//! # Ok::<(), oled_barcode::OledError>(())
//! ```

pub mod layout;

pub use layout::{GUARD_PIXELS, LEADING_GLYPH_OFFSET, Layout, start_column, symbol_width};

use serde::Serialize;

use crate::display::{DisplayConfig, DrawSurface};
use crate::error::SymbolError;
use crate::symbol::{Symbol, Symbology, check};

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw digit glyphs under and beside the bars
    pub human_readable: bool,
    /// Reject symbols whose last digit is not a valid mod-10 check digit
    pub verify_check_digit: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            human_readable: true,
            verify_check_digit: false,
        }
    }
}

/// Summary of a completed render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// The rendered digits
    pub code: String,
    #[serde(flatten)]
    pub layout: Layout,
    /// Column just right of the end guard
    pub end: i32,
    /// Some bars or glyphs fell outside the panel
    pub clipped: bool,
}

/// Draws EAN-8, EAN-13 and UPC-A symbols for one display geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarcodeRenderer {
    config: DisplayConfig,
    options: RenderOptions,
}

impl BarcodeRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Skip all digit glyphs.
    pub fn without_text(mut self) -> Self {
        self.options.human_readable = false;
        self
    }

    /// Require a valid check digit.
    pub fn verify_check_digit(mut self) -> Self {
        self.options.verify_check_digit = true;
        self
    }

    /// Validate `input` and draw it, finishing with `send_buffer()`.
    ///
    /// Validation happens before the first draw call, so an error leaves
    /// the surface untouched.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        input: &str,
    ) -> Result<RenderReport, SymbolError> {
        let symbol = Symbol::parse(input)?;
        if self.options.verify_check_digit {
            check::verify(&symbol)?;
        }
        Ok(self.draw(surface, &symbol))
    }

    /// Draw an already validated symbol.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, symbol: &Symbol) -> RenderReport {
        let layout = Layout::new(&self.config, symbol.symbology());
        let text = self.options.human_readable;
        let last = symbol.len() - 1;

        surface.fill_rect(
            0,
            0,
            self.config.width,
            self.config.height,
            self.config.background,
        );
        surface.set_draw_color(self.config.foreground());

        let mut pen = Pen {
            surface: &mut *surface,
            x: layout.start,
            height: layout.full_height,
        };

        // EAN-13 and UPC-A print their first digit left of the start guard
        if text && symbol.symbology() != Symbology::Ean8 {
            pen.glyph(layout.start - LEADING_GLYPH_OFFSET, layout.baseline, symbol.char_at(0));
        }

        pen.edge_guard();

        for i in symbol.data_positions() {
            let pattern = symbol.pattern_at(i);

            if i == layout.midpoint {
                pen.center_guard();
            }

            let long = symbol.is_long_digit(i);
            if text && !long {
                pen.glyph(pen.x + 1, layout.baseline, symbol.char_at(i));
            }

            let len = if long {
                layout.full_height
            } else {
                layout.bar_height
            };
            for bar in pattern.modules() {
                pen.module(bar, len);
            }
        }

        pen.edge_guard();

        if text && symbol.is_long_digit(last) {
            pen.glyph(pen.x + 1, layout.baseline, symbol.char_at(last));
        }

        let end = pen.x;
        surface.send_buffer();

        RenderReport {
            code: symbol.to_string(),
            clipped: !layout.fits(&self.config, text),
            layout,
            end,
        }
    }
}

/// Render with default options.
pub fn render<S: DrawSurface + ?Sized>(
    surface: &mut S,
    config: &DisplayConfig,
    input: &str,
) -> Result<RenderReport, SymbolError> {
    BarcodeRenderer::new(*config).render(surface, input)
}

/// Column cursor over a surface.
struct Pen<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
    x: i32,
    height: u32,
}

impl<S: DrawSurface + ?Sized> Pen<'_, S> {
    /// One module column; bars are stroked, spaces only advance.
    fn module(&mut self, bar: bool, len: u32) {
        if bar {
            self.surface.draw_vline(self.x, 0, len);
        }
        self.x += 1;
    }

    /// Start and end guard: bar, space, bar.
    fn edge_guard(&mut self) {
        for bar in [true, false, true] {
            self.module(bar, self.height);
        }
    }

    /// Center guard: space, bar, space, bar, space.
    fn center_guard(&mut self) {
        for bar in [false, true, false, true, false] {
            self.module(bar, self.height);
        }
    }

    fn glyph(&mut self, x: i32, baseline: i32, ch: char) {
        self.surface.draw_glyph(x, baseline, ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DrawColor, DrawOp, RecordingSurface};
    use pretty_assertions::assert_eq;

    const PANEL: DisplayConfig = DisplayConfig::SSD1306_128X32;

    fn record(input: &str) -> (RecordingSurface, RenderReport) {
        let mut surface = RecordingSurface::new();
        let report = render(&mut surface, &PANEL, input).unwrap();
        (surface, report)
    }

    fn full_height_columns(surface: &RecordingSurface) -> Vec<i32> {
        surface
            .vlines()
            .into_iter()
            .filter(|&(_, _, len)| len == 32)
            .map(|(x, _, _)| x)
            .collect()
    }

    #[test]
    fn test_clears_then_switches_to_foreground() {
        let (surface, _) = record("96385074");
        assert_eq!(
            &surface.ops()[..2],
            &[
                DrawOp::FillRect {
                    x: 0,
                    y: 0,
                    width: 128,
                    height: 32,
                    color: DrawColor::On,
                },
                DrawOp::SetDrawColor(DrawColor::Off),
            ]
        );
        assert_eq!(surface.ops().last(), Some(&DrawOp::SendBuffer));
    }

    #[test]
    fn test_ean8_layout() {
        let (surface, report) = record("01234565");
        assert_eq!(report.layout.symbology, Symbology::Ean8);
        assert_eq!(report.layout.midpoint, 4);
        assert_eq!(report.layout.start, 30);
        assert_eq!(report.layout.width, 67);
        assert_eq!(report.end, 30 + 67);

        // Start, center and end guards only
        assert_eq!(full_height_columns(&surface), vec![30, 32, 62, 64, 94, 96]);

        // No standalone glyphs, one glyph per digit
        let glyphs = surface.glyphs();
        assert_eq!(glyphs.len(), 8);
        assert_eq!(glyphs[0], (34, 31, '0'));
        assert_eq!(glyphs[4], (67, 31, '4'));
        assert!(glyphs.iter().all(|&(x, _, _)| (33..94).contains(&x)));
    }

    #[test]
    fn test_ean8_bar_count_matches_patterns() {
        let (surface, _) = record("01234565");
        let symbol = Symbol::parse("01234565").unwrap();
        let data_bars: u32 = (0..8).map(|i| symbol.pattern_at(i).bits().count_ones()).sum();
        assert_eq!(surface.vlines().len() as u32, 6 + data_bars);
    }

    #[test]
    fn test_upca_layout() {
        let (surface, report) = record("012345678912");
        assert_eq!(report.layout.symbology, Symbology::UpcA);
        assert_eq!(report.layout.midpoint, 6);
        assert_eq!(report.layout.start, 16);
        assert_eq!(report.end, 111);

        // First digit: L(0) = 0001101 at columns 19..26, full height.
        // Last digit: R(2) = 1101100 at columns 101..108, full height.
        assert_eq!(
            full_height_columns(&surface),
            vec![16, 18, 22, 23, 25, 62, 64, 101, 102, 104, 105, 108, 110]
        );

        let glyphs = surface.glyphs();
        assert_eq!(glyphs.len(), 12);
        assert_eq!(glyphs.first(), Some(&(10, 31, '0')));
        assert_eq!(glyphs.last(), Some(&(112, 31, '2')));
        // Edge digits carry no glyph over their own bars
        assert!(!glyphs.contains(&(20, 31, '0')));
        assert!(!glyphs.contains(&(102, 31, '2')));
        assert!(glyphs.contains(&(27, 31, '1')));
    }

    #[test]
    fn test_ean13_layout() {
        let (surface, report) = record("0123456789012");
        assert_eq!(report.layout.symbology, Symbology::Ean13);
        assert_eq!(report.layout.midpoint, 7);
        assert_eq!(report.layout.start, 13);
        assert_eq!(report.layout.width, 102);
        assert_eq!(report.end, 108);

        assert_eq!(full_height_columns(&surface), vec![13, 15, 59, 61, 105, 107]);

        let glyphs = surface.glyphs();
        assert_eq!(glyphs.len(), 13);
        assert_eq!(glyphs[0], (7, 31, '0'));
        assert_eq!(glyphs[1], (17, 31, '1'));
        assert_eq!(glyphs[7], (64, 31, '7'));

        // Leading 0 selects all L codes: L(1) = 0011001 at columns 16..23
        let first_digit: Vec<i32> = surface
            .vlines()
            .into_iter()
            .filter(|&(x, _, len)| (16..23).contains(&x) && len == 24)
            .map(|(x, _, _)| x)
            .collect();
        assert_eq!(first_digit, vec![18, 19, 22]);
    }

    #[test]
    fn test_ean13_parity_uses_g_codes() {
        // Leading 1: positions 3, 5, 6 are G-coded. G(2) = 0011011
        let (surface, _) = record("1002000000000");
        let third: Vec<i32> = surface
            .vlines()
            .into_iter()
            .filter(|&(x, _, _)| (30..37).contains(&x))
            .map(|(x, _, _)| x)
            .collect();
        assert_eq!(third, vec![32, 33, 35, 36]);
    }

    #[test]
    fn test_invalid_input_draws_nothing() {
        let mut surface = RecordingSurface::new();
        assert_eq!(
            render(&mut surface, &PANEL, "12AB"),
            Err(SymbolError::InvalidSize(4))
        );
        assert_eq!(
            render(&mut surface, &PANEL, "01234567890X2"),
            Err(SymbolError::InvalidDigit { index: 11, found: 'X' })
        );
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_check_digit_verification() {
        let renderer = BarcodeRenderer::new(PANEL).verify_check_digit();
        let mut surface = RecordingSurface::new();
        assert_eq!(
            renderer.render(&mut surface, "012345678913"),
            Err(SymbolError::CheckDigit { expected: 2, found: 3 })
        );
        assert!(surface.ops().is_empty());
        assert!(renderer.render(&mut surface, "012345678912").is_ok());
    }

    #[test]
    fn test_without_text() {
        let mut surface = RecordingSurface::new();
        BarcodeRenderer::new(PANEL)
            .without_text()
            .render(&mut surface, "0123456789012")
            .unwrap();
        assert!(surface.glyphs().is_empty());
        assert_eq!(surface.vlines(), record("0123456789012").0.vlines());
    }

    #[test]
    fn test_inverted_panel_swaps_colors() {
        let mut surface = RecordingSurface::new();
        render(&mut surface, &PANEL.inverted(), "96385074").unwrap();
        assert!(matches!(
            surface.ops()[0],
            DrawOp::FillRect {
                color: DrawColor::Off,
                ..
            }
        ));
        assert_eq!(surface.ops()[1], DrawOp::SetDrawColor(DrawColor::On));
    }

    #[test]
    fn test_repeat_render_is_identical() {
        let (first, a) = record("5901234123457");
        let (second, b) = record("5901234123457");
        assert_eq!(first.ops(), second.ops());
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_serializes() {
        let (_, report) = record("96385074");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["symbology"], "EAN-8");
        assert_eq!(json["start"], 30);
        assert_eq!(json["width"], 67);
        assert_eq!(json["code"], "96385074");
        assert_eq!(json["clipped"], false);
    }

    #[test]
    fn test_clipped_counts_leading_glyph() {
        let panel = DisplayConfig::custom(106, 32);
        let mut surface = RecordingSurface::new();
        let report = render(&mut surface, &panel, "5901234123457").unwrap();
        assert_eq!(report.layout.start, 2);
        assert!(report.clipped);
        assert_eq!(surface.glyphs()[0], (-4, 31, '5'));

        let report = BarcodeRenderer::new(panel)
            .without_text()
            .render(&mut surface, "5901234123457")
            .unwrap();
        assert!(!report.clipped);

        assert!(!record("036000291452").1.clipped);
    }
}
