//! Glyph bitmaps for human-readable barcode text.
//!
//! Uses the Spleen 6x12 bitmap font. Every glyph is cropped to the ink box
//! shared by the ten digits and scaled down to a 5x6 cell, small enough to
//! fit under a 7 pixel digit inside the 8 row text band.

use spleen_font::{FONT_6X12, PSF2Font};
use std::collections::HashMap;

use crate::error::OledError;

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: usize = 6;

const SRC_WIDTH: usize = 6;
const SRC_HEIGHT: usize = 12;

/// A 1-bit glyph bitmap, row-major, 1 = ink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    height: usize,
    bits: Vec<u8>,
}

impl Glyph {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at `(x, y)` is inked.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x] != 0
    }

    /// Box outline, drawn for characters the font lacks.
    fn outline(width: usize, height: usize) -> Self {
        let mut bits = vec![0u8; width * height];
        for x in 0..width {
            bits[x] = 1;
            bits[(height - 1) * width + x] = 1;
        }
        for y in 0..height {
            bits[y * width] = 1;
            bits[y * width + width - 1] = 1;
        }
        Self { width, height, bits }
    }
}

/// Pre-rendered printable ASCII glyphs.
#[derive(Debug, Clone)]
pub struct GlyphSet {
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
}

impl GlyphSet {
    /// Rasterise printable ASCII from the embedded Spleen font.
    pub fn load() -> Result<Self, OledError> {
        let mut spleen = PSF2Font::new(FONT_6X12)
            .map_err(|_| OledError::Font("failed to parse Spleen 6x12".to_string()))?;

        let mut sources = Vec::new();
        for ch in (0x20u8..=0x7E).map(char::from) {
            let utf8_bytes = ch.to_string();
            if let Some(spleen_glyph) = spleen.glyph_for_utf8(utf8_bytes.as_bytes()) {
                let mut bitmap = vec![0u8; SRC_WIDTH * SRC_HEIGHT];
                for (row_y, row) in spleen_glyph.enumerate() {
                    for (col_x, on) in row.enumerate() {
                        if row_y < SRC_HEIGHT && col_x < SRC_WIDTH {
                            bitmap[row_y * SRC_WIDTH + col_x] = if on { 1 } else { 0 };
                        }
                    }
                }
                sources.push((ch, bitmap));
            }
        }

        if sources.is_empty() {
            return Err(OledError::Font("Spleen 6x12 has no ASCII glyphs".to_string()));
        }

        let digits = sources
            .iter()
            .filter(|(ch, _)| ch.is_ascii_digit())
            .map(|(_, bitmap)| bitmap.as_slice());
        let ink = ink_box(digits).unwrap_or(InkBox {
            left: 0,
            top: 0,
            right: SRC_WIDTH,
            bottom: SRC_HEIGHT,
        });

        let glyphs = sources
            .into_iter()
            .map(|(ch, bitmap)| (ch, shrink(&bitmap, ink)))
            .collect();

        Ok(Self {
            glyphs,
            fallback: Glyph::outline(GLYPH_WIDTH, GLYPH_HEIGHT),
        })
    }

    /// Glyph for `ch`, or a box outline when the font has none.
    pub fn get(&self, ch: char) -> &Glyph {
        self.glyphs.get(&ch).unwrap_or(&self.fallback)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn height(&self) -> usize {
        GLYPH_HEIGHT
    }
}

/// Half-open bounding box of inked pixels in source coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InkBox {
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
}

/// Union of the ink of several source bitmaps.
fn ink_box<'a>(bitmaps: impl Iterator<Item = &'a [u8]>) -> Option<InkBox> {
    let mut bounds: Option<InkBox> = None;
    for bitmap in bitmaps {
        for y in 0..SRC_HEIGHT {
            for x in 0..SRC_WIDTH {
                if bitmap[y * SRC_WIDTH + x] == 0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => InkBox {
                        left: x,
                        top: y,
                        right: x + 1,
                        bottom: y + 1,
                    },
                    Some(b) => InkBox {
                        left: b.left.min(x),
                        top: b.top.min(y),
                        right: b.right.max(x + 1),
                        bottom: b.bottom.max(y + 1),
                    },
                });
            }
        }
    }
    bounds
}

/// Crop `src` to `ink` and scale to the glyph cell using nearest neighbor.
fn shrink(src: &[u8], ink: InkBox) -> Glyph {
    let crop_w = ink.right - ink.left;
    let crop_h = ink.bottom - ink.top;
    let mut bits = vec![0u8; GLYPH_WIDTH * GLYPH_HEIGHT];
    for dy in 0..GLYPH_HEIGHT {
        for dx in 0..GLYPH_WIDTH {
            let sx = ink.left + dx * crop_w / GLYPH_WIDTH;
            let sy = ink.top + dy * crop_h / GLYPH_HEIGHT;
            if let Some(&on) = src.get(sy * SRC_WIDTH + sx) {
                bits[dy * GLYPH_WIDTH + dx] = on;
            }
        }
    }
    Glyph {
        width: GLYPH_WIDTH,
        height: GLYPH_HEIGHT,
        bits,
    }
}
