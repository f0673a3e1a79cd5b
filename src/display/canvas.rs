//! # Monochrome Canvas
//!
//! In-memory framebuffer implementing [`DrawSurface`].
//!
//! ## Buffers
//!
//! ```text
//! draw calls → working buffer ──send_buffer()──→ frame (what the panel shows)
//!                    │                               │
//!                write_pbm()                    frame_pages() → transport
//!                to_png()
//! ```
//!
//! The working buffer holds one byte per pixel (0 = off, 1 = on). Anything
//! drawn outside the panel is clipped.

use image::{GrayImage, Luma};
use std::io::{self, Write};
use std::path::Path;

use super::font::GlyphSet;
use super::{DisplayConfig, DrawColor, DrawSurface};
use crate::error::OledError;

/// Monochrome framebuffer with glyph rendering.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    frame: Vec<u8>,
    frames_sent: usize,
    color: DrawColor,
    glyphs: GlyphSet,
}

impl Canvas {
    /// Create a blank (all off) canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, OledError> {
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            pixels: vec![0u8; len],
            frame: vec![0u8; len],
            frames_sent: 0,
            color: DrawColor::On,
            glyphs: GlyphSet::load()?,
        })
    }

    /// Create a canvas sized for a display preset.
    pub fn for_display(config: &DisplayConfig) -> Result<Self, OledError> {
        Self::new(config.width, config.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour currently used by strokes and glyphs.
    pub fn draw_color(&self) -> DrawColor {
        self.color
    }

    /// Whether the working buffer pixel at `(x, y)` is lit.
    /// Out-of-bounds pixels read as off.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        self.index(x as i32, y as i32)
            .map(|idx| self.pixels[idx] != 0)
            .unwrap_or(false)
    }

    /// One row of the working buffer.
    pub fn row(&self, y: u32) -> Vec<bool> {
        (0..self.width).map(|x| self.pixel(x, y)).collect()
    }

    /// Turn every pixel off without touching the latched frame.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Number of `send_buffer()` calls so far.
    pub fn frames_sent(&self) -> usize {
        self.frames_sent
    }

    /// Latched frame, one byte per pixel.
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn plot(&mut self, x: i32, y: i32, color: DrawColor) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = u8::from(color.is_on());
        }
    }

    /// Write the working buffer as a plain (ASCII) PBM image.
    ///
    /// Header `P1`, then `width height`, then one line per row with a `1`
    /// for every lit pixel.
    pub fn write_pbm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P1")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        let mut line = String::with_capacity(self.width as usize);
        for y in 0..self.height {
            line.clear();
            for x in 0..self.width {
                line.push(if self.pixel(x, y) { '1' } else { '0' });
            }
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Working buffer as an in-memory PBM string.
    pub fn to_pbm(&self) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_pbm(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Working buffer as a grayscale image, lit pixels white.
    pub fn to_image(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let color = if self.pixel(x, y) { 255u8 } else { 0u8 };
                img.put_pixel(x, y, Luma([color]));
            }
        }
        img
    }

    /// Working buffer encoded as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, OledError> {
        use image::ImageEncoder;

        let img = self.to_image();
        let mut png_bytes = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(
                img.as_raw(),
                self.width,
                self.height,
                image::ExtendedColorType::L8,
            )
            .map_err(|e: image::ImageError| OledError::Image(e.to_string()))?;

        Ok(png_bytes)
    }

    /// Save the working buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), OledError> {
        self.to_image()
            .save(path.as_ref())
            .map_err(|e| OledError::Image(format!("Failed to save PNG: {}", e)))
    }

    /// Latched frame in SSD1306 page order.
    ///
    /// ```text
    /// page p, column x → byte; bit k = pixel (x, p*8 + k)
    /// ```
    ///
    /// A trailing partial page is padded with off pixels.
    pub fn frame_pages(&self) -> Vec<u8> {
        let width = self.width as usize;
        let height = self.height as usize;
        let pages = height.div_ceil(8);
        let mut out = vec![0u8; pages * width];
        for page in 0..pages {
            for x in 0..width {
                let mut byte = 0u8;
                for bit in 0..8 {
                    let y = page * 8 + bit;
                    if y < height && self.frame[y * width + x] != 0 {
                        byte |= 1 << bit;
                    }
                }
                out[page * width + x] = byte;
            }
        }
        out
    }
}

impl DrawSurface for Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: DrawColor) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.plot(x + dx, y + dy, color);
            }
        }
    }

    fn set_draw_color(&mut self, color: DrawColor) {
        self.color = color;
    }

    fn draw_vline(&mut self, x: i32, y: i32, len: u32) {
        let color = self.color;
        for dy in 0..len as i32 {
            self.plot(x, y + dy, color);
        }
    }

    fn draw_glyph(&mut self, x: i32, baseline: i32, ch: char) {
        let color = self.color;
        let glyph = self.glyphs.get(ch).clone();
        let top = baseline - glyph.height() as i32 + 1;
        for gy in 0..glyph.height() {
            for gx in 0..glyph.width() {
                if glyph.is_set(gx, gy) {
                    self.plot(x + gx as i32, top + gy as i32, color);
                }
            }
        }
    }

    fn glyph_height(&self) -> u32 {
        self.glyphs.height() as u32
    }

    fn send_buffer(&mut self) {
        self.frame.copy_from_slice(&self.pixels);
        self.frames_sent += 1;
    }
}
