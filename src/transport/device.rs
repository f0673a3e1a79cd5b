//! # Device Transport
//!
//! Writes frames to a character device (a bridge exposing the panel's
//! framebuffer, a serial adapter) or to a regular file for inspection.
//!
//! ## Frame Format
//!
//! Frames are sent in SSD1306 GDDRAM order: one byte per column for each
//! 8-row page, least significant bit on top. A 128x32 frame is 512 bytes.
//!
//! ## Chunked Writes
//!
//! Frames are written in chunks with an optional delay between them, so
//! slow bridges with small receive buffers keep up.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::display::Canvas;
use crate::error::OledError;

/// Default chunk size for writes (bytes), one page row of a 128 wide panel
const CHUNK_SIZE: usize = 128;

/// # Device Transport
///
/// ## Example
///
/// ```no_run
/// use oled_barcode::display::{Canvas, DisplayConfig};
/// use oled_barcode::render;
/// use oled_barcode::transport::DeviceTransport;
///
/// let config = DisplayConfig::SSD1306_128X32;
/// let mut canvas = Canvas::for_display(&config)?;
/// render::render(&mut canvas, &config, "96385074")?;
///
/// let mut transport = DeviceTransport::open("/dev/oled0")?;
/// transport.send_frame(&canvas)?;
/// # Ok::<(), oled_barcode::OledError>(())
/// ```
pub struct DeviceTransport<W: Write = File> {
    sink: W,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport<File> {
    /// Open a device or file for writing, creating regular files as needed.
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, OledError> {
        let path = device.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| {
                OledError::Transport(format!("Failed to open {}: {}", path.display(), e))
            })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> DeviceTransport<W> {
    /// Wrap any writer.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::ZERO,
        }
    }

    /// Set the chunk size for frame writes. Zero is treated as one byte.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is none.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Send the canvas' latched frame.
    pub fn send_frame(&mut self, canvas: &Canvas) -> Result<(), OledError> {
        self.write_all(&canvas.frame_pages())
    }

    /// Write raw bytes with chunking, then flush.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), OledError> {
        let mut chunks = data.chunks(self.chunk_size).peekable();
        while let Some(chunk) = chunks.next() {
            self.sink
                .write_all(chunk)
                .map_err(|e| OledError::Transport(format!("Write failed: {}", e)))?;

            if chunks.peek().is_some() && !self.chunk_delay.is_zero() {
                thread::sleep(self.chunk_delay);
            }
        }

        self.sink
            .flush()
            .map_err(|e| OledError::Transport(format!("Flush failed: {}", e)))?;

        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DrawSurface;
    use std::io;

    /// Writer that records the size of every write call.
    #[derive(Default)]
    struct ChunkLog {
        data: Vec<u8>,
        writes: Vec<usize>,
        flushes: usize,
    }

    impl Write for ChunkLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            self.writes.push(buf.len());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_frame_is_chunked_by_page_row() {
        let mut canvas = Canvas::new(128, 32).unwrap();
        canvas.draw_vline(0, 0, 32);
        canvas.send_buffer();

        let mut transport = DeviceTransport::new(ChunkLog::default());
        transport.send_frame(&canvas).unwrap();
        let log = transport.into_inner();

        assert_eq!(log.data.len(), 512);
        assert_eq!(log.writes, vec![128; 4]);
        assert_eq!(log.flushes, 1);
        // Column 0 is lit on every page
        assert!((0..4).all(|page| log.data[page * 128] == 0xFF));
        assert_eq!(log.data[1], 0);
    }

    #[test]
    fn test_custom_chunk_size() {
        let mut transport = DeviceTransport::new(ChunkLog::default());
        transport.set_chunk_size(0);
        transport.write_all(&[1, 2, 3]).unwrap();
        assert_eq!(transport.into_inner().writes, vec![1, 1, 1]);
    }

    #[test]
    fn test_chunk_delay_between_chunks() {
        let mut transport = DeviceTransport::new(ChunkLog::default());
        transport.set_chunk_size(2);
        transport.set_chunk_delay(Duration::from_millis(5));

        let started = std::time::Instant::now();
        transport.write_all(&[1, 2, 3, 4, 5]).unwrap();
        // Three chunks, two pauses
        assert!(started.elapsed() >= Duration::from_millis(10));
        assert_eq!(transport.into_inner().writes, vec![2, 2, 1]);
    }

    #[test]
    fn test_open_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bin");
        let canvas = Canvas::new(16, 8).unwrap();

        let mut transport = DeviceTransport::open(&path).unwrap();
        transport.send_frame(&canvas).unwrap();
        drop(transport);

        assert_eq!(std::fs::read(&path).unwrap(), vec![0u8; 16]);
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.bin");
        assert!(matches!(
            DeviceTransport::open(&path),
            Err(OledError::Transport(_))
        ));
    }
}
