//! # Command Console
//!
//! Line-oriented command shell for a panel, as exposed over a serial port.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `barcode <code>` | Render an EAN-8, EAN-13 or UPC-A code on the panel |
//! | `dump` | Write the panel buffer as a plain PBM image |
//! | `help` | List commands |
//!
//! ## Example
//!
//! ```
//! use oled_barcode::console::{Console, Outcome};
//! use oled_barcode::display::DisplayConfig;
//!
//! let mut console = Console::new(DisplayConfig::SSD1306_128X32)?;
//! let mut out = Vec::new();
//!
//! assert_eq!(console.execute("barcode 96385074", &mut out)?, Outcome::Done);
//! assert_eq!(console.execute("barcode", &mut out)?, Outcome::Usage);
//! # Ok::<(), oled_barcode::OledError>(())
//! ```

use std::io::{self, BufRead, Write};

use crate::display::{Canvas, DisplayConfig};
use crate::error::{OledError, SymbolError};
use crate::render::{BarcodeRenderer, RenderOptions};

/// Prompt printed before each line.
pub const PROMPT: &str = "oled>";

/// Longest accepted command line, in bytes.
pub const MAX_LINE_LENGTH: usize = 64;

/// Registered commands as `(name, hint, help)`.
pub const COMMANDS: &[(&str, &str, &str)] = &[
    (
        "barcode",
        "<code>",
        "displays the given EAN-8, EAN-13, or UPC-A barcode on the OLED display",
    ),
    ("dump", "", "Dump the display buffer to serial"),
    ("help", "", "Print the list of registered commands"),
];

/// Result of one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Command completed
    Done,
    /// Blank line
    Empty,
    /// Wrong number of arguments
    Usage,
    /// Line longer than [`MAX_LINE_LENGTH`]
    TooLong,
    /// Barcode input rejected by validation
    Rejected(SymbolError),
    /// No such command
    Unknown(String),
}

impl Outcome {
    /// Numeric status in shell convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Done | Self::Empty => 0,
            Self::Usage | Self::TooLong => 1,
            Self::Rejected(_) => 2,
            Self::Unknown(_) => 127,
        }
    }
}

/// Command dispatcher owning one panel.
pub struct Console {
    canvas: Canvas,
    renderer: BarcodeRenderer,
}

impl Console {
    /// Console with a blank canvas for `config`.
    pub fn new(config: DisplayConfig) -> Result<Self, OledError> {
        Ok(Self {
            canvas: Canvas::for_display(&config)?,
            renderer: BarcodeRenderer::new(config),
        })
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.renderer = self.renderer.with_options(options);
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Draw a barcode directly, bypassing command parsing.
    pub fn show(&mut self, code: &str) -> Result<(), SymbolError> {
        self.renderer.render(&mut self.canvas, code).map(|_| ())
    }

    /// Parse and run a single command line.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Outcome> {
        if line.len() > MAX_LINE_LENGTH {
            writeln!(out, "Error: command line exceeds {} bytes", MAX_LINE_LENGTH)?;
            return Ok(Outcome::TooLong);
        }

        let argv: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = argv.first() else {
            return Ok(Outcome::Empty);
        };

        match command {
            "barcode" => {
                if argv.len() != 2 {
                    writeln!(out, "Usage: {} <code>", command)?;
                    return Ok(Outcome::Usage);
                }
                match self.renderer.render(&mut self.canvas, argv[1]) {
                    Ok(report) => {
                        writeln!(
                            out,
                            "[barcode] {} {} at column {}",
                            report.layout.symbology, report.code, report.layout.start
                        )?;
                        Ok(Outcome::Done)
                    }
                    Err(e) => {
                        writeln!(out, "Error: {}", e)?;
                        Ok(Outcome::Rejected(e))
                    }
                }
            }
            "dump" => {
                self.canvas.write_pbm(out)?;
                Ok(Outcome::Done)
            }
            "help" => {
                for (name, hint, help) in COMMANDS {
                    if hint.is_empty() {
                        writeln!(out, "{}", name)?;
                    } else {
                        writeln!(out, "{} {}", name, hint)?;
                    }
                    writeln!(out, "  {}", help)?;
                }
                Ok(Outcome::Done)
            }
            other => {
                writeln!(out, "Unrecognized command: {}", other)?;
                Ok(Outcome::Unknown(other.to_string()))
            }
        }
    }

    /// Read commands until end of input, prompting before each line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        write!(out, "{} ", PROMPT)?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            let outcome = self.execute(line.trim_end(), out)?;
            if outcome.exit_code() != 0 {
                writeln!(out, "Command returned non-zero error code: {}", outcome.exit_code())?;
            }
            write!(out, "{} ", PROMPT)?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }
}
