//! # oled-barcode CLI
//!
//! Command-line interface for laying out retail barcodes on OLED panels.
//!
//! ## Usage
//!
//! ```bash
//! # Render a UPC-A code and save a preview
//! oled-barcode render 036000291452 --png upc.png
//!
//! # Print the panel buffer as a PBM image
//! oled-barcode render 96385074 --pbm
//!
//! # Send the frame to a panel bridge
//! oled-barcode render 5901234123457 --device /dev/oled0
//!
//! # Append a check digit
//! oled-barcode check-digit 590123412345
//!
//! # Interactive console (barcode / dump / help)
//! oled-barcode repl
//! ```

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use oled_barcode::{
    OledError,
    console::Console,
    display::{Canvas, DisplayConfig},
    render::{BarcodeRenderer, RenderOptions},
    symbol::check,
    transport::DeviceTransport,
};

/// oled-barcode - EAN/UPC barcodes on monochrome panels
#[derive(Parser, Debug)]
#[command(name = "oled-barcode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a barcode onto a panel-sized framebuffer
    Render {
        /// EAN-8 (8 digits), UPC-A (12 digits) or EAN-13 (13 digits)
        code: String,

        /// Save the framebuffer as PNG
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,

        /// Print the framebuffer as a plain PBM image
        #[arg(long)]
        pbm: bool,

        /// Print the layout report as JSON
        #[arg(long)]
        json: bool,

        /// Write the frame to a device or file in SSD1306 page order
        #[arg(long, value_name = "PATH")]
        device: Option<PathBuf>,

        /// Panel width in pixels
        #[arg(long, default_value = "128")]
        width: u32,

        /// Panel height in pixels
        #[arg(long, default_value = "32")]
        height: u32,

        /// Draw lit bars on a dark background
        #[arg(long)]
        invert: bool,

        /// Skip human-readable digits
        #[arg(long)]
        no_text: bool,

        /// Reject codes with a wrong check digit
        #[arg(long)]
        verify: bool,
    },

    /// Append the mod-10 check digit to a 7, 11 or 12 digit payload
    CheckDigit {
        payload: String,
    },

    /// Run the interactive console on stdin/stdout
    Repl {
        /// Barcode drawn before the first prompt
        #[arg(long, default_value = "012345678912")]
        boot: String,

        /// Panel width in pixels
        #[arg(long, default_value = "128")]
        width: u32,

        /// Panel height in pixels
        #[arg(long, default_value = "32")]
        height: u32,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), OledError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            code,
            png,
            pbm,
            json,
            device,
            width,
            height,
            invert,
            no_text,
            verify,
        } => {
            let config = panel(width, height, invert);
            let options = RenderOptions {
                human_readable: !no_text,
                verify_check_digit: verify,
            };

            let mut canvas = Canvas::for_display(&config)?;
            let report = BarcodeRenderer::new(config)
                .with_options(options)
                .render(&mut canvas, &code)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "[render] {} {} on {}x{}: columns {}..{}",
                    report.layout.symbology,
                    report.code,
                    config.width,
                    config.height,
                    report.layout.start,
                    report.end
                );
                if report.clipped {
                    eprintln!("[render] warning: symbol is clipped by the panel edges");
                }
            }

            if pbm {
                canvas.write_pbm(&mut io::stdout().lock())?;
            }

            if let Some(png_path) = png {
                canvas.save_png(&png_path)?;
                println!("[render] Saved to {}", png_path.display());
            }

            if let Some(device) = device {
                let mut transport = DeviceTransport::open(&device)?;
                transport.send_frame(&canvas)?;
                println!("[render] Sent frame to {}", device.display());
            }
        }

        Commands::CheckDigit { payload } => {
            println!("{}", check::complete(&payload)?);
        }

        Commands::Repl {
            boot,
            width,
            height,
        } => {
            let mut console = Console::new(panel(width, height, false))?;
            if let Err(e) = console.show(&boot) {
                eprintln!("[repl] boot barcode {:?} rejected: {}", boot, e);
            }

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            console.run(stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}

/// Panel geometry from CLI flags, preferring a named preset.
fn panel(width: u32, height: u32, invert: bool) -> DisplayConfig {
    let config = match (width, height) {
        (128, 32) => DisplayConfig::SSD1306_128X32,
        (128, 64) => DisplayConfig::SSD1306_128X64,
        _ => DisplayConfig::custom(width, height),
    };
    if invert { config.inverted() } else { config }
}
