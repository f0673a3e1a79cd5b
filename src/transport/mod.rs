//! # Panel Transport Layer
//!
//! This module moves a latched frame from a [`Canvas`](crate::display::Canvas)
//! to wherever the panel is listening.
//!
//! ## Available Transports
//!
//! - [`device`]: Character device or plain file, written in SSD1306 page order

pub mod device;

pub use device::DeviceTransport;
