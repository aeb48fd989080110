//! SSD1306 OLED transport for Picotherm
//!
//! Serializes a frame buffer region into the controller's wire command
//! sequence (window addressing followed by the window's data bytes) and
//! writes it over an async I2C bus. The frame buffer itself lives in
//! `picotherm-core`; this crate only owns the wire protocol.

#![no_std]

pub mod ssd1306;

pub use ssd1306::{DriverError, Ssd1306};
