//! Board-agnostic core logic for the temperature display firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Bit-packed monochrome frame buffer and 6x8 font rendering
//! - Render region arithmetic (page/column window addressing)
//! - Status screen layout composition
//! - Refresh cycle state machine and sampling fallback
//! - Internal temperature sensor calibration
//! - Date/time value type and formatting
//! - Hardware configuration type definitions

#![no_std]
#![deny(unsafe_code)]

// Host-side tests (proptest) need std
#[cfg(test)]
extern crate std;

pub mod clock;
pub mod config;
pub mod cycle;
pub mod font;
pub mod framebuffer;
pub mod layout;
pub mod region;
pub mod sensor;
