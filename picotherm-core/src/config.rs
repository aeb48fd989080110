//! Hardware configuration types
//!
//! Wiring and timing live in explicit configuration passed into
//! initialization rather than module-level constants. The firmware keeps
//! a board-level constant of these types; hosts can build them in tests.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::LayoutConfig;

/// I2C display wiring and geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayHwConfig {
    /// GPIO pin carrying SDA
    pub sda_pin: u8,
    /// GPIO pin carrying SCL
    pub scl_pin: u8,
    /// I2C clock rate in Hz
    pub i2c_hz: u32,
    /// 7-bit controller address
    pub i2c_addr: u8,
    /// Display width in pixels
    pub width: u16,
    /// Display height in pixels (must be a multiple of 8)
    pub height: u16,
}

impl Default for DisplayHwConfig {
    fn default() -> Self {
        // SSD1306 on I2C1, the original board wiring
        Self {
            sda_pin: 14,
            scl_pin: 15,
            i2c_hz: 400_000,
            i2c_addr: 0x3C,
            width: 128,
            height: 64,
        }
    }
}

/// Refresh loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RefreshConfig {
    /// Interval between refresh cycles in milliseconds
    pub interval_ms: u32,
    /// Which optional lines to render
    pub layout: LayoutConfig,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            layout: LayoutConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_board_wiring() {
        let hw = DisplayHwConfig::default();
        assert_eq!((hw.sda_pin, hw.scl_pin), (14, 15));
        assert_eq!(hw.i2c_hz, 400_000);
        assert_eq!(hw.i2c_addr, 0x3C);
        assert_eq!((hw.width, hw.height), (128, 64));
        assert_eq!(hw.height % 8, 0);

        let refresh = RefreshConfig::default();
        assert_eq!(refresh.interval_ms, 1000);
        assert!(refresh.layout.show_date);
        assert!(refresh.layout.show_time);
    }
}
