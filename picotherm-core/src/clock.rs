//! Wall-clock value type and formatting
//!
//! The firmware reads the hardware RTC; this module owns the value type
//! and the fixed display formats (`HH:MM:SS`, `DD/MM/YYYY`).

use core::fmt::Write;

use heapless::String;

/// Errors from reading the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// RTC not running or not yet set
    NotRunning,
    /// RTC returned an out-of-range field
    InvalidReading,
}

/// Calendar date and time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl DateTime {
    /// Time of day as `HH:MM:SS`
    pub fn time_string(&self) -> String<8> {
        let mut s = String::new();
        // Infallible: the format is exactly 8 bytes
        let _ = write!(s, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second);
        s
    }

    /// Calendar date as `DD/MM/YYYY`
    pub fn date_string(&self) -> String<10> {
        let mut s = String::new();
        let _ = write!(s, "{:02}/{:02}/{:04}", self.day, self.month, self.year);
        s
    }
}

/// Trait for wall-clock sources
///
/// Implemented by the firmware over the hardware RTC; test code can
/// substitute a fixed clock.
pub trait WallClock {
    /// Read the current date and time
    fn now(&mut self) -> Result<DateTime, ClockError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format() {
        let dt = DateTime {
            year: 2024,
            month: 3,
            day: 5,
            hour: 14,
            minute: 7,
            second: 9,
        };
        assert_eq!(dt.time_string().as_str(), "14:07:09");
    }

    #[test]
    fn test_date_format() {
        let dt = DateTime {
            year: 2024,
            month: 3,
            day: 5,
            hour: 14,
            minute: 7,
            second: 9,
        };
        assert_eq!(dt.date_string().as_str(), "05/03/2024");
    }

    #[test]
    fn test_fields_zero_padded() {
        let dt = DateTime {
            year: 987,
            month: 12,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        };
        assert_eq!(dt.time_string().as_str(), "00:00:00");
        assert_eq!(dt.date_string().as_str(), "01/12/0987");
    }
}
