//! Wall clock over the RP2040 RTC
//!
//! The board has no battery backup or network time source, so the RTC is
//! seeded with a fixed epoch at power-up and free-runs from there.

use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime as RtcDateTime, DayOfWeek, Rtc};

use picotherm_core::clock::{ClockError, DateTime, WallClock};

/// Date/time the RTC starts counting from at power-up
pub const POWER_ON_EPOCH: RtcDateTime = RtcDateTime {
    year: 2025,
    month: 1,
    day: 1,
    day_of_week: DayOfWeek::Wednesday,
    hour: 0,
    minute: 0,
    second: 0,
};

/// RP2040 RTC as a wall-clock source
pub struct RtcClock<'d> {
    rtc: Rtc<'d, RTC>,
}

impl<'d> RtcClock<'d> {
    /// Seed the RTC with the power-on epoch and start it
    pub fn new(mut rtc: Rtc<'d, RTC>) -> Result<Self, ClockError> {
        rtc.set_datetime(POWER_ON_EPOCH)
            .map_err(|_| ClockError::InvalidReading)?;
        Ok(Self { rtc })
    }
}

impl WallClock for RtcClock<'_> {
    fn now(&mut self) -> Result<DateTime, ClockError> {
        let dt = self.rtc.now().map_err(|_| ClockError::NotRunning)?;
        Ok(DateTime {
            year: dt.year,
            month: dt.month,
            day: dt.day,
            hour: dt.hour,
            minute: dt.minute,
            second: dt.second,
        })
    }
}
