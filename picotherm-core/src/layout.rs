//! Status screen layout
//!
//! Composes the text lines for one refresh cycle. The layout producer is
//! deliberately separate from the refresh loop so it can be unit tested
//! without hardware, and so the date/time lines can be toggled
//! independently.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::clock::DateTime;

/// Maximum characters per line (128 px / 6 px per glyph)
pub const MAX_LINE_LEN: usize = 21;

/// Maximum lines per screen
pub const MAX_LINES: usize = 4;

/// Row pitch between layout lines, in pixels
const LINE_PITCH: i32 = 16;

/// One line of text anchored at a pixel coordinate
///
/// Produced per refresh cycle and consumed immediately by the frame
/// buffer draw.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextLine {
    pub text: String<MAX_LINE_LEN>,
    pub x: i32,
    pub y: i32,
}

impl TextLine {
    fn new(text: &str, x: i32, y: i32) -> Self {
        let mut s = String::new();
        // Composed lines are bounded by MAX_LINE_LEN; longer input keeps
        // the line empty rather than rendering a partial value
        let _ = s.push_str(text);
        Self { text: s, x, y }
    }
}

/// Which optional lines appear on the status screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Show the `DD/MM/YYYY` date line
    pub show_date: bool,
    /// Show the `HH:MM:SS` time line
    pub show_time: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            show_date: true,
            show_time: true,
        }
    }
}

/// Format a temperature reading as `Temp: NN.NN C`
///
/// `None` (no reading yet) renders the `--.--` placeholder so the display
/// never shows a stale or garbage value.
pub fn format_temperature(temp: Option<f32>) -> String<MAX_LINE_LEN> {
    let mut s = String::new();
    match temp {
        Some(t) => {
            let _ = write!(s, "Temp: {:.2} C", t);
        }
        None => {
            let _ = s.push_str("Temp: --.-- C");
        }
    }
    s
}

/// Compose the status screen for one cycle
///
/// Fixed layout: a label line, the temperature line, then the optional
/// date and time lines at a 16-pixel pitch.
pub fn status_screen(
    temp: Option<f32>,
    now: Option<&DateTime>,
    config: &LayoutConfig,
) -> Vec<TextLine, MAX_LINES> {
    let mut lines = Vec::new();
    let _ = lines.push(TextLine::new("Temperature:", 0, 0));
    let _ = lines.push(TextLine {
        text: format_temperature(temp),
        x: 0,
        y: LINE_PITCH,
    });

    let mut y = 2 * LINE_PITCH;
    if let Some(dt) = now {
        if config.show_date {
            let _ = lines.push(TextLine::new(dt.date_string().as_str(), 0, y));
            y += LINE_PITCH;
        }
        if config.show_time {
            let _ = lines.push(TextLine::new(dt.time_string().as_str(), 0, y));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dt() -> DateTime {
        DateTime {
            year: 2024,
            month: 3,
            day: 5,
            hour: 14,
            minute: 7,
            second: 9,
        }
    }

    #[test]
    fn test_temperature_two_decimal_rounding() {
        assert_eq!(format_temperature(Some(23.456)).as_str(), "Temp: 23.46 C");
        assert_eq!(format_temperature(Some(27.0)).as_str(), "Temp: 27.00 C");
        assert_eq!(format_temperature(Some(-5.125)).as_str(), "Temp: -5.12 C");
    }

    #[test]
    fn test_missing_reading_placeholder() {
        assert_eq!(format_temperature(None).as_str(), "Temp: --.-- C");
    }

    #[test]
    fn test_full_screen_layout() {
        let dt = sample_dt();
        let lines = status_screen(Some(23.456), Some(&dt), &LayoutConfig::default());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].text.as_str(), "Temperature:");
        assert_eq!((lines[0].x, lines[0].y), (0, 0));
        assert_eq!(lines[1].text.as_str(), "Temp: 23.46 C");
        assert_eq!(lines[1].y, 16);
        assert_eq!(lines[2].text.as_str(), "05/03/2024");
        assert_eq!(lines[2].y, 32);
        assert_eq!(lines[3].text.as_str(), "14:07:09");
        assert_eq!(lines[3].y, 48);
    }

    #[test]
    fn test_lines_toggle_independently() {
        let dt = sample_dt();
        let date_only = LayoutConfig {
            show_date: true,
            show_time: false,
        };
        let lines = status_screen(Some(20.0), Some(&dt), &date_only);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].text.as_str(), "05/03/2024");

        let time_only = LayoutConfig {
            show_date: false,
            show_time: true,
        };
        let lines = status_screen(Some(20.0), Some(&dt), &time_only);
        assert_eq!(lines.len(), 3);
        // Time takes the first optional slot when the date is off
        assert_eq!(lines[2].text.as_str(), "14:07:09");
        assert_eq!(lines[2].y, 32);
    }

    #[test]
    fn test_no_clock_drops_optional_lines() {
        let lines = status_screen(Some(20.0), None, &LayoutConfig::default());
        assert_eq!(lines.len(), 2);
    }
}
