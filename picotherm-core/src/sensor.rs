//! Internal temperature sensor calibration
//!
//! The RP2040 routes its on-die temperature sensor to ADC channel 4. The
//! sensor voltage is 0.706 V at 27 °C with a slope of -1.721 mV/°C, so a
//! 12-bit reading against a 3.3 V reference converts as
//! `T = 27 - (V - 0.706) / 0.001721`.

/// ADC reference voltage in volts
const ADC_VREF: f32 = 3.3;

/// 12-bit ADC full-scale count
const ADC_COUNTS: f32 = 4096.0;

/// Errors from temperature sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion failed
    ConversionError,
    /// Reading outside the sensor's plausible range
    OutOfRange,
}

/// Convert a raw 12-bit ADC reading of the internal sensor to °C
pub fn onboard_temp_celsius(raw: u16) -> f32 {
    let voltage = raw as f32 * ADC_VREF / ADC_COUNTS;
    27.0 - (voltage - 0.706) / 0.001721
}

/// Trait for temperature sensors
///
/// Implementations wrap the platform ADC; reads are async because the
/// conversion completes via interrupt on the target.
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    #[allow(async_fn_in_trait)]
    async fn read_celsius(&mut self) -> Result<f32, SensorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibration_reference_point() {
        // 0.706 V is the datasheet's 27 °C reference; that is 876 counts
        // against a 3.3 V reference. One LSB is ~0.47 °C, so allow half a
        // degree around the reference.
        let t = onboard_temp_celsius(876);
        assert!((t - 27.0).abs() < 0.5, "got {}", t);
    }

    #[test]
    fn test_formula_shape() {
        // T = 27 - (raw * 3.3 / 4096 - 0.706) / 0.001721, checked against
        // an independently computed point: raw 1000 -> 0.80566 V -> -30.9 °C
        let t = onboard_temp_celsius(1000);
        assert!((t - (-30.9)).abs() < 0.2, "got {}", t);
    }

    #[test]
    fn test_slope_is_negative() {
        // Higher voltage (higher count) means lower temperature
        assert!(onboard_temp_celsius(2100) < onboard_temp_celsius(2000));
    }

    #[test]
    fn test_extremes_stay_finite() {
        assert!(onboard_temp_celsius(0).is_finite());
        assert!(onboard_temp_celsius(4095).is_finite());
    }
}
