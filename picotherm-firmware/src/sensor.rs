//! Internal temperature sensor over the RP2040 ADC
//!
//! ADC channel 4 is wired to the on-die sensor; the calibration formula
//! lives in `picotherm_core::sensor`.

use embassy_rp::adc::{Adc, Async, Channel};

use picotherm_core::sensor::{onboard_temp_celsius, SensorError, TemperatureSensor};

/// RP2040 internal temperature sensor
pub struct OnboardTempSensor<'d> {
    adc: Adc<'d, Async>,
    channel: Channel<'d>,
}

impl<'d> OnboardTempSensor<'d> {
    /// Wrap the ADC and its temperature sensor channel
    pub fn new(adc: Adc<'d, Async>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl TemperatureSensor for OnboardTempSensor<'_> {
    async fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let raw = self
            .adc
            .read(&mut self.channel)
            .await
            .map_err(|_| SensorError::ConversionError)?;
        Ok(onboard_temp_celsius(raw))
    }
}
