//! Picotherm - RP2040 temperature display firmware
//!
//! Samples the RP2040's internal temperature sensor once per second and
//! renders the reading, date and time on an SSD1306 OLED over I2C.
//! Single control loop; there are no concurrent tasks, so the frame
//! buffer and the bus are exclusively owned by the refresh loop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C1;
use embassy_rp::rtc::Rtc;
use {defmt_rtt as _, panic_probe as _};

use picotherm_core::config::{DisplayHwConfig, RefreshConfig};
use picotherm_core::framebuffer::FrameBuffer;
use picotherm_core::region::Region;
use picotherm_display::Ssd1306;

use crate::clock::RtcClock;
use crate::sensor::OnboardTempSensor;

mod clock;
mod refresh;
mod sensor;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Picotherm firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Explicit configuration instead of scattered constants; the pin
    // assignments below must agree with it
    let hw = DisplayHwConfig::default();
    let refresh_config = RefreshConfig::default();
    assert_eq!((hw.sda_pin, hw.scl_pin), (14, 15));

    // Geometry errors are static misconfiguration: fail at boot
    let mut fb = FrameBuffer::new(hw.width as usize, hw.height as usize).unwrap();
    let region = Region::full(fb.width(), fb.pages()).unwrap();

    // I2C1 on GP14 (SDA) / GP15 (SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = hw.i2c_hz;
    let bus = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    // Internal temperature sensor on ADC channel 4
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let channel = Channel::new_temp_sensor(p.ADC_TEMP_SENSOR);
    let sensor = OnboardTempSensor::new(adc, channel);

    // Seeding can only fail on an invalid epoch constant: fail at boot
    let rtc_clock = RtcClock::new(Rtc::new(p.RTC)).unwrap();

    let mut display = Ssd1306::new(bus, hw.i2c_addr);
    match display.init(hw.height as usize).await {
        Ok(()) => {
            info!("OLED initialized");
            fb.draw_string(0, 0, "Picotherm");
            fb.draw_string(0, 16, "starting...");
            if let Err(e) = display.push(&fb, &region).await {
                warn!("Splash push failed: {:?}", e);
            }
        }
        Err(e) => {
            // Keep going: push errors are recoverable per cycle
            error!("Failed to initialize display: {:?}", e);
        }
    }

    refresh::run(display, sensor, rtc_clock, &mut fb, region, refresh_config).await
}
