//! Refresh loop
//!
//! The single control loop of the firmware: sample the collaborators,
//! redraw the frame buffer, push it to the display, sleep until the next
//! tick. Recoverable failures (sensor, clock, bus) are logged and the
//! cycle continues; the next tick retries from scratch.

use defmt::*;
use embassy_time::{Duration, Ticker};

use picotherm_core::clock::WallClock;
use picotherm_core::config::RefreshConfig;
use picotherm_core::cycle::{CyclePhase, Sampler};
use picotherm_core::framebuffer::FrameBuffer;
use picotherm_core::layout;
use picotherm_core::region::Region;
use picotherm_core::sensor::TemperatureSensor;
use picotherm_display::Ssd1306;

/// Run the refresh loop forever
pub async fn run<I2C, S, C>(
    mut display: Ssd1306<I2C>,
    mut sensor: S,
    mut clock: C,
    fb: &mut FrameBuffer,
    region: Region,
    config: RefreshConfig,
) -> !
where
    I2C: embedded_hal_async::i2c::I2c,
    S: TemperatureSensor,
    C: WallClock,
{
    info!("Refresh loop started, interval {} ms", config.interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(config.interval_ms as u64));
    let mut sampler = Sampler::new();
    let mut phase = CyclePhase::Idle;
    let mut temp = None;
    let mut now = None;

    loop {
        phase = phase.advance();
        match phase {
            CyclePhase::Idle => {}
            CyclePhase::Sampling => {
                let reading = sensor.read_celsius().await;
                if let Err(e) = reading {
                    warn!("Sensor read failed: {:?}", e);
                }
                temp = sampler.record(reading);

                now = match clock.now() {
                    Ok(dt) => Some(dt),
                    Err(e) => {
                        warn!("Clock read failed: {:?}", e);
                        None
                    }
                };
            }
            CyclePhase::Rendering => {
                fb.clear();
                for line in layout::status_screen(temp, now.as_ref(), &config.layout) {
                    fb.draw_string(line.x, line.y, line.text.as_str());
                }
            }
            CyclePhase::Transmitting => {
                if let Err(e) = display.push(fb, &region).await {
                    // Skip this cycle's update; the next one retries
                    warn!("Display push failed: {:?}", e);
                } else {
                    trace!("Display updated");
                }
            }
            CyclePhase::Sleeping => {
                ticker.next().await;
            }
        }
    }
}
