//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 (or 128x32) SSD1306-based OLED displays via I2C.
//! Uses horizontal addressing mode: after a window is set with the column
//! and page address commands, data bytes auto-advance column-first, then
//! page, so a region push is one addressing preamble plus one data write.

use heapless::Vec;

use picotherm_core::framebuffer::{FrameBuffer, MAX_FRAME_BYTES};
use picotherm_core::region::{Region, RegionError};

/// Control byte prefix for a command write
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte prefix for a data write
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEM_MODE: u8 = 0x20;
    pub const SET_COL_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_ENTIRE_ON: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// Transport-level errors
///
/// `Region` and `SizeMismatch` indicate a static misconfiguration (wrong
/// geometry wired to the wrong window) and should fail loudly at startup.
/// `Bus` is the recoverable per-cycle transport failure: the caller logs
/// it, skips the cycle and retries from scratch on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// Region does not fit the frame buffer it was pushed with
    Region(RegionError),
    /// Serialized byte count disagrees with the window's buffer length
    SizeMismatch { expected: usize, actual: usize },
    /// I2C write failed (NACK, timeout)
    Bus(E),
}

impl<E> From<RegionError> for DriverError<E> {
    fn from(e: RegionError) -> Self {
        DriverError::Region(e)
    }
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a new SSD1306 driver for the given 7-bit address
    /// (typically 0x3C or 0x3D)
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Initialize the display for the given panel height in pixels
    pub async fn init(&mut self, height: usize) -> Result<(), DriverError<I2C::Error>> {
        let mux = (height.clamp(16, 64) - 1) as u8;
        // 128x32 panels use sequential COM wiring, 128x64 alternative
        let com_pins: u8 = if height == 32 { 0x02 } else { 0x12 };

        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_MEM_MODE,
            0x00, // Horizontal addressing
            cmd::SET_START_LINE,
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_MUX_RATIO,
            mux,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_COM_PINS,
            com_pins,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_PRECHARGE,
            0xF1, // Charge pump assumed
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_CONTRAST,
            0xCF, // High contrast
            cmd::SET_ENTIRE_ON, // Follow RAM contents
            cmd::SET_NORMAL,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await.map_err(DriverError::Bus)?;
        }

        Ok(())
    }

    /// Send a single command byte
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.addr, &[CONTROL_COMMAND, cmd]).await
    }

    /// Push a frame buffer window to the display
    ///
    /// Emits the column/page window addressing commands, then exactly
    /// `region.buffer_len()` data bytes as a single bus write. The data
    /// byte count is checked against the window size; a mismatch is a
    /// programming error, not a runtime condition.
    pub async fn push(
        &mut self,
        fb: &FrameBuffer,
        region: &Region,
    ) -> Result<(), DriverError<I2C::Error>> {
        let expected = region.buffer_len();

        let mut data: Vec<u8, { MAX_FRAME_BYTES + 1 }> = Vec::new();
        // Capacity: control byte + at most a full frame
        let _ = data.push(CONTROL_DATA);
        for b in fb.region_bytes(region)? {
            data.push(b).map_err(|_| DriverError::SizeMismatch {
                expected,
                actual: data.len(),
            })?;
        }

        let actual = data.len() - 1;
        if actual != expected {
            return Err(DriverError::SizeMismatch { expected, actual });
        }

        // Window addressing preamble
        for c in [
            cmd::SET_COL_ADDR,
            region.start_col,
            region.end_col,
            cmd::SET_PAGE_ADDR,
            region.start_page,
            region.end_page,
        ] {
            self.command(c).await.map_err(DriverError::Bus)?;
        }

        // Window contents, one logical transaction
        self.i2c
            .write(self.addr, &data)
            .await
            .map_err(DriverError::Bus)
    }

    /// Set display contrast (0-255)
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), DriverError<I2C::Error>> {
        self.command(cmd::SET_CONTRAST)
            .await
            .map_err(DriverError::Bus)?;
        self.command(contrast).await.map_err(DriverError::Bus)
    }

    /// Turn the panel on or off
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), DriverError<I2C::Error>> {
        let c = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.command(c).await.map_err(DriverError::Bus)
    }

    /// Invert the panel colors
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), DriverError<I2C::Error>> {
        let c = if inverted {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        };
        self.command(c).await.map_err(DriverError::Bus)
    }
}
