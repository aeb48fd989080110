//! Bit-packed monochrome frame buffer
//!
//! Mirrors the display's pixel state in memory. The layout follows the
//! SSD1306 page addressing scheme: each byte packs 8 vertically stacked
//! pixels of one page (a horizontal strip of 8 pixel rows), bit 0 being
//! the topmost row. Pixel `(col, row)` lives in byte
//! `col + (row / 8) * width`, bit `row % 8`.

use crate::font::{self, GLYPH_WIDTH};
use crate::region::{Region, RegionError};

use heapless::Vec;

/// Maximum supported display width in pixels
pub const MAX_WIDTH: usize = 128;

/// Maximum supported display height in pixels
pub const MAX_HEIGHT: usize = 64;

/// Backing store capacity in bytes
pub const MAX_FRAME_BYTES: usize = MAX_WIDTH * MAX_HEIGHT / 8;

/// Errors from frame buffer construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Width or height is zero
    ZeroSized,
    /// Height is not a multiple of 8 (the page height)
    HeightNotPageAligned,
    /// Geometry exceeds the backing store capacity
    ExceedsCapacity,
}

/// In-memory bitmap of the full display surface
///
/// Allocated once at startup and mutated in place every refresh cycle
/// (clear, redraw, push). The byte length is always exactly
/// `width * height / 8`.
pub struct FrameBuffer {
    buf: Vec<u8, MAX_FRAME_BYTES>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    /// Create a zeroed frame buffer for the given geometry
    pub fn new(width: usize, height: usize) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroSized);
        }
        if height % 8 != 0 {
            return Err(GeometryError::HeightNotPageAligned);
        }
        let len = width * height / 8;
        if len > MAX_FRAME_BYTES {
            return Err(GeometryError::ExceedsCapacity);
        }
        let mut buf = Vec::new();
        // Capacity checked above
        buf.resize_default(len).map_err(|_| GeometryError::ExceedsCapacity)?;
        Ok(Self { buf, width, height })
    }

    /// Display width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Display height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Display height in pages
    pub fn pages(&self) -> usize {
        self.height / 8
    }

    /// Raw page-major buffer contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Draw a text string with its top-left corner at pixel `(x, y)`
    ///
    /// Characters advance by `GLYPH_WIDTH` columns. Any glyph column or
    /// page that falls outside the buffer (including negative coordinates)
    /// is silently dropped; drawing never panics and never writes outside
    /// the buffer.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        let mut cx = x;
        for ch in text.chars() {
            self.draw_glyph(cx, y, font::glyph(ch));
            cx += GLYPH_WIDTH as i32;
        }
    }

    /// Blit one glyph at pixel `(x, y)`, clipping to the buffer bounds
    fn draw_glyph(&mut self, x: i32, y: i32, glyph: &[u8; GLYPH_WIDTH]) {
        for (i, &bits) in glyph.iter().enumerate() {
            let col = x + i as i32;
            if col < 0 || col as usize >= self.width {
                continue;
            }
            self.blit_column(col as usize, y, bits);
        }
    }

    /// OR an 8-pixel column byte into the buffer at row offset `y`
    ///
    /// When `y` is not page-aligned the byte straddles two pages and is
    /// split accordingly.
    fn blit_column(&mut self, col: usize, y: i32, bits: u8) {
        let page = y.div_euclid(8);
        let shift = y.rem_euclid(8) as u32;

        self.or_byte(col, page, bits.checked_shl(shift).unwrap_or(0));
        if shift > 0 {
            self.or_byte(col, page + 1, bits.checked_shr(8 - shift).unwrap_or(0));
        }
    }

    fn or_byte(&mut self, col: usize, page: i32, value: u8) {
        if page < 0 || page as usize >= self.pages() {
            return;
        }
        self.buf[col + page as usize * self.width] |= value;
    }

    /// Iterate the page-major bytes of a window, for transport
    ///
    /// Yields exactly `region.buffer_len()` bytes: pages outermost, columns
    /// innermost, matching the controller's horizontal addressing order.
    /// Fails if the region does not lie within this buffer's geometry.
    pub fn region_bytes<'a>(
        &'a self,
        region: &Region,
    ) -> Result<impl Iterator<Item = u8> + 'a, RegionError> {
        if region.end_col as usize >= self.width || region.end_page as usize >= self.pages() {
            return Err(RegionError::OutOfBounds);
        }
        let buf: &[u8] = &self.buf;
        let width = self.width;
        let r = *region;
        Ok((r.start_page..=r.end_page).flat_map(move |p| {
            let row = p as usize * width;
            buf[row + r.start_col as usize..=row + r.end_col as usize]
                .iter()
                .copied()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::glyph;

    #[test]
    fn test_geometry_invariants() {
        let fb = FrameBuffer::new(128, 64).unwrap();
        assert_eq!(fb.as_bytes().len(), 1024);
        assert_eq!(fb.pages(), 8);

        let fb = FrameBuffer::new(64, 32).unwrap();
        assert_eq!(fb.as_bytes().len(), 256);
    }

    #[test]
    fn test_bad_geometry_rejected() {
        assert!(matches!(
            FrameBuffer::new(128, 60),
            Err(GeometryError::HeightNotPageAligned)
        ));
        assert!(matches!(FrameBuffer::new(0, 64), Err(GeometryError::ZeroSized)));
        assert!(matches!(
            FrameBuffer::new(256, 64),
            Err(GeometryError::ExceedsCapacity)
        ));
    }

    #[test]
    fn test_clear_yields_all_zero() {
        for (w, h) in [(128usize, 64usize), (128, 32), (64, 48)] {
            let mut fb = FrameBuffer::new(w, h).unwrap();
            fb.draw_string(0, 0, "noise");
            fb.clear();
            assert_eq!(fb.as_bytes().len(), w * h / 8);
            assert!(fb.as_bytes().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_page_aligned_draw_matches_font() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        fb.draw_string(0, 0, "A");
        let g = glyph('A');
        assert_eq!(&fb.as_bytes()[..6], &g[..]);
        // Rest of the buffer untouched
        assert!(fb.as_bytes()[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_row_offset_maps_to_page() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        fb.draw_string(0, 16, "A");
        let g = glyph('A');
        // y=16 is page 2; byte index = col + 2 * 128
        assert_eq!(&fb.as_bytes()[256..262], &g[..]);
        assert!(fb.as_bytes()[..256].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_unaligned_draw_splits_pages() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        fb.draw_string(0, 12, "A");
        let g = glyph('A');
        for i in 0..6 {
            // Page 1 holds the low nibble shifted up, page 2 the spill
            assert_eq!(fb.as_bytes()[128 + i], g[i] << 4);
            assert_eq!(fb.as_bytes()[256 + i], g[i] >> 4);
        }
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut a = FrameBuffer::new(128, 64).unwrap();
        a.clear();
        a.draw_string(3, 8, "Temp: 23.46 C");
        let mut b = FrameBuffer::new(128, 64).unwrap();
        b.clear();
        b.draw_string(3, 8, "Temp: 23.46 C");
        b.draw_string(3, 8, "Temp: 23.46 C");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_right_edge_clipping() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        // 'H' starts 3 columns before the right edge; columns 3..6 drop
        fb.draw_string(125, 0, "H");
        let g = glyph('H');
        assert_eq!(&fb.as_bytes()[125..128], &g[..3]);
        assert!(fb.as_bytes()[128..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fully_out_of_bounds_draw_is_noop() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        fb.draw_string(128, 0, "offscreen");
        fb.draw_string(-600, 0, "offscreen");
        fb.draw_string(0, 64, "offscreen");
        fb.draw_string(0, -8, "offscreen");
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_negative_y_clips_top() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        // Top 4 rows are above the screen; only the spill into page 0 lands
        fb.draw_string(0, -4, "A");
        let g = glyph('A');
        for i in 0..6 {
            assert_eq!(fb.as_bytes()[i], g[i] >> 4);
        }
        assert!(fb.as_bytes()[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_region_bytes_full_screen() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        fb.draw_string(0, 0, "Temperature:");
        let full = Region::full(128, 8).unwrap();
        let bytes: heapless::Vec<u8, MAX_FRAME_BYTES> =
            fb.region_bytes(&full).unwrap().collect();
        assert_eq!(&bytes[..], fb.as_bytes());
    }

    #[test]
    fn test_region_bytes_window() {
        let mut fb = FrameBuffer::new(128, 64).unwrap();
        fb.draw_string(0, 0, "A");
        let r = Region::new(0, 5, 0, 0, 128, 8).unwrap();
        let bytes: heapless::Vec<u8, 16> = fb.region_bytes(&r).unwrap().collect();
        assert_eq!(bytes.len(), r.buffer_len());
        assert_eq!(&bytes[..], &glyph('A')[..]);
    }

    #[test]
    fn test_region_bytes_rejects_foreign_geometry() {
        let fb = FrameBuffer::new(64, 32).unwrap();
        let r = Region::full(128, 8).unwrap();
        assert!(fb.region_bytes(&r).is_err());
    }
}
