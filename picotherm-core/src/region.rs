//! Render region arithmetic
//!
//! A region is a rectangular window of the display addressed in column and
//! page units (a page is a horizontal strip of 8 pixel rows). The display
//! controller is given the window bounds, then exactly `buffer_len()` data
//! bytes for the window contents.

/// Errors from region construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegionError {
    /// `end_col < start_col`
    ColumnOrder,
    /// `end_page < start_page`
    PageOrder,
    /// Window extends past the display geometry
    OutOfBounds,
}

/// Rectangular display window in column/page units
///
/// All bounds are inclusive and 0-indexed. A region is validated against
/// the display geometry at construction; an invalid region is a static
/// misconfiguration, not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    /// First column of the window
    pub start_col: u8,
    /// Last column of the window (inclusive)
    pub end_col: u8,
    /// First page of the window
    pub start_page: u8,
    /// Last page of the window (inclusive)
    pub end_page: u8,
}

impl Region {
    /// Create a region, validating it against the display geometry
    ///
    /// `width` is the display width in pixels, `pages` the height in pages
    /// (rows / 8).
    pub fn new(
        start_col: u8,
        end_col: u8,
        start_page: u8,
        end_page: u8,
        width: usize,
        pages: usize,
    ) -> Result<Self, RegionError> {
        if end_col < start_col {
            return Err(RegionError::ColumnOrder);
        }
        if end_page < start_page {
            return Err(RegionError::PageOrder);
        }
        if end_col as usize >= width || end_page as usize >= pages {
            return Err(RegionError::OutOfBounds);
        }
        Ok(Self {
            start_col,
            end_col,
            start_page,
            end_page,
        })
    }

    /// Full-screen region for the given geometry
    pub fn full(width: usize, pages: usize) -> Result<Self, RegionError> {
        if width == 0 || pages == 0 || width > 256 || pages > 256 {
            return Err(RegionError::OutOfBounds);
        }
        Self::new(0, (width - 1) as u8, 0, (pages - 1) as u8, width, pages)
    }

    /// Window width in columns
    pub fn cols(&self) -> usize {
        (self.end_col - self.start_col) as usize + 1
    }

    /// Window height in pages
    pub fn pages(&self) -> usize {
        (self.end_page - self.start_page) as usize + 1
    }

    /// Number of data bytes the window holds (one byte per column per page)
    pub fn buffer_len(&self) -> usize {
        self.cols() * self.pages()
    }
}
