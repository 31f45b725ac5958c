//! Bit-packed monochrome pixel buffer for the P10 panel area.

use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};

use crate::shared_constants::{FRAME_COL_BYTES, FRAME_COLS, FRAME_ROWS};

/// One complete display frame, packed eight pixels per byte (MSB = leftmost).
///
/// Frames are plain values: the renderer rasterizes a fresh frame per scroll
/// step and hands it to the panel by value, so the hardware refresh path
/// never observes a half-updated buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelFrame([[u8; FRAME_COL_BYTES]; FRAME_ROWS]);

impl PanelFrame {
    /// Create a blank (all dark) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[0; FRAME_COL_BYTES]; FRAME_ROWS])
    }

    /// Set or clear a single pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        let Some(byte) = self
            .0
            .get_mut(y)
            .and_then(|row| row.get_mut(x / 8))
        else {
            return;
        };
        #[expect(
            clippy::arithmetic_side_effects,
            reason = "x % 8 is in 0..8, so the shift cannot overflow"
        )]
        let mask = 0x80_u8 >> (x % 8);
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read back a single pixel. Out-of-bounds coordinates read as dark.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        let Some(byte) = self.0.get(y).and_then(|row| row.get(x / 8)) else {
            return false;
        };
        #[expect(
            clippy::arithmetic_side_effects,
            reason = "x % 8 is in 0..8, so the shift cannot overflow"
        )]
        let mask = 0x80_u8 >> (x % 8);
        byte & mask != 0
    }

    /// Packed bytes of one row, leftmost pixel in the high bit of byte 0.
    #[must_use]
    pub fn row_bytes(&self, row: usize) -> [u8; FRAME_COL_BYTES] {
        self.0.get(row).copied().unwrap_or([0; FRAME_COL_BYTES])
    }

    /// True if no pixel is lit.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0
            .iter()
            .all(|row| row.iter().all(|&byte| byte == 0))
    }

    /// Count of lit pixels.
    #[must_use]
    pub fn lit_pixels(&self) -> u32 {
        self.0
            .iter()
            .flat_map(|row| row.iter())
            .map(|byte| byte.count_ones())
            .sum()
    }
}

impl Default for PanelFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for PanelFrame {
    fn size(&self) -> Size {
        Size::new(FRAME_COLS as u32, FRAME_ROWS as u32)
    }
}

impl DrawTarget for PanelFrame {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 {
                self.set_pixel(coord.x as usize, coord.y as usize, color.is_on());
            }
        }
        Ok(())
    }
}
