/// Monochrome bitmaps and the bit-packed pixel buffer.
///
/// Both use the handheld's page layout: the screen is cut into horizontal
/// pages 8 pixels tall, each byte covers one column of one page, and bit 0
/// is the topmost pixel of that column.

use crate::entities::{HEIGHT, WIDTH};

const BUFFER_LEN: usize = (WIDTH * HEIGHT / 8) as usize;

/// A sprite in page layout. `data` holds `width * ceil(height / 8)` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: i32,
    pub height: i32,
    pub data: &'static [u8],
}

impl Bitmap {
    pub const fn new(width: i32, height: i32, data: &'static [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Whether the pixel at column `col`, row `row` is set. Out-of-range
    /// coordinates (and bytes missing from `data`) read as unset.
    pub fn bit(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            return false;
        }
        let index = ((row / 8) * self.width + col) as usize;
        self.data
            .get(index)
            .map(|byte| byte & (1 << (row % 8)) != 0)
            .unwrap_or(false)
    }
}

/// The whole screen, one bit per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    bytes: [u8; BUFFER_LEN],
}

impl PixelBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0; BUFFER_LEN],
        }
    }

    pub fn clear(&mut self) {
        self.bytes = [0; BUFFER_LEN];
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some((index, mask)) => self.bytes[index] & mask != 0,
            None => false,
        }
    }

    /// Light one pixel. Off-screen coordinates are clipped.
    pub fn set(&mut self, x: i32, y: i32) {
        if let Some((index, mask)) = Self::locate(x, y) {
            self.bytes[index] |= mask;
        }
    }

    /// OR the set bits of `bitmap` into the buffer, clipping at the edges.
    pub fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap) {
        for row in 0..bitmap.height {
            for col in 0..bitmap.width {
                if bitmap.bit(col, row) {
                    self.set(x + col, y + row);
                }
            }
        }
    }

    pub fn lit_count(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some((((y / 8) * WIDTH + x) as usize, 1 << (y % 8)))
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
