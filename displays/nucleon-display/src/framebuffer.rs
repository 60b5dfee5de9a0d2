//! In-memory 1-bit framebuffer
//!
//! Organized the way SSD1306/SH1106 controllers store GDDRAM: 8 pages of
//! 128 column bytes, where bit `y % 8` of `pages[y / 8][x]` is pixel
//! `(x, y)`. A page can be streamed to the panel as-is.

use nucleon_core::{Canvas, PixelColor, Point, Size};

/// Display width in pixels
pub const WIDTH: usize = 128;
/// Display height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// 128x64 monochrome frame buffer
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank frame buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Read back a pixel; out-of-bounds reads are `Off`
    pub fn pixel(&self, x: i32, y: i32) -> PixelColor {
        if !Self::SIZE.contains(Point::new(x, y)) {
            return PixelColor::Off;
        }
        let (page, mask) = Self::locate(y as usize);
        PixelColor::from(self.pages[page][x as usize] & mask != 0)
    }

    /// Raw page data in controller layout
    pub fn pages(&self) -> &[[u8; WIDTH]; PAGES] {
        &self.pages
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.pages
            .iter()
            .flatten()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    const SIZE: Size = Size::new(WIDTH as u32, HEIGHT as u32);

    /// Page index and bit mask for a row
    fn locate(y: usize) -> (usize, u8) {
        (y / 8, 1 << (y % 8))
    }
}

impl Canvas for Framebuffer {
    fn size(&self) -> Size {
        Self::SIZE
    }

    fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: PixelColor) {
        if !Self::SIZE.contains(Point::new(x, y)) {
            return;
        }
        let (page, mask) = Self::locate(y as usize);
        let byte = &mut self.pages[page][x as usize];
        if color.is_on() {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    fn fill_run(&mut self, x: i32, y: i32, width: u32, color: PixelColor) {
        if y < 0 || y as usize >= HEIGHT {
            return;
        }
        // i64 so x + width cannot overflow
        let start = (x as i64).max(0);
        let end = (x as i64 + width as i64).min(WIDTH as i64);
        if start >= end {
            return;
        }

        let (page, mask) = Self::locate(y as usize);
        let run = &mut self.pages[page][start as usize..end as usize];
        if color.is_on() {
            run.iter_mut().for_each(|byte| *byte |= mask);
        } else {
            run.iter_mut().for_each(|byte| *byte &= !mask);
        }
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("lit", &self.lit_count())
            .finish()
    }
}
