//! Pixel canvas trait

use crate::geometry::{PixelColor, Size};

/// A 1-bit pixel surface the rasterizer draws into
///
/// Implementations must silently ignore writes outside
/// `[0, width) x [0, height)`; the rasterizer never clips.
pub trait Canvas {
    /// Canvas dimensions in pixels
    fn size(&self) -> Size;

    /// Set every pixel to [`PixelColor::Off`]
    fn clear(&mut self);

    /// Set a single pixel
    fn set_pixel(&mut self, x: i32, y: i32, color: PixelColor);

    /// Set `width` consecutive pixels starting at `(x, y)` on one row
    ///
    /// The default implementation falls back to per-pixel writes. Buffers
    /// that can fill a run faster should override it. Columns past `i32::MAX` are dropped.
    fn fill_run(&mut self, x: i32, y: i32, width: u32, color: PixelColor) {
        let end = (x as i64 + width as i64).min(i32::MAX as i64 + 1);
        for col in x as i64..end {
            self.set_pixel(col as i32, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canvas that only records `set_pixel` calls, so `fill_run` uses the default
    #[derive(Default)]
    struct Recorder {
        pixels: Vec<(i32, i32)>,
    }

    impl Canvas for Recorder {
        fn size(&self) -> Size {
            Size::new(u32::MAX, u32::MAX)
        }

        fn clear(&mut self) {
            self.pixels.clear();
        }

        fn set_pixel(&mut self, x: i32, y: i32, _color: PixelColor) {
            self.pixels.push((x, y));
        }
    }

    #[test]
    fn test_default_fill_run_writes_each_pixel() {
        let mut canvas = Recorder::default();
        canvas.fill_run(-2, 7, 4, PixelColor::On);
        assert_eq!(canvas.pixels, vec![(-2, 7), (-1, 7), (0, 7), (1, 7)]);

        canvas.clear();
        canvas.fill_run(3, 3, 0, PixelColor::On);
        assert!(canvas.pixels.is_empty());
    }

    #[test]
    fn test_default_fill_run_stops_at_i32_max() {
        let mut canvas = Recorder::default();
        canvas.fill_run(i32::MAX - 1, 0, 10, PixelColor::On);
        assert_eq!(canvas.pixels, vec![(i32::MAX - 1, 0), (i32::MAX, 0)]);
    }

    #[test]
    fn test_default_fill_run_accepts_widths_past_i32_max() {
        let mut canvas = Recorder::default();
        canvas.fill_run(i32::MAX - 2, 1, u32::MAX, PixelColor::On);
        assert_eq!(canvas.pixels.len(), 3);
        assert_eq!(canvas.pixels.first(), Some(&(i32::MAX - 2, 1)));
    }
}
