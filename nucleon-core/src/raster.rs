//! Circle rasterizer
//!
//! Converts circles into pixel writes on any [`Canvas`]. Both routines
//! are idempotent: calling them twice with the same arguments writes the
//! same pixels. Clipping is left to the canvas.

use crate::geometry::{Circle, PixelColor, Point};
use crate::traits::Canvas;

/// Draw a 1-pixel-wide circle outline
///
/// Integer midpoint (Bresenham) circle. Each step plots the eight
/// symmetric octant points; points on the axes and diagonals are written
/// more than once, which the canvas absorbs. A negative radius draws
/// nothing, radius 0 draws the center pixel.
pub fn draw_circle_outline<C>(canvas: &mut C, center: Point, radius: i32, color: PixelColor)
where
    C: Canvas + ?Sized,
{
    if radius < 0 {
        return;
    }

    let (cx, cy) = (center.x, center.y);
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        canvas.set_pixel(cx + x, cy + y, color);
        canvas.set_pixel(cx + y, cy + x, color);
        canvas.set_pixel(cx - y, cy + x, color);
        canvas.set_pixel(cx - x, cy + y, color);
        canvas.set_pixel(cx - x, cy - y, color);
        canvas.set_pixel(cx - y, cy - x, color);
        canvas.set_pixel(cx + y, cy - x, color);
        canvas.set_pixel(cx + x, cy - y, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x + 1);
        }
    }
}

/// Draw a solid disc
///
/// Scanline fill: one [`Canvas::fill_run`] per row, from `cy - r` to
/// `cy + r`, with half-width `floor(sqrt(r² - dy²))`. The pixels written
/// are exactly the integer points within distance `r` of the center.
pub fn draw_filled_circle<C>(canvas: &mut C, center: Point, radius: i32, color: PixelColor)
where
    C: Canvas + ?Sized,
{
    if radius < 0 {
        return;
    }

    // i64 so r² and the row bounds cannot overflow for large radii
    let r_sq = radius as i64 * radius as i64;
    let (cx, cy) = (center.x as i64, center.y as i64);
    for dy in -radius..=radius {
        // Rows past the i32 range cannot land on any canvas
        let Ok(y) = i32::try_from(cy + dy as i64) else {
            continue;
        };
        let dx = half_width(r_sq - dy as i64 * dy as i64) as i64;
        let left = (cx - dx).max(i32::MIN as i64);
        let right = (cx + dx).min(i32::MAX as i64);
        let width = (right - left + 1).min(u32::MAX as i64) as u32;
        canvas.fill_run(left as i32, y, width, color);
    }
}

/// Draw the outline of a [`Circle`]
pub fn outline<C: Canvas + ?Sized>(canvas: &mut C, circle: Circle, color: PixelColor) {
    draw_circle_outline(canvas, circle.center, circle.radius, color);
}

/// Draw a [`Circle`] as a filled disc
pub fn fill<C: Canvas + ?Sized>(canvas: &mut C, circle: Circle, color: PixelColor) {
    draw_filled_circle(canvas, circle.center, circle.radius, color);
}

/// Truncated square root of a non-negative row extent
///
/// `extent_sq` is at most `i32::MAX²`. The `f64` estimate can be off by
/// one near that bound, so it is corrected in integers.
fn half_width(extent_sq: i64) -> i32 {
    let mut d = libm::floor(libm::sqrt(extent_sq as f64)) as i64;
    while d * d > extent_sq {
        d -= 1;
    }
    while (d + 1) * (d + 1) <= extent_sq {
        d += 1;
    }
    d as i32
}
