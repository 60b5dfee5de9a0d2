//! Pixel-space geometry primitives

/// A point in framebuffer pixel coordinates
///
/// No bounds are enforced here; clipping is the canvas' job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by the given offsets
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height of a canvas in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check whether a point lies inside `[0, width) x [0, height)`
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Center point, truncating odd dimensions
    pub const fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// Binary pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelColor {
    /// Pixel dark (0)
    #[default]
    Off,
    /// Pixel lit (1)
    On,
}

impl PixelColor {
    pub const fn is_on(self) -> bool {
        matches!(self, PixelColor::On)
    }
}

impl From<bool> for PixelColor {
    fn from(on: bool) -> Self {
        if on {
            PixelColor::On
        } else {
            PixelColor::Off
        }
    }
}

/// A circle with integer center and radius
///
/// Radius 0 is a single pixel. A negative radius is degenerate and draws
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}
