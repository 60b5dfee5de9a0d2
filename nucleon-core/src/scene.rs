//! Atom scene model
//!
//! Fixed geometry (orbit ring, three nucleus dots) computed once from
//! [`SceneConfig`], plus the phase arithmetic that moves the electron.

use core::f32::consts::PI;

use crate::config::SceneConfig;
use crate::geometry::{Circle, Point};

/// Electron phase angle in degrees, always in `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Phase(f32);

impl Phase {
    /// Phase at the rightmost point of the orbit
    pub const ZERO: Phase = Phase(0.0);

    /// Create a phase from any finite angle, wrapping into `[0, 360)`
    pub fn from_degrees(degrees: f32) -> Self {
        let wrapped = libm::fmodf(degrees, 360.0);
        let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
        // -tiny + 360.0 can round up to exactly 360.0
        if wrapped >= 360.0 {
            Phase(0.0)
        } else {
            Phase(wrapped)
        }
    }

    /// Angle in degrees
    pub const fn degrees(self) -> f32 {
        self.0
    }

    /// Angle in radians
    pub fn radians(self) -> f32 {
        self.0 * PI / 180.0
    }
}

/// Static atom layout
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scene {
    center: Point,
    nucleus_radius: i32,
    nucleus_offset: i32,
    orbit_radius: i32,
    electron_radius: i32,
    /// Degrees advanced per frame
    angular_step: f32,
}

impl Scene {
    /// Build the layout from configuration
    ///
    /// `config` is expected to be validated; a zero frame count would
    /// produce an infinite step.
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            center: config.size().center(),
            nucleus_radius: config.nucleus_radius as i32,
            nucleus_offset: config.nucleus_offset as i32,
            orbit_radius: config.orbit_radius as i32,
            electron_radius: config.electron_radius as i32,
            angular_step: config.angular_step(),
        }
    }

    /// Screen center, which is also the orbit center
    pub fn center(&self) -> Point {
        self.center
    }

    /// Degrees advanced per frame
    pub fn angular_step(&self) -> f32 {
        self.angular_step
    }

    /// The orbit ring, drawn as an outline
    pub fn orbit(&self) -> Circle {
        Circle::new(self.center, self.orbit_radius)
    }

    /// The three nucleus dots: center, lower-left, lower-right
    pub fn nucleus(&self) -> [Circle; 3] {
        let off = self.nucleus_offset;
        [
            Circle::new(self.center, self.nucleus_radius),
            Circle::new(self.center.offset(-off, off), self.nucleus_radius),
            Circle::new(self.center.offset(off, off), self.nucleus_radius),
        ]
    }

    /// Electron center at the given phase
    ///
    /// `center + (round(R cos θ), round(R sin θ))`, rounding half away
    /// from zero. Screen y grows downward, so positive angles run
    /// clockwise on the panel.
    pub fn electron_position(&self, phase: Phase) -> Point {
        let theta = phase.radians();
        let r = self.orbit_radius as f32;
        let dx = libm::roundf(r * libm::cosf(theta)) as i32;
        let dy = libm::roundf(r * libm::sinf(theta)) as i32;
        self.center.offset(dx, dy)
    }

    /// The electron dot at the given phase
    pub fn electron(&self, phase: Phase) -> Circle {
        Circle::new(self.electron_position(phase), self.electron_radius)
    }

    /// Phase for the next frame
    ///
    /// Wraps by subtracting 360 rather than a general modulo so the angle
    /// stays bounded no matter how long the animation runs.
    pub fn advance_phase(&self, current: Phase) -> Phase {
        let mut next = current.0 + self.angular_step;
        if next >= 360.0 {
            next -= 360.0;
        }
        Phase(next)
    }
}
