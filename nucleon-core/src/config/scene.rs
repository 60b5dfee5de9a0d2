//! Scene geometry and animation timing

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::geometry::Size;

/// Atom layout and animation pacing
///
/// Lengths are in pixels. The screen center is `(width / 2, height / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct SceneConfig {
    /// Screen width
    pub width: u16,
    /// Screen height
    pub height: u16,
    /// Radius of each of the three nucleus dots
    pub nucleus_radius: u16,
    /// Horizontal and vertical offset of the two lower nucleus dots
    pub nucleus_offset: u16,
    /// Distance from the center to the electron
    pub orbit_radius: u16,
    /// Radius of the electron dot
    pub electron_radius: u16,
    /// Frames per full electron revolution
    pub frames_per_revolution: u16,
    /// Pause between frames in milliseconds
    pub frame_delay_ms: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            nucleus_radius: 4,
            nucleus_offset: 5,
            orbit_radius: 26,
            electron_radius: 2,
            frames_per_revolution: 20,
            frame_delay_ms: 1,
        }
    }
}

impl SceneConfig {
    /// Screen dimensions
    pub const fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }

    /// Electron step per frame in degrees
    pub fn angular_step(&self) -> f32 {
        360.0 / self.frames_per_revolution as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.frames_per_revolution == 0 {
            return Err(ConfigError::ZeroFramesPerRevolution);
        }

        // Largest extent that stays on screen from the center in every direction.
        // The right/bottom side is one pixel shorter on even dimensions.
        let reach = ((self.width - 1) / 2).min((self.height - 1) / 2) as u32;

        if self.orbit_radius as u32 + self.electron_radius as u32 > reach {
            return Err(ConfigError::OrbitExceedsScreen);
        }
        if self.nucleus_offset as u32 + self.nucleus_radius as u32 > reach {
            return Err(ConfigError::NucleusExceedsScreen);
        }
        Ok(())
    }
}
