//! Configuration types
//!
//! The animation is configured once, at build time, from `atom.toml`.
//! These types are shared by the firmware build script (which parses and
//! validates the file on the host) and by the firmware itself (which
//! receives the result as a `const`).

pub mod hardware;
pub mod scene;

pub use hardware::*;
pub use scene::*;

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Screen width or height is zero
    ZeroDimension,
    /// Screen size differs from the attached panel
    PanelSizeMismatch,
    /// A revolution must take at least one frame
    ZeroFramesPerRevolution,
    /// Orbit plus electron does not fit around the screen center
    OrbitExceedsScreen,
    /// Nucleus dots do not fit around the screen center
    NucleusExceedsScreen,
    /// I2C address is not a valid 7-bit address
    InvalidI2cAddress,
    /// I2C bus frequency is zero
    ZeroBusFrequency,
}

impl ConfigError {
    /// Human-readable description, used in build-time diagnostics
    pub const fn message(&self) -> &'static str {
        match self {
            ConfigError::ZeroDimension => "scene width and height must be non-zero",
            ConfigError::PanelSizeMismatch => "scene size must match the display panel",
            ConfigError::ZeroFramesPerRevolution => "frames_per_revolution must be at least 1",
            ConfigError::OrbitExceedsScreen => {
                "orbit_radius + electron_radius must fit inside the screen"
            }
            ConfigError::NucleusExceedsScreen => {
                "nucleus_offset + nucleus_radius must fit inside the screen"
            }
            ConfigError::InvalidI2cAddress => "i2c_address must be a 7-bit address (0x08-0x77)",
            ConfigError::ZeroBusFrequency => "i2c_frequency_hz must be non-zero",
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct AppConfig {
    /// Display bus settings
    pub display: DisplayConfig,
    /// Scene geometry and animation timing
    pub scene: SceneConfig,
}

impl AppConfig {
    /// Validate the configuration against the attached panel
    pub fn validate(&self, panel: Size) -> Result<(), ConfigError> {
        self.display.validate()?;
        self.scene.validate()?;
        if self.scene.size() != panel {
            return Err(ConfigError::PanelSizeMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Size = Size::new(128, 64);

    #[test]
    fn test_default_is_valid() {
        assert_eq!(AppConfig::default().validate(PANEL), Ok(()));
    }

    #[test]
    fn test_panel_mismatch() {
        let mut config = AppConfig::default();
        config.scene.height = 32;
        config.scene.orbit_radius = 10;
        assert_eq!(
            config.validate(PANEL),
            Err(ConfigError::PanelSizeMismatch)
        );
    }

    #[test]
    fn test_display_errors_reported_first() {
        let mut config = AppConfig::default();
        config.display.i2c_frequency_hz = 0;
        config.scene.frames_per_revolution = 0;
        assert_eq!(config.validate(PANEL), Err(ConfigError::ZeroBusFrequency));
    }

    #[test]
    fn test_parse_full_toml() {
        let text = r#"
            [display]
            i2c_address = 61
            i2c_frequency_hz = 100000

            [scene]
            width = 128
            height = 64
            nucleus_radius = 3
            nucleus_offset = 4
            orbit_radius = 20
            electron_radius = 1
            frames_per_revolution = 36
            frame_delay_ms = 5
        "#;
        let config: AppConfig = toml::from_str(text).unwrap();
        assert_eq!(config.display.i2c_address, 0x3D);
        assert_eq!(config.display.i2c_frequency_hz, 100_000);
        assert_eq!(config.scene.nucleus_radius, 3);
        assert_eq!(config.scene.frames_per_revolution, 36);
        assert_eq!(config.scene.frame_delay_ms, 5);
        assert_eq!(config.validate(PANEL), Ok(()));
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let text = r#"
            [scene]
            orbit_radius = 24
        "#;
        let config: AppConfig = toml::from_str(text).unwrap();
        assert_eq!(config.scene.orbit_radius, 24);
        assert_eq!(config.scene.width, 128);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_error_messages_nonempty() {
        let errors = [
            ConfigError::ZeroDimension,
            ConfigError::PanelSizeMismatch,
            ConfigError::ZeroFramesPerRevolution,
            ConfigError::OrbitExceedsScreen,
            ConfigError::NucleusExceedsScreen,
            ConfigError::InvalidI2cAddress,
            ConfigError::ZeroBusFrequency,
        ];
        for e in errors {
            assert!(!e.message().is_empty());
        }
    }
}
