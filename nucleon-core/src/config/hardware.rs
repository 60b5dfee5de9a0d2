//! Display bus configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default SSD1306 I2C address (SA0 low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Default I2C bus frequency (fast mode)
pub const DEFAULT_I2C_FREQUENCY_HZ: u32 = 400_000;

/// I2C settings for the OLED panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct DisplayConfig {
    /// 7-bit I2C address (usually 0x3C or 0x3D)
    pub i2c_address: u8,
    /// Bus clock in Hz
    pub i2c_frequency_hz: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            i2c_address: DEFAULT_I2C_ADDRESS,
            i2c_frequency_hz: DEFAULT_I2C_FREQUENCY_HZ,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 0x00-0x07 and 0x78-0x7F are reserved by the I2C standard
        if !(0x08..=0x77).contains(&self.i2c_address) {
            return Err(ConfigError::InvalidI2cAddress);
        }
        if self.i2c_frequency_hz == 0 {
            return Err(ConfigError::ZeroBusFrequency);
        }
        Ok(())
    }
}
