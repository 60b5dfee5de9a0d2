//! Nucleon - Animated Atom Firmware
//!
//! Firmware for a Raspberry Pi Pico W driving a 128x64 SSD1306 OLED over
//! I2C. Draws a stylized atom (orbit ring, three nucleus dots) with one
//! electron circling the nucleus, forever.
//!
//! Wiring: I2C0 with SDA on GP0 and SCL on GP1.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use nucleon_core::Animator;
use nucleon_display::Ssd1306;

use crate::config::APP_CONFIG;

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Nucleon firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!("Configuration: {}", APP_CONFIG);

    // Setup I2C for OLED (GP1=SCL, GP0=SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = APP_CONFIG.display.i2c_frequency_hz;

    let i2c = I2c::new_async(p.I2C0, p.PIN_1, p.PIN_0, Irqs, i2c_config);
    let display = Ssd1306::new(i2c, APP_CONFIG.display.i2c_address);
    info!(
        "I2C0 at {} Hz, display address {=u8:#x}",
        APP_CONFIG.display.i2c_frequency_hz, APP_CONFIG.display.i2c_address
    );

    let animator = Animator::new(&APP_CONFIG.scene);

    spawner.spawn(tasks::animation_task(display, animator)).unwrap();

    info!("All tasks spawned, firmware running");
}
