//! Animation task
//!
//! Brings up the OLED, then hands it to the animator for the rest of the
//! program's life. Any display failure is fatal.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;

use nucleon_core::Animator;
use nucleon_display::Ssd1306;

/// SSD1306 on the async I2C0 bus
pub type OledDisplay = Ssd1306<I2c<'static, I2C0, Async>>;

/// Animation task - renders frames forever
#[embassy_executor::task]
pub async fn animation_task(mut display: OledDisplay, mut animator: Animator) {
    info!("Animation task started");

    if let Err(e) = display.init().await {
        defmt::panic!("Failed to initialize display: {:?}", e);
    }
    info!("OLED initialized");

    // Start from a dark panel
    if let Err(e) = animator.blank(&mut display).await {
        defmt::panic!("Failed to clear display: {:?}", e);
    }

    info!(
        "Animating: {} deg per frame, {} ms between frames",
        animator.scene().angular_step(),
        animator.frame_delay_ms()
    );

    let mut delay = Delay;
    match animator.run(&mut display, &mut delay).await {
        Ok(never) => match never {},
        Err(e) => {
            error!("Display failure at phase {}: {:?}", animator.phase().degrees(), e);
            defmt::panic!("Display link lost");
        }
    }
}
