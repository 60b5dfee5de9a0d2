//! Animation driver
//!
//! Owns the scene and the electron phase. Each frame is split into a pure
//! part ([`Animator::render`]) and an impure part ([`Animator::step`],
//! [`Animator::run`]) that presents the frame and paces the loop.
//!
//! ```text
//! clear → orbit → nucleus ×3 → electron → present → advance → delay
//!   ▲                                                            │
//!   └────────────────────────────────────────────────────────────┘
//! ```

use core::convert::Infallible;

use embedded_hal_async::delay::DelayNs;

use crate::config::SceneConfig;
use crate::geometry::PixelColor;
use crate::raster;
use crate::scene::{Phase, Scene};
use crate::traits::{Canvas, DisplayError, DisplaySink};

/// Animation state machine
///
/// There is a single rendering state and no terminal state; the loop in
/// [`run`](Animator::run) only ends when the display fails.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animator {
    scene: Scene,
    phase: Phase,
    frame_delay_ms: u32,
}

impl Animator {
    /// Create an animator starting at phase 0
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            scene: Scene::new(config),
            phase: Phase::ZERO,
            frame_delay_ms: config.frame_delay_ms,
        }
    }

    /// The static scene layout
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current electron phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pause between frames
    pub fn frame_delay_ms(&self) -> u32 {
        self.frame_delay_ms
    }

    /// Draw the current frame into `canvas`
    ///
    /// Clears first, then draws the orbit ring, the three nucleus dots and
    /// the electron. Does not touch the phase.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear();

        raster::outline(canvas, self.scene.orbit(), PixelColor::On);
        for dot in self.scene.nucleus() {
            raster::fill(canvas, dot, PixelColor::On);
        }
        raster::fill(canvas, self.scene.electron(self.phase), PixelColor::On);
    }

    /// Move the electron to its next position
    pub fn advance(&mut self) {
        self.phase = self.scene.advance_phase(self.phase);
    }

    /// Push an empty frame to the display
    ///
    /// Used once at startup so the panel shows nothing left over from a
    /// previous run before the first animation frame.
    pub async fn blank<S: DisplaySink>(&self, sink: &mut S) -> Result<(), DisplayError> {
        sink.clear();
        sink.present().await
    }

    /// Render, present and advance one frame
    ///
    /// If presenting fails the error is returned and the phase is left
    /// where it was.
    pub async fn step<S: DisplaySink>(&mut self, sink: &mut S) -> Result<(), DisplayError> {
        self.render(sink);
        sink.present().await?;
        self.advance();
        Ok(())
    }

    /// Run the animation forever
    ///
    /// Returns only when the display sink fails; that error is fatal for
    /// the caller. There is no cancellation.
    pub async fn run<S, D>(&mut self, sink: &mut S, delay: &mut D) -> Result<Infallible, DisplayError>
    where
        S: DisplaySink,
        D: DelayNs,
    {
        loop {
            self.step(sink).await?;
            delay.delay_ms(self.frame_delay_ms).await;
        }
    }
}
