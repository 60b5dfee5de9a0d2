//! Board-agnostic core logic for the Nucleon atom animation
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Pixel geometry and the `Canvas` / `DisplaySink` traits
//! - Integer circle rasterizer (outline and filled)
//! - Scene model (atom layout, electron orbit, phase arithmetic)
//! - Animation driver (render, present, advance, pace)
//! - Configuration type definitions and validation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod config;
pub mod geometry;
pub mod raster;
pub mod scene;
pub mod traits;

pub use animation::Animator;
pub use config::{AppConfig, ConfigError, DisplayConfig, SceneConfig};
pub use geometry::{Circle, PixelColor, Point, Size};
pub use scene::{Phase, Scene};
pub use traits::{Canvas, DisplayError, DisplaySink};
