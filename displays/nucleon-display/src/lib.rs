//! Display sink implementations for Nucleon
//!
//! This crate provides:
//! - `Framebuffer`: a 128x64 1-bit buffer in SSD1306 page layout that
//!   implements the core `Canvas` trait with clipping
//! - `Ssd1306`: an async I2C driver for SSD1306 OLED panels that owns a
//!   `Framebuffer` and implements `DisplaySink`
//!
//! # Architecture
//!
//! ```text
//! Animator ──draw──▶ Ssd1306 (Canvas) ──▶ Framebuffer (RAM)
//!          ──present──▶ Ssd1306 (DisplaySink) ──I2C──▶ panel GDDRAM
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod framebuffer;
pub mod ssd1306;

pub use framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
pub use ssd1306::{Ssd1306, DEFAULT_ADDRESS};
