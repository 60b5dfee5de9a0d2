//! Hardware abstraction traits
//!
//! These traits define the interface between the rendering logic
//! and the display hardware.

pub mod canvas;
pub mod display;

pub use canvas::Canvas;
pub use display::{DisplayError, DisplaySink};
