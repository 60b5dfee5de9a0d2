//! Display sink trait

use embedded_hal::i2c::ErrorKind;

use super::canvas::Canvas;

/// Errors that can occur when handing a frame to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication(ErrorKind),
    /// `present` called before the panel was initialized
    NotInitialized,
}

/// Owner of the framebuffer and of the transport to the physical panel
///
/// Drawing goes through the [`Canvas`] supertrait and only touches memory.
/// [`present`](DisplaySink::present) pushes the finished frame out; it may
/// block for as long as the bus takes and has no timeout.
#[allow(async_fn_in_trait)]
pub trait DisplaySink: Canvas {
    /// Transfer the in-memory framebuffer to the display
    async fn present(&mut self) -> Result<(), DisplayError>;
}
