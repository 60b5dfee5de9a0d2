//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//! Drawing goes to an in-memory [`Framebuffer`]; [`DisplaySink::present`]
//! streams it to the panel one page at a time.

use embedded_hal_async::i2c::{Error as _, I2c};
use nucleon_core::{Canvas, DisplayError, DisplaySink, PixelColor, Size};

use crate::framebuffer::{Framebuffer, PAGES, WIDTH};

/// SSD1306 I2C address with SA0 low (0x3D with SA0 high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte: the rest of the transfer is a command
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: the rest of the transfer is GDDRAM data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up sequence for a 128x64 panel with internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE | 0x00,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x00,                  // Horizontal addressing
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF, // High contrast
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_RESUME, // Output follows RAM
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: Framebuffer,
    initialized: bool,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver
    ///
    /// Nothing is sent until [`init`](Self::init).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: Framebuffer::new(),
            initialized: false,
        }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        for &c in INIT_SEQUENCE {
            self.command(c).await?;
        }
        self.initialized = true;
        Ok(())
    }

    /// Whether [`init`](Self::init) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The frame buffer as it will be sent on the next present
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.buffer
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .await
            .map_err(|e| DisplayError::Communication(e.kind()))
    }

    /// Flush the frame buffer to the display
    async fn flush(&mut self) -> Result<(), DisplayError> {
        // Full-screen window; the address pointer wraps page by page
        for c in [
            cmd::SET_COLUMN_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ] {
            self.command(c).await?;
        }

        for page in 0..PAGES {
            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(&self.buffer.pages()[page]);
            self.i2c
                .write(self.address, &data)
                .await
                .map_err(|e| DisplayError::Communication(e.kind()))?;
        }

        Ok(())
    }
}

impl<I2C> Canvas for Ssd1306<I2C> {
    fn size(&self) -> Size {
        self.buffer.size()
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: PixelColor) {
        self.buffer.set_pixel(x, y, color);
    }

    fn fill_run(&mut self, x: i32, y: i32, width: u32, color: PixelColor) {
        self.buffer.fill_run(x, y, width, color);
    }
}

impl<I2C> DisplaySink for Ssd1306<I2C>
where
    I2C: I2c,
{
    async fn present(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, Operation};
    use nucleon_core::{Animator, SceneConfig};

    /// Mock I2C bus recording every write
    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        /// Fail the write with this index (0-based)
        fail_at: Option<usize>,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if self.fail_at == Some(self.writes.len()) {
                            return Err(ErrorKind::ArbitrationLoss);
                        }
                        self.writes.push((address, bytes.to_vec()));
                    }
                    Operation::Read(buf) => buf.fill(0),
                }
            }
            Ok(())
        }
    }

    fn initialized(i2c: MockI2c) -> Ssd1306<MockI2c> {
        let mut display = Ssd1306::new(i2c, DEFAULT_ADDRESS);
        block_on(display.init()).unwrap();
        display
    }

    #[test]
    fn test_init_sends_command_sequence() {
        let display = initialized(MockI2c::default());
        assert!(display.is_initialized());

        let i2c = display.release();
        assert_eq!(i2c.writes.len(), INIT_SEQUENCE.len());
        for ((addr, bytes), &expected) in i2c.writes.iter().zip(INIT_SEQUENCE) {
            assert_eq!(*addr, 0x3C);
            assert_eq!(bytes.as_slice(), &[CONTROL_COMMAND, expected]);
        }
        assert_eq!(i2c.writes.first().unwrap().1[1], 0xAE);
        assert_eq!(i2c.writes.last().unwrap().1[1], 0xAF);
    }

    #[test]
    fn test_uses_configured_address() {
        let mut display = Ssd1306::new(MockI2c::default(), 0x3D);
        block_on(display.init()).unwrap();
        assert!(display.release().writes.iter().all(|(addr, _)| *addr == 0x3D));
    }

    #[test]
    fn test_present_before_init_rejected() {
        let mut display = Ssd1306::new(MockI2c::default(), DEFAULT_ADDRESS);
        assert_eq!(
            block_on(display.present()),
            Err(DisplayError::NotInitialized)
        );
        assert!(display.release().writes.is_empty());
    }

    #[test]
    fn test_init_failure_propagates() {
        let mut display = Ssd1306::new(
            MockI2c {
                fail_at: Some(3),
                ..Default::default()
            },
            DEFAULT_ADDRESS,
        );
        assert_eq!(
            block_on(display.init()),
            Err(DisplayError::Communication(ErrorKind::ArbitrationLoss))
        );
        assert!(!display.is_initialized());
    }

    #[test]
    fn test_present_streams_pages() {
        let mut display = initialized(MockI2c::default());
        display.set_pixel(0, 0, PixelColor::On);
        display.set_pixel(127, 63, PixelColor::On);
        display.fill_run(10, 9, 3, PixelColor::On);
        block_on(display.present()).unwrap();

        let i2c = display.release();
        let flush = &i2c.writes[INIT_SEQUENCE.len()..];
        assert_eq!(flush.len(), 6 + PAGES);

        let window: Vec<u8> = flush[..6].iter().map(|(_, b)| b[1]).collect();
        assert_eq!(window, [0x21, 0, 127, 0x22, 0, 7]);

        for (_, data) in &flush[6..] {
            assert_eq!(data.len(), WIDTH + 1);
            assert_eq!(data[0], CONTROL_DATA);
        }

        let page0 = &flush[6].1[1..];
        assert_eq!(page0[0], 0b0000_0001);
        let page1 = &flush[7].1[1..];
        assert_eq!(&page1[10..13], &[0b0000_0010; 3]);
        let page7 = &flush[13].1[1..];
        assert_eq!(page7[127], 0b1000_0000);
    }

    #[test]
    fn test_present_failure_propagates() {
        let fail_at = INIT_SEQUENCE.len() + 6 + 2;
        let mut display = initialized(MockI2c {
            fail_at: Some(fail_at),
            ..Default::default()
        });
        assert_eq!(
            block_on(display.present()),
            Err(DisplayError::Communication(ErrorKind::ArbitrationLoss))
        );
    }

    #[test]
    fn test_animator_drives_display() {
        let mut display = initialized(MockI2c::default());
        let mut animator = Animator::new(&SceneConfig::default());

        block_on(animator.blank(&mut display)).unwrap();
        assert_eq!(display.framebuffer().lit_count(), 0);

        block_on(animator.step(&mut display)).unwrap();
        assert_eq!(display.framebuffer().pixel(90, 32), PixelColor::On);
        assert_eq!(animator.phase().degrees(), 18.0);

        // Init, then two presents of 6 commands + 8 pages each
        let writes = display.release().writes.len();
        assert_eq!(writes, INIT_SEQUENCE.len() + 2 * (6 + PAGES));
    }
}
