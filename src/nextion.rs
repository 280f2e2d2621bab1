//! Command sink for a Nextion touch display on a serial port.
//!
//! Every instruction is plain ASCII terminated by three `0xFF` bytes. The display answers on the
//! same port, reading those answers is not handled here.

use alloc::format;
use embedded_hal::delay::DelayNs;
use embedded_io::Write;

/// Ends every instruction.
pub const TERMINATOR: [u8; 3] = [0xFF; 3];

const RESET_SETTLE_MS: u32 = 10;

pub struct Nextion<W> {
    serial: W,
}

impl<W: Write> Nextion<W> {
    pub fn new(serial: W) -> Self {
        Self { serial }
    }

    /// Resets the display, waiting before and after the `rest` instruction.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), W::Error> {
        delay.delay_ms(RESET_SETTLE_MS);
        self.command("rest")?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Sends a raw instruction followed by the terminator and flushes the port.
    pub fn command(&mut self, instruction: &str) -> Result<(), W::Error> {
        self.serial.write_all(instruction.as_bytes())?;
        self.serial.write_all(&TERMINATOR)?;
        self.serial.flush()
    }

    /// `element="content"`, e.g. `t0.txt="192.168.0.2"`. Quotes in `content` are not escaped.
    pub fn set_text(&mut self, element: &str, content: &str) -> Result<(), W::Error> {
        self.command(&format!("{element}=\"{content}\""))
    }

    /// `element=value`, e.g. `n0.val=42`.
    pub fn set_value(&mut self, element: &str, value: i32) -> Result<(), W::Error> {
        self.command(&format!("{element}={value}"))
    }

    /// The instruction prefix directly followed by the decimal value, e.g. `j0.val=` and 80.
    pub fn write_value(&mut self, prefix: &str, value: u16) -> Result<(), W::Error> {
        self.command(&format!("{prefix}{value}"))
    }

    pub fn release(self) -> W {
        self.serial
    }
}
