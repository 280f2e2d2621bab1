//! Fixed address map of the configuration values. The addresses and sizes must stay as they are
//! to read devices written by earlier firmware.

use crate::error::Error;
use strum::{Display, EnumIter};

/// Device/config id, 2 bytes.
pub const ID_ADDRESS: u16 = 0x10;
/// Written to [`ID_ADDRESS`] once the device holds a complete configuration.
pub const DEFAULT_ID: u16 = 0xAAA5;
/// Debug flag, 1 byte.
pub const DEBUG_ADDRESS: u16 = 0x12;

pub const SSID: Slot = Slot::new(0x20, 32);
pub const PASSWORD: Slot = Slot::new(0x40, 32);
/// FTP server address
pub const SERVER: Slot = Slot::new(0x60, 32);
/// FTP login user
pub const FTP_USER: Slot = Slot::new(0x80, 16);
/// FTP login password
pub const FTP_PASS: Slot = Slot::new(0x90, 16);

/// A fixed-size, fixed-offset region reserved for one string value including its terminator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slot {
    pub address: u16,
    pub size: usize,
}

impl Slot {
    pub const fn new(address: u16, size: usize) -> Self {
        Self { address, size }
    }

    /// Longest string that fits, the terminator takes one byte.
    pub const fn max_len(&self) -> usize {
        self.size - 1
    }

    pub(crate) fn check_str(&self, value: &str) -> Result<(), Error> {
        if value.len() > self.max_len() {
            return Err(Error::ValueTooLong);
        }
        if value.as_bytes().contains(&0) {
            return Err(Error::ValueMalformed);
        }
        Ok(())
    }
}

/// The string values of the configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Ssid,
    Password,
    Server,
    FtpUser,
    FtpPass,
}

impl Field {
    pub const fn slot(self) -> Slot {
        match self {
            Field::Ssid => SSID,
            Field::Password => PASSWORD,
            Field::Server => SERVER,
            Field::FtpUser => FTP_USER,
            Field::FtpPass => FTP_PASS,
        }
    }
}
