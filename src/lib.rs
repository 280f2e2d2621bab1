#![doc = include_str ! ("../README.md")]
#![cfg_attr(not(target_arch = "x86_64"), no_std)]

pub mod ad7490;
pub mod config;
pub mod error;
mod get;
pub mod layout;
pub mod nextion;
pub mod platform;
mod raw;
mod set;

pub use get::Get;
pub use layout::{Field, Slot};
pub use raw::{
    CAPACITY, DEFAULT_BASE_ADDRESS, PAGE_SIZE, STRING_READ_CAP, WRITE_CYCLE_TIME_MS, device_select,
};
pub use set::Set;

extern crate alloc;

use crate::error::Error;
use alloc::string::String;
use alloc::vec;
use core::iter;
#[cfg(feature = "defmt")]
use defmt::trace;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Driver for an AT24C16 class EEPROM: 2 KiB in 8 blocks of 256 bytes, 16 byte write pages.
///
/// The driver keeps no copy of the stored data, every read goes to the device. Each write
/// transaction is followed by the write cycle time before the device is addressed again.
pub struct Eeprom<I2C, D> {
    pub(crate) i2c: I2C,
    pub(crate) delay: D,
    pub(crate) base_address: u8,
}

impl<I2C: I2c, D: DelayNs> Eeprom<I2C, D> {
    /// Creates a driver for a device at the default base address (0x50).
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            base_address: DEFAULT_BASE_ADDRESS,
        }
    }

    /// Creates a driver for a device at a different base address. The three low bits are used as
    /// block select and must be zero.
    pub fn with_base_address(i2c: I2C, delay: D, base_address: u8) -> Result<Self, Error> {
        if !raw::is_valid_base(base_address) {
            return Err(Error::InvalidBaseAddress);
        }

        Ok(Self {
            i2c,
            delay,
            base_address,
        })
    }

    /// Reads a value from the device.
    ///
    /// Supported types are u8, u16 (big-endian), bool and String.
    pub fn get<R>(&mut self, address: u16) -> Result<R, Error>
    where
        Self: Get<R>,
    {
        Get::get(self, address)
    }

    /// Writes a value to the device.
    ///
    /// Supported types are u8, u16 (big-endian), bool and &str (null terminated).
    pub fn set<R>(&mut self, address: u16, value: R) -> Result<(), Error>
    where
        Self: Set<R>,
    {
        Set::set(self, address, value)
    }

    /// Writes a single byte in one transaction.
    pub fn write_byte(&mut self, address: u16, value: u8) -> Result<(), Error> {
        self.write_bytes(address, &[value])
    }

    /// Reads a single byte. A failed read is an error, never a zero value.
    pub fn read_byte(&mut self, address: u16) -> Result<u8, Error> {
        let mut buf = [0u8; 1];
        self.read_bytes(address, &mut buf)?;
        Ok(buf[0])
    }

    /// Writes the high byte first. A word that straddles a page boundary is split into two
    /// transactions.
    pub fn write_word(&mut self, address: u16, value: u16) -> Result<(), Error> {
        self.write_bytes(address, &value.to_be_bytes())
    }

    /// Reads two bytes, high byte first.
    pub fn read_word(&mut self, address: u16) -> Result<u16, Error> {
        let mut buf = [0u8; 2];
        self.read_bytes(address, &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Writes the string followed by a null terminator, one transaction per touched page.
    ///
    /// Strings with interior null bytes are rejected, they could not be read back.
    pub fn write_str(&mut self, address: u16, value: &str) -> Result<(), Error> {
        let bytes = value.as_bytes();
        if bytes.contains(&0) {
            return Err(Error::ValueMalformed);
        }

        self.write_paged(address, bytes.len() + 1, bytes.iter().copied().chain(iter::once(0)))
    }

    /// Reads a null terminated string of at most [`STRING_READ_CAP`] bytes.
    pub fn read_string(&mut self, address: u16) -> Result<String, Error> {
        self.read_string_bounded(address, STRING_READ_CAP)
    }

    /// Reads up to `max_len` bytes and stops at the first null byte.
    ///
    /// A value without terminator in the first `max_len` bytes is returned truncated, a character
    /// cut by the cap is dropped. It can not be told apart from a value of exactly `max_len` bytes.
    pub fn read_string_bounded(&mut self, address: u16, max_len: usize) -> Result<String, Error> {
        raw::check_range(address, 0)?;

        let mut buf = vec![0u8; raw::clamp_len(address, max_len)];
        self.read_bytes(address, &mut buf)?;

        let terminated = match buf.iter().position(|&b| b == 0) {
            Some(end) => {
                buf.truncate(end);
                true
            }
            None => false,
        };

        match String::from_utf8(buf) {
            Ok(value) => Ok(value),
            // incomplete sequence at the cap
            Err(e) if !terminated && e.utf8_error().error_len().is_none() => {
                let valid = e.utf8_error().valid_up_to();
                let mut buf = e.into_bytes();
                buf.truncate(valid);
                String::from_utf8(buf).map_err(|_| Error::InvalidUtf8)
            }
            Err(_) => Err(Error::InvalidUtf8),
        }
    }

    /// Writes a string into a slot of the address map. Values that don't fit including their
    /// terminator are rejected and nothing is written.
    pub fn store_str(&mut self, slot: Slot, value: &str) -> Result<(), Error> {
        slot.check_str(value)?;
        self.write_str(slot.address, value)
    }

    /// Reads a string from a slot of the address map, scanning at most the slot size.
    pub fn load_string(&mut self, slot: Slot) -> Result<String, Error> {
        self.read_string_bounded(slot.address, slot.size)
    }

    /// Sequential read. Sets the device pointer with a write of the offset byte, then reads.
    pub fn read_bytes(&mut self, address: u16, buf: &mut [u8]) -> Result<(), Error> {
        raw::check_range(address, buf.len())?;
        if buf.is_empty() {
            return Ok(());
        }

        let device = device_select(self.base_address, address);

        #[cfg(feature = "defmt")]
        trace!("read: {:#05x}[{}] @{:#04x}", address, buf.len(), device);

        #[cfg(feature = "debug-logs")]
        println!("  Eeprom: read {address:#05x}[{}] device {device:#04x}", buf.len());

        self.i2c
            .write(device, &[raw::mem_offset(address)])
            .map_err(|_| Error::BusError)?;
        self.i2c.read(device, buf).map_err(|_| Error::BusError)
    }

    /// Writes raw bytes, split at page boundaries. No terminator is appended.
    pub fn write_bytes(&mut self, address: u16, data: &[u8]) -> Result<(), Error> {
        self.write_paged(address, data.len(), data.iter().copied())
    }

    /// Returns the bus and the delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// The 7-bit device id of block 0.
    pub fn base_address(&self) -> u8 {
        self.base_address
    }

    /// Opens a transaction at `address` and at every page start after it, so no transaction
    /// crosses a page boundary. The boundary is relative to the absolute address.
    fn write_paged(
        &mut self,
        address: u16,
        len: usize,
        bytes: impl Iterator<Item = u8>,
    ) -> Result<(), Error> {
        if len == 0 {
            return Ok(());
        }
        raw::check_range(address, len)?;

        // offset byte + one page of data
        let mut frame = [0u8; PAGE_SIZE + 1];
        let mut used = 0;
        let mut start = address;

        for (i, byte) in bytes.take(len).enumerate() {
            let current = address + i as u16;
            if i == 0 || raw::is_page_start(current) {
                if used > 0 {
                    self.write_transaction(start, &frame[..used])?;
                }
                start = current;
                frame[0] = raw::mem_offset(current);
                used = 1;
            }
            frame[used] = byte;
            used += 1;
        }

        if used > 0 {
            self.write_transaction(start, &frame[..used])?;
        }

        Ok(())
    }

    fn write_transaction(&mut self, address: u16, frame: &[u8]) -> Result<(), Error> {
        let device = device_select(self.base_address, address);

        #[cfg(feature = "defmt")]
        trace!("write: {:#05x}[{}] @{:#04x}", address, frame.len() - 1, device);

        #[cfg(feature = "debug-logs")]
        println!(
            "  Eeprom: write {address:#05x}[{}] device {device:#04x}",
            frame.len() - 1
        );

        self.i2c.write(device, frame).map_err(|_| Error::BusError)?;
        self.delay.delay_ms(WRITE_CYCLE_TIME_MS);

        Ok(())
    }
}

impl<I2C: I2c, D: DelayNs> embedded_storage::ReadStorage for Eeprom<I2C, D> {
    type Error = Error;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let address = u16::try_from(offset).map_err(|_| Error::AddressOutOfRange)?;
        self.read_bytes(address, bytes)
    }

    fn capacity(&self) -> usize {
        CAPACITY
    }
}

impl<I2C: I2c, D: DelayNs> embedded_storage::Storage for Eeprom<I2C, D> {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let address = u16::try_from(offset).map_err(|_| Error::AddressOutOfRange)?;
        self.write_bytes(address, bytes)
    }
}
