//! The `Get<T>` trait and its implementation in this module allows providing a single generic,
//! overloaded function `get<T>()` for all supported types of the driver.

use crate::Eeprom;
use crate::error::Error;
use alloc::string::String;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

pub trait Get<T> {
    fn get(&mut self, address: u16) -> Result<T, Error>;
}

impl<T, G: Get<T>> Get<T> for &mut G {
    fn get(&mut self, address: u16) -> Result<T, Error> {
        (*self).get(address)
    }
}

impl<I2C: I2c, D: DelayNs> Get<bool> for Eeprom<I2C, D> {
    fn get(&mut self, address: u16) -> Result<bool, Error> {
        let value = self.read_byte(address)?;
        Ok(value != 0)
    }
}

impl<I2C: I2c, D: DelayNs> Get<u8> for Eeprom<I2C, D> {
    fn get(&mut self, address: u16) -> Result<u8, Error> {
        self.read_byte(address)
    }
}

impl<I2C: I2c, D: DelayNs> Get<u16> for Eeprom<I2C, D> {
    fn get(&mut self, address: u16) -> Result<u16, Error> {
        self.read_word(address)
    }
}

impl<I2C: I2c, D: DelayNs> Get<String> for Eeprom<I2C, D> {
    fn get(&mut self, address: u16) -> Result<String, Error> {
        self.read_string(address)
    }
}
