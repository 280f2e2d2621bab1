use crate::Eeprom;
use crate::error::Error;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

pub trait Set<T> {
    fn set(&mut self, address: u16, value: T) -> Result<(), Error>;
}

impl<T, S: Set<T>> Set<T> for &mut S {
    fn set(&mut self, address: u16, value: T) -> Result<(), Error> {
        (*self).set(address, value)
    }
}

impl<I2C: I2c, D: DelayNs> Set<bool> for Eeprom<I2C, D> {
    fn set(&mut self, address: u16, value: bool) -> Result<(), Error> {
        self.write_byte(address, value as u8)
    }
}

impl<I2C: I2c, D: DelayNs> Set<u8> for Eeprom<I2C, D> {
    fn set(&mut self, address: u16, value: u8) -> Result<(), Error> {
        self.write_byte(address, value)
    }
}

impl<I2C: I2c, D: DelayNs> Set<u16> for Eeprom<I2C, D> {
    fn set(&mut self, address: u16, value: u16) -> Result<(), Error> {
        self.write_word(address, value)
    }
}

impl<I2C: I2c, D: DelayNs> Set<&str> for Eeprom<I2C, D> {
    fn set(&mut self, address: u16, value: &str) -> Result<(), Error> {
        self.write_str(address, value)
    }
}
