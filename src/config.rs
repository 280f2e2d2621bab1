//! Startup configuration persisted in the EEPROM's fixed address map.

use crate::Eeprom;
use crate::error::Error;
use crate::layout::{DEBUG_ADDRESS, DEFAULT_ID, Field, ID_ADDRESS};
use alloc::string::String;
#[cfg(feature = "defmt")]
use defmt::warn;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use strum::IntoEnumIterator;

/// Written over the id before a store, a device that was interrupted mid-store reads as not
/// provisioned.
const INVALID_ID: u16 = 0xFFFF;

/// Configuration of the logger, owned by the application after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub id: u16,
    pub debug: bool,
    pub ssid: String,
    pub password: String,
    /// FTP server address
    pub server: String,
    pub ftp_user: String,
    pub ftp_pass: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            debug: false,
            ssid: String::new(),
            password: String::new(),
            server: String::new(),
            ftp_user: String::new(),
            ftp_pass: String::new(),
        }
    }
}

impl Config {
    /// Reads the configuration. Fails with [`Error::NotProvisioned`] if the id word does not
    /// match, the string slots are not read in that case.
    pub fn load<I2C: I2c, D: DelayNs>(eeprom: &mut Eeprom<I2C, D>) -> Result<Config, Error> {
        let id = eeprom.read_word(ID_ADDRESS)?;
        if id != DEFAULT_ID {
            return Err(Error::NotProvisioned(id));
        }

        let mut config = Config {
            id,
            debug: eeprom.get::<bool>(DEBUG_ADDRESS)?,
            ..Default::default()
        };
        for field in Field::iter() {
            *config.field_mut(field) = eeprom.load_string(field.slot())?;
        }

        Ok(config)
    }

    /// Like [`Config::load`] but falls back to the defaults on any error.
    pub fn load_or_default<I2C: I2c, D: DelayNs>(eeprom: &mut Eeprom<I2C, D>) -> Config {
        match Self::load(eeprom) {
            Ok(config) => config,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                warn!("config: using defaults: {}", _e);

                #[cfg(feature = "debug-logs")]
                println!("  Config: using defaults: {_e}");

                Config::default()
            }
        }
    }

    /// Writes all values and the id. Every string is checked against its slot before anything is
    /// written. The id is invalidated first and written last.
    pub fn store<I2C: I2c, D: DelayNs>(&self, eeprom: &mut Eeprom<I2C, D>) -> Result<(), Error> {
        for field in Field::iter() {
            field.slot().check_str(self.field(field))?;
        }

        eeprom.write_word(ID_ADDRESS, INVALID_ID)?;
        eeprom.set(DEBUG_ADDRESS, self.debug)?;
        for field in Field::iter() {
            eeprom.store_str(field.slot(), self.field(field))?;
        }
        eeprom.write_word(ID_ADDRESS, self.id)
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Ssid => &self.ssid,
            Field::Password => &self.password,
            Field::Server => &self.server,
            Field::FtpUser => &self.ftp_user,
            Field::FtpPass => &self.ftp_pass,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Ssid => &mut self.ssid,
            Field::Password => &mut self.password,
            Field::Server => &mut self.server,
            Field::FtpUser => &mut self.ftp_user,
            Field::FtpPass => &mut self.ftp_pass,
        }
    }
}
