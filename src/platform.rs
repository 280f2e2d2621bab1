//! Chip glue. Any blocking `embedded_hal::i2c::I2c` together with an `embedded_hal::delay::DelayNs`
//! works with [`crate::Eeprom`], the types here only save the wiring on ESP32 targets.

#[cfg(any(
    feature = "esp32",
    feature = "esp32s2",
    feature = "esp32s3",
    feature = "esp32c2",
    feature = "esp32c3",
    feature = "esp32c6",
    feature = "esp32h2",
))]
mod chip {
    use crate::Eeprom;
    use esp_hal::Blocking;
    use esp_hal::delay::Delay;
    use esp_hal::i2c::master::I2c;

    /// EEPROM on the blocking I2C master, settling delays are busy waits.
    pub type EspEeprom<'d> = Eeprom<I2c<'d, Blocking>, Delay>;

    impl<'d> Eeprom<I2c<'d, Blocking>, Delay> {
        pub fn new_esp(i2c: I2c<'d, Blocking>) -> Self {
            Self::new(i2c, Delay::new())
        }
    }
}

#[cfg(any(
    feature = "esp32",
    feature = "esp32s2",
    feature = "esp32s3",
    feature = "esp32c2",
    feature = "esp32c3",
    feature = "esp32c6",
    feature = "esp32h2",
))]
pub use chip::*;
