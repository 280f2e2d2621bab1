use thiserror::Error;

/// Errors that can occur while talking to the EEPROM or interpreting its contents. Marked as
/// non-exhaustive to allow for future additions without breaking the API. A configuration loader
/// would likely only need to handle `NotProvisioned` and `BusError`, the other errors point at
/// wrong caller-supplied addresses or values.
#[derive(Error, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The internal error value is returned from the provided `impl I2c`. This includes a missing
    /// acknowledge, i.e. the device supplied no data.
    #[error("internal bus error")]
    BusError,

    /// The access does not fit into the 2 KiB array. Writes never wrap around to address 0.
    #[error("address out of range")]
    AddressOutOfRange,

    /// The base device address must be a 7-bit address with the three block select bits cleared.
    #[error("invalid base address")]
    InvalidBaseAddress,

    /// The value plus its null terminator does not fit into the slot.
    #[error("value too long")]
    ValueTooLong,

    /// Strings must not contain a null byte, it would terminate them on the device.
    #[error("value malformed")]
    ValueMalformed,

    /// The bytes read back are not valid UTF-8.
    #[error("invalid utf-8")]
    InvalidUtf8,

    /// The configuration id does not match. The found value is reported.
    #[error("not provisioned: id {0:#06x}")]
    NotProvisioned(u16),
}
