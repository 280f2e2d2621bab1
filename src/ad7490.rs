//! Control register of the AD7490 16-channel SPI ADC.
//!
//! The 12-bit control register is sent left-aligned in the 16-bit frame: bit 15 is `WRITE`, bit 4
//! is `CODING`, bits 3..0 are don't care.

/// The remaining bits of the frame are written to the control register.
pub const WRITE: u16 = 1 << 15;
/// Use the shadow register / sequence through the channels.
pub const SEQ: u16 = 1 << 14;
pub const ADD3: u16 = 1 << 13;
pub const ADD2: u16 = 1 << 12;
pub const ADD1: u16 = 1 << 11;
pub const ADD0: u16 = 1 << 10;
pub const PM1: u16 = 1 << 9;
pub const PM0: u16 = 1 << 8;
pub const SHADOW: u16 = 1 << 7;
/// DOUT is weakly driven instead of three-state between conversions.
pub const WEAK_TRI: u16 = 1 << 6;
/// Set: 0 to REF_IN, clear: 0 to 2 x REF_IN.
pub const RANGE: u16 = 1 << 5;
/// Straight binary output coding (clear: twos complement).
pub const CODING: u16 = 1 << 4;

/// The ADC ignores this frame.
pub const NO_WRITE_CONTROL_WORD: u16 = 0x0000;

const CHANNEL_SHIFT: u16 = 10;
const CHANNEL_MASK: u16 = 0x0F;
const RESULT_MASK: u16 = 0x0FFF;

/// Number of channels sampled by the logger.
pub const LOGGED_CHANNELS: u8 = 4;

/// Normal power mode, consecutive sequence of channels 0 to `last_channel`, weakly driven DOUT,
/// straight binary coding.
pub const fn control_word(last_channel: u8) -> u16 {
    WRITE
        | SEQ
        | ((last_channel as u16 & CHANNEL_MASK) << CHANNEL_SHIFT)
        | PM1
        | PM0
        | SHADOW
        | WEAK_TRI
        | CODING
}

/// Sequence over the logged channels.
pub const NORMAL_CONTROL_WORD: u16 = control_word(LOGGED_CHANNELS - 1);

/// A conversion result: the upper 4 bits of the frame carry the channel, the lower 12 the value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub channel: u8,
    pub value: u16,
}

impl Sample {
    pub const fn decode(frame: u16) -> Self {
        Self {
            channel: (frame >> 12) as u8,
            value: frame & RESULT_MASK,
        }
    }
}
