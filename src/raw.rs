//! Geometry of the AT24C16 and the pure address arithmetic shared by all accessors.

use crate::error::Error;

/// 16 Kbit, arranged as 8 blocks of 256 bytes.
pub const CAPACITY: usize = 2048;
/// A single write transaction must stay inside one page, the device rolls its pointer over within
/// the page otherwise.
pub const PAGE_SIZE: usize = 16;
pub const BLOCK_SIZE: usize = 256;
/// Base device id with A2=A1=A0 used as block select.
pub const DEFAULT_BASE_ADDRESS: u8 = 0x50;
/// Maximum write cycle time. The device does not acknowledge while committing a page.
pub const WRITE_CYCLE_TIME_MS: u32 = 5;
/// Default scan length of a string read.
pub const STRING_READ_CAP: usize = 32;

const BLOCK_SELECT_MASK: u8 = 0x07;

// a page is addressed by a single offset byte, so pages must never straddle a block
const _: () = assert!(BLOCK_SIZE.is_multiple_of(PAGE_SIZE));
const _: () = assert!(CAPACITY == BLOCK_SIZE * (BLOCK_SELECT_MASK as usize + 1));

/// Computes the 7-bit bus id for a memory address: bits [10:8] of the address select one of the
/// 8 blocks and are or'ed into the base id.
pub const fn device_select(base: u8, address: u16) -> u8 {
    base | ((address >> 8) as u8 & BLOCK_SELECT_MASK)
}

/// Offset inside the selected block, sent as the first byte of every transaction.
pub(crate) const fn mem_offset(address: u16) -> u8 {
    (address & 0xFF) as u8
}

pub(crate) const fn is_page_start(address: u16) -> bool {
    (address as usize).is_multiple_of(PAGE_SIZE)
}

pub(crate) const fn is_valid_base(base: u8) -> bool {
    base <= 0x7F && base & BLOCK_SELECT_MASK == 0
}

/// `address .. address + len` has to lie inside the array.
pub(crate) fn check_range(address: u16, len: usize) -> Result<(), Error> {
    let address = address as usize;
    if address >= CAPACITY || address + len > CAPACITY {
        return Err(Error::AddressOutOfRange);
    }
    Ok(())
}

/// Limits a read to the end of the array.
pub(crate) fn clamp_len(address: u16, len: usize) -> usize {
    len.min(CAPACITY.saturating_sub(address as usize))
}
