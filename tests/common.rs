#![allow(dead_code)]

// filename according to https://doc.rust-lang.org/book/ch11-03-test-organization.html
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource};
use std::cell::RefCell;
use std::rc::Rc;

pub const CAPACITY: usize = 2048;
pub const PAGE_SIZE: usize = 16;
pub const BASE_ADDRESS: u8 = 0x50;
pub const WRITE_CYCLE_NS: u64 = 5_000_000;

#[derive(Debug, PartialEq, Clone)]
pub enum Event {
    /// A write consisting of the offset byte only, sets the internal pointer
    Address { device: u8, address: u16 },
    Write { device: u8, address: u16, len: usize },
    Read { device: u8, address: u16, len: usize },
    /// Not acknowledged because the device was still committing the last write
    Busy { device: u8 },
    Delay { ns: u64 },
}

#[derive(Default)]
struct Shared {
    events: Vec<Event>,
    busy_ns: u64,
}

/// An AT24C16: 8 blocks of 256 bytes selected by the low 3 bits of the device address. Data bytes
/// of a write roll over within their 16 byte page, a sequential read runs over the whole array.
/// After a write the device does not acknowledge until the write cycle time has been waited for.
pub struct Device {
    pub buf: Vec<u8>,
    pub fail_after_operation: usize,
    pointer: u16,
    transactions: usize,
    shared: Rc<RefCell<Shared>>,
}

impl Device {
    /// All bytes zero, reads of unwritten addresses return 0 / "".
    pub fn new() -> Self {
        Self::with_fill(0x00)
    }

    /// All bytes 0xff like a device fresh from the factory.
    pub fn new_erased() -> Self {
        Self::with_fill(0xff)
    }

    pub fn new_with_fault(fail_after_operation: usize) -> Self {
        Self {
            fail_after_operation,
            ..Self::new()
        }
    }

    fn with_fill(fill: u8) -> Self {
        Self {
            buf: vec![fill; CAPACITY],
            fail_after_operation: usize::MAX,
            pointer: 0,
            transactions: 0,
            shared: Default::default(),
        }
    }

    /// A delay provider sharing the clock of this device.
    pub fn delay(&self) -> Delay {
        Delay {
            shared: self.shared.clone(),
        }
    }

    pub fn disable_faults(&mut self) {
        self.fail_after_operation = usize::MAX;
    }

    pub fn events(&self) -> Vec<Event> {
        self.shared.borrow().events.clone()
    }

    pub fn clear_events(&mut self) {
        self.shared.borrow_mut().events.clear();
    }

    /// `(address, len)` of every data write
    pub fn writes(&self) -> Vec<(u16, usize)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Write { address, len, .. } => Some((address, len)),
                _ => None,
            })
            .collect()
    }

    pub fn transactions(&self) -> usize {
        self.transactions
    }

    pub fn dump_events(&self) {
        println!("Events:");
        for event in self.events() {
            println!("  {:?}", event);
        }
    }

    fn push(&self, event: Event) {
        self.shared.borrow_mut().events.push(event);
    }

    fn next_in_page(pointer: u16) -> u16 {
        let mask = PAGE_SIZE as u16 - 1;
        (pointer & !mask) | (pointer.wrapping_add(1) & mask)
    }
}

#[derive(Debug)]
pub struct DeviceError(ErrorKind);

impl i2c::Error for DeviceError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

impl ErrorType for Device {
    type Error = DeviceError;
}

impl I2c for Device {
    fn transaction(
        &mut self,
        device: u8,
        operations: &mut [i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        if device & !0x07 != BASE_ADDRESS {
            return Err(DeviceError(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address,
            )));
        }

        if self.transactions >= self.fail_after_operation {
            println!("    device: FAULT");
            return Err(DeviceError(ErrorKind::Bus));
        }
        self.transactions += 1;

        if self.shared.borrow().busy_ns > 0 {
            println!("    device: busy");
            self.push(Event::Busy { device });
            return Err(DeviceError(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address,
            )));
        }

        let block = (device & 0x07) as u16;
        for operation in operations.iter_mut() {
            match operation {
                i2c::Operation::Write(bytes) => {
                    let Some((&offset, data)) = bytes.split_first() else {
                        continue;
                    };
                    let address = block << 8 | offset as u16;
                    self.pointer = address;

                    if data.is_empty() {
                        self.push(Event::Address { device, address });
                        continue;
                    }

                    println!(
                        "    device: write: 0x{address:03X}[0x{:02X}] #{:>2}",
                        data.len(),
                        self.transactions
                    );
                    for &byte in data.iter() {
                        self.buf[self.pointer as usize] = byte;
                        self.pointer = Self::next_in_page(self.pointer);
                    }
                    self.shared.borrow_mut().busy_ns = WRITE_CYCLE_NS;
                    self.push(Event::Write {
                        device,
                        address,
                        len: data.len(),
                    });
                }
                i2c::Operation::Read(buf) => {
                    let address = self.pointer;
                    println!(
                        "    device: read:  0x{address:03X}[0x{:02X}] #{:>2}",
                        buf.len(),
                        self.transactions
                    );
                    for byte in buf.iter_mut() {
                        *byte = self.buf[self.pointer as usize];
                        self.pointer = (self.pointer + 1) % CAPACITY as u16;
                    }
                    self.push(Event::Read {
                        device,
                        address,
                        len: buf.len(),
                    });
                }
            }
        }

        Ok(())
    }
}

pub struct Delay {
    shared: Rc<RefCell<Shared>>,
}

impl Delay {
    fn wait(&mut self, ns: u64) {
        let mut shared = self.shared.borrow_mut();
        shared.busy_ns = shared.busy_ns.saturating_sub(ns);
        shared.events.push(Event::Delay { ns });
    }
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        self.wait(ns as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait(ms as u64 * 1_000_000);
    }
}
