//! SPI transport for a chain of MAX7219s
//!
//! Each driver is a 16-bit shift register: register byte, then data byte.
//! Chained drivers pass bits along, so a burst carries one pair per device
//! and the pair shifted in first ends up in the device furthest from the
//! MCU. Bursts are therefore built in reverse device order: the last device
//! first, device 0 last. Rising chip select latches every device at once.

use dotclock_core::config::{clamp_devices, MAX_BURST_LEN};
use dotclock_core::traits::ChainTransport;
use dotclock_hal::{OutputPin, SpiBus};
use heapless::Vec;

use super::reg;

/// One serialized burst
pub type Burst = Vec<u8, MAX_BURST_LEN>;

/// Build a burst addressing a single device
///
/// Every other slot carries the no-op pair. An index past the chain yields
/// an all no-op burst.
pub fn burst_to_one(devices: u8, device: u8, register: u8, data: u8) -> Burst {
    let mut burst = Burst::new();
    for slot in (0..clamp_devices(devices)).rev() {
        let pair = if slot == device {
            [register, data]
        } else {
            [reg::NOOP, 0x00]
        };
        let _ = burst.extend_from_slice(&pair);
    }
    burst
}

/// Build a burst writing the same pair to every device
pub fn burst_to_all(devices: u8, register: u8, data: u8) -> Burst {
    let mut burst = Burst::new();
    for _ in 0..clamp_devices(devices) {
        let _ = burst.extend_from_slice(&[register, data]);
    }
    burst
}

/// Build a burst writing one register with per-device data
///
/// `data[m]` is for device `m`; devices without an entry receive 0.
pub fn burst_row(devices: u8, register: u8, data: &[u8]) -> Burst {
    let mut burst = Burst::new();
    for slot in (0..clamp_devices(devices) as usize).rev() {
        let value = data.get(slot).copied().unwrap_or(0);
        let _ = burst.extend_from_slice(&[register, value]);
    }
    burst
}

/// Chip select held low for the lifetime of the guard
///
/// Dropping the guard raises the line, which latches the shifted data.
struct Selected<'a, CS: OutputPin> {
    cs: &'a mut CS,
}

impl<'a, CS: OutputPin> Selected<'a, CS> {
    fn assert(cs: &'a mut CS) -> Self {
        cs.set_low();
        Self { cs }
    }
}

impl<CS: OutputPin> Drop for Selected<'_, CS> {
    fn drop(&mut self) {
        self.cs.set_high();
    }
}

/// MAX7219 daisy-chain on an SPI bus with a dedicated chip select
pub struct SpiChain<SPI, CS> {
    spi: SPI,
    cs: CS,
    devices: u8,
}

impl<SPI: SpiBus, CS: OutputPin> SpiChain<SPI, CS> {
    /// Create a chain transport
    ///
    /// The device count is clamped to 1..=8 (zero means a full chain) and
    /// chip select is released.
    pub fn new(spi: SPI, mut cs: CS, devices: u8) -> Self {
        cs.set_high();
        Self {
            spi,
            cs,
            devices: clamp_devices(devices),
        }
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    /// Send one burst inside a chip select window
    fn send(&mut self, burst: &[u8]) -> Result<(), SPI::Error> {
        let _selected = Selected::assert(&mut self.cs);
        self.spi.write(burst)
    }
}

impl<SPI: SpiBus, CS: OutputPin> ChainTransport for SpiChain<SPI, CS> {
    type Error = SPI::Error;

    fn devices(&self) -> u8 {
        self.devices
    }

    fn send_to_one(&mut self, device: u8, register: u8, data: u8) -> Result<(), Self::Error> {
        let burst = burst_to_one(self.devices, device, register, data);
        self.send(&burst)
    }

    fn send_to_all(&mut self, register: u8, data: u8) -> Result<(), Self::Error> {
        let burst = burst_to_all(self.devices, register, data);
        self.send(&burst)
    }

    fn send_row_to_all(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        let burst = burst_row(self.devices, register, data);
        self.send(&burst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec as StdVec;

    /// Bus event, shared between the SPI and CS mocks to check ordering
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Low,
        High,
        Write(StdVec<u8>),
    }

    type Log = Rc<RefCell<StdVec<Event>>>;

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiBus for MockSpi {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.log.borrow_mut().push(Event::Write(data.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), ()> {
            read.fill(0);
            self.write(write)
        }
    }

    struct MockCs {
        log: Log,
        high: bool,
    }

    impl OutputPin for MockCs {
        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push(Event::High);
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push(Event::Low);
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn chain(devices: u8, fail: bool) -> (SpiChain<MockSpi, MockCs>, Log) {
        let log: Log = Rc::new(RefCell::new(StdVec::new()));
        let spi = MockSpi {
            log: log.clone(),
            fail,
        };
        let cs = MockCs {
            log: log.clone(),
            high: false,
        };
        let chain = SpiChain::new(spi, cs, devices);
        log.borrow_mut().clear();
        (chain, log)
    }

    #[test]
    fn test_burst_to_one() {
        // Device 1 of 4: slots go out device 3, 2, 1, 0
        assert_eq!(
            burst_to_one(4, 1, 0x0A, 0x07).as_slice(),
            &[0, 0, 0, 0, 0x0A, 0x07, 0, 0]
        );
        assert_eq!(
            burst_to_one(4, 3, 0x0A, 0x07).as_slice(),
            &[0x0A, 0x07, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_burst_to_one_out_of_range() {
        assert_eq!(burst_to_one(2, 5, 0x0A, 0x07).as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_burst_to_all() {
        assert_eq!(
            burst_to_all(3, 0x0C, 0x01).as_slice(),
            &[0x0C, 0x01, 0x0C, 0x01, 0x0C, 0x01]
        );
        assert_eq!(burst_to_all(0, 0x0C, 0x01).len(), MAX_BURST_LEN);
    }

    #[test]
    fn test_burst_row_reverse_order() {
        assert_eq!(
            burst_row(3, 0x01, &[0xA0, 0xB1, 0xC2]).as_slice(),
            &[0x01, 0xC2, 0x01, 0xB1, 0x01, 0xA0]
        );
        // Short data pads the far devices with zero
        assert_eq!(
            burst_row(3, 0x02, &[0xA0]).as_slice(),
            &[0x02, 0x00, 0x02, 0x00, 0x02, 0xA0]
        );
    }

    #[test]
    fn test_new_releases_chip_select() {
        let (chain, _) = chain(4, false);
        let (_, cs) = chain.release();
        assert!(cs.is_set_high());
    }

    #[test]
    fn test_send_is_framed_by_chip_select() {
        let (mut chain, log) = chain(2, false);
        chain.send_to_all(reg::INTENSITY, 0x05).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::Low,
                Event::Write([0x0A, 0x05, 0x0A, 0x05].to_vec()),
                Event::High,
            ]
        );
    }

    #[test]
    fn test_send_to_one_serialized() {
        let (mut chain, log) = chain(4, false);
        chain.send_to_one(2, reg::SHUTDOWN, 0x01).unwrap();
        assert_eq!(
            log.borrow()[1],
            Event::Write([0, 0, 0x0C, 0x01, 0, 0, 0, 0].to_vec())
        );
    }

    #[test]
    fn test_chip_select_released_on_error() {
        let (mut chain, log) = chain(2, true);
        assert_eq!(chain.send_row_to_all(reg::digit(0), &[1, 2]), Err(()));
        assert_eq!(*log.borrow(), [Event::Low, Event::High]);
    }
}
