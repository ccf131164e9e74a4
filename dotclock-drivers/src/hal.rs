//! Adapters from `embedded-hal` 1.0 to the dotclock HAL traits
//!
//! Lets the drivers run on any HAL crate that implements the blocking
//! `embedded-hal` traits without a dedicated `dotclock-hal` port.

use embedded_hal::digital::OutputPin as EhOutputPin;
use embedded_hal::i2c::I2c as EhI2c;
use embedded_hal::spi::SpiBus as EhSpiBus;

use dotclock_hal::{I2cBus, OutputPin, SpiBus};

/// [`SpiBus`] over an `embedded-hal` SPI bus
///
/// Writes are flushed before returning so chip select is never raised
/// while bits are still shifting out.
pub struct HalSpi<T>(pub T);

impl<T: EhSpiBus> SpiBus for HalSpi<T> {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(data)?;
        self.0.flush()
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.0.transfer(read, write)?;
        self.0.flush()
    }
}

/// [`OutputPin`] over an `embedded-hal` output pin
///
/// The dotclock pin trait is infallible, so failed writes are counted
/// (and logged with the `defmt` feature) instead of returned. The last
/// requested level is reported.
pub struct HalPin<T> {
    pin: T,
    high: bool,
    faults: u32,
}

impl<T: EhOutputPin> HalPin<T> {
    /// Wrap a pin, driving it high
    pub fn new(pin: T) -> Self {
        let mut wrapped = Self {
            pin,
            high: true,
            faults: 0,
        };
        let result = wrapped.pin.set_high();
        wrapped.record(result);
        wrapped
    }

    /// Number of pin writes that failed
    pub fn faults(&self) -> u32 {
        self.faults
    }

    /// Release the pin
    pub fn release(self) -> T {
        self.pin
    }

    fn record(&mut self, result: Result<(), T::Error>) {
        if result.is_err() {
            self.faults = self.faults.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("output pin write failed ({} so far)", self.faults);
        }
    }
}

impl<T: EhOutputPin> OutputPin for HalPin<T> {
    fn set_high(&mut self) {
        let result = self.pin.set_high();
        self.record(result);
        self.high = true;
    }

    fn set_low(&mut self) {
        let result = self.pin.set_low();
        self.record(result);
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// [`I2cBus`] over an `embedded-hal` I2C bus
pub struct HalI2c<T>(pub T);

impl<T: EhI2c> I2cBus for HalI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.0.write_read(address, write_data, read_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorKind;
    use embedded_hal::i2c::Operation;
    use std::vec::Vec;

    use crate::max7219::SpiChain;
    use crate::rtc::Ds3231;
    use dotclock_core::traits::{ChainTransport, ClockTime};

    #[derive(Default)]
    struct Wire {
        sent: Vec<u8>,
        flushes: usize,
    }

    impl embedded_hal::spi::ErrorType for Wire {
        type Error = Infallible;
    }

    impl EhSpiBus for Wire {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
            self.sent.extend_from_slice(words);
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Infallible> {
            read.fill(0xFF);
            self.write(write)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
            self.sent.extend_from_slice(words);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct Pin {
        toggles: usize,
    }

    impl embedded_hal::digital::ErrorType for Pin {
        type Error = Infallible;
    }

    impl EhOutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.toggles += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.toggles += 1;
            Ok(())
        }
    }

    /// Output that rejects every write
    struct BrokenPin;

    impl embedded_hal::digital::ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl EhOutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), ErrorKind> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), ErrorKind> {
            Err(ErrorKind::Other)
        }
    }

    /// DS3231 holding 12:34:56, answering any register pointer from 0
    struct Clock;

    impl embedded_hal::i2c::ErrorType for Clock {
        type Error = Infallible;
    }

    impl EhI2c for Clock {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Infallible> {
            let regs = [0x56, 0x34, 0x12];
            for op in operations {
                if let Operation::Read(buf) = op {
                    let values = regs.iter().chain(core::iter::repeat(&0));
                    for (byte, value) in buf.iter_mut().zip(values) {
                        *byte = *value;
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_spi_flushes() {
        let mut spi = HalSpi(Wire::default());
        SpiBus::write(&mut spi, &[1, 2]).unwrap();
        let mut read = [0u8; 2];
        SpiBus::transfer(&mut spi, &mut read, &[3, 4]).unwrap();
        assert_eq!(read, [0xFF, 0xFF]);
        assert_eq!(spi.0.sent, [1, 2, 3, 4]);
        assert_eq!(spi.0.flushes, 2);
    }

    #[test]
    fn test_pin_tracks_level() {
        let mut pin = HalPin::new(Pin::default());
        assert!(pin.is_set_high());
        pin.set_low();
        assert!(pin.is_set_low());
        assert_eq!(pin.faults(), 0);
        assert_eq!(pin.release().toggles, 2);
    }

    #[test]
    fn test_pin_counts_failed_writes() {
        let mut pin = HalPin::new(BrokenPin);
        assert_eq!(pin.faults(), 1);
        pin.set_low();
        pin.set_high();
        assert_eq!(pin.faults(), 3);
        assert!(pin.is_set_high());
    }

    #[test]
    fn test_chain_over_embedded_hal() {
        let mut chain = SpiChain::new(HalSpi(Wire::default()), HalPin::new(Pin::default()), 2);
        chain.send_to_all(0x0C, 0x01).unwrap();
        let (spi, cs) = chain.release();
        assert_eq!(spi.0.sent, [0x0C, 0x01, 0x0C, 0x01]);
        assert!(cs.is_set_high());
    }

    #[test]
    fn test_rtc_over_embedded_hal() {
        let mut rtc = Ds3231::new(HalI2c(Clock));
        assert_eq!(rtc.read_time(), Ok(ClockTime::new(12, 34, 56)));
    }
}
