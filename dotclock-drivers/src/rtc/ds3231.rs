//! DS3231 real-time clock
//!
//! # Register map (used subset)
//!
//! | addr | content |
//! |------|---------|
//! | 0x00 | seconds (BCD) |
//! | 0x01 | minutes (BCD) |
//! | 0x02 | hours: bit 6 = 12 h mode, bit 5 = PM in 12 h mode |
//! | 0x03 | day of week (1-7) |
//! | 0x04 | day of month (BCD) |
//! | 0x05 | month (BCD), bit 7 = century |
//! | 0x06 | year within the century (BCD) |
//! | 0x0F | status: bit 7 = oscillator stopped |

use dotclock_core::traits::{ClockTime, DateTime, TimeSource};
use dotclock_hal::I2cBus;

use super::{bcd_to_bin, bin_to_bcd, day_of_week};

/// Fixed I2C address
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// Year represented by a clear century bit and year register 00
pub const CENTURY_BASE: u16 = 2000;

/// DS3231 register addresses
pub mod reg {
    pub const SECONDS: u8 = 0x00;
    pub const MINUTES: u8 = 0x01;
    pub const HOURS: u8 = 0x02;
    pub const STATUS: u8 = 0x0F;

    /// Hours register: 12-hour mode
    pub const HOURS_12H: u8 = 1 << 6;
    /// Hours register: PM (12-hour mode only)
    pub const HOURS_PM: u8 = 1 << 5;
    /// Month register: century rollover
    pub const MONTH_CENTURY: u8 = 1 << 7;
    /// Status register: oscillator stop flag
    pub const STATUS_OSF: u8 = 1 << 7;
}

/// DS3231 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ds3231Error<E> {
    /// Bus transaction failed
    Bus(E),
    /// Date or time out of the representable range
    InvalidDateTime,
}

impl<E> From<E> for Ds3231Error<E> {
    fn from(e: E) -> Self {
        Ds3231Error::Bus(e)
    }
}

/// Decode the hours register to 0-23
fn decode_hours(raw: u8) -> u8 {
    if raw & reg::HOURS_12H != 0 {
        let hours = bcd_to_bin(raw & 0x1F) % 12;
        if raw & reg::HOURS_PM != 0 {
            hours + 12
        } else {
            hours
        }
    } else {
        bcd_to_bin(raw & 0x3F)
    }
}

/// DS3231 driver
pub struct Ds3231<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2cBus> Ds3231<I2C> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver at a custom address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Check that the chip acknowledges its address
    pub fn probe(&mut self) -> Result<(), Ds3231Error<I2C::Error>> {
        let result = self.i2c.write(self.address, &[]);
        #[cfg(feature = "defmt")]
        if result.is_err() {
            defmt::warn!("DS3231 not found at {=u8:#x}", self.address);
        }
        Ok(result?)
    }

    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Ds3231Error<I2C::Error>> {
        self.i2c.write_read(self.address, &[start], buf)?;
        Ok(())
    }

    /// Read the time of day
    pub fn read_time(&mut self) -> Result<ClockTime, Ds3231Error<I2C::Error>> {
        let mut buf = [0u8; 3];
        self.read_registers(reg::SECONDS, &mut buf)?;
        Ok(ClockTime::new(
            decode_hours(buf[2]),
            bcd_to_bin(buf[1]),
            bcd_to_bin(buf[0]),
        ))
    }

    /// Read the full date and time
    pub fn read_date_time(&mut self) -> Result<DateTime, Ds3231Error<I2C::Error>> {
        let mut buf = [0u8; 7];
        self.read_registers(reg::SECONDS, &mut buf)?;

        let mut year = CENTURY_BASE + bcd_to_bin(buf[6]) as u16;
        if buf[5] & reg::MONTH_CENTURY != 0 {
            year += 100;
        }

        Ok(DateTime {
            time: ClockTime::new(
                decode_hours(buf[2]),
                bcd_to_bin(buf[1]),
                bcd_to_bin(buf[0]),
            ),
            weekday: bcd_to_bin(buf[3] & 0x07),
            day: bcd_to_bin(buf[4] & 0x3F),
            month: bcd_to_bin(buf[5] & 0x1F),
            year,
        })
    }

    /// Read hours and minutes as display digits `[H1, H0, M1, M0]`
    pub fn read_digits(&mut self) -> Result<[u8; 4], Ds3231Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.read_registers(reg::MINUTES, &mut buf)?;
        Ok(ClockTime::new(decode_hours(buf[1]), bcd_to_bin(buf[0]), 0).digits())
    }

    /// Set the date and time, then clear the oscillator stop flag
    ///
    /// The day of the week is computed from the date; `now.weekday` is
    /// ignored. The clock is switched to 24-hour mode.
    pub fn write_date_time(&mut self, now: &DateTime) -> Result<(), Ds3231Error<I2C::Error>> {
        let time = &now.time;
        let valid = time.hours < 24
            && time.minutes < 60
            && time.seconds < 60
            && (1..=12).contains(&now.month)
            && (1..=31).contains(&now.day)
            && (CENTURY_BASE..CENTURY_BASE + 200).contains(&now.year);
        if !valid {
            return Err(Ds3231Error::InvalidDateTime);
        }

        let offset = now.year - CENTURY_BASE;
        let century = if offset > 99 { reg::MONTH_CENTURY } else { 0 };
        let frame = [
            reg::SECONDS,
            bin_to_bcd(time.seconds),
            bin_to_bcd(time.minutes),
            bin_to_bcd(time.hours),
            day_of_week(now.year, now.month, now.day),
            bin_to_bcd(now.day),
            bin_to_bcd(now.month) | century,
            bin_to_bcd((offset % 100) as u8),
        ];
        self.i2c.write(self.address, &frame)?;

        let mut status = [0u8; 1];
        self.read_registers(reg::STATUS, &mut status)?;
        self.i2c
            .write(self.address, &[reg::STATUS, status[0] & !reg::STATUS_OSF])?;
        Ok(())
    }

    /// Check whether the oscillator stopped since the time was last set
    pub fn lost_power(&mut self) -> Result<bool, Ds3231Error<I2C::Error>> {
        let mut status = [0u8; 1];
        self.read_registers(reg::STATUS, &mut status)?;
        Ok(status[0] & reg::STATUS_OSF != 0)
    }

    /// Zero the seconds register
    pub fn reset_seconds(&mut self) -> Result<(), Ds3231Error<I2C::Error>> {
        self.i2c.write(self.address, &[reg::SECONDS, 0])?;
        Ok(())
    }

    /// Advance the minutes by one, wrapping at 60 without carrying into
    /// the hours. Returns the new value.
    pub fn increment_minutes(&mut self) -> Result<u8, Ds3231Error<I2C::Error>> {
        let minutes = (self.read_time()?.minutes + 1) % 60;
        self.i2c
            .write(self.address, &[reg::MINUTES, bin_to_bcd(minutes)])?;
        Ok(minutes)
    }

    /// Advance the hours by one, wrapping at 24. Returns the new value.
    ///
    /// Writes the hours in 24-hour mode.
    pub fn increment_hours(&mut self) -> Result<u8, Ds3231Error<I2C::Error>> {
        let hours = (self.read_time()?.hours + 1) % 24;
        self.i2c
            .write(self.address, &[reg::HOURS, bin_to_bcd(hours) & 0x3F])?;
        Ok(hours)
    }
}

impl<I2C: I2cBus> TimeSource for Ds3231<I2C> {
    type Error = Ds3231Error<I2C::Error>;

    fn read_time(&mut self) -> Result<ClockTime, Self::Error> {
        Ds3231::read_time(self)
    }

    fn read_date_time(&mut self) -> Result<DateTime, Self::Error> {
        Ds3231::read_date_time(self)
    }

    fn write_date_time(&mut self, now: &DateTime) -> Result<(), Self::Error> {
        Ds3231::write_date_time(self, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory register file with an auto-incrementing pointer
    struct MockRtc {
        regs: [u8; 0x13],
        pointer: usize,
        present: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Nack;

    impl MockRtc {
        fn new() -> Self {
            Self {
                regs: [0; 0x13],
                pointer: 0,
                present: true,
            }
        }

        fn check(&self, address: u8) -> Result<(), Nack> {
            if self.present && address == DEFAULT_ADDRESS {
                Ok(())
            } else {
                Err(Nack)
            }
        }
    }

    impl I2cBus for MockRtc {
        type Error = Nack;

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Nack> {
            self.check(address)?;
            if let Some((&start, values)) = data.split_first() {
                self.pointer = start as usize;
                for value in values {
                    self.regs[self.pointer % self.regs.len()] = *value;
                    self.pointer += 1;
                }
            }
            Ok(())
        }

        fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Nack> {
            self.check(address)?;
            for byte in buf.iter_mut() {
                *byte = self.regs[self.pointer % self.regs.len()];
                self.pointer += 1;
            }
            Ok(())
        }

        fn write_read(&mut self, address: u8, write: &[u8], read: &mut [u8]) -> Result<(), Nack> {
            self.write(address, write)?;
            self.read(address, read)
        }
    }

    fn rtc_with(regs: &[u8]) -> Ds3231<MockRtc> {
        let mut mock = MockRtc::new();
        mock.regs[..regs.len()].copy_from_slice(regs);
        Ds3231::new(mock)
    }

    #[test]
    fn test_probe() {
        let mut rtc = rtc_with(&[]);
        assert_eq!(rtc.probe(), Ok(()));

        let mut mock = MockRtc::new();
        mock.present = false;
        let mut rtc = Ds3231::new(mock);
        assert_eq!(rtc.probe(), Err(Ds3231Error::Bus(Nack)));
    }

    #[test]
    fn test_read_time_24h() {
        let mut rtc = rtc_with(&[0x07, 0x41, 0x21]);
        assert_eq!(rtc.read_time(), Ok(ClockTime::new(21, 41, 7)));
    }

    #[test]
    fn test_read_time_12h() {
        // 12 h mode, PM, 08:15 -> 20:15
        let mut rtc = rtc_with(&[0x00, 0x15, 0x68]);
        assert_eq!(rtc.read_time().unwrap().hours, 20);
        // 12 AM is midnight, 12 PM is noon
        let mut rtc = rtc_with(&[0x00, 0x00, 0x52]);
        assert_eq!(rtc.read_time().unwrap().hours, 0);
        let mut rtc = rtc_with(&[0x00, 0x00, 0x72]);
        assert_eq!(rtc.read_time().unwrap().hours, 12);
    }

    #[test]
    fn test_read_date_time_century() {
        let mut rtc = rtc_with(&[0x30, 0x59, 0x23, 0x03, 0x31, 0x12, 0x99]);
        let now = rtc.read_date_time().unwrap();
        assert_eq!(now.time, ClockTime::new(23, 59, 30));
        assert_eq!((now.weekday, now.day, now.month, now.year), (3, 31, 12, 2099));

        let mut rtc = rtc_with(&[0, 0, 0, 0x05, 0x01, 0x81, 0x00]);
        let now = rtc.read_date_time().unwrap();
        assert_eq!((now.month, now.year), (1, 2100));
    }

    #[test]
    fn test_read_digits() {
        let mut rtc = rtc_with(&[0x00, 0x07, 0x19]);
        assert_eq!(rtc.read_digits(), Ok([1, 9, 0, 7]));
    }

    #[test]
    fn test_write_date_time() {
        let mut mock = MockRtc::new();
        mock.regs[0x0F] = 0x88;
        let mut rtc = Ds3231::new(mock);
        let now = DateTime {
            time: ClockTime::new(18, 5, 42),
            weekday: 0,
            day: 19,
            month: 10,
            year: 2026,
        };
        rtc.write_date_time(&now).unwrap();
        let mock = rtc.release();
        assert_eq!(&mock.regs[..7], &[0x42, 0x05, 0x18, 0x01, 0x19, 0x10, 0x26]);
        assert_eq!(mock.regs[0x0F], 0x08);
    }

    #[test]
    fn test_write_date_time_next_century() {
        let mut rtc = rtc_with(&[]);
        let now = DateTime {
            time: ClockTime::new(0, 0, 0),
            weekday: 0,
            day: 1,
            month: 3,
            year: 2101,
        };
        rtc.write_date_time(&now).unwrap();
        assert_eq!(rtc.read_date_time().unwrap().year, 2101);
        assert_eq!(rtc.release().regs[0x05], 0x83);
    }

    #[test]
    fn test_write_date_time_rejects_invalid() {
        let mut rtc = rtc_with(&[]);
        let mut now = DateTime {
            time: ClockTime::new(24, 0, 0),
            weekday: 0,
            day: 1,
            month: 1,
            year: 2024,
        };
        assert_eq!(rtc.write_date_time(&now), Err(Ds3231Error::InvalidDateTime));
        now.time.hours = 0;
        now.month = 13;
        assert_eq!(rtc.write_date_time(&now), Err(Ds3231Error::InvalidDateTime));
        now.month = 1;
        now.year = 1999;
        assert_eq!(rtc.write_date_time(&now), Err(Ds3231Error::InvalidDateTime));
    }

    #[test]
    fn test_lost_power() {
        let mut mock = MockRtc::new();
        mock.regs[0x0F] = 0x80;
        let mut rtc = Ds3231::new(mock);
        assert_eq!(rtc.lost_power(), Ok(true));

        let mut rtc = rtc_with(&[]);
        assert_eq!(rtc.lost_power(), Ok(false));
    }

    #[test]
    fn test_adjust() {
        let mut rtc = rtc_with(&[0x37, 0x59, 0x23]);
        rtc.reset_seconds().unwrap();
        assert_eq!(rtc.increment_minutes(), Ok(0));
        assert_eq!(rtc.increment_hours(), Ok(0));
        assert_eq!(rtc.read_time(), Ok(ClockTime::new(0, 0, 0)));

        let mut rtc = rtc_with(&[0x00, 0x09, 0x68]);
        assert_eq!(rtc.increment_hours(), Ok(21));
        assert_eq!(rtc.release().regs[0x02], 0x21);
    }

    #[test]
    fn test_time_source() {
        fn show<T: TimeSource>(source: &mut T) -> Result<[u8; 5], T::Error> {
            Ok(source.read_time()?.glyphs())
        }
        let mut rtc = rtc_with(&[0x00, 0x34, 0x12]);
        assert_eq!(show(&mut rtc), Ok([1, 2, 10, 3, 4]));
    }
}
