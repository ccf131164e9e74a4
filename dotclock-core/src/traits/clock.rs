//! Time source trait
//!
//! The display never decodes RTC registers itself. A time source hands it
//! plain binary values, and [`ClockTime::digits`] turns them into glyph ids.

use crate::font::glyph;

/// Time of day, 24-hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Hours (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
}

impl ClockTime {
    /// Create a time value
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Check if the time is in the afternoon
    pub const fn is_pm(&self) -> bool {
        self.hours >= 12
    }

    /// Hours on a 12-hour dial (midnight stays 0)
    pub const fn hours_12(&self) -> u8 {
        if self.hours > 12 {
            self.hours - 12
        } else {
            self.hours
        }
    }

    /// Glyph ids for `HHMM`
    pub const fn digits(&self) -> [u8; 4] {
        [
            self.hours / 10,
            self.hours % 10,
            self.minutes / 10,
            self.minutes % 10,
        ]
    }

    /// Glyph ids for `HH:MM`
    pub const fn glyphs(&self) -> [u8; 5] {
        let d = self.digits();
        [d[0], d[1], glyph::COLON, d[2], d[3]]
    }
}

/// Calendar date and time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Time of day
    pub time: ClockTime,
    /// Day of the week, 1 = Monday .. 7 = Sunday
    pub weekday: u8,
    /// Day of the month (1-31)
    pub day: u8,
    /// Month (1-12)
    pub month: u8,
    /// Full year
    pub year: u16,
}

/// A source of the current time
pub trait TimeSource {
    /// Error type for reads and writes
    type Error;

    /// Read the current time of day
    fn read_time(&mut self) -> Result<ClockTime, Self::Error>;

    /// Read the current date and time
    fn read_date_time(&mut self) -> Result<DateTime, Self::Error>;

    /// Set the date and time
    fn write_date_time(&mut self, now: &DateTime) -> Result<(), Self::Error>;
}
