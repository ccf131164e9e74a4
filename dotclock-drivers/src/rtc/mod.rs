//! Real-time clock drivers
//!
//! RTC chips keep time in packed BCD. The helpers here convert to and from
//! the plain binary values the display consumes.

pub mod ds3231;

pub use ds3231::{Ds3231, Ds3231Error};

/// Convert a binary value (0-99) to packed BCD
pub const fn bin_to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Convert packed BCD to binary
pub const fn bcd_to_bin(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}

/// ISO day of the week for a Gregorian date, 1 = Monday .. 7 = Sunday
///
/// Sakamoto's method. `month` is 1-12.
pub const fn day_of_week(year: u16, month: u8, day: u8) -> u8 {
    const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let year = year as u32;
    let year = if month < 3 { year.saturating_sub(1) } else { year };
    let index = (month.wrapping_sub(1) % 12) as usize;
    let dow = (year + year / 4 - year / 100 + year / 400 + OFFSETS[index] + day as u32) % 7;
    if dow == 0 {
        7
    } else {
        dow as u8
    }
}
