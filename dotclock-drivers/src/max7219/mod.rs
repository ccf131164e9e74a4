//! MAX7219/MAX7221 LED matrix drivers (SPI, daisy-chained)
//!
//! Each driver scans an 8x8 matrix. With the usual module wiring a digit
//! register holds one column of the matrix, so the framebuffer is kept as
//! columns and each scan line maps to a digit register.
//!
//! # Wire format
//!
//! Every device takes a 16-bit word, MSB first:
//! - Register address (1 byte)
//! - Data (1 byte)
//!
//! Words for the whole chain are shifted in one chip-select window and
//! latched together on the rising edge.

pub mod chain;
pub mod matrix;

pub use chain::SpiChain;
pub use matrix::DotMatrix;

/// MAX7219 register addresses
pub mod reg {
    /// No operation, used to skip a device in a burst
    pub const NOOP: u8 = 0x00;
    /// First digit (scan line) register
    pub const DIGIT0: u8 = 0x01;
    /// Code B decode mode per digit
    pub const DECODE_MODE: u8 = 0x09;
    /// Brightness (0-15)
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned digits minus one
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// 0 = shutdown, 1 = normal operation
    pub const SHUTDOWN: u8 = 0x0C;
    /// 1 = all segments on
    pub const DISPLAY_TEST: u8 = 0x0F;

    /// Digit register for scan line `line` (0-7)
    pub const fn digit(line: u8) -> u8 {
        DIGIT0 + (line & 0x07)
    }
}
