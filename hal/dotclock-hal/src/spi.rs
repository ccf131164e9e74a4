//! SPI bus abstractions
//!
//! Provides traits for SPI master operations that can be implemented
//! by chip-specific HALs. Chip select is not part of the bus: drivers own
//! their select line so they can frame multi-byte bursts themselves.

/// SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    ///
    /// One call is one bus transaction: implementations must not return
    /// before the last byte has left the shift register.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Transfer data (simultaneous read/write)
    ///
    /// Writes data from `write` buffer while reading into `read` buffer.
    /// Both buffers must be the same length.
    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error>;
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        (**self).transfer(read, write)
    }
}
