//! Matrix chain transport trait

/// Register/data transport to a daisy-chain of matrix drivers
///
/// Every call is one chip-select-bounded burst carrying one
/// (register, data) pair per device. Devices that should not act receive
/// the no-op pair.
pub trait ChainTransport {
    /// Bus error type
    type Error;

    /// Number of devices in the chain
    fn devices(&self) -> u8;

    /// Write `data` to `register` of one device, no-op to the others
    fn send_to_one(&mut self, device: u8, register: u8, data: u8) -> Result<(), Self::Error>;

    /// Write the same `data` to `register` of every device
    fn send_to_all(&mut self, register: u8, data: u8) -> Result<(), Self::Error>;

    /// Write `register` of every device, each with its own byte
    ///
    /// `data[m]` goes to device `m`. Devices without an entry receive 0.
    fn send_row_to_all(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: ChainTransport + ?Sized> ChainTransport for &mut T {
    type Error = T::Error;

    fn devices(&self) -> u8 {
        (**self).devices()
    }

    fn send_to_one(&mut self, device: u8, register: u8, data: u8) -> Result<(), Self::Error> {
        (**self).send_to_one(device, register, data)
    }

    fn send_to_all(&mut self, register: u8, data: u8) -> Result<(), Self::Error> {
        (**self).send_to_all(register, data)
    }

    fn send_row_to_all(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).send_row_to_all(register, data)
    }
}
