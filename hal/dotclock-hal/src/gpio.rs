//! GPIO pin abstractions
//!
//! The display chain only needs push-pull outputs: the MAX7219 chip select
//! (LOAD) line is driven low for the duration of a burst and latched high.

/// Digital output pin
///
/// Setting the level is infallible at this layer. Implementations backed
/// by a fallible HAL are expected to swallow or log the error.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }
}
