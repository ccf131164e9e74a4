//! Hardware abstraction traits
//!
//! These traits define the interface between the display logic and the
//! driver implementations in `dotclock-drivers`.

pub mod chain;
pub mod clock;

pub use chain::ChainTransport;
pub use clock::{ClockTime, DateTime, TimeSource};
