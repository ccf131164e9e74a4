//! dotclock Hardware Abstraction Layer
//!
//! This crate defines the bus and pin traits the display and clock drivers
//! are written against. Chip-specific HALs implement them directly, and
//! `dotclock-drivers` ships adapters for any `embedded-hal` 1.0 bus.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (clock loop, menus, ...)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotclock-drivers (MAX7219, DS3231)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotclock-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Chip select and other digital outputs
//! - [`spi::SpiBus`] - SPI bus operations (LED matrix chain)
//! - [`i2c::I2cBus`] - I2C bus operations (real-time clock)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use spi::SpiBus;
