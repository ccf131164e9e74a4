//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dotclock-core:
//!
//! - MAX7219 chain transport and the dot-matrix display controller
//! - DS3231 real-time clock
//! - Adapters for `embedded-hal` 1.0 buses and pins

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod hal;
pub mod max7219;
pub mod rtc;
