//! Board-agnostic display logic for the LED dot-matrix clock
//!
//! This crate contains everything about the display that does not touch
//! hardware:
//!
//! - Font catalog and the rotated RAM glyph table
//! - Glyph geometry for proportional rendering
//! - The chain framebuffer
//! - Text layout and alignment
//! - Configuration type definitions
//! - Traits for the chain transport and the time source

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod font;
pub mod framebuffer;
pub mod layout;
pub mod traits;

pub use config::Alignment;
pub use font::{FontId, GlyphTable};
pub use framebuffer::Framebuffer;
