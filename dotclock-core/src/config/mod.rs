//! Configuration types
//!
//! Board-agnostic display configuration, optionally persisted as postcard
//! binary data.

pub mod hardware;
#[cfg(feature = "serde")]
pub mod store;
pub mod types;

pub use hardware::*;
pub use types::*;
