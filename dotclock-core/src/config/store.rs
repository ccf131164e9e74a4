//! Persisted display settings
//!
//! [`DisplayConfig`] is stored as postcard binary data behind a magic number
//! and a version byte, so blank or stale flash/EEPROM is rejected instead of
//! being decoded into garbage.

use serde::{Deserialize, Serialize};

use super::types::DisplayConfig;

/// Magic number to identify valid display settings
pub const CONFIG_MAGIC: u32 = 0x444F5443; // "DOTC"

/// Current settings layout version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound of the encoded size, for sizing storage buffers
pub const MAX_ENCODED_LEN: usize = 32;

/// Errors from encoding or decoding stored settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Output buffer too small or value not serializable
    Serialize,
    /// Data is not a postcard-encoded settings record
    Deserialize,
    /// Magic number mismatch (blank or foreign data)
    BadMagic,
    /// Written by an incompatible firmware version
    UnsupportedVersion(u8),
}

#[derive(Serialize, Deserialize)]
struct Record {
    magic: u32,
    version: u8,
    config: DisplayConfig,
}

/// Encode settings into `buf`, returning the used prefix
pub fn encode<'a>(config: &DisplayConfig, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
    let record = Record {
        magic: CONFIG_MAGIC,
        version: CONFIG_VERSION,
        config: *config,
    };
    postcard::to_slice(&record, buf).map_err(|_| ConfigError::Serialize)
}

/// Decode settings previously written by [`encode`]
///
/// The chain geometry is re-clamped, so a corrupted device count can never
/// size the framebuffer past its capacity.
pub fn decode(bytes: &[u8]) -> Result<DisplayConfig, ConfigError> {
    let record: Record = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
    if record.magic != CONFIG_MAGIC {
        return Err(ConfigError::BadMagic);
    }
    if record.version != CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(record.version));
    }

    let mut config = record.config;
    config.chain = config.chain.clamped();
    Ok(config)
}
