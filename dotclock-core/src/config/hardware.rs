//! Hardware configuration types
//!
//! Geometry of the MAX7219 daisy-chain. Values are clamped on construction
//! and never change afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of chained matrix drivers
pub const MAX_DEVICES: u8 = 8;

/// Maximum scan lines (digit registers) per driver
pub const MAX_SCAN_LINES: u8 = 8;

/// Framebuffer size for the largest supported chain
pub const FRAMEBUFFER_CAPACITY: usize = MAX_DEVICES as usize * MAX_SCAN_LINES as usize;

/// Burst size for the largest supported chain (one register/data pair per device)
pub const MAX_BURST_LEN: usize = MAX_DEVICES as usize * 2;

/// Clamp a device count: zero or anything above the maximum means a full chain
pub const fn clamp_devices(devices: u8) -> u8 {
    if devices == 0 || devices > MAX_DEVICES {
        MAX_DEVICES
    } else {
        devices
    }
}

/// Fold a scan line count into 1..=8
///
/// The register only holds three bits, so the count is stored minus one and
/// masked. Zero wraps to a full scan.
pub const fn clamp_scan_lines(lines: u8) -> u8 {
    (lines.wrapping_sub(1) & 0x07) + 1
}

/// Daisy-chain configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainConfig {
    /// Chip select (LOAD) GPIO number
    pub cs_pin: u8,
    /// Number of chained drivers (1-8)
    pub devices: u8,
    /// Scan lines per driver (1-8)
    pub scan_lines: u8,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::new(0, MAX_DEVICES, MAX_SCAN_LINES)
    }
}

impl ChainConfig {
    /// Create a chain configuration, clamping out-of-range values
    pub const fn new(cs_pin: u8, devices: u8, scan_lines: u8) -> Self {
        Self {
            cs_pin,
            devices: clamp_devices(devices),
            scan_lines: clamp_scan_lines(scan_lines),
        }
    }

    /// Re-apply clamping (for values that bypassed [`ChainConfig::new`])
    pub const fn clamped(self) -> Self {
        Self::new(self.cs_pin, self.devices, self.scan_lines)
    }

    /// Number of framebuffer columns for this chain
    pub const fn columns(&self) -> usize {
        self.devices as usize * self.scan_lines as usize
    }
}
