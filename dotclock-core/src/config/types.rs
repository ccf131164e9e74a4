//! Display configuration types
//!
//! User-facing display settings. These are the values an application
//! persists (see [`super::store`]) and applies at boot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::ChainConfig;
use crate::font::FontId;

/// Highest brightness level accepted by the intensity register
pub const MAX_INTENSITY: u8 = 0x0F;

/// Text alignment inside the framebuffer
///
/// Column 0 is the edge shifted out last, which is the right-hand side of
/// the physical display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    /// Flush against the highest column
    Left,
    /// Centered, extra column (if any) on the right
    #[default]
    Center,
    /// Flush against column 0
    Right,
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Chain geometry
    pub chain: ChainConfig,
    /// Selected font
    pub font: FontId,
    /// Brightness (0-15)
    pub intensity: u8,
    /// Default text alignment
    pub alignment: Alignment,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chain: ChainConfig::default(),
            font: FontId::default(),
            intensity: 0,
            alignment: Alignment::default(),
        }
    }
}

impl DisplayConfig {
    /// Create a configuration for a chain with default settings
    pub fn for_chain(chain: ChainConfig) -> Self {
        Self {
            chain,
            ..Self::default()
        }
    }

    /// Set the font
    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    /// Set the brightness, ignoring values above [`MAX_INTENSITY`]
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        if intensity <= MAX_INTENSITY {
            self.intensity = intensity;
        }
        self
    }

    /// Set the default alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}
