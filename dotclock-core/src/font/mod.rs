//! Font catalog and glyph transforms
//!
//! Fonts are static 8x8 bitmaps covering a small clock character set
//! (digits, separators, temperature units). The selected font is rotated
//! into a RAM [`GlyphTable`] whose columns can be shifted straight out to
//! the MAX7219 digit registers.

mod catalog;
mod table;

pub use table::{rotate, GlyphColumns, GlyphGeometry, GlyphTable};

/// Number of glyphs in every font
pub const GLYPH_COUNT: usize = 16;

/// Glyph cell width and height in pixels
pub const GLYPH_WIDTH: usize = 8;

/// Number of fonts in the catalog
pub const FONT_COUNT: usize = 13;

/// One glyph bitmap, one byte per row, row 0 in the least significant byte
pub type PackedGlyph = u64;

/// Glyph identifiers shared by all fonts
///
/// Digits 0-9 are their own identifiers.
pub mod glyph {
    /// Colon separator
    pub const COLON: u8 = 10;
    /// Decimal point
    pub const DOT: u8 = 11;
    /// Letter C (Celsius)
    pub const CELSIUS: u8 = 12;
    /// Degree mark
    pub const DEGREE: u8 = 13;
    /// Minus sign
    pub const MINUS: u8 = 14;
    /// Letter F (Fahrenheit)
    pub const FAHRENHEIT: u8 = 15;

    /// Check if the glyph is a decimal digit
    pub const fn is_digit(id: u8) -> bool {
        id <= 9
    }
}

/// An immutable catalog font
#[derive(Debug)]
pub struct Font {
    /// Human-readable name
    pub name: &'static str,
    /// Packed glyph bitmaps, indexed by glyph id
    pub glyphs: [PackedGlyph; GLYPH_COUNT],
}

impl Font {
    const fn new(name: &'static str, glyphs: [PackedGlyph; GLYPH_COUNT]) -> Self {
        Self { name, glyphs }
    }
}

/// Font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FontId {
    #[default]
    Standard = 0,
    BeautifulBoot,
    Skoda,
    Bold,
    NewCentury,
    LucidaTypewriter,
    Helvetica,
    Rectangular,
    Snapix,
    NokiaBold,
    Medianoid,
    TallOrder,
    Handwritten,
}

impl FontId {
    /// All fonts, in catalog order
    pub const ALL: [FontId; FONT_COUNT] = [
        FontId::Standard,
        FontId::BeautifulBoot,
        FontId::Skoda,
        FontId::Bold,
        FontId::NewCentury,
        FontId::LucidaTypewriter,
        FontId::Helvetica,
        FontId::Rectangular,
        FontId::Snapix,
        FontId::NokiaBold,
        FontId::Medianoid,
        FontId::TallOrder,
        FontId::Handwritten,
    ];

    /// Select a font by catalog index
    ///
    /// Out-of-range indices wrap around the catalog.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[index as usize % FONT_COUNT]
    }

    /// Catalog index
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The next font in the catalog, wrapping after the last one
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Font bitmaps
    pub fn font(self) -> &'static Font {
        &catalog::FONTS[self as usize]
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        self.font().name
    }
}

impl From<u8> for FontId {
    fn from(index: u8) -> Self {
        Self::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        for (i, id) in FontId::ALL.iter().enumerate() {
            assert_eq!(id.index() as usize, i);
        }
        assert_eq!(FontId::Standard.name(), "Standard 5x7");
        assert_eq!(FontId::Handwritten.name(), "Handwritten");
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(FontId::from_index(0), FontId::Standard);
        assert_eq!(FontId::from_index(12), FontId::Handwritten);
        assert_eq!(FontId::from_index(13), FontId::Standard);
        assert_eq!(FontId::from_index(14), FontId::BeautifulBoot);
        assert_eq!(FontId::from(255), FontId::from_index(255 % 13));
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(FontId::Standard.next(), FontId::BeautifulBoot);
        assert_eq!(FontId::Handwritten.next(), FontId::Standard);
    }

    #[test]
    fn test_digit_ids() {
        assert!(glyph::is_digit(0));
        assert!(glyph::is_digit(9));
        assert!(!glyph::is_digit(glyph::COLON));
    }
}
