//! Active glyph table
//!
//! The catalog stores glyphs row-major. The matrix drivers are fed one
//! column per digit register, so the selected font is rotated once at load
//! time and every glyph is measured for proportional rendering.

use super::{glyph, FontId, PackedGlyph, GLYPH_COUNT, GLYPH_WIDTH};

/// Rotated glyph: one byte per column
pub type GlyphColumns = [u8; GLYPH_WIDTH];

/// Rotate a packed row-major glyph into column bytes
///
/// Every row byte is consumed LSB first and each bit is shifted into the
/// bottom of its output column, so after all eight rows column `c` holds
/// bit `7 - c` of row `j` at bit position `7 - j`.
pub fn rotate(packed: PackedGlyph) -> GlyphColumns {
    let mut columns = [0u8; GLYPH_WIDTH];
    for row in packed.to_le_bytes() {
        let mut bits = row;
        for k in 0..GLYPH_WIDTH {
            let column = &mut columns[GLYPH_WIDTH - 1 - k];
            *column = (*column << 1) | (bits & 0x01);
            bits >>= 1;
        }
    }
    columns
}

/// Lit column span of a glyph
///
/// `right` is the first lit column (the edge shifted out first), `left` the
/// last one. A glyph with no lit pixel has the [`GlyphGeometry::EMPTY`]
/// sentinel and a width of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphGeometry {
    /// First lit column
    pub right: u8,
    /// Last lit column
    pub left: u8,
    /// Number of columns from `right` to `left`, inclusive
    pub width: u8,
}

impl GlyphGeometry {
    /// Geometry of a blank glyph
    pub const EMPTY: Self = Self {
        right: GLYPH_WIDTH as u8,
        left: GLYPH_WIDTH as u8,
        width: 0,
    };

    /// Measure the lit span of a rotated glyph
    pub fn measure(columns: &GlyphColumns) -> Self {
        let mut geometry = Self::EMPTY;
        for (col, _) in columns.iter().enumerate().filter(|(_, bits)| **bits != 0) {
            if geometry.right == GLYPH_WIDTH as u8 {
                geometry.right = col as u8;
            }
            geometry.left = col as u8;
        }
        if geometry.right != GLYPH_WIDTH as u8 {
            geometry.width = geometry.left - geometry.right + 1;
        }
        geometry
    }

    /// Check if the glyph has no lit pixel
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }
}

impl Default for GlyphGeometry {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// RAM copy of the selected font
///
/// Always reflects exactly one [`FontId`]: columns and geometry are rebuilt
/// together by [`GlyphTable::load`].
#[derive(Debug, Clone)]
pub struct GlyphTable {
    font: FontId,
    columns: [GlyphColumns; GLYPH_COUNT],
    geometry: [GlyphGeometry; GLYPH_COUNT],
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new(FontId::default())
    }
}

impl GlyphTable {
    /// Build the table for a font
    pub fn new(font: FontId) -> Self {
        let mut table = Self {
            font,
            columns: [[0; GLYPH_WIDTH]; GLYPH_COUNT],
            geometry: [GlyphGeometry::EMPTY; GLYPH_COUNT],
        };
        table.load(font);
        table
    }

    /// Rotate every glyph of `font` into the table and re-measure
    ///
    /// All digits share the geometry of `8` so clock digits keep a fixed
    /// pitch whichever digit is shown.
    pub fn load(&mut self, font: FontId) {
        self.font = font;
        for (columns, packed) in self.columns.iter_mut().zip(font.font().glyphs.iter()) {
            *columns = rotate(*packed);
        }

        let digits = GlyphGeometry::measure(&self.columns[8]);
        for (id, geometry) in self.geometry.iter_mut().enumerate() {
            *geometry = if glyph::is_digit(id as u8) {
                digits
            } else {
                GlyphGeometry::measure(&self.columns[id])
            };
        }
    }

    /// Currently loaded font
    pub fn font(&self) -> FontId {
        self.font
    }

    /// Rotated columns of a glyph, `None` for ids outside the character set
    pub fn columns(&self, id: u8) -> Option<&GlyphColumns> {
        self.columns.get(id as usize)
    }

    /// Geometry of a glyph, `None` for ids outside the character set
    pub fn geometry(&self, id: u8) -> Option<GlyphGeometry> {
        self.geometry.get(id as usize).copied()
    }

    /// Width used to space a glyph in a layout
    ///
    /// Unknown ids are spaced like glyph 0.
    pub fn advance_width(&self, id: u8) -> u8 {
        self.geometry(id).unwrap_or(self.geometry[0]).width
    }

    /// The lit columns of a glyph, trimmed to its geometry
    pub fn trimmed(&self, id: u8) -> Option<&[u8]> {
        let columns = self.columns(id)?;
        let geometry = self.geometry[id as usize];
        if geometry.is_empty() {
            return Some(&[]);
        }
        let start = geometry.right as usize;
        Some(&columns[start..start + geometry.width as usize])
    }
}
