//! Glyph placement
//!
//! Glyphs are composited into the [`Framebuffer`] with OR, so overlapping
//! placements merge instead of erasing each other.
//!
//! Automatic layout walks the text from the last glyph to the first,
//! starting at column 0 and leaving one blank column between glyphs. That
//! gives right-aligned offsets; other alignments add one constant shift to
//! every offset and never re-space the text.

use crate::config::Alignment;
use crate::font::GlyphTable;
use crate::framebuffer::Framebuffer;

/// OR the trimmed columns of glyph `id` into the framebuffer at `offset`
///
/// Unknown ids draw nothing. Columns past the end of the framebuffer are
/// dropped.
pub fn draw_glyph(fb: &mut Framebuffer, table: &GlyphTable, offset: usize, id: u8) {
    let Some(columns) = table.trimmed(id) else {
        return;
    };
    for (i, bits) in columns.iter().enumerate() {
        let Some(index) = offset.checked_add(i) else {
            break;
        };
        if !fb.or_column(index, *bits) {
            break;
        }
    }
}

/// Clear the framebuffer and draw every `(offset, glyph)` placement
pub fn compose<I>(fb: &mut Framebuffer, table: &GlyphTable, placements: I)
where
    I: IntoIterator<Item = (usize, u8)>,
{
    fb.clear();
    for (offset, id) in placements {
        draw_glyph(fb, table, offset, id);
    }
}

/// Offset added to right-aligned positions
///
/// Text wider than the framebuffer keeps its right-aligned layout.
pub const fn alignment_shift(alignment: Alignment, extent: usize, columns: usize) -> usize {
    if extent > columns {
        return 0;
    }
    match alignment {
        Alignment::Left => columns - extent,
        Alignment::Center => (columns - extent) / 2,
        Alignment::Right => 0,
    }
}

/// Automatic layout of a glyph sequence
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    table: &'a GlyphTable,
    glyphs: &'a [u8],
    extent: usize,
    shift: usize,
}

impl<'a> Layout<'a> {
    /// Lay out `glyphs` for a framebuffer of `columns` columns
    ///
    /// Unknown glyph ids are spaced like glyph 0 but are not drawn.
    pub fn new(
        table: &'a GlyphTable,
        glyphs: &'a [u8],
        alignment: Alignment,
        columns: usize,
    ) -> Self {
        let advance: usize = glyphs
            .iter()
            .map(|id| table.advance_width(*id) as usize + 1)
            .sum();
        let extent = advance.saturating_sub(1);
        Self {
            table,
            glyphs,
            extent,
            shift: alignment_shift(alignment, extent, columns),
        }
    }

    /// Columns covered from the first to the last glyph, gaps included
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Offset applied on top of the right-aligned positions
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// `(offset, glyph)` pairs, last glyph first
    pub fn placements(&self) -> impl Iterator<Item = (usize, u8)> + 'a {
        let table = self.table;
        let glyphs = self.glyphs;
        let shift = self.shift;
        glyphs.iter().rev().scan(0usize, move |position, id| {
            let offset = *position + shift;
            *position += table.advance_width(*id) as usize + 1;
            Some((offset, *id))
        })
    }
}
