//! Dot-matrix display controller
//!
//! Owns the glyph table, the framebuffer, and the chain transport, so all
//! display state lives in one value and every operation goes through
//! `&mut self`.

use dotclock_core::config::{clamp_scan_lines, Alignment, ChainConfig, DisplayConfig, MAX_INTENSITY};
use dotclock_core::font::{FontId, GlyphGeometry, GlyphTable};
use dotclock_core::framebuffer::Framebuffer;
use dotclock_core::layout::{self, Layout};
use dotclock_core::traits::{ChainTransport, ClockTime};

use super::reg;

/// Display controller for a MAX7219 chain
pub struct DotMatrix<T> {
    chain: T,
    glyphs: GlyphTable,
    fb: Framebuffer,
    config: ChainConfig,
    scan_limit: u8,
    alignment: Alignment,
}

impl<T: ChainTransport> DotMatrix<T> {
    /// Create a controller
    ///
    /// No bus traffic happens until [`DotMatrix::init`]. The device count
    /// is taken from the transport so the framebuffer always matches the
    /// bursts it is sent with.
    pub fn new(chain: T, config: ChainConfig) -> Self {
        let config = ChainConfig::new(config.cs_pin, chain.devices(), config.scan_lines);
        Self {
            fb: Framebuffer::new(&config),
            glyphs: GlyphTable::default(),
            scan_limit: config.scan_lines,
            alignment: Alignment::default(),
            config,
            chain,
        }
    }

    /// Create and initialize a controller from stored settings
    pub fn from_config(chain: T, settings: &DisplayConfig) -> Result<Self, T::Error> {
        let mut matrix = Self::new(chain, settings.chain);
        matrix.alignment = settings.alignment;
        matrix.load_font(settings.font);
        matrix.init()?;
        matrix.set_intensity(settings.intensity)?;
        Ok(matrix)
    }

    /// Program the scan limit for the configured chain
    pub fn init(&mut self) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "MAX7219 chain: {} devices, {} scan lines",
            self.config.devices,
            self.config.scan_lines
        );
        self.set_scan_limit(self.config.scan_lines)
    }

    /// Chain geometry
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Transport access, for raw register writes
    pub fn chain_mut(&mut self) -> &mut T {
        &mut self.chain
    }

    /// Release the transport
    pub fn release(self) -> T {
        self.chain
    }

    // Control registers

    /// Set the decode mode (low four bits only)
    pub fn set_decode_mode(&mut self, value: u8) -> Result<(), T::Error> {
        self.chain.send_to_all(reg::DECODE_MODE, value & 0x0F)
    }

    /// Set the brightness (0-15)
    ///
    /// Values above 15 are ignored and nothing is sent.
    pub fn set_intensity(&mut self, value: u8) -> Result<(), T::Error> {
        if value > MAX_INTENSITY {
            return Ok(());
        }
        self.chain.send_to_all(reg::INTENSITY, value)
    }

    /// Set the number of scanned lines (1-8, wrapping)
    pub fn set_scan_limit(&mut self, lines: u8) -> Result<(), T::Error> {
        self.scan_limit = clamp_scan_lines(lines);
        self.chain.send_to_all(reg::SCAN_LIMIT, self.scan_limit - 1)
    }

    /// Current scan limit as a line count
    pub fn scan_limit(&self) -> u8 {
        self.scan_limit
    }

    /// Enter (`true`) or leave (`false`) shutdown mode
    pub fn shutdown(&mut self, on: bool) -> Result<(), T::Error> {
        self.chain.send_to_all(reg::SHUTDOWN, if on { 0 } else { 1 })
    }

    /// Turn display test mode on or off
    pub fn display_test(&mut self, on: bool) -> Result<(), T::Error> {
        self.chain.send_to_all(reg::DISPLAY_TEST, if on { 1 } else { 0 })
    }

    /// Blank every scanned digit register of every device
    ///
    /// The framebuffer is left as is.
    pub fn clear(&mut self) -> Result<(), T::Error> {
        for line in 0..self.scan_limit {
            self.chain.send_to_all(reg::digit(line), 0x00)?;
        }
        Ok(())
    }

    /// Write one register of one device
    pub fn send_to_one(&mut self, device: u8, register: u8, data: u8) -> Result<(), T::Error> {
        self.chain.send_to_one(device, register, data)
    }

    /// Write one register of every device
    pub fn send_to_all(&mut self, register: u8, data: u8) -> Result<(), T::Error> {
        self.chain.send_to_all(register, data)
    }

    /// Write one register of every device with per-device data
    pub fn send_row_to_all(&mut self, register: u8, data: &[u8]) -> Result<(), T::Error> {
        self.chain.send_row_to_all(register, data)
    }

    // Fonts

    /// Select a font by catalog index (wraps around the catalog)
    pub fn load_font(&mut self, font: impl Into<FontId>) {
        let font = font.into();
        self.glyphs.load(font);
        #[cfg(feature = "defmt")]
        defmt::debug!("font loaded: {}", font);
    }

    /// Currently loaded font
    pub fn font(&self) -> FontId {
        self.glyphs.font()
    }

    /// Geometry of a glyph in the current font
    pub fn geometry(&self, glyph: u8) -> Option<GlyphGeometry> {
        self.glyphs.geometry(glyph)
    }

    /// The active glyph table
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    // Framebuffer

    /// The framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Turn every framebuffer pixel off (no bus traffic)
    pub fn fb_clear(&mut self) {
        self.fb.clear();
    }

    /// Send the framebuffer to the chain, one burst per scan line
    pub fn display(&mut self) -> Result<(), T::Error> {
        let Self { chain, fb, .. } = self;
        for (line, row) in fb.rows() {
            chain.send_row_to_all(reg::digit(line), &row)?;
        }
        Ok(())
    }

    // Text

    /// OR one glyph into the framebuffer at `offset` (no bus traffic)
    ///
    /// Unknown glyphs are skipped, columns past the end are dropped.
    pub fn print_at(&mut self, offset: usize, glyph: u8) {
        layout::draw_glyph(&mut self.fb, &self.glyphs, offset, glyph);
    }

    /// Clear, draw each glyph at its offset, and display
    ///
    /// Offsets and glyphs are paired in order; extra entries in the longer
    /// slice are ignored.
    pub fn print_many(&mut self, offsets: &[usize], glyphs: &[u8]) -> Result<(), T::Error> {
        let placements = offsets.iter().copied().zip(glyphs.iter().copied());
        layout::compose(&mut self.fb, &self.glyphs, placements);
        self.display()
    }

    /// Lay out, draw, and display a glyph sequence
    ///
    /// Alignment is ignored when the text is wider than the chain.
    pub fn print_aligned(&mut self, glyphs: &[u8], alignment: Alignment) -> Result<(), T::Error> {
        let layout = Layout::new(&self.glyphs, glyphs, alignment, self.fb.len());
        layout::compose(&mut self.fb, &self.glyphs, layout.placements());
        self.display()
    }

    /// [`DotMatrix::print_aligned`] with the configured alignment
    pub fn print(&mut self, glyphs: &[u8]) -> Result<(), T::Error> {
        self.print_aligned(glyphs, self.alignment)
    }

    /// Show `HH:MM`
    pub fn show_time(&mut self, time: &ClockTime) -> Result<(), T::Error> {
        self.print(&time.glyphs())
    }
}
