//! Column framebuffer for the matrix chain
//!
//! The whole chain is one strip of column bytes, device-major: column
//! `m * scan_lines + i` is scan line `i` of device `m`. Bit 7 of a column is
//! the top pixel.

use heapless::Vec;

use crate::config::{ChainConfig, FRAMEBUFFER_CAPACITY, MAX_DEVICES};

/// Per-device data for one scan line
pub type Row = Vec<u8, { MAX_DEVICES as usize }>;

/// Framebuffer sized for one chain
///
/// The length is fixed at construction by the chain geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    columns: Vec<u8, FRAMEBUFFER_CAPACITY>,
    devices: u8,
    scan_lines: u8,
}

impl Framebuffer {
    /// Create a blank framebuffer for a chain
    pub fn new(chain: &ChainConfig) -> Self {
        let chain = chain.clamped();
        let mut columns: Vec<u8, FRAMEBUFFER_CAPACITY> =
            core::iter::repeat(0).take(FRAMEBUFFER_CAPACITY).collect();
        columns.truncate(chain.columns());
        Self {
            columns,
            devices: chain.devices,
            scan_lines: chain.scan_lines,
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a constructed framebuffer
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of devices in the chain
    pub fn devices(&self) -> u8 {
        self.devices
    }

    /// Scan lines per device
    pub fn scan_lines(&self) -> u8 {
        self.scan_lines
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.columns.fill(0);
    }

    /// Column bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.columns
    }

    /// Read one column, `None` past the end
    pub fn column(&self, index: usize) -> Option<u8> {
        self.columns.get(index).copied()
    }

    /// OR bits into a column
    ///
    /// Returns `false` and leaves the buffer untouched if `index` is past
    /// the end.
    pub fn or_column(&mut self, index: usize, bits: u8) -> bool {
        match self.columns.get_mut(index) {
            Some(column) => {
                *column |= bits;
                true
            }
            None => false,
        }
    }

    /// Collect scan line `line` of every device, in device order
    pub fn row(&self, line: u8) -> Row {
        let mut row = Row::new();
        if line < self.scan_lines {
            for device in 0..self.devices as usize {
                let index = device * self.scan_lines as usize + line as usize;
                let _ = row.push(self.columns[index]);
            }
        }
        row
    }

    /// Iterate over `(scan line, row)` pairs
    pub fn rows(&self) -> impl Iterator<Item = (u8, Row)> + '_ {
        (0..self.scan_lines).map(move |line| (line, self.row(line)))
    }
}
