//! Staging and committed display images

use super::segments::Symbol;
use crate::config::DIGIT_COUNT;

const SLOTS: usize = DIGIT_COUNT as usize;

/// One digit position of the staging image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub symbol: Symbol,
    pub dot: bool,
}

impl Cell {
    pub const BLANK: Self = Self {
        symbol: Symbol::Blank,
        dot: false,
    };
}

/// Semantic image written by rendering
///
/// Holds symbols and dot flags, never encoded patterns. Rebuilt from
/// blank on every loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StagingImage {
    cells: [Cell; SLOTS],
}

impl StagingImage {
    /// All slots blank, no dots
    pub const BLANK: Self = Self {
        cells: [Cell::BLANK; SLOTS],
    };

    /// Place a symbol in `slot`, lighting its dot if `dot`
    ///
    /// A dot already set on the slot stays set. Writes past the last slot
    /// are ignored.
    pub fn fill(&mut self, slot: usize, symbol: Symbol, dot: bool) {
        if let Some(cell) = self.cells.get_mut(slot) {
            cell.symbol = symbol;
            cell.dot |= dot;
        }
    }

    /// Light the dot of `slot` if `dot`, keeping its symbol
    pub fn dot(&mut self, slot: usize, dot: bool) {
        if let Some(cell) = self.cells.get_mut(slot) {
            cell.dot |= dot;
        }
    }

    /// Contents of `slot`
    #[cfg(test)]
    pub(crate) fn cell(&self, slot: usize) -> Cell {
        self.cells.get(slot).copied().unwrap_or(Cell::BLANK)
    }

    /// Encode every slot through the segment table
    pub fn encode(&self) -> DisplayImage {
        let mut segments = [0xFF; SLOTS];
        for (out, cell) in segments.iter_mut().zip(self.cells.iter()) {
            *out = cell.symbol.encode_with_dot(cell.dot);
        }
        DisplayImage { segments }
    }
}

impl Default for StagingImage {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Encoded, scan-out ready image read by the multiplexer
///
/// Only ever replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayImage {
    segments: [u8; SLOTS],
}

impl DisplayImage {
    /// Every segment dark
    pub const BLANK: Self = Self {
        segments: [0xFF; SLOTS],
    };

    /// Build an image from raw patterns
    #[cfg(test)]
    pub(crate) const fn from_patterns(segments: [u8; SLOTS]) -> Self {
        Self { segments }
    }

    /// Pattern for `digit`; dark for positions past the last digit
    pub fn segments(&self, digit: u8) -> u8 {
        self.segments.get(digit as usize).copied().unwrap_or(0xFF)
    }
}

impl Default for DisplayImage {
    fn default() -> Self {
        Self::BLANK
    }
}
