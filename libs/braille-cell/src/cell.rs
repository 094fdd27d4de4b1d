//! # Braille Cell
//!
//! The 6-dot cell and its compact bit-pattern form.
//!
//! Dot numbering follows the standard cell layout: indices 0..2 are the left
//! column top to bottom (dots 1-2-3), indices 3..5 the right column top to
//! bottom (dots 4-5-6).
//!
//! ```text
//!   1 ● ● 4
//!   2 ● ● 5
//!   3 ● ● 6
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CellError, CellResult};

/// Number of dots in a braille cell.
pub const DOTS_PER_CELL: usize = 6;

/// First code point of the Unicode braille patterns block (blank cell).
pub const UNICODE_BRAILLE_BASE: u32 = 0x2800;

/// Display text used for the inter-word space cell.
pub const SPACE_DISPLAY: &str = " ";

/// Dot pattern packed into the low six bits, dot 1 = `0x01` .. dot 6 = `0x20`.
///
/// The bit assignment matches the Unicode braille block, so the glyph is
/// `U+2800 + bits`.
///
/// # Examples
/// ```
/// use braille_cell::DotPattern;
///
/// let pattern = DotPattern::from_dots([true, false, false, true, false, false]);
/// assert_eq!(pattern.bits(), 0x09);
/// assert_eq!(pattern.glyph(), '⠉');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DotPattern(u8);

impl DotPattern {
    /// The blank cell.
    pub const BLANK: Self = Self(0);

    /// Builds a pattern from raw bits; bits above dot 6 are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x3F)
    }

    /// Builds a pattern from 1-based dot numbers, e.g. `&[3, 4, 5, 6]`.
    ///
    /// Numbers outside 1..=6 are ignored.
    pub fn from_dot_numbers(numbers: &[u8]) -> Self {
        let bits = numbers
            .iter()
            .filter(|n| (1..=6).contains(*n))
            .fold(0u8, |acc, n| acc | (1 << (n - 1)));
        Self(bits)
    }

    /// Packs a dot array.
    pub fn from_dots(dots: [bool; DOTS_PER_CELL]) -> Self {
        let bits = dots
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(0u8, |acc, (i, _)| acc | (1 << i));
        Self(bits)
    }

    /// Unpacks into a dot array.
    pub fn to_dots(self) -> [bool; DOTS_PER_CELL] {
        std::array::from_fn(|i| self.0 & (1 << i) != 0)
    }

    /// Raw bit value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unicode braille glyph for this pattern.
    pub fn glyph(self) -> char {
        // The block covers all 256 eight-dot patterns, so six bits always map.
        char::from_u32(UNICODE_BRAILLE_BASE + u32::from(self.0)).unwrap_or('\u{2800}')
    }
}

/// One braille cell as produced by transliteration.
///
/// `dots` is fixed at six entries by the type, so a cell can only be built
/// from a wrongly sized array through [`BrailleCell::from_slice`], which
/// rejects it.
///
/// # Examples
/// ```
/// use braille_cell::BrailleCell;
///
/// let a = BrailleCell::new([true, false, false, false, false, false], "あ");
/// assert_eq!(a.glyph(), '⠁');
/// assert_eq!(BrailleCell::space().raised_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct BrailleCell {
    /// Raised state of dots 1..6.
    pub dots: [bool; DOTS_PER_CELL],
    /// Source character or reading fragment shown next to the cell.
    #[serde(rename = "char")]
    pub display: String,
}

impl BrailleCell {
    /// Creates a cell from a dot array and its display text.
    pub fn new(dots: [bool; DOTS_PER_CELL], display: impl Into<String>) -> Self {
        Self {
            dots,
            display: display.into(),
        }
    }

    /// Creates a cell from a packed pattern.
    pub fn from_pattern(pattern: DotPattern, display: impl Into<String>) -> Self {
        Self::new(pattern.to_dots(), display)
    }

    /// Creates a cell from a dot slice, failing fast on a wrong length.
    ///
    /// # Examples
    /// ```
    /// use braille_cell::{BrailleCell, CellError};
    ///
    /// let err = BrailleCell::from_slice(&[true, false], "?").unwrap_err();
    /// assert_eq!(err, CellError::InvalidDotCount { expected: 6, got: 2 });
    /// ```
    pub fn from_slice(dots: &[bool], display: impl Into<String>) -> CellResult<Self> {
        let dots: [bool; DOTS_PER_CELL] =
            dots.try_into().map_err(|_| CellError::InvalidDotCount {
                expected: DOTS_PER_CELL,
                got: dots.len(),
            })?;
        Ok(Self::new(dots, display))
    }

    /// The fixed inter-word space cell.
    pub fn space() -> Self {
        Self::new([false; DOTS_PER_CELL], SPACE_DISPLAY)
    }

    /// Packed dot pattern.
    pub fn pattern(&self) -> DotPattern {
        DotPattern::from_dots(self.dots)
    }

    /// Unicode braille glyph.
    pub fn glyph(&self) -> char {
        self.pattern().glyph()
    }

    /// Number of raised dots.
    pub fn raised_count(&self) -> usize {
        self.dots.iter().filter(|on| **on).count()
    }
}

impl AsRef<BrailleCell> for BrailleCell {
    fn as_ref(&self) -> &BrailleCell {
        self
    }
}

/// Wire form accepted from the transliteration component before validation.
#[derive(Deserialize)]
struct RawCell {
    dots: Vec<bool>,
    #[serde(rename = "char", default)]
    display: String,
}

impl TryFrom<RawCell> for BrailleCell {
    type Error = CellError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        BrailleCell::from_slice(&raw.dots, raw.display)
    }
}

/// Renders a cell sequence as a string of Unicode braille glyphs.
///
/// # Examples
/// ```
/// use braille_cell::{to_unicode, BrailleCell};
///
/// let cells = [BrailleCell::space(), BrailleCell::new([true; 6], "")];
/// assert_eq!(to_unicode(&cells), "⠀⠿");
/// ```
pub fn to_unicode<C: AsRef<BrailleCell>>(cells: &[C]) -> String {
    cells.iter().map(|c| c.as_ref().glyph()).collect()
}
