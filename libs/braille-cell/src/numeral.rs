//! Numeric braille: digit cells and the page-number glyph sequence.

use crate::cell::{BrailleCell, DotPattern};
use crate::prefix::NUMERAL_INDICATOR;

/// Digit patterns 0..=9. Digits reuse the letter patterns a..j, with 0 as j.
const DIGIT_PATTERNS: [DotPattern; 10] = [
    DotPattern::from_bits(0x1A), // 0: dots 2-4-5
    DotPattern::from_bits(0x01), // 1: dot 1
    DotPattern::from_bits(0x03), // 2: dots 1-2
    DotPattern::from_bits(0x09), // 3: dots 1-4
    DotPattern::from_bits(0x19), // 4: dots 1-4-5
    DotPattern::from_bits(0x11), // 5: dots 1-5
    DotPattern::from_bits(0x0B), // 6: dots 1-2-4
    DotPattern::from_bits(0x1B), // 7: dots 1-2-4-5
    DotPattern::from_bits(0x13), // 8: dots 1-2-5
    DotPattern::from_bits(0x0A), // 9: dots 2-4
];

/// Pattern for a single decimal digit, or `None` for values above 9.
pub fn digit_pattern(digit: u32) -> Option<DotPattern> {
    DIGIT_PATTERNS.get(digit as usize).copied()
}

/// Cells for a number: the numeral indicator followed by one cell per
/// decimal digit.
///
/// # Examples
/// ```
/// use braille_cell::{number_cells, to_unicode};
///
/// assert_eq!(to_unicode(&number_cells(12)), "⠼⠁⠃");
/// ```
pub fn number_cells(n: usize) -> Vec<BrailleCell> {
    let digits = n.to_string();
    let mut cells = Vec::with_capacity(digits.len() + 1);
    cells.push(BrailleCell::from_pattern(NUMERAL_INDICATOR, "#"));
    for ch in digits.chars() {
        let pattern = ch
            .to_digit(10)
            .and_then(digit_pattern)
            .unwrap_or(DotPattern::BLANK);
        cells.push(BrailleCell::from_pattern(pattern, ch.to_string()));
    }
    cells
}

/// Page-number glyph cells for a 1-based plate index.
pub fn page_number_cells(plate_number: usize) -> Vec<BrailleCell> {
    number_cells(plate_number)
}
