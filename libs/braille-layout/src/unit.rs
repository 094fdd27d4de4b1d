//! # Units
//!
//! A unit is the smallest run of cells a line break may not cut: a prefix
//! indicator together with the cell after it, or any other single cell.

use braille_cell::{BrailleCell, PrefixSet};

/// Splits a cell stream into units, left to right.
///
/// A prefix cell with a successor forms a 2-cell unit. A trailing prefix
/// with nothing after it stays a 1-cell unit.
///
/// # Examples
/// ```
/// use braille_cell::{BrailleCell, PrefixSet, prefix::DAKUTEN};
/// use braille_layout::units;
///
/// let ka = BrailleCell::new([true, false, false, false, false, true], "か");
/// let mark = BrailleCell::from_pattern(DAKUTEN, "゛");
/// let cells = vec![ka.clone(), mark, ka];
/// let lengths: Vec<usize> = units(&cells, &PrefixSet::japanese())
///     .iter()
///     .map(|u| u.len())
///     .collect();
/// assert_eq!(lengths, vec![1, 2]);
/// ```
pub fn units<'a, C: AsRef<BrailleCell>>(cells: &'a [C], prefixes: &PrefixSet) -> Vec<&'a [C]> {
    let mut units = Vec::with_capacity(cells.len());
    let mut i = 0;
    while i < cells.len() {
        let len = if prefixes.is_prefix(cells[i].as_ref()) && i + 1 < cells.len() {
            2
        } else {
            1
        };
        units.push(&cells[i..i + len]);
        i += len;
    }
    units
}

/// Lengths of the units of a cell stream, in order.
///
/// Two streams with equal unit lengths and equal total length share the
/// same unit boundaries.
pub fn unit_lengths<C: AsRef<BrailleCell>>(cells: &[C], prefixes: &PrefixSet) -> Vec<usize> {
    units(cells, prefixes).iter().map(|u| u.len()).collect()
}
