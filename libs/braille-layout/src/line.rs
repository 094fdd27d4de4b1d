//! # Line Packing
//!
//! Greedy packing of whole units into lines of at most `max_chars` cells.

use braille_cell::{BrailleCell, PrefixSet};

use crate::unit::units;

/// An ordered run of cells assembled from whole units.
pub type Line<C> = Vec<C>;

/// Packs units into lines, never splitting a unit.
///
/// A unit that does not fit closes the current line and starts the next
/// one. A unit longer than `max_chars` still lands whole on its own line,
/// which guarantees progress for any positive limit.
///
/// `max_chars` must be at least 1; callers normalize settings first.
///
/// # Examples
/// ```
/// use braille_cell::{BrailleCell, PrefixSet};
/// use braille_layout::pack_lines;
///
/// let cells = vec![BrailleCell::space(); 25];
/// let lines = pack_lines(&cells, 10, &PrefixSet::japanese());
/// let lengths: Vec<usize> = lines.iter().map(|l| l.len()).collect();
/// assert_eq!(lengths, vec![10, 10, 5]);
/// ```
pub fn pack_lines<C>(cells: &[C], max_chars: usize, prefixes: &PrefixSet) -> Vec<Line<C>>
where
    C: AsRef<BrailleCell> + Clone,
{
    let mut lines = Vec::new();
    let mut current: Line<C> = Vec::new();

    for unit in units(cells, prefixes) {
        if current.len() + unit.len() > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current.extend_from_slice(unit);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
