//! # Plates
//!
//! Consecutive chunks of lines, numbered from 1 in emission order.

use braille_cell::{page_number_cells, BrailleCell, PrefixSet};
use config::PlateSettings;
use tracing::{debug, warn};

use crate::line::{pack_lines, Line};

/// One printable plate: up to `max_lines_per_plate` lines.
///
/// # Examples
/// ```
/// use braille_cell::{BrailleCell, PrefixSet};
/// use braille_layout::paginate;
///
/// let cells = vec![BrailleCell::space(); 25];
/// let plates = paginate(&cells, 10, 2, &PrefixSet::japanese());
/// assert_eq!(plates.len(), 2);
/// assert_eq!(plates[1].number, 2);
/// assert_eq!(plates[1].lines.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plate<C> {
    /// 1-based plate index.
    pub number: usize,
    /// Lines in top-to-bottom order.
    pub lines: Vec<Line<C>>,
}

impl<C> Plate<C> {
    /// Braille cells encoding this plate's number.
    pub fn page_number_cells(&self) -> Vec<BrailleCell> {
        page_number_cells(self.number)
    }
}

/// Paginates a cell stream into plates.
///
/// Limits below 1 are clamped to 1 so the engine never works with a zero
/// bound.
pub fn paginate<C>(
    cells: &[C],
    max_chars_per_line: usize,
    max_lines_per_plate: usize,
    prefixes: &PrefixSet,
) -> Vec<Plate<C>>
where
    C: AsRef<BrailleCell> + Clone,
{
    if max_chars_per_line == 0 || max_lines_per_plate == 0 {
        warn!(
            max_chars_per_line,
            max_lines_per_plate, "layout limit below 1 clamped to 1"
        );
    }
    let max_chars = max_chars_per_line.max(1);
    let max_lines = max_lines_per_plate.max(1);

    let lines = pack_lines(cells, max_chars, prefixes);
    let plates = chunk_plates(lines, max_lines);

    debug!(
        cells = cells.len(),
        plates = plates.len(),
        max_chars,
        max_lines,
        "paginated braille cells"
    );
    plates
}

/// Paginates using the line limits of validated settings.
pub fn paginate_with_settings<C>(
    cells: &[C],
    settings: &PlateSettings,
    prefixes: &PrefixSet,
) -> Vec<Plate<C>>
where
    C: AsRef<BrailleCell> + Clone,
{
    paginate(
        cells,
        settings.max_chars_per_line,
        settings.max_lines_per_plate,
        prefixes,
    )
}

/// Slices lines into consecutive plates of at most `max_lines` lines.
pub fn chunk_plates<C>(lines: Vec<Line<C>>, max_lines: usize) -> Vec<Plate<C>> {
    let max_lines = max_lines.max(1);
    let mut plates: Vec<Plate<C>> = Vec::with_capacity(lines.len().div_ceil(max_lines));
    for line in lines {
        match plates.last_mut() {
            Some(plate) if plate.lines.len() < max_lines => plate.lines.push(line),
            _ => {
                let number = plates.len() + 1;
                plates.push(Plate {
                    number,
                    lines: vec![line],
                });
            }
        }
    }
    plates
}
