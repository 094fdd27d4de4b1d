//! # Word Mappings
//!
//! Transliteration produces one [`WordMapping`] per source token. The UI
//! edits these per word (tap-to-correct) and the pipeline flattens them into
//! a single cell stream with space cells between words.
//!
//! ## Flattening policy
//!
//! Words whose `cells` are empty (for example after the user cleared the
//! reading) are pruned before flattening. A space cell goes between two
//! consecutive non-empty words only, so clearing a word never leaves a
//! double or trailing space behind.

use serde::{Deserialize, Serialize};

use crate::cell::BrailleCell;
use crate::error::{CellError, CellResult};

/// The text-to-braille component this crate consumes.
///
/// Both operations are pure and synchronous. Kana splitting and prefix
/// insertion happen on the far side of this boundary.
pub trait Transliterator {
    /// Converts raw text into per-word mappings, in source order.
    fn convert_with_mapping(&self, text: &str) -> Vec<WordMapping>;

    /// Converts a corrected kana reading into a fresh cell list.
    fn kana_to_cells(&self, reading: &str) -> Vec<BrailleCell>;
}

/// One source token with its reading and braille cells.
///
/// # Examples
/// ```
/// use braille_cell::{BrailleCell, WordMapping};
///
/// let word = WordMapping::new("日本", "にほん", vec![BrailleCell::space()]);
/// assert!(!word.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMapping {
    /// Token as it appears in the input text.
    pub original_word: String,
    /// Kana reading the cells were derived from.
    pub reading: String,
    /// Braille cells for the reading, prefix indicators included.
    pub cells: Vec<BrailleCell>,
}

impl WordMapping {
    /// Creates a mapping.
    pub fn new(
        original_word: impl Into<String>,
        reading: impl Into<String>,
        cells: Vec<BrailleCell>,
    ) -> Self {
        Self {
            original_word: original_word.into(),
            reading: reading.into(),
            cells,
        }
    }

    /// True when the word contributes no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A flattened cell that remembers which word it came from.
///
/// `word` is `None` for inter-word space cells, which are not editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcedCell {
    /// The cell itself.
    pub cell: BrailleCell,
    /// Index into the mapping list, if the cell belongs to a word.
    pub word: Option<usize>,
}

impl AsRef<BrailleCell> for SourcedCell {
    fn as_ref(&self) -> &BrailleCell {
        &self.cell
    }
}

/// Flattens mappings into one cell stream, keeping word provenance.
///
/// # Examples
/// ```
/// use braille_cell::{flatten_mappings, BrailleCell, WordMapping};
///
/// let a = BrailleCell::new([true, false, false, false, false, false], "あ");
/// let words = vec![
///     WordMapping::new("あ", "あ", vec![a.clone()]),
///     WordMapping::new("x", "", vec![]),
///     WordMapping::new("あ", "あ", vec![a]),
/// ];
/// let flat = flatten_mappings(&words);
/// assert_eq!(flat.len(), 3);
/// assert_eq!(flat[1].word, None);
/// assert_eq!(flat[2].word, Some(2));
/// ```
pub fn flatten_mappings(mappings: &[WordMapping]) -> Vec<SourcedCell> {
    let mut flat = Vec::new();
    for (index, word) in mappings.iter().enumerate().filter(|(_, w)| !w.is_empty()) {
        if !flat.is_empty() {
            flat.push(SourcedCell {
                cell: BrailleCell::space(),
                word: None,
            });
        }
        flat.extend(word.cells.iter().cloned().map(|cell| SourcedCell {
            cell,
            word: Some(index),
        }));
    }
    flat
}

/// Flattens mappings into bare cells.
pub fn flatten_cells(mappings: &[WordMapping]) -> Vec<BrailleCell> {
    flatten_mappings(mappings)
        .into_iter()
        .map(|sourced| sourced.cell)
        .collect()
}

/// Replaces one word's reading and cells, leaving its siblings untouched.
///
/// An empty reading is accepted; the word then has no cells and is pruned
/// from the flattened stream.
pub fn apply_correction<T: Transliterator + ?Sized>(
    mappings: &mut [WordMapping],
    index: usize,
    reading: &str,
    transliterator: &T,
) -> CellResult<()> {
    let len = mappings.len();
    let word = mappings
        .get_mut(index)
        .ok_or(CellError::UnknownWord { index, len })?;
    word.reading = reading.to_string();
    word.cells = transliterator.kana_to_cells(reading);
    Ok(())
}
