//! Session state: text edits, reading corrections and settings.

use braille_cell::prefix::DAKUTEN;
use braille_cell::{BrailleCell, DotPattern, PrefixSet, Transliterator, WordMapping};
use config::PlateSettings;
use plate_package::{PackageError, Session};

/// Maps each character to the "a" cell, and "が" to dakuten + "ka".
struct Toy;

impl Transliterator for Toy {
    fn convert_with_mapping(&self, text: &str) -> Vec<WordMapping> {
        text.split_whitespace()
            .map(|w| WordMapping::new(w, w, self.kana_to_cells(w)))
            .collect()
    }

    fn kana_to_cells(&self, reading: &str) -> Vec<BrailleCell> {
        let mut cells = Vec::new();
        for ch in reading.chars() {
            if ch == 'が' {
                cells.push(BrailleCell::from_pattern(DAKUTEN, ""));
                cells.push(BrailleCell::from_pattern(
                    DotPattern::from_dot_numbers(&[1, 6]),
                    "が",
                ));
            } else {
                cells.push(BrailleCell::from_pattern(
                    DotPattern::from_dot_numbers(&[1]),
                    ch.to_string(),
                ));
            }
        }
        cells
    }
}

fn session(text: &str) -> Session<Toy> {
    let mut session = Session::new(Toy, PrefixSet::japanese());
    session.set_text(text);
    session
}

#[test]
fn preview_tracks_word_provenance() {
    let s = session("あい う");
    let plates = s.preview();
    assert_eq!(plates.len(), 1);
    let words: Vec<Option<usize>> = plates[0].lines[0].iter().map(|c| c.word).collect();
    assert_eq!(words, vec![Some(0), Some(0), None, Some(1)]);
}

#[test]
fn correction_only_touches_one_word() {
    let mut s = session("あ い う");
    s.correct_reading(1, "いい").unwrap();
    assert_eq!(s.mappings()[0].cells.len(), 1);
    assert_eq!(s.mappings()[1].reading, "いい");
    assert_eq!(s.mappings()[1].cells.len(), 2);
    assert_eq!(s.mappings()[2].cells.len(), 1);
}

#[test]
fn clearing_a_reading_removes_word_and_its_space() {
    let mut s = session("あ い う");
    s.correct_reading(1, "").unwrap();
    let line = &s.preview()[0].lines[0];
    // あ, space, う
    assert_eq!(line.len(), 3);
    assert_eq!(line[2].word, Some(2));
}

#[test]
fn correcting_unknown_word_fails() {
    let mut s = session("あ");
    let err = s.correct_reading(5, "か").unwrap_err();
    assert!(matches!(err, PackageError::Cell(_)));
}

#[test]
fn set_text_discards_corrections() {
    let mut s = session("あ");
    s.correct_reading(0, "かか").unwrap();
    s.set_text("あ");
    assert_eq!(s.mappings()[0].cells.len(), 1);
}

#[test]
fn prefixed_unit_moves_to_next_line() {
    let mut s = session("あいうが");
    s.set_settings(PlateSettings::new(4, 3, 1.0).unwrap());
    let lines = &s.preview()[0].lines;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 3);
    assert_eq!(lines[1].len(), 2);
    assert_eq!(lines[1][0].cell.pattern(), DAKUTEN);
}

#[test]
fn update_settings_clamps_raw_values() {
    let mut s = session("あいう");
    s.update_settings(0, -2, 1.5);
    assert_eq!(s.settings().max_chars_per_line, 1);
    assert_eq!(s.settings().max_lines_per_plate, 1);
    assert_eq!(s.settings().thickness_mm, 1.5);
    assert_eq!(s.preview().len(), 3);
    assert_eq!(s.plate_dimensions().len(), 3);

    s.update_settings(10, 3, 50.0);
    assert_eq!(s.settings().thickness_mm, 2.0);
    assert!(s.package().is_ok());
}

#[test]
fn export_writes_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.zip");
    let s = session("あい うえ");
    let summary = s.export(&path).unwrap();
    assert_eq!(summary.plate_count, 1);
    assert_eq!(std::fs::metadata(&path).unwrap().len() as usize, summary.byte_len);
    assert_eq!(s.text(), "あい うえ");
}
