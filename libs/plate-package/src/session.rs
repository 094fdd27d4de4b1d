//! # Session
//!
//! Explicit editing state owned by the UI caller: current text, its word
//! mappings and the layout settings. Every query re-runs the pure pipeline
//! on this state; nothing is cached between calls.

use std::path::Path;

use braille_cell::{
    apply_correction, flatten_cells, flatten_mappings, PrefixSet, SourcedCell, Transliterator,
    WordMapping,
};
use braille_layout::{paginate_with_settings, Plate};
use config::PlateSettings;
use plate_mesh::PlateDimensions;
use tracing::{debug, warn};

use crate::archive::{assemble, write_atomic, Package, PackageSummary};
use crate::error::PackageResult;

/// Assembles a package straight from word mappings.
///
/// Mappings are flattened (empty words pruned), paginated with `settings`
/// and `prefixes`, then meshed and zipped.
///
/// # Errors
///
/// Settings built field by field are re-validated here, so a zero limit or
/// a non-positive thickness fails with [`PackageError::Config`].
///
/// [`PackageError::Config`]: crate::PackageError::Config
pub fn build_package(
    mappings: &[WordMapping],
    settings: &PlateSettings,
    prefixes: &PrefixSet,
    original_text: &str,
) -> PackageResult<Package> {
    let validated = PlateSettings::new(
        settings.max_chars_per_line,
        settings.max_lines_per_plate,
        settings.thickness_mm,
    )?;
    let cells = flatten_cells(mappings);
    let plates = paginate_with_settings(&cells, &validated, prefixes);
    assemble(&plates, original_text, validated.thickness_mm)
}

/// Editing state for one document.
///
/// # Examples
/// ```
/// use braille_cell::{BrailleCell, PrefixSet, Transliterator, WordMapping};
/// use plate_package::Session;
///
/// struct Dots;
/// impl Transliterator for Dots {
///     fn convert_with_mapping(&self, text: &str) -> Vec<WordMapping> {
///         text.split_whitespace()
///             .map(|w| WordMapping::new(w, w, self.kana_to_cells(w)))
///             .collect()
///     }
///     fn kana_to_cells(&self, reading: &str) -> Vec<BrailleCell> {
///         reading.chars().map(|c| BrailleCell::new([true; 6], c.to_string())).collect()
///     }
/// }
///
/// let mut session = Session::new(Dots, PrefixSet::japanese());
/// session.set_text("あい う");
/// assert_eq!(session.preview()[0].lines[0].len(), 4);
/// ```
#[derive(Debug)]
pub struct Session<T> {
    transliterator: T,
    prefixes: PrefixSet,
    settings: PlateSettings,
    text: String,
    mappings: Vec<WordMapping>,
}

impl<T: Transliterator> Session<T> {
    /// Creates an empty session with default settings.
    pub fn new(transliterator: T, prefixes: PrefixSet) -> Self {
        Self {
            transliterator,
            prefixes,
            settings: PlateSettings::default(),
            text: String::new(),
            mappings: Vec::new(),
        }
    }

    /// Replaces the text and re-transliterates it wholesale.
    ///
    /// Previous reading corrections are discarded.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.mappings = self.transliterator.convert_with_mapping(&self.text);
        debug!(words = self.mappings.len(), "Transliterated text");
    }

    /// Overrides one word's reading without touching its siblings.
    pub fn correct_reading(&mut self, index: usize, reading: &str) -> PackageResult<()> {
        apply_correction(&mut self.mappings, index, reading, &self.transliterator)?;
        debug!(index, reading, "Corrected reading");
        Ok(())
    }

    /// Replaces the settings.
    pub fn set_settings(&mut self, settings: PlateSettings) {
        self.settings = settings;
    }

    /// Updates settings from raw UI values, clamping bad ones.
    pub fn update_settings(
        &mut self,
        max_chars_per_line: i64,
        max_lines_per_plate: i64,
        thickness_mm: f64,
    ) {
        if PlateSettings::was_clamped(max_chars_per_line, max_lines_per_plate, thickness_mm) {
            warn!(
                max_chars_per_line,
                max_lines_per_plate, thickness_mm, "Settings out of range were clamped"
            );
        }
        self.settings =
            PlateSettings::normalized(max_chars_per_line, max_lines_per_plate, thickness_mm);
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current word mappings.
    pub fn mappings(&self) -> &[WordMapping] {
        &self.mappings
    }

    /// Current settings.
    pub fn settings(&self) -> &PlateSettings {
        &self.settings
    }

    /// Paginated plates with word provenance, for live preview.
    pub fn preview(&self) -> Vec<Plate<SourcedCell>> {
        let cells = flatten_mappings(&self.mappings);
        paginate_with_settings(&cells, &self.settings, &self.prefixes)
    }

    /// Physical size of each previewed plate.
    pub fn plate_dimensions(&self) -> Vec<PlateDimensions> {
        self.preview()
            .iter()
            .map(|plate| {
                PlateDimensions::for_lines(&plate.lines, plate.page_number_cells().len())
            })
            .collect()
    }

    /// Assembles the package in memory.
    pub fn package(&self) -> PackageResult<Package> {
        build_package(&self.mappings, &self.settings, &self.prefixes, &self.text)
    }

    /// Assembles the package and writes it atomically to `path`.
    pub fn export(&self, path: &Path) -> PackageResult<PackageSummary> {
        let package = self.package()?;
        write_atomic(path, &package.bytes)?;
        Ok(package.summary)
    }
}
