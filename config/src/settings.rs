//! User-tunable layout settings shared by pagination and plate geometry.
//!
//! Settings come from the UI layer per invocation. The pipeline never divides
//! or indexes with a zero bound, so settings are either rejected up front
//! ([`PlateSettings::new`]) or clamped into range ([`PlateSettings::normalized`]).

use thiserror::Error;

use crate::constants::{
    DEFAULT_MAX_CHARS_PER_LINE, DEFAULT_MAX_LINES_PER_PLATE, DEFAULT_PLATE_THICKNESS,
    MAX_PLATE_THICKNESS, MIN_PLATE_THICKNESS,
};

/// Immutable snapshot of the three layout values supplied by the UI.
///
/// # Examples
/// ```
/// use config::PlateSettings;
/// let settings = PlateSettings::new(12, 2, 1.5).expect("valid settings");
/// assert_eq!(settings.max_lines_per_plate, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateSettings {
    /// Maximum number of cells on one braille line.
    pub max_chars_per_line: usize,
    /// Maximum number of lines on one plate.
    pub max_lines_per_plate: usize,
    /// Thickness of the base slab in millimeters.
    pub thickness_mm: f64,
}

impl PlateSettings {
    /// Builds settings, rejecting zero line limits and a thickness outside
    /// [`MIN_PLATE_THICKNESS`]..=[`MAX_PLATE_THICKNESS`].
    ///
    /// # Examples
    /// ```
    /// use config::{ConfigError, PlateSettings};
    /// assert_eq!(
    ///     PlateSettings::new(0, 3, 1.0),
    ///     Err(ConfigError::InvalidCharsPerLine(0))
    /// );
    /// ```
    pub fn new(
        max_chars_per_line: usize,
        max_lines_per_plate: usize,
        thickness_mm: f64,
    ) -> Result<Self, ConfigError> {
        if max_chars_per_line == 0 {
            return Err(ConfigError::InvalidCharsPerLine(0));
        }
        if max_lines_per_plate == 0 {
            return Err(ConfigError::InvalidLinesPerPlate(0));
        }
        if !(MIN_PLATE_THICKNESS..=MAX_PLATE_THICKNESS).contains(&thickness_mm) {
            return Err(ConfigError::InvalidThickness(thickness_mm));
        }
        Ok(Self {
            max_chars_per_line,
            max_lines_per_plate,
            thickness_mm,
        })
    }

    /// Builds settings from raw UI values, clamping instead of failing.
    ///
    /// Line limits below 1 become 1. Thickness is clamped into
    /// [`MIN_PLATE_THICKNESS`]..=[`MAX_PLATE_THICKNESS`]; NaN becomes the minimum.
    ///
    /// # Examples
    /// ```
    /// use config::PlateSettings;
    /// let settings = PlateSettings::normalized(-4, 0, f64::NAN);
    /// assert_eq!(settings.max_chars_per_line, 1);
    /// assert_eq!(settings.max_lines_per_plate, 1);
    /// assert_eq!(settings.thickness_mm, config::constants::MIN_PLATE_THICKNESS);
    /// assert_eq!(PlateSettings::normalized(10, 3, 50.0).thickness_mm, 2.0);
    /// ```
    pub fn normalized(max_chars_per_line: i64, max_lines_per_plate: i64, thickness_mm: f64) -> Self {
        let thickness_mm = if thickness_mm.is_nan() {
            MIN_PLATE_THICKNESS
        } else {
            thickness_mm.clamp(MIN_PLATE_THICKNESS, MAX_PLATE_THICKNESS)
        };
        Self {
            max_chars_per_line: clamp_limit(max_chars_per_line),
            max_lines_per_plate: clamp_limit(max_lines_per_plate),
            thickness_mm,
        }
    }

    /// Returns true when the values differ from what [`PlateSettings::new`] accepts.
    pub fn was_clamped(max_chars_per_line: i64, max_lines_per_plate: i64, thickness_mm: f64) -> bool {
        max_chars_per_line < 1
            || max_lines_per_plate < 1
            || !(MIN_PLATE_THICKNESS..=MAX_PLATE_THICKNESS).contains(&thickness_mm)
    }
}

impl Default for PlateSettings {
    fn default() -> Self {
        Self {
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
            max_lines_per_plate: DEFAULT_MAX_LINES_PER_PLATE,
            thickness_mm: DEFAULT_PLATE_THICKNESS,
        }
    }
}

fn clamp_limit(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

/// Error returned when invalid settings are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the characters-per-line limit is below 1.
    #[error("max_chars_per_line must be >= 1: {0}")]
    InvalidCharsPerLine(usize),
    /// Raised when the lines-per-plate limit is below 1.
    #[error("max_lines_per_plate must be >= 1: {0}")]
    InvalidLinesPerPlate(usize),
    /// Raised when the slab thickness is outside the printable range.
    #[error("plate thickness must be between 0.5 and 2.0 mm: {0}")]
    InvalidThickness(f64),
}
