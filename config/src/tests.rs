//! # Tests for Config Constants
//!
//! Unit tests verifying the physical constants stay consistent with each
//! other and that settings validation behaves.

use crate::constants::*;
use crate::{ConfigError, PlateSettings};

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

#[test]
fn test_dots_fit_inside_cell_pitch() {
    assert!(DOT_BASE_DIAMETER < DOT_PITCH_X);
    assert!(DOT_BASE_DIAMETER < DOT_PITCH_Y);
    // Right column plus one dot must stay clear of the next cell.
    assert!(DOT_PITCH_X + DOT_BASE_DIAMETER < CHAR_PITCH);
}

#[test]
fn test_cell_fits_inside_line_height() {
    let cell_height = 2.0 * DOT_PITCH_Y + DOT_BASE_DIAMETER;
    assert!(cell_height < LINE_HEIGHT);
    assert!(LINE_HEIGHT <= LINE_PITCH);
}

#[test]
fn test_hole_column_fits_minimum_width() {
    let hole_column = HOLE_DIAMETER + 2.0 * HOLE_RING_WIDTH + LEFT_COLUMN_PADDING;
    assert!((hole_column - 12.0).abs() < 1e-12);
    assert!(hole_column <= LEFT_COLUMN_MIN_WIDTH);
}

#[test]
fn test_radius_helpers() {
    assert_eq!(hole_radius(), 2.5);
    assert_eq!(dot_base_radius(), 0.8);
}

#[test]
fn test_flat_ratio_truncates_sweep() {
    assert!(DOT_FLAT_RATIO > 0.0 && DOT_FLAT_RATIO < 1.0);
}

#[test]
fn test_tessellation_counts_form_polygons() {
    assert!(DOT_SEGMENTS >= 3);
    assert!(TUBE_SEGMENTS >= 3);
    assert!(CORNER_SEGMENTS >= 1);
    assert!(DOT_RINGS >= 1);
}

// =============================================================================
// PACKAGE TESTS
// =============================================================================

#[test]
fn test_stl_header_fits() {
    assert!(STL_HEADER_TEXT.len() <= 80);
}

#[test]
fn test_plate_entry_name_padding() {
    assert_eq!(plate_entry_name(1), "plate_01.stl");
    assert_eq!(plate_entry_name(9), "plate_09.stl");
    assert_eq!(plate_entry_name(10), "plate_10.stl");
}

// =============================================================================
// SETTINGS TESTS
// =============================================================================

#[test]
fn test_default_settings() {
    let settings = PlateSettings::default();
    assert_eq!(settings.max_chars_per_line, 10);
    assert_eq!(settings.max_lines_per_plate, 3);
    assert_eq!(settings.thickness_mm, 1.0);
}

#[test]
fn test_settings_reject_zero_limits() {
    assert_eq!(
        PlateSettings::new(10, 0, 1.0),
        Err(ConfigError::InvalidLinesPerPlate(0))
    );
    assert_eq!(
        PlateSettings::new(0, 3, 1.0),
        Err(ConfigError::InvalidCharsPerLine(0))
    );
}

#[test]
fn test_settings_reject_bad_thickness() {
    assert!(matches!(
        PlateSettings::new(10, 3, 0.0),
        Err(ConfigError::InvalidThickness(_))
    ));
    assert!(matches!(
        PlateSettings::new(10, 3, -1.0),
        Err(ConfigError::InvalidThickness(_))
    ));
    assert!(matches!(
        PlateSettings::new(10, 3, f64::INFINITY),
        Err(ConfigError::InvalidThickness(_))
    ));
    assert!(matches!(
        PlateSettings::new(10, 3, 2.5),
        Err(ConfigError::InvalidThickness(_))
    ));
    assert!(PlateSettings::new(10, 3, MIN_PLATE_THICKNESS).is_ok());
    assert!(PlateSettings::new(10, 3, MAX_PLATE_THICKNESS).is_ok());
}

#[test]
fn test_settings_normalize_clamps_to_one() {
    let settings = PlateSettings::normalized(0, -3, 1.2);
    assert_eq!(settings.max_chars_per_line, 1);
    assert_eq!(settings.max_lines_per_plate, 1);
    assert_eq!(settings.thickness_mm, 1.2);
    assert!(PlateSettings::was_clamped(0, -3, 1.2));
    assert!(!PlateSettings::was_clamped(10, 3, 1.2));
}

#[test]
fn test_settings_normalize_clamps_thickness_range() {
    assert_eq!(PlateSettings::normalized(10, 3, 50.0).thickness_mm, MAX_PLATE_THICKNESS);
    assert_eq!(PlateSettings::normalized(10, 3, 0.1).thickness_mm, MIN_PLATE_THICKNESS);
    assert_eq!(PlateSettings::normalized(10, 3, -1.0).thickness_mm, MIN_PLATE_THICKNESS);
    assert_eq!(
        PlateSettings::normalized(10, 3, f64::INFINITY).thickness_mm,
        MAX_PLATE_THICKNESS
    );
    assert!(PlateSettings::was_clamped(10, 3, 50.0));
    assert!(PlateSettings::was_clamped(10, 3, 0.1));
    assert!(!PlateSettings::was_clamped(10, 3, 2.0));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidThickness(-0.5);
    assert!(err.to_string().contains("thickness"));
    assert!(err.to_string().contains("-0.5"));
}
