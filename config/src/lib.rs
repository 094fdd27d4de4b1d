//! # Config Crate
//!
//! Centralized configuration for the tenji plate pipeline.
//! All physical dimensions, tessellation counts and layout defaults are
//! defined here so the layout, mesh and packaging crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CHAR_PITCH, LINE_PITCH};
//! use config::PlateSettings;
//!
//! // Ten cells take 60 mm of body width.
//! let body_width = 10.0 * CHAR_PITCH;
//! assert!((body_width - 60.0).abs() < 1e-9);
//!
//! let settings = PlateSettings::default();
//! assert_eq!(settings.max_chars_per_line, 10);
//! assert!(LINE_PITCH > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimeters**: Every length is expressed in mm, the unit slicers expect
//! - **Plain Values**: Constants and validation; `thiserror` is the only dependency

pub mod constants;
pub mod settings;

pub use settings::{ConfigError, PlateSettings};

#[cfg(test)]
mod tests;
