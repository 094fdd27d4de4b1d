//! # Braille Cell
//!
//! The 6-dot cell model shared by the layout, geometry and packaging stages.
//!
//! ## Architecture
//!
//! ```text
//! Transliterator (external) → WordMapping[] → flatten_mappings → SourcedCell[]
//! ```
//!
//! Prefix indicators are described by a [`PrefixSet`] value handed to the
//! layout engine, keeping the layout independent of any braille scheme.

pub mod cell;
pub mod error;
pub mod mapping;
pub mod numeral;
pub mod prefix;

pub use cell::{to_unicode, BrailleCell, DotPattern, DOTS_PER_CELL, UNICODE_BRAILLE_BASE};
pub use error::{CellError, CellResult};
pub use mapping::{
    apply_correction, flatten_cells, flatten_mappings, SourcedCell, Transliterator, WordMapping,
};
pub use numeral::{number_cells, page_number_cells};
pub use prefix::PrefixSet;
