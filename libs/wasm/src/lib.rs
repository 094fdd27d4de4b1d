//! WASM-facing entry points for the braille plate pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Word mappings cross the boundary as JSON text in the
//! transliteration component's own shape (`originalWord`, `reading`,
//! `cells[].dots`, `cells[].char`). Native tests use the `*_internal`
//! helpers to avoid depending on a JS host.
//!
//! ```
//! let json = r#"[{"originalWord":"あ","reading":"あ","cells":[{"dots":[true,false,false,false,false,false],"char":"あ"}]}]"#;
//! let plates = tenji_wasm::preview_internal(json, 10, 3).unwrap();
//! assert_eq!(plates.len(), 1);
//! ```

use braille_cell::{flatten_mappings, PrefixSet, WordMapping};
use braille_layout::paginate_with_settings;
use config::constants::{
    DEFAULT_MAX_CHARS_PER_LINE, DEFAULT_MAX_LINES_PER_PLATE, DEFAULT_PLATE_THICKNESS,
    MAX_PLATE_THICKNESS, MIN_PLATE_THICKNESS,
};
use config::PlateSettings;
use plate_mesh::PlateDimensions;
use plate_package::{build_package as assemble_package, PackageError};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod package_handle;

pub use package_handle::PackageHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "tenji-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Default settings and the advisory thickness range, as JSON.
///
/// # Examples
/// ```
/// let json = tenji_wasm::default_settings();
/// assert!(json.contains("\"maxCharsPerLine\":10"));
/// ```
#[wasm_bindgen]
pub fn default_settings() -> String {
    serde_json::json!({
        "maxCharsPerLine": DEFAULT_MAX_CHARS_PER_LINE,
        "maxLinesPerPlate": DEFAULT_MAX_LINES_PER_PLATE,
        "thicknessMm": DEFAULT_PLATE_THICKNESS,
        "minThicknessMm": MIN_PLATE_THICKNESS,
        "maxThicknessMm": MAX_PLATE_THICKNESS,
    })
    .to_string()
}

/// Errors surfaced to JavaScript as message strings.
#[derive(Debug, Error)]
pub enum WasmError {
    /// The mappings JSON did not parse or held a malformed cell.
    #[error("Invalid word mappings: {0}")]
    Json(#[from] serde_json::Error),
    /// Packaging failed.
    #[error("Export failed: {0}")]
    Package(#[from] PackageError),
}

fn to_js(err: WasmError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One cell of a previewed line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewCell {
    /// Unicode braille glyph.
    pub glyph: char,
    /// Source text shown under the glyph.
    #[serde(rename = "char")]
    pub display: String,
    /// Word index for tap-to-correct; `None` on inter-word spaces.
    pub word: Option<usize>,
}

/// One previewed plate with its physical size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPlate {
    /// 1-based plate index.
    pub number: usize,
    /// Page number glyphs.
    pub page_number: String,
    /// Lines of cells.
    pub lines: Vec<Vec<PreviewCell>>,
    /// Plate width in millimeters.
    pub width_mm: f64,
    /// Plate height in millimeters.
    pub height_mm: f64,
}

/// Paginates word mappings for live preview.
///
/// Layout limits below 1 are clamped to 1.
///
/// # Errors
/// Returns a JavaScript error string when the mappings JSON is malformed.
#[wasm_bindgen]
pub fn preview(
    mappings_json: &str,
    max_chars_per_line: i32,
    max_lines_per_plate: i32,
) -> Result<String, JsValue> {
    let plates = preview_internal(mappings_json, max_chars_per_line, max_lines_per_plate)
        .map_err(to_js)?;
    serde_json::to_string(&plates).map_err(|err| to_js(err.into()))
}

/// Host-only helper behind [`preview`].
pub fn preview_internal(
    mappings_json: &str,
    max_chars_per_line: i32,
    max_lines_per_plate: i32,
) -> Result<Vec<PreviewPlate>, WasmError> {
    let mappings: Vec<WordMapping> = serde_json::from_str(mappings_json)?;
    let settings = PlateSettings::normalized(
        i64::from(max_chars_per_line),
        i64::from(max_lines_per_plate),
        DEFAULT_PLATE_THICKNESS,
    );
    let cells = flatten_mappings(&mappings);
    let plates = paginate_with_settings(&cells, &settings, &PrefixSet::japanese());

    Ok(plates
        .into_iter()
        .map(|plate| {
            let page = plate.page_number_cells();
            let dims = PlateDimensions::for_lines(&plate.lines, page.len());
            PreviewPlate {
                number: plate.number,
                page_number: braille_cell::to_unicode(&page),
                lines: plate
                    .lines
                    .iter()
                    .map(|line| {
                        line.iter()
                            .map(|c| PreviewCell {
                                glyph: c.cell.glyph(),
                                display: c.cell.display.clone(),
                                word: c.word,
                            })
                            .collect()
                    })
                    .collect(),
                width_mm: dims.width,
                height_mm: dims.height,
            }
        })
        .collect())
}

/// Builds the export archive for the current mappings and settings.
///
/// # Errors
/// Returns a JavaScript error string when the mappings JSON is malformed or
/// packaging fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const pkg = build_package(mappingsJson, 10, 3, 1.0, text);
/// // const blob = new Blob([pkg.bytes()], { type: "application/zip" });
/// ```
#[wasm_bindgen]
pub fn build_package(
    mappings_json: &str,
    max_chars_per_line: i32,
    max_lines_per_plate: i32,
    thickness_mm: f64,
    original_text: &str,
) -> Result<PackageHandle, JsValue> {
    build_package_internal(
        mappings_json,
        max_chars_per_line,
        max_lines_per_plate,
        thickness_mm,
        original_text,
    )
    .map_err(to_js)
}

/// Host-only helper behind [`build_package`].
pub fn build_package_internal(
    mappings_json: &str,
    max_chars_per_line: i32,
    max_lines_per_plate: i32,
    thickness_mm: f64,
    original_text: &str,
) -> Result<PackageHandle, WasmError> {
    let mappings: Vec<WordMapping> = serde_json::from_str(mappings_json)?;
    let settings = PlateSettings::normalized(
        i64::from(max_chars_per_line),
        i64::from(max_lines_per_plate),
        thickness_mm,
    );
    let package = assemble_package(&mappings, &settings, &PrefixSet::japanese(), original_text)?;
    Ok(PackageHandle::from_package(package))
}
