//! # Package Handle
//!
//! WASM-friendly wrapper for an assembled archive.

use plate_package::Package;
use wasm_bindgen::prelude::*;

/// A finished export archive that JavaScript can download.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const pkg = build_package(mappingsJson, 10, 3, 1.0, text);
///
/// console.log(pkg.plate_count, pkg.byte_len);
///
/// const blob = new Blob([pkg.bytes()], { type: "application/zip" });
/// const url = URL.createObjectURL(blob);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct PackageHandle {
    /// Zip archive bytes
    bytes: Vec<u8>,
    /// Triangle count per plate, in plate order
    triangle_counts: Vec<u32>,
    /// Number of plates
    plate_count: u32,
}

#[wasm_bindgen]
impl PackageHandle {
    /// Returns the number of plates in the archive.
    #[wasm_bindgen(getter)]
    pub fn plate_count(&self) -> u32 {
        self.plate_count
    }

    /// Returns the archive size in bytes.
    #[wasm_bindgen(getter)]
    pub fn byte_len(&self) -> u32 {
        u32::try_from(self.bytes.len()).unwrap_or(u32::MAX)
    }

    /// Returns the archive as a Uint8Array.
    #[wasm_bindgen]
    pub fn bytes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.bytes[..])
    }

    /// Returns the per-plate triangle counts as a Uint32Array.
    #[wasm_bindgen]
    pub fn triangle_counts(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.triangle_counts[..])
    }

    /// Returns true if the archive holds no plates.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.plate_count == 0
    }
}

impl PackageHandle {
    /// Creates a handle from an assembled package.
    pub fn from_package(package: Package) -> Self {
        let counts = &package.summary.triangle_counts;
        Self {
            triangle_counts: counts
                .iter()
                .map(|&n| u32::try_from(n).unwrap_or(u32::MAX))
                .collect(),
            plate_count: u32::try_from(package.summary.plate_count).unwrap_or(u32::MAX),
            bytes: package.bytes,
        }
    }

    /// Archive bytes, for host-side callers.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Per-plate triangle counts, for host-side callers.
    pub fn triangle_count_list(&self) -> &[u32] {
        &self.triangle_counts
    }
}
