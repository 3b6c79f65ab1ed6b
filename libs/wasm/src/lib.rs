//! WASM-facing entry points for printer piece generation.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust errors instead of `JsValue`s and need no JS host.
//!
//! ```
//! let mesh = printer_wasm::generate_mesh_internal("A3", 25.0, 25.0, 0.0, 16.0, 1.0).unwrap();
//! assert_eq!(mesh.vertex_count(), 16 * 16 * 4);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use printer_mesh::{GenerationRequest, MeshError, ShapeId, SweepKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors surfaced by the host-facing helpers.
#[derive(Debug, Error)]
pub enum WasmError {
    /// The request JSON could not be decoded
    #[error("Invalid request: {0}")]
    Json(#[from] serde_json::Error),

    /// Generation rejected the request
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "printer-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Generates a piece and returns its buffers.
///
/// `resolution` arrives as a JS number and is rounded to the nearest
/// integer; negative and NaN values become 0 and are rejected.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the shape is unknown or a parameter is out of range.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const mesh = generate_mesh("B2", 25, 25, 0, 180, 0.5);
/// ```
#[wasm_bindgen]
pub fn generate_mesh(
    shape_id: &str,
    height: f64,
    width: f64,
    theta: f64,
    resolution: f64,
    progress: f64,
) -> Result<MeshHandle, JsValue> {
    generate_mesh_internal(shape_id, height, width, theta, resolution, progress)
        .map_err(|err| WasmError::from(err).into())
}

/// Host-only helper behind [`generate_mesh`].
///
/// # Examples
/// ```
/// let err = printer_wasm::generate_mesh_internal("Z9", 25.0, 25.0, 0.0, 180.0, 1.0).unwrap_err();
/// assert_eq!(err.to_string(), "Unknown shape: Z9");
/// ```
pub fn generate_mesh_internal(
    shape_id: &str,
    height: f64,
    width: f64,
    theta: f64,
    resolution: f64,
    progress: f64,
) -> Result<MeshHandle, MeshError> {
    let request = GenerationRequest {
        shape: shape_id.parse()?,
        height,
        width,
        theta,
        // Float to int casts saturate: NaN and negatives map to 0
        resolution: resolution.round() as u32,
        progress,
    };
    let mesh = printer_mesh::generate_mesh(&request)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Generates a piece from a serialized request.
///
/// Missing fields take their defaults, so `{"shape": "A2"}` is a complete
/// request.
///
/// # Examples
/// ```no_run
/// // In JavaScript: generate_mesh_json(JSON.stringify({ shape: "A2", progress: 0.3 }));
/// ```
#[wasm_bindgen]
pub fn generate_mesh_json(request_json: &str) -> Result<MeshHandle, JsValue> {
    generate_mesh_json_internal(request_json).map_err(JsValue::from)
}

/// Request as sent by the host; the shape stays a string until it is
/// resolved against the catalog.
#[derive(Debug, Deserialize)]
struct JsonRequest {
    #[serde(default)]
    shape: Option<String>,
    #[serde(flatten)]
    request: GenerationRequest,
}

/// Host-only helper behind [`generate_mesh_json`].
///
/// # Examples
/// ```
/// use printer_mesh::MeshError;
/// use printer_wasm::WasmError;
///
/// let err = printer_wasm::generate_mesh_json_internal(r#"{"shape": "Z9"}"#).unwrap_err();
/// assert!(matches!(err, WasmError::Mesh(MeshError::UnknownShape { .. })));
/// ```
pub fn generate_mesh_json_internal(request_json: &str) -> Result<MeshHandle, WasmError> {
    let JsonRequest { shape, mut request } = serde_json::from_str(request_json)?;
    if let Some(id) = shape {
        request.shape = id.parse()?;
    }
    let mesh = printer_mesh::generate_mesh(&request)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// One catalog entry as listed to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: ShapeId,
    pub sweep: SweepKind,
    pub label: &'static str,
}

/// Lists the shape catalog as a JSON array of `{id, sweep, label}`.
#[wasm_bindgen]
pub fn shape_catalog_json() -> Result<String, JsValue> {
    shape_catalog_json_internal().map_err(|err| WasmError::from(err).into())
}

/// Host-only helper behind [`shape_catalog_json`].
pub fn shape_catalog_json_internal() -> Result<String, serde_json::Error> {
    let entries: Vec<CatalogEntry> = printer_mesh::catalog()
        .iter()
        .map(|descriptor| CatalogEntry {
            id: descriptor.id,
            sweep: descriptor.sweep,
            label: descriptor.label,
        })
        .collect();
    serde_json::to_string(&entries)
}

#[cfg(test)]
mod tests;
