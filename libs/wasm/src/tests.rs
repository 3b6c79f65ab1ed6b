//! Tests for the WASM-facing generation helpers.

use super::*;

/// Buffers handed to the renderer have consistent lengths.
#[test]
fn generate_mesh_buffers_are_consistent() {
    let mesh = generate_mesh_internal("B1", 10.0, 10.0, 0.0, 8.0, 1.0)
        .expect("generation succeeds");

    let vertices = mesh.vertex_count() as usize;
    assert_eq!(vertices, 8 * 40 * 4);
    assert_eq!(mesh.triangle_count(), 8 * 40 * 2);
    assert_eq!(mesh.positions().len(), vertices * 3);
    assert_eq!(mesh.normals().len(), vertices * 3);
    assert_eq!(mesh.uvs().len(), vertices * 2);
    assert_eq!(mesh.indices().len(), mesh.triangle_count() as usize * 3);

    for &idx in &mesh.indices() {
        assert!((idx as usize) < vertices, "Index {} out of range", idx);
    }
}

/// The host passes resolution as a float slider value.
#[test]
fn resolution_is_rounded() {
    let rounded = generate_mesh_internal("A2", 25.0, 25.0, 0.0, 11.6, 1.0).unwrap();
    let exact = generate_mesh_internal("A2", 25.0, 25.0, 0.0, 12.0, 1.0).unwrap();
    assert_eq!(rounded.positions(), exact.positions());
}

#[test]
fn negative_resolution_is_rejected() {
    let err = generate_mesh_internal("A2", 25.0, 25.0, 0.0, -3.0, 1.0).unwrap_err();
    assert!(matches!(
        err,
        MeshError::InvalidParameter { name: "resolution", .. }
    ));
}

#[test]
fn unknown_shape_is_rejected() {
    let err = generate_mesh_internal("Z9", 25.0, 25.0, 0.0, 180.0, 1.0).unwrap_err();
    assert_eq!(err, MeshError::unknown_shape("Z9"));
}

/// Height reported to the printer head matches the requested extrusion.
#[test]
fn extrusion_height_is_reported() {
    let mesh = generate_mesh_internal("B4", 30.0, 11.0, 0.0, 10.0, 1.0).unwrap();
    assert!((mesh.height() - 30.0).abs() < 1e-9);
    assert!(mesh.bounding_radius() > 15.0);
    assert_eq!(mesh.bounding_center().len(), 3);
}

#[test]
fn zero_progress_gives_empty_handle() {
    let mesh = generate_mesh_internal("B1", 10.0, 10.0, 0.0, 8.0, 0.0).unwrap();
    assert!(mesh.is_empty());
    assert!(mesh.positions().is_empty());
    assert_eq!(mesh.height(), 0.0);
}

/// Partial JSON requests fall back to defaults.
#[test]
fn json_request_uses_defaults() {
    let mesh = generate_mesh_json_internal(r#"{"shape": "A2", "resolution": 6}"#).unwrap();
    assert_eq!(mesh.vertex_count(), 6 * 6 * 4);
}

#[test]
fn json_request_rejects_bad_input() {
    let err = generate_mesh_json_internal(r#"{"shape": 7}"#).unwrap_err();
    assert!(matches!(err, WasmError::Json(_)));

    let err = generate_mesh_json_internal("not json").unwrap_err();
    assert!(matches!(err, WasmError::Json(_)));

    let err = generate_mesh_json_internal(r#"{"shape": "B2", "progress": 2.0}"#).unwrap_err();
    assert!(matches!(err, WasmError::Mesh(MeshError::InvalidParameter { .. })));
}

/// Unknown ids are reported as such, not as malformed JSON.
#[test]
fn json_request_reports_unknown_shape() {
    let err = generate_mesh_json_internal(r#"{"shape": "Z9", "resolution": 6}"#).unwrap_err();
    assert!(matches!(err, WasmError::Mesh(MeshError::UnknownShape { .. })));
    assert_eq!(err.to_string(), "Unknown shape: Z9");
}

#[test]
fn json_request_without_shape_uses_default() {
    let mesh = generate_mesh_json_internal(r#"{"resolution": 4}"#).unwrap();
    assert_eq!(mesh.vertex_count(), 4 * 20 * 4);
}

#[test]
fn catalog_lists_every_shape() {
    let json = shape_catalog_json_internal().unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0]["id"], "B1");
    assert_eq!(entries[0]["sweep"], "EXTRUSION");
    assert_eq!(entries[7]["id"], "A4");
    assert_eq!(entries[7]["sweep"], "ROTATION");
}
