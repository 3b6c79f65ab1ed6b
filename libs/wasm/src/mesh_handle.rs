//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use printer_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to generated mesh data that can be accessed from JavaScript.
///
/// Buffers are copied into typed arrays on access.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_mesh("B2", 25, 25, 0, 180, 1);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setAttribute('uv', new THREE.BufferAttribute(mesh.uvs(), 2));
///
/// // Raise the print head above the piece
/// head.position.y = mesh.height;
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Flat normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Texture coordinates as [u, v, u, v, ...]
    uvs: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    vertex_count: u32,
    triangle_count: u32,
    bounding_center: [f64; 3],
    bounding_radius: f64,
    height: f64,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the texture coordinates as a Float32Array.
    ///
    /// Length: vertex_count * 2
    pub fn uvs(&self) -> Vec<f32> {
        self.uvs.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the bounding sphere center as `[x, y, z]`.
    pub fn bounding_center(&self) -> Vec<f64> {
        self.bounding_center.to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }

    /// Extent of the piece along the sweep axis.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a Mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let sphere = mesh.bounding_sphere();

        Self {
            positions: mesh.positions_f32(),
            normals: mesh.normals_f32(),
            uvs: mesh.uvs_f32(),
            indices: mesh.indices_u32(),
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX),
            bounding_center: sphere.center.to_array(),
            bounding_radius: sphere.radius,
            height: mesh.height(),
        }
    }
}
