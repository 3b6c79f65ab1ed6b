//! # Mesh Data Structure
//!
//! Flat-shaded quad-strip mesh with per-vertex normals and texture
//! coordinates.

use config::constants::NORMAL_TOLERANCE;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Smallest sphere centered on the bounding box that holds every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingSphere {
    pub center: DVec3,
    pub radius: f64,
}

/// A triangle mesh built from independent quad cells.
///
/// Every cell owns its four vertices, so the vertex, normal and UV buffers
/// always have the same length, a multiple of four.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use printer_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// mesh.push_cell(
///     [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)],
///     [DVec2::ZERO, DVec2::X, DVec2::Y, DVec2::ONE],
///     DVec3::Z,
/// );
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.indices(), &[0, 1, 2, 2, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    positions: Vec<DVec3>,
    /// Flat normal of the owning cell, per vertex
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    indices: Vec<u32>,
    bounding_sphere: BoundingSphere,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with room for `cells` quad cells.
    pub fn with_cell_capacity(cells: usize) -> Self {
        Self {
            positions: Vec::with_capacity(cells * 4),
            normals: Vec::with_capacity(cells * 4),
            uvs: Vec::with_capacity(cells * 4),
            indices: Vec::with_capacity(cells * 6),
            bounding_sphere: BoundingSphere::default(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the number of quad cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the bounding sphere computed by [`Mesh::update_bounds`].
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }

    /// Appends one quad cell as four new vertices and two triangles.
    ///
    /// Corners are ordered `[s11, s12, s21, s22]`; the triangles are
    /// `(n, n+1, n+2)` and `(n+2, n+1, n+3)`.
    pub fn push_cell(&mut self, corners: [DVec3; 4], uvs: [DVec2; 4], normal: DVec3) {
        let base = self.positions.len() as u32;

        self.positions.extend_from_slice(&corners);
        self.uvs.extend_from_slice(&uvs);
        self.normals.extend_from_slice(&[normal; 4]);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Extent of the mesh along the sweep axis (Z).
    pub fn height(&self) -> f64 {
        let (min, max) = self.bounding_box();
        max.z - min.z
    }

    /// Recomputes the bounding sphere from the current positions.
    pub fn update_bounds(&mut self) {
        let (min, max) = self.bounding_box();
        let center = (min + max) * 0.5;
        let radius = self
            .positions
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0, f64::max)
            .sqrt();

        self.bounding_sphere = BoundingSphere { center, radius };
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Buffers have matching lengths and whole cells
    /// - All triangle indices are valid
    /// - Normals are unit length or exactly zero (zero-area cells)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let count = self.positions.len();
        if count % 4 != 0
            || self.normals.len() != count
            || self.uvs.len() != count
            || self.indices.len() != count / 4 * 6
        {
            return false;
        }

        if self.indices.iter().any(|&i| i as usize >= count) {
            return false;
        }

        self.normals.iter().all(|n| {
            *n == DVec3::ZERO || (n.length() - 1.0).abs() < NORMAL_TOLERANCE
        })
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports texture coordinates as a flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.indices.clone()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
