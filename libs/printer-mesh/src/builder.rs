//! # Mesh Builder
//!
//! Triangulates a sample grid into flat-shaded quad cells.
//!
//! ## Algorithm
//!
//! For every pair of adjacent rings `(k, k+1)` and adjacent samples
//! `(i, i+1)` the corners `s11 = [k][i]`, `s12 = [k][i+1]`,
//! `s21 = [k+1][i]`, `s22 = [k+1][i+1]` become four new vertices sharing
//! one normal, `normalize((s21 - s12) × (s11 - s12))`.
//!
//! Cells are emitted with the axis truncated by partial progress as the
//! outer loop, so growing a piece only ever appends cells.

use crate::mesh::Mesh;
use crate::sweep::{SampleGrid, SweepKind};
use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;
use tracing::debug;

/// Builds the mesh for a sampled grid.
pub fn build(grid: &SampleGrid, kind: SweepKind) -> Mesh {
    if grid.is_empty() {
        return Mesh::new();
    }

    let rings = grid.ring_intervals();
    let samples = grid.sample_intervals();
    let mut mesh = Mesh::with_cell_capacity(rings * samples);
    let mut degenerate = 0usize;

    if kind.ring_major() {
        for k in 0..rings {
            for i in 0..samples {
                degenerate += usize::from(!push_cell(&mut mesh, grid, kind, k, i));
            }
        }
    } else {
        for i in 0..samples {
            for k in 0..rings {
                degenerate += usize::from(!push_cell(&mut mesh, grid, kind, k, i));
            }
        }
    }

    mesh.update_bounds();

    debug!(
        %kind,
        cells = mesh.cell_count(),
        degenerate,
        radius = mesh.bounding_sphere().radius,
        "built mesh"
    );

    mesh
}

/// Appends the cell at ring `k`, sample `i`; returns false if it has no
/// area.
fn push_cell(mesh: &mut Mesh, grid: &SampleGrid, kind: SweepKind, k: usize, i: usize) -> bool {
    let corners = [
        grid.point(k, i),
        grid.point(k, i + 1),
        grid.point(k + 1, i),
        grid.point(k + 1, i + 1),
    ];
    let uvs = [(k, i), (k, i + 1), (k + 1, i), (k + 1, i + 1)].map(|(ring, sample)| {
        let (ring_fraction, sample_fraction) = grid.fractions(ring, sample);
        kind.uv(sample_fraction, ring_fraction)
    });

    let normal = cell_normal(&corners);
    mesh.push_cell(corners, uvs, normal.unwrap_or(DVec3::ZERO));
    normal.is_some()
}

/// Flat normal of a cell, from its first triangle or, when that one
/// collapsed to a segment, from its second.
///
/// Unlike a plain first-triangle normal, cells touching the lathe axis
/// still get one; only cells with no area at all return `None`.
pub fn cell_normal(corners: &[DVec3; 4]) -> Option<DVec3> {
    let [v0, v1, v2, v3] = *corners;

    triangle_normal(v2 - v1, v0 - v1).or_else(|| triangle_normal(v3 - v1, v2 - v1))
}

/// Unit normal of the triangle spanned by edges `a` and `b`.
///
/// Collinearity is measured against the edge lengths, so the result does
/// not depend on the scale of the piece.
fn triangle_normal(a: DVec3, b: DVec3) -> Option<DVec3> {
    let n = a.cross(b);
    if n.length() > EPSILON_TOLERANCE * a.length() * b.length() {
        n.try_normalize()
    } else {
        None
    }
}
