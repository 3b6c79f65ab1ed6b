//! # Parametric Curves
//!
//! Curve primitives evaluated over a normalized parameter `t ∈ [0, 1]`:
//! - **Segment**: straight lines, cubic Bezier pieces, circular arcs and
//!   Catmull-Rom splines
//! - **CurvePath**: segments concatenated end-to-end and parametrized by
//!   arc length
//!
//! Curves are generic over their control point type so that planar
//! cross-sections stay in `DVec2` until the sweep sampler lifts them.

mod arc_length;
mod catmull_rom;
mod path;
mod segment;

#[cfg(test)]
mod tests;

pub use arc_length::ArcLengthTable;
pub use catmull_rom::{CatmullRom, Parameterization};
pub use path::{CurvePath, PathBuilder, PathSegment};
pub use segment::{Arc, Segment};

use glam::{DVec2, DVec3};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A point type curves can be built from.
///
/// Implemented for `DVec2` (planar cross-sections) and `DVec3` (generating
/// paths in space).
pub trait ControlPoint:
    Copy
    + fmt::Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
    /// Builds a point from XY plane coordinates (`z = 0` for spatial points).
    fn from_planar(x: f64, y: f64) -> Self;

    /// Euclidean distance to `other`.
    fn distance(self, other: Self) -> f64;

    /// Squared euclidean distance to `other`.
    fn distance_squared(self, other: Self) -> f64;
}

impl ControlPoint for DVec2 {
    #[inline]
    fn from_planar(x: f64, y: f64) -> Self {
        DVec2::new(x, y)
    }

    #[inline]
    fn distance(self, other: Self) -> f64 {
        DVec2::distance(self, other)
    }

    #[inline]
    fn distance_squared(self, other: Self) -> f64 {
        DVec2::distance_squared(self, other)
    }
}

impl ControlPoint for DVec3 {
    #[inline]
    fn from_planar(x: f64, y: f64) -> Self {
        DVec3::new(x, y, 0.0)
    }

    #[inline]
    fn distance(self, other: Self) -> f64 {
        DVec3::distance(self, other)
    }

    #[inline]
    fn distance_squared(self, other: Self) -> f64 {
        DVec3::distance_squared(self, other)
    }
}
