//! # Spline Profile Library
//!
//! Named cross-sections and generating paths swept into printed pieces.
//!
//! - **Extrusion family** (`B1..B4`): closed planar loops in the XY plane
//! - **Revolution family** (`A1..A4`): open paths in the XZ half-plane,
//!   revolved around the Z axis
//!
//! Every profile constructor is a pure `fn(width, height) -> Profile`.

mod extrusion;
mod revolution;

pub use extrusion::{b1_triangle, b2_star, b3_rounded_cross, b4_capsule};
pub use revolution::{a1_bezier_vase, a2_spline_vase, a3_footed_vase, a4_double_bulb};

use crate::curve::{CatmullRom, ControlPoint, CurvePath};
use glam::{DVec2, DVec3};

/// Signature shared by every catalog profile constructor.
pub type ProfileFactory = fn(width: f64, height: f64) -> Profile;

/// Whether a profile yields planar or spatial points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Planar,
    Spatial,
}

/// The curve behind a profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileCurve<P> {
    /// A single spline evaluated by its raw parameter.
    Spline(CatmullRom<P>),
    /// A composite path evaluated by arc length.
    Path(CurvePath<P>),
}

impl<P: ControlPoint> ProfileCurve<P> {
    /// Evaluates the curve at `t ∈ [0, 1]`.
    pub fn point(&self, t: f64) -> P {
        match self {
            ProfileCurve::Spline(spline) => spline.point(t),
            ProfileCurve::Path(path) => path.point(t),
        }
    }
}

/// A profile curve tagged with its dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    /// Cross-section in the XY plane, lifted with `z = 0`.
    Planar(ProfileCurve<DVec2>),
    /// Generating path in space.
    Spatial(ProfileCurve<DVec3>),
}

impl Profile {
    /// Returns the dimensionality tag.
    pub fn dimension(&self) -> Dimension {
        match self {
            Profile::Planar(_) => Dimension::Planar,
            Profile::Spatial(_) => Dimension::Spatial,
        }
    }

    /// Evaluates the profile at `t ∈ [0, 1]` as a 3D point.
    pub fn point(&self, t: f64) -> DVec3 {
        match self {
            Profile::Planar(curve) => curve.point(t).extend(0.0),
            Profile::Spatial(curve) => curve.point(t),
        }
    }

    /// Samples `count + 1` points at `i / divisions` for `i ∈ [0, count]`.
    ///
    /// The dimensionality is resolved once for the whole ring.
    pub fn sample(&self, count: usize, divisions: usize) -> Vec<DVec3> {
        let divisions = divisions.max(1) as f64;
        match self {
            Profile::Planar(curve) => (0..=count)
                .map(|i| curve.point(i as f64 / divisions).extend(0.0))
                .collect(),
            Profile::Spatial(curve) => (0..=count)
                .map(|i| curve.point(i as f64 / divisions))
                .collect(),
        }
    }
}
