//! # Sweep Rules
//!
//! How a profile is repeated in space to form a surface.
//!
//! - **Extrusion**: each ring is the previous one rotated around Z by
//!   `theta / resolution` and lifted by `height / resolution`. Partial
//!   progress drops rings from the top.
//! - **Rotation**: each ring is the previous one rotated around Z by
//!   `2π / resolution`; `theta` is ignored. Partial progress drops samples
//!   from the end of the profile, so the piece still grows upward.

pub mod sampler;

pub use sampler::{sample, SampleGrid};

use config::constants::GenerationConfig;
use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// The two sweep families of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SweepKind {
    /// Closed cross-section swept along Z with an optional twist.
    Extrusion,
    /// Open generating path revolved around Z.
    Rotation,
}

impl SweepKind {
    /// Texture coordinates of a grid point from its normalized fractions.
    ///
    /// Extrusions run `u` around the cross-section and `v` up the sweep;
    /// rotations swap them.
    #[inline]
    pub fn uv(self, sample_fraction: f64, ring_fraction: f64) -> DVec2 {
        match self {
            SweepKind::Extrusion => DVec2::new(sample_fraction, ring_fraction),
            SweepKind::Rotation => DVec2::new(ring_fraction, sample_fraction),
        }
    }

    /// Returns true if cells are emitted ring by ring.
    ///
    /// The axis truncated by partial progress is always the outer loop, so
    /// a partial mesh is a prefix of the complete one.
    #[inline]
    pub fn ring_major(self) -> bool {
        matches!(self, SweepKind::Extrusion)
    }

    /// Derives the sweep plan for a set of validated parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::GenerationConfig;
    /// use printer_mesh::SweepKind;
    ///
    /// let plan = SweepKind::Extrusion.plan(10, 25.0, 0.0, 0.5, &GenerationConfig::default());
    /// assert_eq!(plan.ring_count, 10);
    /// assert_eq!(plan.samples_per_ring, 50);
    /// assert_eq!(plan.effective_rings, 5);
    /// assert_eq!(plan.effective_samples, 50);
    /// ```
    pub fn plan(
        self,
        resolution: u32,
        height: f64,
        theta: f64,
        progress: f64,
        config: &GenerationConfig,
    ) -> SweepPlan {
        let ring_count = resolution as usize;
        let steps = f64::from(resolution);

        match self {
            SweepKind::Extrusion => {
                let samples_per_ring =
                    ring_count.saturating_mul(config.extrusion_sample_factor as usize);
                SweepPlan {
                    kind: self,
                    ring_count,
                    samples_per_ring,
                    effective_rings: truncate(ring_count, progress),
                    effective_samples: samples_per_ring,
                    step: SweepStep::new(theta / steps, height / steps),
                }
            }
            SweepKind::Rotation => SweepPlan {
                kind: self,
                ring_count,
                samples_per_ring: ring_count,
                effective_rings: ring_count,
                effective_samples: truncate(ring_count, progress),
                step: SweepStep::new(TAU / steps, 0.0),
            },
        }
    }
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepKind::Extrusion => write!(f, "EXTRUSION"),
            SweepKind::Rotation => write!(f, "ROTATION"),
        }
    }
}

/// Number of steps realized at `progress`: `floor(count * progress)`.
#[inline]
fn truncate(count: usize, progress: f64) -> usize {
    (count as f64 * progress).floor() as usize
}

/// Rigid transform taking one ring to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepStep {
    pub rotation: DQuat,
    pub translation: DVec3,
}

impl SweepStep {
    /// Rotation around Z by `angle` radians followed by a lift of `lift`.
    pub fn new(angle: f64, lift: f64) -> Self {
        Self {
            rotation: DQuat::from_rotation_z(angle),
            translation: DVec3::new(0.0, 0.0, lift),
        }
    }

    /// Applies the step to a point.
    #[inline]
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.translation
    }
}

/// Nominal and effective grid sizes for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPlan {
    pub kind: SweepKind,
    /// Sweep steps at full progress
    pub ring_count: usize,
    /// Profile intervals per ring at full progress
    pub samples_per_ring: usize,
    /// Sweep steps actually realized
    pub effective_rings: usize,
    /// Profile intervals actually realized
    pub effective_samples: usize,
    pub step: SweepStep,
}

impl SweepPlan {
    /// Returns true if the plan produces no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.effective_rings == 0 || self.effective_samples == 0
    }

    /// Number of quad cells the plan produces.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.effective_rings.saturating_mul(self.effective_samples)
    }

    /// Number of vertices the plan produces; every cell owns four.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.cell_count().saturating_mul(4)
    }
}
