//! # Sweep Sampler
//!
//! Samples a profile into a grid of rings.
//!
//! ## Algorithm
//!
//! 1. The baseline ring evaluates the profile at `i / samples_per_ring` for
//!    every realized sample `i`, so truncated rings keep the spacing of the
//!    complete one
//! 2. Each following ring applies the sweep step to the previous ring
//! 3. Nothing is sampled when either realized count is zero

use super::SweepPlan;
use crate::profile::Profile;
use glam::DVec3;
use tracing::trace;

/// Rings of sampled points, indexed `[ring][sample]`.
///
/// Holds `effective_rings + 1` rings of `effective_samples + 1` points, or
/// no rings at all when the plan is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    rings: Vec<Vec<DVec3>>,
    ring_count: usize,
    samples_per_ring: usize,
}

impl SampleGrid {
    /// Returns true if the grid holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.len() < 2 || self.rings[0].len() < 2
    }

    /// Returns the sampled rings.
    #[inline]
    pub fn rings(&self) -> &[Vec<DVec3>] {
        &self.rings
    }

    /// Number of ring intervals (cells along the sweep).
    #[inline]
    pub fn ring_intervals(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    /// Number of sample intervals (cells along the profile).
    #[inline]
    pub fn sample_intervals(&self) -> usize {
        self.rings
            .first()
            .map_or(0, |ring| ring.len().saturating_sub(1))
    }

    /// Returns the point at `(ring, sample)`.
    #[inline]
    pub fn point(&self, ring: usize, sample: usize) -> DVec3 {
        self.rings[ring][sample]
    }

    /// Normalized `(ring, sample)` fractions against the full sweep.
    #[inline]
    pub fn fractions(&self, ring: usize, sample: usize) -> (f64, f64) {
        (
            ring as f64 / self.ring_count.max(1) as f64,
            sample as f64 / self.samples_per_ring.max(1) as f64,
        )
    }
}

/// Samples `profile` into rings following `plan`.
pub fn sample(profile: &Profile, plan: &SweepPlan) -> SampleGrid {
    let mut grid = SampleGrid {
        rings: Vec::new(),
        ring_count: plan.ring_count,
        samples_per_ring: plan.samples_per_ring,
    };

    if plan.is_empty() {
        trace!(kind = %plan.kind, "empty sweep plan, skipping sampling");
        return grid;
    }

    grid.rings.reserve_exact(plan.effective_rings + 1);

    let mut ring = profile.sample(plan.effective_samples, plan.samples_per_ring);
    for _ in 0..plan.effective_rings {
        let next: Vec<DVec3> = ring.iter().map(|p| plan.step.apply(*p)).collect();
        grid.rings.push(ring);
        ring = next;
    }
    grid.rings.push(ring);

    trace!(
        kind = %plan.kind,
        rings = grid.rings.len(),
        samples = plan.effective_samples + 1,
        "sampled sweep grid"
    );

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{a3_footed_vase, b1_triangle};
    use crate::sweep::SweepKind;
    use approx::assert_abs_diff_eq;
    use config::constants::GenerationConfig;

    fn plan(kind: SweepKind, resolution: u32, progress: f64) -> SweepPlan {
        kind.plan(resolution, 10.0, 0.0, progress, &GenerationConfig::default())
    }

    #[test]
    fn test_grid_dimensions() {
        let profile = b1_triangle(10.0, 10.0);
        let grid = sample(&profile, &plan(SweepKind::Extrusion, 4, 1.0));
        assert_eq!(grid.rings().len(), 5);
        assert!(grid.rings().iter().all(|ring| ring.len() == 21));
        assert_eq!(grid.ring_intervals(), 4);
        assert_eq!(grid.sample_intervals(), 20);
    }

    #[test]
    fn test_rings_are_chained() {
        let profile = b1_triangle(10.0, 10.0);
        let plan = plan(SweepKind::Extrusion, 4, 1.0);
        let grid = sample(&profile, &plan);
        for k in 0..4 {
            for i in 0..=20 {
                let expected = plan.step.apply(grid.point(k, i));
                assert_eq!(grid.point(k + 1, i), expected);
            }
        }
        // Four lifts of height / 4
        assert_abs_diff_eq!(grid.point(4, 0).z, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_truncated_samples_keep_nominal_spacing() {
        let profile = a3_footed_vase(20.0, 9.0);
        let full = sample(&profile, &plan(SweepKind::Rotation, 10, 1.0));
        let partial = sample(&profile, &plan(SweepKind::Rotation, 10, 0.5));
        assert_eq!(partial.sample_intervals(), 5);
        for (k, ring) in partial.rings().iter().enumerate() {
            assert_eq!(ring[..], full.rings()[k][..6]);
        }
    }

    #[test]
    fn test_empty_plan_samples_nothing() {
        let profile = b1_triangle(10.0, 10.0);
        let grid = sample(&profile, &plan(SweepKind::Extrusion, 4, 0.1));
        assert!(grid.is_empty());
        assert_eq!(grid.ring_intervals(), 0);
        assert_eq!(grid.sample_intervals(), 0);
    }

    #[test]
    fn test_fractions_use_nominal_counts() {
        let profile = b1_triangle(10.0, 10.0);
        let grid = sample(&profile, &plan(SweepKind::Extrusion, 4, 0.5));
        assert_eq!(grid.ring_intervals(), 2);
        assert_eq!(grid.fractions(2, 10), (0.5, 0.5));
    }
}
