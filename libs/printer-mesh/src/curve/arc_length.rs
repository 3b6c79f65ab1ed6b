//! Arc-length reparametrization tables.

use super::ControlPoint;

/// Cumulative chord lengths of a curve sampled at evenly spaced parameters.
///
/// Maps a fraction of the total length back to the raw curve parameter, so
/// that evenly spaced samples along a composite path are evenly spaced in
/// distance rather than in parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    lengths: Vec<f64>,
}

impl ArcLengthTable {
    /// Samples `point` at `divisions + 1` evenly spaced parameters and
    /// accumulates the chord lengths.
    pub fn measure<P: ControlPoint>(divisions: usize, point: impl Fn(f64) -> P) -> Self {
        let divisions = divisions.max(1);
        let mut lengths = Vec::with_capacity(divisions + 1);

        let mut last = point(0.0);
        let mut sum = 0.0;
        lengths.push(sum);

        for step in 1..=divisions {
            let current = point(step as f64 / divisions as f64);
            sum += current.distance(last);
            lengths.push(sum);
            last = current;
        }

        Self { lengths }
    }

    /// Total approximated length of the curve.
    pub fn total(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Returns the cumulative lengths, starting at zero.
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Converts a length fraction `u ∈ [0, 1]` into the raw parameter `t`.
    pub fn parameter_at(&self, u: f64) -> f64 {
        let count = self.lengths.len();
        let total = self.total();
        if count < 2 || total <= 0.0 {
            return u;
        }

        let target = u * total;

        // Largest sample index whose cumulative length does not exceed target
        let index = self
            .lengths
            .partition_point(|length| *length <= target)
            .saturating_sub(1);

        let before = self.lengths[index];
        if before == target || index + 1 >= count {
            return index as f64 / (count - 1) as f64;
        }

        let segment_length = self.lengths[index + 1] - before;
        let fraction = (target - before) / segment_length;
        (index as f64 + fraction) / (count - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::DVec2;

    #[test]
    fn test_straight_line_is_identity() {
        let table = ArcLengthTable::measure(10, |t| DVec2::new(t * 4.0, 0.0));
        assert_abs_diff_eq!(table.total(), 4.0, epsilon = 1e-12);
        for u in [0.0, 0.15, 0.5, 0.93, 1.0] {
            assert_abs_diff_eq!(table.parameter_at(u), u, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_accelerating_curve_is_reparametrized() {
        // x = t^2 moves slowly near t = 0, so half the length sits past t = 0.5
        let table = ArcLengthTable::measure(200, |t| DVec2::new(t * t, 0.0));
        let t = table.parameter_at(0.25);
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_length_curve_passes_through() {
        let table = ArcLengthTable::measure(8, |_| DVec2::ONE);
        assert_eq!(table.total(), 0.0);
        assert_eq!(table.parameter_at(0.3), 0.3);
    }

    #[test]
    fn test_lengths_are_monotonic() {
        let table = ArcLengthTable::measure(32, |t| DVec2::new(t.cos(), t.sin()));
        assert_eq!(table.lengths().len(), 33);
        assert!(table.lengths().windows(2).all(|w| w[0] <= w[1]));
    }
}
