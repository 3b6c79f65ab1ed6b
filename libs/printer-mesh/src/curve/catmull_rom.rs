//! # Catmull-Rom Splines
//!
//! Interpolating splines that pass through every control point.
//!
//! Two parameterizations are supported:
//! - **Uniform**: tension-weighted tangents, open ends clamped to the end
//!   points. Used by `spline_thru` path commands.
//! - **Centripetal**: knot intervals spaced by the square root of the control
//!   point distance, which avoids cusps and self-intersections on uneven
//!   control polygons. Open ends are extrapolated with a mirrored phantom
//!   point; closed splines wrap around.

use super::ControlPoint;
use config::constants::{CATMULL_ROM_TENSION, CENTRIPETAL_MIN_INTERVAL};

/// Knot spacing of a Catmull-Rom spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameterization {
    Uniform,
    Centripetal,
}

/// A Catmull-Rom spline through a list of control points.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRom<P> {
    points: Vec<P>,
    closed: bool,
    parameterization: Parameterization,
}

impl<P: ControlPoint> CatmullRom<P> {
    /// Creates a centripetal spline, optionally closed into a loop.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use printer_mesh::curve::CatmullRom;
    ///
    /// let square = CatmullRom::centripetal(
    ///     vec![DVec2::X, DVec2::Y, -DVec2::X, -DVec2::Y],
    ///     true,
    /// );
    /// assert_eq!(square.point(0.25), DVec2::Y);
    /// ```
    pub fn centripetal(points: Vec<P>, closed: bool) -> Self {
        Self {
            points,
            closed,
            parameterization: Parameterization::Centripetal,
        }
    }

    /// Creates an open uniform spline with clamped ends.
    pub fn uniform(points: Vec<P>) -> Self {
        Self {
            points,
            closed: false,
            parameterization: Parameterization::Uniform,
        }
    }

    /// Returns the control points.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Returns true if the spline wraps from its last point back to the first.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the knot spacing.
    pub fn parameterization(&self) -> Parameterization {
        self.parameterization
    }

    /// Evaluates the spline at `t ∈ [0, 1]`.
    ///
    /// Splines with fewer than two control points degenerate to their single
    /// point (or the origin when empty).
    pub fn point(&self, t: f64) -> P {
        match self.points.len() {
            0 => P::from_planar(0.0, 0.0),
            1 => self.points[0],
            _ => match self.parameterization {
                Parameterization::Uniform => self.uniform_point(t),
                Parameterization::Centripetal => self.centripetal_point(t),
            },
        }
    }

    fn uniform_point(&self, t: f64) -> P {
        let points = &self.points;
        let n = points.len();

        let p = (n - 1) as f64 * t;
        let index = (p.floor().max(0.0) as usize).min(n - 1);
        let weight = p - index as f64;

        let p0 = points[if index == 0 { 0 } else { index - 1 }];
        let p1 = points[index];
        let p2 = points[if index + 2 > n { n - 1 } else { index + 1 }];
        let p3 = points[if index + 3 > n { n - 1 } else { index + 2 }];

        uniform_segment(weight, p0, p1, p2, p3)
    }

    fn centripetal_point(&self, t: f64) -> P {
        let points = &self.points;
        let n = points.len();
        let len = n as isize;

        let p = (n - usize::from(!self.closed)) as f64 * t;
        let mut index = p.floor() as isize;
        let mut weight = p - index as f64;

        if !self.closed && weight == 0.0 && index >= len - 1 {
            index = len - 2;
            weight = 1.0;
        }

        let at = |i: isize| points[i.rem_euclid(len) as usize];

        let p0 = if self.closed || index > 0 {
            at(index - 1)
        } else {
            points[0] * 2.0 - points[1]
        };
        let p1 = at(index);
        let p2 = at(index + 1);
        let p3 = if self.closed || index + 2 < len {
            at(index + 2)
        } else {
            points[n - 1] * 2.0 - points[n - 2]
        };

        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);

        // Coincident control points would divide by zero
        if dt1 < CENTRIPETAL_MIN_INTERVAL {
            dt1 = 1.0;
        }
        if dt0 < CENTRIPETAL_MIN_INTERVAL {
            dt0 = dt1;
        }
        if dt2 < CENTRIPETAL_MIN_INTERVAL {
            dt2 = dt1;
        }

        let tangent1 = ((p1 - p0) * (1.0 / dt0) - (p2 - p0) * (1.0 / (dt0 + dt1))
            + (p2 - p1) * (1.0 / dt1))
            * dt1;
        let tangent2 = ((p2 - p1) * (1.0 / dt1) - (p3 - p1) * (1.0 / (dt1 + dt2))
            + (p3 - p2) * (1.0 / dt2))
            * dt1;

        hermite(weight, p1, p2, tangent1, tangent2)
    }
}

/// Uniform Catmull-Rom interpolation between `p1` and `p2`.
fn uniform_segment<P: ControlPoint>(t: f64, p0: P, p1: P, p2: P, p3: P) -> P {
    let v0 = (p2 - p0) * CATMULL_ROM_TENSION;
    let v1 = (p3 - p1) * CATMULL_ROM_TENSION;
    hermite(t, p1, p2, v0, v1)
}

/// Cubic Hermite polynomial from `x0` to `x1` with end tangents `t0`, `t1`.
fn hermite<P: ControlPoint>(t: f64, x0: P, x1: P, t0: P, t1: P) -> P {
    let c0 = x0;
    let c1 = t0;
    let c2 = x0 * -3.0 + x1 * 3.0 - t0 * 2.0 - t1;
    let c3 = x0 * 2.0 - x1 * 2.0 + t0 + t1;

    let t2 = t * t;
    let t3 = t2 * t;
    c0 + c1 * t + c2 * t2 + c3 * t3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::{DVec2, DVec3};

    fn star() -> Vec<DVec2> {
        (0..8)
            .map(|i| {
                let r = if i % 2 == 0 { 3.0 } else { 2.0 };
                let a = i as f64 / 4.0 * std::f64::consts::PI;
                DVec2::new(a.cos() * r, a.sin() * r)
            })
            .collect()
    }

    #[test]
    fn test_centripetal_passes_through_control_points() {
        let points = star();
        let spline = CatmullRom::centripetal(points.clone(), true);
        for (i, expected) in points.iter().enumerate() {
            let actual = spline.point(i as f64 / points.len() as f64);
            assert_abs_diff_eq!(actual.distance(*expected), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_closed_spline_wraps_to_start() {
        let points = star();
        let spline = CatmullRom::centripetal(points.clone(), true);
        assert_abs_diff_eq!(spline.point(1.0).distance(points[0]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_open_centripetal_hits_both_ends() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(4.0, 0.0, 0.0),
            DVec3::new(5.0, 0.0, 1.0),
            DVec3::new(3.0, 0.0, 5.0),
        ];
        let spline = CatmullRom::centripetal(points.clone(), false);
        assert_abs_diff_eq!(spline.point(0.0).distance(points[0]), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spline.point(1.0).distance(points[3]), 0.0, epsilon = 1e-9);
        let third = spline.point(1.0 / 3.0);
        assert_abs_diff_eq!(third.distance(points[1]), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_uniform_clamps_ends_and_interpolates() {
        let points = vec![
            DVec2::new(-6.0, -2.0),
            DVec2::new(-6.0, -2.0),
            DVec2::new(-6.0, -6.0),
            DVec2::new(-2.0, -6.0),
        ];
        let spline = CatmullRom::uniform(points.clone());
        assert_eq!(spline.point(0.0), points[0]);
        assert_eq!(spline.point(1.0), points[3]);
        let corner = spline.point(2.0 / 3.0);
        assert_abs_diff_eq!(corner.distance(points[2]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_duplicate_points_stay_finite() {
        let spline = CatmullRom::centripetal(vec![DVec2::ONE, DVec2::ONE, DVec2::ONE], false);
        let p = spline.point(0.4);
        assert!(p.is_finite());
        assert_abs_diff_eq!(p.distance(DVec2::ONE), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_control_lists() {
        let empty: CatmullRom<DVec2> = CatmullRom::uniform(Vec::new());
        assert_eq!(empty.point(0.5), DVec2::ZERO);
        let single = CatmullRom::centripetal(vec![DVec2::new(1.0, 2.0)], true);
        assert_eq!(single.point(0.7), DVec2::new(1.0, 2.0));
    }
}
