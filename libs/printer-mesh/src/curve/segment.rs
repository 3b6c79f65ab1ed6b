//! Single-piece curves.

use super::{CatmullRom, ControlPoint};
use glam::DVec2;
use std::f64::consts::TAU;

/// A circular arc in the XY plane.
///
/// Angles are absolute, in radians. A counter-clockwise arc sweeps from
/// `start_angle` to `end_angle` through increasing angles, wrapping the
/// difference into `(0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
}

impl Arc {
    /// Evaluates the arc at `t ∈ [0, 1]`.
    pub fn point(&self, t: f64) -> DVec2 {
        let mut delta = self.end_angle - self.start_angle;
        let same_points = delta.abs() < f64::EPSILON;

        while delta < 0.0 {
            delta += TAU;
        }
        while delta > TAU {
            delta -= TAU;
        }

        if delta < f64::EPSILON {
            delta = if same_points { 0.0 } else { TAU };
        }

        if self.clockwise && !same_points {
            delta = if delta == TAU { -TAU } else { delta - TAU };
        }

        let angle = self.start_angle + t * delta;
        DVec2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// One piece of a composite path.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<P> {
    /// Straight segment from `start` to `end`.
    Line { start: P, end: P },
    /// Cubic Bezier piece with two inner control points.
    CubicBezier {
        start: P,
        control1: P,
        control2: P,
        end: P,
    },
    /// Circular arc; planar, lifted into `P` on evaluation.
    Arc(Arc),
    /// Interpolating spline through its control points.
    Spline(CatmullRom<P>),
}

impl<P: ControlPoint> Segment<P> {
    /// Evaluates the segment at its raw parameter `t ∈ [0, 1]`.
    pub fn point(&self, t: f64) -> P {
        match self {
            Segment::Line { start, end } => {
                if t == 1.0 {
                    *end
                } else {
                    (*end - *start) * t + *start
                }
            }
            Segment::CubicBezier {
                start,
                control1,
                control2,
                end,
            } => {
                let k = 1.0 - t;
                *start * (k * k * k)
                    + *control1 * (3.0 * k * k * t)
                    + *control2 * (3.0 * k * t * t)
                    + *end * (t * t * t)
            }
            Segment::Arc(arc) => {
                let p = arc.point(t);
                P::from_planar(p.x, p.y)
            }
            Segment::Spline(spline) => spline.point(t),
        }
    }

    /// First point of the segment.
    pub fn start(&self) -> P {
        self.point(0.0)
    }

    /// Last point of the segment.
    pub fn end(&self) -> P {
        self.point(1.0)
    }

    /// Returns true if the raw parameter is already proportional to arc length.
    pub fn is_straight(&self) -> bool {
        matches!(self, Segment::Line { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::DVec3;
    use std::f64::consts::PI;

    #[test]
    fn test_line_midpoint_and_exact_end() {
        let line = Segment::Line {
            start: DVec3::ZERO,
            end: DVec3::new(2.0, 0.0, 4.0),
        };
        assert_eq!(line.point(0.5), DVec3::new(1.0, 0.0, 2.0));
        assert_eq!(line.end(), DVec3::new(2.0, 0.0, 4.0));
    }

    #[test]
    fn test_bezier_interpolates_endpoints() {
        let bezier = Segment::CubicBezier {
            start: DVec2::new(0.0, 0.0),
            control1: DVec2::new(1.0, 2.0),
            control2: DVec2::new(3.0, 2.0),
            end: DVec2::new(4.0, 0.0),
        };
        assert_eq!(bezier.start(), DVec2::new(0.0, 0.0));
        assert_eq!(bezier.end(), DVec2::new(4.0, 0.0));
        // Symmetric control polygon peaks at 3/4 of the control height
        let mid = bezier.point(0.5);
        assert_abs_diff_eq!(mid.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_counter_clockwise_half_circle_goes_below() {
        // From PI to 0 counter-clockwise passes through 3PI/2
        let arc = Arc {
            center: DVec2::ZERO,
            radius: 1.0,
            start_angle: PI,
            end_angle: 0.0,
            clockwise: false,
        };
        let mid = arc.point(0.5);
        assert_abs_diff_eq!(mid.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clockwise_half_circle_goes_above() {
        let arc = Arc {
            center: DVec2::ZERO,
            radius: 1.0,
            start_angle: PI,
            end_angle: 0.0,
            clockwise: true,
        };
        let mid = arc.point(0.5);
        assert_abs_diff_eq!(mid.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_full_circle_closes() {
        let arc = Arc {
            center: DVec2::new(1.0, 1.0),
            radius: 2.0,
            start_angle: 0.0,
            end_angle: TAU,
            clockwise: false,
        };
        let start = arc.point(0.0);
        let end = arc.point(1.0);
        assert_abs_diff_eq!(start.distance(end), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.point(0.5).x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arc_segment_lifts_to_plane() {
        let segment: Segment<DVec3> = Segment::Arc(Arc {
            center: DVec2::ZERO,
            radius: 3.0,
            start_angle: 0.0,
            end_angle: PI / 2.0,
            clockwise: false,
        });
        let end = segment.end();
        assert_abs_diff_eq!(end.y, 3.0, epsilon = 1e-12);
        assert_eq!(end.z, 0.0);
    }
}
