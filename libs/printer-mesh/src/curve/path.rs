//! # Composite Paths
//!
//! Segments joined end-to-end into one curve parametrized by arc length.
//!
//! ## Algorithm
//!
//! 1. Each segment measures its own length table once, at construction
//! 2. `point(t)` converts `t` to a distance along the whole path
//! 3. The segment containing that distance is evaluated at its own
//!    arc-length fraction

use super::{Arc, ArcLengthTable, CatmullRom, ControlPoint, Segment};
use config::constants::ARC_LENGTH_DIVISIONS;
use glam::DVec2;

/// A segment together with its arc-length table.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment<P> {
    curve: Segment<P>,
    arc_lengths: ArcLengthTable,
}

impl<P: ControlPoint> PathSegment<P> {
    /// Wraps a segment, measuring its length.
    pub fn new(curve: Segment<P>) -> Self {
        let arc_lengths = ArcLengthTable::measure(ARC_LENGTH_DIVISIONS, |t| curve.point(t));
        Self { curve, arc_lengths }
    }

    /// Returns the underlying segment.
    pub fn curve(&self) -> &Segment<P> {
        &self.curve
    }

    /// Approximated length of the segment.
    pub fn length(&self) -> f64 {
        self.arc_lengths.total()
    }

    /// Evaluates the segment at the length fraction `u ∈ [0, 1]`.
    pub fn point_at(&self, u: f64) -> P {
        if self.curve.is_straight() {
            self.curve.point(u)
        } else {
            self.curve.point(self.arc_lengths.parameter_at(u))
        }
    }
}

/// A continuous curve made of consecutive segments.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use printer_mesh::curve::PathBuilder;
///
/// let square = PathBuilder::new()
///     .move_to(DVec2::new(0.0, 0.0))
///     .line_to(DVec2::new(1.0, 0.0))
///     .line_to(DVec2::new(1.0, 1.0))
///     .line_to(DVec2::new(0.0, 1.0))
///     .close_path()
///     .build();
///
/// assert_eq!(square.segment_count(), 4);
/// assert!(square.point(0.5).distance(DVec2::new(1.0, 1.0)) < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath<P> {
    segments: Vec<PathSegment<P>>,
    /// Cumulative length at the end of each segment
    cumulative: Vec<f64>,
}

impl<P: ControlPoint> CurvePath<P> {
    /// Creates a path from consecutive segments.
    pub fn from_segments(segments: Vec<Segment<P>>) -> Self {
        let segments: Vec<PathSegment<P>> = segments.into_iter().map(PathSegment::new).collect();

        let mut cumulative = Vec::with_capacity(segments.len());
        let mut sum = 0.0;
        for segment in &segments {
            sum += segment.length();
            cumulative.push(sum);
        }

        Self {
            segments,
            cumulative,
        }
    }

    /// Returns the number of segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the segments.
    #[inline]
    pub fn segments(&self) -> &[PathSegment<P>] {
        &self.segments
    }

    /// Total approximated length of the path.
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Evaluates the path at `t ∈ [0, 1]`, measured along its length.
    ///
    /// An empty path evaluates to the origin.
    pub fn point(&self, t: f64) -> P {
        let Some(last) = self.segments.len().checked_sub(1) else {
            return P::from_planar(0.0, 0.0);
        };

        let distance = t * self.length();
        let index = self
            .cumulative
            .partition_point(|length| *length < distance)
            .min(last);

        let segment = &self.segments[index];
        let remaining = self.cumulative[index] - distance;
        let segment_length = segment.length();
        let u = if segment_length == 0.0 {
            0.0
        } else {
            1.0 - remaining / segment_length
        };

        segment.point_at(u)
    }

    /// Returns true if the path ends where it starts.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => {
                first.curve().start().distance(last.curve().end()) <= tolerance
            }
            _ => false,
        }
    }
}

/// Incremental construction of a [`CurvePath`] from drawing commands.
///
/// Mirrors a pen: `move_to` lifts it, every other command draws from the
/// current point.
#[derive(Debug, Clone)]
pub struct PathBuilder<P> {
    current: P,
    segments: Vec<Segment<P>>,
}

impl<P: ControlPoint> Default for PathBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ControlPoint> PathBuilder<P> {
    /// Creates an empty builder with the pen at the origin.
    pub fn new() -> Self {
        Self {
            current: P::from_planar(0.0, 0.0),
            segments: Vec::new(),
        }
    }

    /// Moves the pen without drawing.
    pub fn move_to(mut self, point: P) -> Self {
        self.current = point;
        self
    }

    /// Draws a straight segment to `point`.
    pub fn line_to(mut self, point: P) -> Self {
        self.segments.push(Segment::Line {
            start: self.current,
            end: point,
        });
        self.current = point;
        self
    }

    /// Draws a cubic Bezier piece ending at `end`.
    pub fn bezier_to(mut self, control1: P, control2: P, end: P) -> Self {
        self.segments.push(Segment::CubicBezier {
            start: self.current,
            control1,
            control2,
            end,
        });
        self.current = end;
        self
    }

    /// Draws a uniform spline from the current point through `points`.
    pub fn spline_thru(mut self, points: &[P]) -> Self {
        let mut controls = Vec::with_capacity(points.len() + 1);
        controls.push(self.current);
        controls.extend_from_slice(points);

        if let Some(last) = points.last() {
            self.current = *last;
        }
        self.segments.push(Segment::Spline(CatmullRom::uniform(controls)));
        self
    }

    /// Appends an arbitrary segment; the pen moves to its end.
    pub fn segment(mut self, segment: Segment<P>) -> Self {
        self.current = segment.end();
        self.segments.push(segment);
        self
    }

    /// Draws a straight segment back to the start of the first segment,
    /// unless the path already ends there.
    pub fn close_path(mut self) -> Self {
        if let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) {
            let start = first.start();
            let end = last.end();
            if start != end {
                self.segments.push(Segment::Line { start: end, end: start });
                self.current = start;
            }
        }
        self
    }

    /// Finishes the path.
    pub fn build(self) -> CurvePath<P> {
        CurvePath::from_segments(self.segments)
    }
}

impl PathBuilder<DVec2> {
    /// Draws a circular arc around an absolute center.
    ///
    /// When the path already has segments and the arc does not start at the
    /// pen, a connecting straight segment is inserted first.
    pub fn abs_arc(
        mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Self {
        let arc = Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        };

        let arc_start = arc.point(0.0);
        if !self.segments.is_empty() && arc_start != self.current {
            self = self.line_to(arc_start);
        }

        self.segments.push(Segment::Arc(arc));
        self.current = arc.point(1.0);
        self
    }
}
