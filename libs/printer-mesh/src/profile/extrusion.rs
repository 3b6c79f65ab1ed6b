//! Closed cross-sections swept along the Z axis.
//!
//! All four loops are centered on the origin and scale with `width`;
//! `height` is the sweep length and does not affect the cross-section.

use super::{Profile, ProfileCurve};
use crate::curve::{CatmullRom, PathBuilder};
use glam::DVec2;
use std::f64::consts::PI;

/// Closed regular polygon with `sides` corners on a circle of diameter `width`.
fn regular_polygon(width: f64, sides: usize) -> Profile {
    let radius = width / 2.0;
    let corners: Vec<DVec2> = (0..sides)
        .map(|i| {
            let angle = 2.0 * i as f64 / sides as f64 * PI;
            DVec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect();

    let mut builder = PathBuilder::new().move_to(corners[0]);
    for corner in &corners[1..] {
        builder = builder.line_to(*corner);
    }

    Profile::Planar(ProfileCurve::Path(builder.close_path().build()))
}

/// `B1`: equilateral triangle.
pub fn b1_triangle(width: f64, _height: f64) -> Profile {
    regular_polygon(width, 3)
}

/// `B2`: seven-pointed star smoothed into a closed centripetal spline.
///
/// Control points alternate between radius `3 * width / 4` and `width / 2`.
pub fn b2_star(width: f64, _height: f64) -> Profile {
    let tips = 7;
    let points: Vec<DVec2> = (0..tips * 2)
        .map(|i| {
            let radius = if i % 2 == 0 {
                3.0 * width / 4.0
            } else {
                width / 2.0
            };
            let angle = i as f64 / tips as f64 * PI;
            DVec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect();

    Profile::Planar(ProfileCurve::Spline(CatmullRom::centripetal(points, true)))
}

/// `B3`: cross with rounded outer corners, on a 13-unit grid.
pub fn b3_rounded_cross(width: f64, _height: f64) -> Profile {
    let d = width / 13.0;
    let p = |x: f64, y: f64| DVec2::new(x * d, y * d);

    let path = PathBuilder::new()
        .move_to(p(-3.0, -2.0))
        .line_to(p(-6.0, -2.0))
        .spline_thru(&[p(-6.0, -2.0), p(-6.0, -6.0), p(-2.0, -6.0)])
        .line_to(p(-2.0, -3.0))
        .line_to(p(2.0, -3.0))
        .line_to(p(2.0, -6.0))
        .spline_thru(&[p(2.0, -6.0), p(6.0, -6.0), p(6.0, -2.0)])
        .line_to(p(3.0, -2.0))
        .line_to(p(3.0, 2.0))
        .line_to(p(6.0, 2.0))
        .spline_thru(&[p(6.0, 2.0), p(6.0, 6.0), p(2.0, 6.0)])
        .line_to(p(2.0, 3.0))
        .line_to(p(-2.0, 3.0))
        .line_to(p(-2.0, 6.0))
        .spline_thru(&[p(-2.0, 6.0), p(-6.0, 6.0), p(-6.0, 2.0)])
        .line_to(p(-3.0, 2.0))
        .close_path()
        .build();

    Profile::Planar(ProfileCurve::Path(path))
}

/// `B4`: capsule of two half circles joined by straight sides, on an
/// 11-unit grid.
pub fn b4_capsule(width: f64, _height: f64) -> Profile {
    let d = width / 11.0;

    let path = PathBuilder::new()
        .move_to(DVec2::new(-d, -4.0 * d))
        .abs_arc(DVec2::new(0.0, -4.0 * d), d, PI, 0.0, false)
        .line_to(DVec2::new(d, 4.0 * d))
        .abs_arc(DVec2::new(0.0, 4.0 * d), d, 0.0, PI, false)
        .close_path()
        .build();

    Profile::Planar(ProfileCurve::Path(path))
}
