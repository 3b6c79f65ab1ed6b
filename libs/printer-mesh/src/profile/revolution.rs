//! Generating paths revolved around the Z axis.
//!
//! Each path lies in the XZ half-plane (`y = 0`, `x >= 0`), starts on the
//! axis or near it and climbs to `height`. Radial coordinates use a
//! 20-unit grid over `width`.

use super::{Profile, ProfileCurve};
use crate::curve::{CatmullRom, CurvePath, PathBuilder, Segment};
use glam::DVec3;

/// Radial grid step shared by the revolution family.
fn radial_unit(width: f64) -> f64 {
    width / 20.0
}

/// Point in the XZ plane.
#[inline]
fn xz(x: f64, z: f64) -> DVec3 {
    DVec3::new(x, 0.0, z)
}

fn centripetal(points: Vec<DVec3>) -> Segment<DVec3> {
    Segment::Spline(CatmullRom::centripetal(points, false))
}

fn spatial(path: CurvePath<DVec3>) -> Profile {
    Profile::Spatial(ProfileCurve::Path(path))
}

/// `A1`: flat foot, tapered neck and a Bezier bulge topped by a rim.
pub fn a1_bezier_vase(width: f64, height: f64) -> Profile {
    let d = radial_unit(width);
    let h = height / 10.0;

    let path = PathBuilder::new()
        .move_to(xz(0.0, 0.0))
        .line_to(xz(8.0 * d, 0.0))
        .line_to(xz(8.0 * d, 2.0 * h))
        .line_to(xz(2.0 * d, 2.5 * h))
        .bezier_to(
            xz(7.0 * d, 2.5 * h),
            xz(7.0 * d, 7.5 * h),
            xz(2.0 * d, 7.5 * h),
        )
        .line_to(xz(8.0 * d, 8.0 * h))
        .line_to(xz(8.0 * d, 10.0 * h))
        .line_to(xz(0.0, 10.0 * h))
        .build();

    spatial(path)
}

/// `A2`: single smooth spline from the axis up to an open rim.
pub fn a2_spline_vase(width: f64, height: f64) -> Profile {
    let d = radial_unit(width);
    let h = height / 8.0;

    let path = CurvePath::from_segments(vec![centripetal(vec![
        xz(0.0, 0.0),
        xz(4.0 * d, 0.0),
        xz(5.0 * d, h),
        xz(3.0 * d, 5.0 * h),
        xz(5.0 * d, 7.0 * h),
        xz(4.0 * d, 7.5 * h),
        xz(3.8 * d, 8.0 * h),
    ])]);

    spatial(path)
}

/// `A3`: wide conical foot with a stem that flares into a spline cup.
pub fn a3_footed_vase(width: f64, height: f64) -> Profile {
    let d = radial_unit(width);
    let h = height / 9.0;

    let path = PathBuilder::new()
        .move_to(xz(0.0, 0.0))
        .line_to(xz(10.0 * d, 0.0))
        .line_to(xz(3.0 * d, h))
        .line_to(xz(3.0 * d, 2.0 * h))
        .segment(centripetal(vec![
            xz(3.0 * d, 2.0 * h),
            xz(6.0 * d, 3.0 * h),
            xz(6.0 * d, 7.0 * h),
            xz(4.0 * d, 8.0 * h),
            xz(d, 9.0 * h),
        ]))
        .build();

    spatial(path)
}

/// `A4`: two stacked bulbs, the upper one closing back onto the axis.
pub fn a4_double_bulb(width: f64, height: f64) -> Profile {
    let d = radial_unit(width);
    let h = height / 7.3;

    let path = CurvePath::from_segments(vec![
        centripetal(vec![
            xz(0.0, 0.0),
            xz(5.0 * d, 0.0),
            xz(6.0 * d, 0.5 * h),
            xz(6.0 * d, 1.5 * h),
            xz(5.0 * d, 2.0 * h),
            xz(3.0 * d, 2.2 * h),
            xz(2.8 * d, 2.6 * h),
            xz(5.0 * d, 3.5 * h),
            xz(8.0 * d, 4.0 * h),
        ]),
        centripetal(vec![
            xz(8.0 * d, 4.0 * h),
            xz(4.0 * d, 4.3 * h),
            xz(3.0 * d, 6.5 * h),
            xz(2.5 * d, 7.0 * h),
            xz(0.0, 7.3 * h),
        ]),
    ]);

    spatial(path)
}
