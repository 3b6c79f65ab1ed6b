//! # Curve Integration Tests
//!
//! Tests for composite paths built from mixed segments.

use super::*;
use approx::assert_abs_diff_eq;
use glam::{DVec2, DVec3};
use std::f64::consts::PI;

fn capsule(d: f64) -> CurvePath<DVec2> {
    PathBuilder::new()
        .move_to(DVec2::new(-d, -4.0 * d))
        .abs_arc(DVec2::new(0.0, -4.0 * d), d, PI, 0.0, false)
        .line_to(DVec2::new(d, 4.0 * d))
        .abs_arc(DVec2::new(0.0, 4.0 * d), d, 0.0, PI, false)
        .close_path()
        .build()
}

#[test]
fn test_closed_path_returns_to_start() {
    let path = capsule(1.0);
    assert!(path.is_closed(1e-9));
    assert_abs_diff_eq!(path.point(0.0).distance(path.point(1.0)), 0.0, epsilon = 1e-9);
}

#[test]
fn test_capsule_length() {
    // Two half circles of radius 1 and two sides of length 8
    let path = capsule(1.0);
    assert_eq!(path.segment_count(), 4);
    assert_abs_diff_eq!(path.length(), 2.0 * PI + 16.0, epsilon = 1e-3);
}

#[test]
fn test_path_is_parametrized_by_length() {
    // Unit segment followed by a segment three times as long
    let path = PathBuilder::new()
        .move_to(DVec3::ZERO)
        .line_to(DVec3::new(1.0, 0.0, 0.0))
        .line_to(DVec3::new(1.0, 0.0, 3.0))
        .build();

    let quarter = path.point(0.25);
    assert_abs_diff_eq!(quarter.distance(DVec3::new(1.0, 0.0, 0.0)), 0.0, epsilon = 1e-9);

    let half = path.point(0.5);
    assert_abs_diff_eq!(half.distance(DVec3::new(1.0, 0.0, 1.0)), 0.0, epsilon = 1e-9);
}

#[test]
fn test_spline_thru_starts_at_pen() {
    let path = PathBuilder::new()
        .move_to(DVec2::new(-3.0, -2.0))
        .line_to(DVec2::new(-6.0, -2.0))
        .spline_thru(&[
            DVec2::new(-6.0, -2.0),
            DVec2::new(-6.0, -6.0),
            DVec2::new(-2.0, -6.0),
        ])
        .build();

    let spline = path.segments()[1].curve();
    assert_eq!(spline.start(), DVec2::new(-6.0, -2.0));
    assert_eq!(spline.end(), DVec2::new(-2.0, -6.0));
}

#[test]
fn test_arc_inserts_connecting_line() {
    let path = PathBuilder::new()
        .move_to(DVec2::ZERO)
        .line_to(DVec2::new(1.0, 0.0))
        .abs_arc(DVec2::new(3.0, 0.0), 1.0, PI, 0.0, false)
        .build();
    // line, connector to (2, 0), arc
    assert_eq!(path.segment_count(), 3);
}

#[test]
fn test_close_path_skips_redundant_line() {
    let path = PathBuilder::new()
        .move_to(DVec2::ZERO)
        .line_to(DVec2::X)
        .line_to(DVec2::Y)
        .line_to(DVec2::ZERO)
        .close_path()
        .build();
    assert_eq!(path.segment_count(), 3);
}

#[test]
fn test_bezier_segment_in_path() {
    let path = PathBuilder::new()
        .move_to(DVec3::new(2.0, 0.0, 2.5))
        .bezier_to(
            DVec3::new(7.0, 0.0, 2.5),
            DVec3::new(7.0, 0.0, 7.5),
            DVec3::new(2.0, 0.0, 7.5),
        )
        .build();
    let mid = path.point(0.5);
    // Symmetric bulge: the length midpoint is the parameter midpoint
    assert_abs_diff_eq!(mid.z, 5.0, epsilon = 1e-6);
    assert_abs_diff_eq!(mid.x, 5.75, epsilon = 1e-6);
    assert_eq!(mid.y, 0.0);
}

#[test]
fn test_empty_path_evaluates_to_origin() {
    let path: CurvePath<DVec3> = PathBuilder::new().build();
    assert_eq!(path.length(), 0.0);
    assert_eq!(path.point(0.5), DVec3::ZERO);
    assert!(!path.is_closed(1e-9));
}
