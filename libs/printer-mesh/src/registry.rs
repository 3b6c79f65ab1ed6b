//! # Shape Registry
//!
//! Static catalog mapping shape identifiers to their profile constructor and
//! sweep family.

use crate::error::{MeshError, MeshResult};
use crate::profile::{self, Profile, ProfileFactory};
use crate::sweep::SweepKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog shape.
///
/// # Example
///
/// ```rust
/// use printer_mesh::ShapeId;
///
/// let id: ShapeId = "A3".parse().unwrap();
/// assert_eq!(id, ShapeId::A3);
/// assert_eq!(id.to_string(), "A3");
/// assert!("Z9".parse::<ShapeId>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    B1,
    /// Shape generated when the host does not pick one
    #[default]
    B2,
    B3,
    B4,
    A1,
    A2,
    A3,
    A4,
}

impl ShapeId {
    /// All identifiers in catalog order.
    pub const ALL: [ShapeId; 8] = [
        ShapeId::B1,
        ShapeId::B2,
        ShapeId::B3,
        ShapeId::B4,
        ShapeId::A1,
        ShapeId::A2,
        ShapeId::A3,
        ShapeId::A4,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeId::B1 => "B1",
            ShapeId::B2 => "B2",
            ShapeId::B3 => "B3",
            ShapeId::B4 => "B4",
            ShapeId::A1 => "A1",
            ShapeId::A2 => "A2",
            ShapeId::A3 => "A3",
            ShapeId::A4 => "A4",
        }
    }

    /// Returns the catalog entry for this shape.
    pub fn descriptor(self) -> &'static ShapeDescriptor {
        &SHAPES[self as usize]
    }
}

impl FromStr for ShapeId {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| MeshError::unknown_shape(s))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDescriptor {
    pub id: ShapeId,
    pub sweep: SweepKind,
    /// Human-readable name shown by hosts
    pub label: &'static str,
    profile: ProfileFactory,
}

impl ShapeDescriptor {
    /// Builds the profile for the given piece dimensions.
    pub fn build_profile(&self, width: f64, height: f64) -> Profile {
        (self.profile)(width, height)
    }
}

/// The catalog, indexed by `ShapeId` discriminant.
static SHAPES: [ShapeDescriptor; 8] = [
    ShapeDescriptor {
        id: ShapeId::B1,
        sweep: SweepKind::Extrusion,
        label: "Triangle",
        profile: profile::b1_triangle,
    },
    ShapeDescriptor {
        id: ShapeId::B2,
        sweep: SweepKind::Extrusion,
        label: "Star",
        profile: profile::b2_star,
    },
    ShapeDescriptor {
        id: ShapeId::B3,
        sweep: SweepKind::Extrusion,
        label: "Rounded cross",
        profile: profile::b3_rounded_cross,
    },
    ShapeDescriptor {
        id: ShapeId::B4,
        sweep: SweepKind::Extrusion,
        label: "Capsule",
        profile: profile::b4_capsule,
    },
    ShapeDescriptor {
        id: ShapeId::A1,
        sweep: SweepKind::Rotation,
        label: "Bezier vase",
        profile: profile::a1_bezier_vase,
    },
    ShapeDescriptor {
        id: ShapeId::A2,
        sweep: SweepKind::Rotation,
        label: "Spline vase",
        profile: profile::a2_spline_vase,
    },
    ShapeDescriptor {
        id: ShapeId::A3,
        sweep: SweepKind::Rotation,
        label: "Footed vase",
        profile: profile::a3_footed_vase,
    },
    ShapeDescriptor {
        id: ShapeId::A4,
        sweep: SweepKind::Rotation,
        label: "Double bulb",
        profile: profile::a4_double_bulb,
    },
];

/// Looks up a shape by its textual identifier.
///
/// # Errors
///
/// Returns [`MeshError::UnknownShape`] when `id` is not in the catalog.
pub fn resolve(id: &str) -> MeshResult<&'static ShapeDescriptor> {
    id.parse::<ShapeId>().map(ShapeId::descriptor)
}

/// Lists every catalog entry in declaration order.
pub fn catalog() -> &'static [ShapeDescriptor] {
    &SHAPES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Dimension;

    #[test]
    fn test_catalog_is_indexed_by_id() {
        for (index, descriptor) in catalog().iter().enumerate() {
            assert_eq!(descriptor.id as usize, index);
            assert_eq!(descriptor.id, ShapeId::ALL[index]);
        }
    }

    #[test]
    fn test_sweep_families() {
        for descriptor in catalog() {
            let expected = if descriptor.id.as_str().starts_with('B') {
                SweepKind::Extrusion
            } else {
                SweepKind::Rotation
            };
            assert_eq!(descriptor.sweep, expected);
        }
    }

    #[test]
    fn test_profile_dimension_matches_family() {
        for descriptor in catalog() {
            let dimension = descriptor.build_profile(25.0, 25.0).dimension();
            match descriptor.sweep {
                SweepKind::Extrusion => assert_eq!(dimension, Dimension::Planar),
                SweepKind::Rotation => assert_eq!(dimension, Dimension::Spatial),
            }
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let b2 = resolve("B2").expect("B2 is in the catalog");
        assert_eq!(b2.id, ShapeId::B2);
        assert_eq!(resolve("Z9").unwrap_err(), MeshError::unknown_shape("Z9"));
        // Identifiers are case-sensitive
        assert!(resolve("b2").is_err());
    }

    #[test]
    fn test_round_trip_through_display() {
        for id in ShapeId::ALL {
            assert_eq!(id.to_string().parse::<ShapeId>(), Ok(id));
        }
    }
}
