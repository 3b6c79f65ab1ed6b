//! # Generation Requests
//!
//! Parameters of one mesh generation call, validated before any sampling.

use crate::error::{MeshError, MeshResult};
use crate::registry::ShapeId;
use config::constants::{
    DEFAULT_HEIGHT, DEFAULT_PROGRESS, DEFAULT_RESOLUTION, DEFAULT_THETA, DEFAULT_WIDTH,
};
use serde::{Deserialize, Serialize};

/// Everything needed to generate one piece.
///
/// Missing fields take the printer's defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use printer_mesh::{GenerationRequest, ShapeId};
///
/// let request = GenerationRequest {
///     shape: ShapeId::A3,
///     resolution: 32,
///     ..GenerationRequest::default()
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub shape: ShapeId,
    /// Sweep length for extrusions, profile height for revolutions
    pub height: f64,
    /// Profile diameter
    pub width: f64,
    /// Total twist of an extrusion in radians; ignored by revolutions
    pub theta: f64,
    /// Number of sweep steps
    pub resolution: u32,
    /// Realized fraction of the sweep, in `[0, 1]`
    pub progress: f64,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            shape: ShapeId::default(),
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            theta: DEFAULT_THETA,
            resolution: DEFAULT_RESOLUTION,
            progress: DEFAULT_PROGRESS,
        }
    }
}

impl GenerationRequest {
    /// Creates a request for `shape` with default parameters.
    pub fn new(shape: ShapeId) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Returns a copy of the request at a different progress.
    pub fn with_progress(self, progress: f64) -> Self {
        Self { progress, ..self }
    }

    /// Checks every parameter range.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] naming the first offending
    /// parameter. Values are never clamped.
    pub fn validate(&self) -> MeshResult<()> {
        if self.resolution < 1 {
            return Err(MeshError::invalid_parameter(
                "resolution",
                "must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.progress) {
            return Err(MeshError::invalid_parameter(
                "progress",
                format!("must be within [0, 1], got {}", self.progress),
            ));
        }
        check_dimension("height", self.height)?;
        check_dimension("width", self.width)?;
        if !self.theta.is_finite() {
            return Err(MeshError::invalid_parameter(
                "theta",
                format!("must be finite, got {}", self.theta),
            ));
        }
        Ok(())
    }
}

fn check_dimension(name: &'static str, value: f64) -> MeshResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            name,
            format!("must be a finite non-negative length, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_name(request: GenerationRequest) -> &'static str {
        match request.validate() {
            Err(MeshError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_match_printer() {
        let request = GenerationRequest::default();
        assert_eq!(request.shape, ShapeId::B2);
        assert_eq!(request.resolution, 180);
        assert_eq!(request.progress, 1.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let request = GenerationRequest {
            resolution: 0,
            ..GenerationRequest::default()
        };
        assert_eq!(rejected_name(request), "resolution");
    }

    #[test]
    fn test_progress_out_of_range_rejected() {
        for progress in [-0.1, 1.5, f64::NAN] {
            let request = GenerationRequest::default().with_progress(progress);
            assert_eq!(rejected_name(request), "progress");
        }
    }

    #[test]
    fn test_progress_bounds_accepted() {
        for progress in [0.0, 1.0] {
            assert!(GenerationRequest::default()
                .with_progress(progress)
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn test_negative_or_infinite_dimensions_rejected() {
        let request = GenerationRequest {
            height: -1.0,
            ..GenerationRequest::default()
        };
        assert_eq!(rejected_name(request), "height");

        let request = GenerationRequest {
            width: f64::INFINITY,
            ..GenerationRequest::default()
        };
        assert_eq!(rejected_name(request), "width");
    }

    #[test]
    fn test_non_finite_theta_rejected() {
        let request = GenerationRequest {
            theta: f64::NAN,
            ..GenerationRequest::default()
        };
        assert_eq!(rejected_name(request), "theta");
    }

    #[test]
    fn test_zero_dimensions_are_valid() {
        let request = GenerationRequest {
            height: 0.0,
            width: 0.0,
            ..GenerationRequest::default()
        };
        assert!(request.validate().is_ok());
    }
}
