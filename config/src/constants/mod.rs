//! # Configuration Constants
//!
//! Centralized values shared across the printer mesh pipeline. Each public
//! item documents its purpose and provides a minimal usage example so that
//! downstream crates can remain declarative and avoid scattering literals.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Defaults**: Generation parameters used by the printer host
//! - **Sampling**: Profile and arc-length resolution
//! - **Limits**: Maximum values for safety bounds
//! - **Growth**: Printer animation cadence

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by the geometry kernel.
///
/// Cell normals whose cross product is shorter than this are treated as
/// degenerate.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-10;

/// Allowed deviation from unit length for generated normals.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_TOLERANCE;
/// let n: f64 = 0.999_999_5;
/// assert!((n - 1.0).abs() < NORMAL_TOLERANCE);
/// ```
pub const NORMAL_TOLERANCE: f64 = 1.0e-5;

// =============================================================================
// DEFAULT GENERATION PARAMETERS
// =============================================================================

/// Default piece height (sweep length for extrusions, profile height for
/// revolutions).
pub const DEFAULT_HEIGHT: f64 = 25.0;

/// Default piece width (profile diameter).
pub const DEFAULT_WIDTH: f64 = 25.0;

/// Default total twist of an extrusion, in radians.
pub const DEFAULT_THETA: f64 = 0.0;

/// Default number of sweep steps.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RESOLUTION;
/// assert!(DEFAULT_RESOLUTION >= 1);
/// ```
pub const DEFAULT_RESOLUTION: u32 = 180;

/// Default fraction of the sweep to realize.
pub const DEFAULT_PROGRESS: f64 = 1.0;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Profile samples per sweep step for closed extrusion profiles.
///
/// A closed cross-section needs far finer circumferential resolution than
/// the sweep direction, so each ring carries `resolution * 5` samples.
///
/// # Examples
/// ```
/// use config::constants::EXTRUSION_SAMPLE_FACTOR;
/// let resolution = 40;
/// assert_eq!(resolution * EXTRUSION_SAMPLE_FACTOR, 200);
/// ```
pub const EXTRUSION_SAMPLE_FACTOR: u32 = 5;

/// Chord samples used to approximate the arc length of one curve segment.
///
/// Composite profiles are parametrized by arc length; each segment keeps a
/// cumulative length table with `ARC_LENGTH_DIVISIONS + 1` entries.
pub const ARC_LENGTH_DIVISIONS: usize = 200;

/// Tension of uniform Catmull-Rom pieces (`spline_thru` path commands).
pub const CATMULL_ROM_TENSION: f64 = 0.5;

/// Control-point spacing below which a centripetal knot interval is
/// replaced by its neighbour.
pub const CENTRIPETAL_MIN_INTERVAL: f64 = 1.0e-4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single generated mesh.
///
/// Safety limit to prevent memory exhaustion from extreme resolutions.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
///
/// // Extrusion at the default resolution: 180 rings * 900 samples * 4
/// let vertex_count = 180 * 900 * 4;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// GROWTH CONSTANTS
// =============================================================================

/// Number of frames the printer uses to grow a piece from nothing.
pub const DEFAULT_GROWTH_STEPS: u32 = 100;

/// Delay between two growth frames, in milliseconds.
pub const GROWTH_FRAME_INTERVAL_MS: u64 = 50;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within
/// [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON_TOLERANCE
}

/// Checks if a f64 value is approximately zero within [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON_TOLERANCE
}

// =============================================================================
// GENERATION CONFIG
// =============================================================================

/// Immutable snapshot of the tunable generation settings.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let config = GenerationConfig::default();
/// assert_eq!(config.extrusion_sample_factor, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Profile samples per sweep step for extrusion sweeps.
    pub extrusion_sample_factor: u32,
    /// Upper bound on the vertex count of one generated mesh.
    pub max_vertices: usize,
}

impl GenerationConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let cfg = GenerationConfig::new(2, 1_000).expect("valid config");
    /// assert_eq!(cfg.extrusion_sample_factor, 2);
    /// ```
    pub fn new(extrusion_sample_factor: u32, max_vertices: usize) -> Result<Self, ConfigError> {
        if extrusion_sample_factor == 0 {
            return Err(ConfigError::InvalidSampleFactor(extrusion_sample_factor));
        }
        if max_vertices < 4 {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        Ok(Self {
            extrusion_sample_factor,
            max_vertices,
        })
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            extrusion_sample_factor: EXTRUSION_SAMPLE_FACTOR,
            max_vertices: MAX_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the extrusion sample factor is zero.
    InvalidSampleFactor(u32),
    /// Raised when the vertex limit cannot hold a single quad cell.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSampleFactor(value) => {
                write!(f, "extrusion_sample_factor must be >= 1: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(f, "max_vertices must be >= 4: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
