//! # Config Crate
//!
//! Centralized configuration constants for the printer mesh engine.
//! All magic numbers and tunable parameters are defined here so the
//! profile catalog, the sweep sampler and the WASM surface agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DEFAULT_RESOLUTION, EXTRUSION_SAMPLE_FACTOR};
//!
//! // Closed extrusion profiles are sampled far more finely than the sweep axis
//! let samples_per_ring = DEFAULT_RESOLUTION * EXTRUSION_SAMPLE_FACTOR;
//! assert_eq!(samples_per_ring, 900);
//!
//! assert!(approx_zero(1e-12));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Host Compatible**: Defaults match the printer host's parameters

pub mod constants;
