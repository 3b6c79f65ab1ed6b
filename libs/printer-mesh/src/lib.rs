//! # Printer Mesh
//!
//! Procedural mesh generation for the pieces of the warehouse printer.
//! Turns named spline profiles into flat-shaded, UV-mapped triangle meshes
//! by extrusion or revolution, optionally only partially built.
//!
//! ## Architecture
//!
//! ```text
//! GenerationRequest → registry (profile + sweep kind)
//!                   → sweep::sample (ring grid)
//!                   → builder::build (Mesh)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use printer_mesh::{generate_mesh, GenerationRequest, ShapeId};
//!
//! let request = GenerationRequest {
//!     shape: ShapeId::A3,
//!     resolution: 24,
//!     ..GenerationRequest::default()
//! };
//! let mesh = generate_mesh(&request).unwrap();
//! assert_eq!(mesh.vertex_count(), 24 * 24 * 4);
//! ```

pub mod batch;
pub mod builder;
pub mod curve;
pub mod error;
pub mod growth;
pub mod mesh;
pub mod profile;
pub mod registry;
pub mod request;
pub mod sweep;

pub use batch::{generate_batch, generate_batch_with_config};
pub use error::{MeshError, MeshResult};
pub use growth::{grow, grow_with_config, GrowthFrame, GrowthSchedule};
pub use mesh::{BoundingSphere, Mesh};
pub use registry::{catalog, resolve, ShapeDescriptor, ShapeId};
pub use request::GenerationRequest;
pub use sweep::{SweepKind, SweepPlan};

use config::constants::GenerationConfig;
use tracing::{debug, warn};

/// Generates the mesh for `request` with the default configuration.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] for out-of-range parameters
/// - [`MeshError::TooManyVertices`] when the piece exceeds the vertex limit
pub fn generate_mesh(request: &GenerationRequest) -> MeshResult<Mesh> {
    generate_mesh_with_config(request, &GenerationConfig::default())
}

/// Generates the mesh for `request` with custom settings.
///
/// Parameters are validated and the vertex budget is checked before any
/// profile is sampled. A request that realizes no cells (for example
/// `progress = 0`) yields an empty mesh.
pub fn generate_mesh_with_config(
    request: &GenerationRequest,
    config: &GenerationConfig,
) -> MeshResult<Mesh> {
    validate_request(request)?;

    let descriptor = request.shape.descriptor();
    let plan = descriptor.sweep.plan(
        request.resolution,
        request.height,
        request.theta,
        request.progress,
        config,
    );
    check_vertex_limit(&plan, config)?;

    debug!(
        shape = %request.shape,
        kind = %plan.kind,
        rings = plan.effective_rings,
        samples = plan.effective_samples,
        progress = request.progress,
        "generating mesh"
    );

    if plan.is_empty() {
        return Ok(Mesh::new());
    }

    let profile = descriptor.build_profile(request.width, request.height);
    let grid = sweep::sample(&profile, &plan);
    Ok(builder::build(&grid, plan.kind))
}

/// Validates `request`, logging the rejection.
pub(crate) fn validate_request(request: &GenerationRequest) -> MeshResult<()> {
    if let Err(err) = request.validate() {
        warn!(shape = %request.shape, error = %err, "rejected generation request");
        return Err(err);
    }
    Ok(())
}

/// Fails when `plan` would produce more vertices than allowed.
pub(crate) fn check_vertex_limit(plan: &SweepPlan, config: &GenerationConfig) -> MeshResult<()> {
    let count = plan.vertex_count();
    if count > config.max_vertices {
        warn!(count, max = config.max_vertices, "vertex limit exceeded");
        return Err(MeshError::TooManyVertices {
            count,
            max: config.max_vertices,
        });
    }
    Ok(())
}
