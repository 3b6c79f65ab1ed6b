//! # Batch Generation
//!
//! Generates many independent pieces at once. With the `parallel` feature
//! the requests are spread over the rayon thread pool; results keep the
//! order of the requests either way.

use crate::error::MeshResult;
use crate::generate_mesh_with_config;
use crate::mesh::Mesh;
use crate::request::GenerationRequest;
use config::constants::GenerationConfig;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Generates every request with the default configuration.
///
/// A failing request does not affect the others.
pub fn generate_batch(requests: &[GenerationRequest]) -> Vec<MeshResult<Mesh>> {
    generate_batch_with_config(requests, &GenerationConfig::default())
}

/// Generates every request with custom settings.
#[cfg(feature = "parallel")]
pub fn generate_batch_with_config(
    requests: &[GenerationRequest],
    config: &GenerationConfig,
) -> Vec<MeshResult<Mesh>> {
    requests
        .par_iter()
        .map(|request| generate_mesh_with_config(request, config))
        .collect()
}

/// Generates every request with custom settings.
#[cfg(not(feature = "parallel"))]
pub fn generate_batch_with_config(
    requests: &[GenerationRequest],
    config: &GenerationConfig,
) -> Vec<MeshResult<Mesh>> {
    requests
        .iter()
        .map(|request| generate_mesh_with_config(request, config))
        .collect()
}
