//! # Growth Schedule
//!
//! Frame-by-frame partial generation of a piece, as the printer shows it
//! being built. The engine has no timers: each frame carries the delay at
//! which the host should display it.

use crate::builder::build;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::profile::Profile;
use crate::request::GenerationRequest;
use crate::sweep::{sample, SweepKind};
use crate::{check_vertex_limit, validate_request};
use config::constants::{GenerationConfig, DEFAULT_GROWTH_STEPS, GROWTH_FRAME_INTERVAL_MS};
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::debug;

/// Number of frames and spacing between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthSchedule {
    steps: u32,
    interval: Duration,
}

impl Default for GrowthSchedule {
    fn default() -> Self {
        Self {
            steps: DEFAULT_GROWTH_STEPS,
            interval: Duration::from_millis(GROWTH_FRAME_INTERVAL_MS),
        }
    }
}

impl GrowthSchedule {
    /// Creates a schedule of `steps` frames spaced `interval` apart.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] when `steps` is zero.
    pub fn new(steps: u32, interval: Duration) -> MeshResult<Self> {
        if steps == 0 {
            return Err(MeshError::invalid_parameter(
                "steps",
                "growth needs at least one frame",
            ));
        }
        Ok(Self { steps, interval })
    }

    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total time from the first call to the complete piece, saturating at
    /// [`Duration::MAX`].
    pub fn duration(&self) -> Duration {
        self.interval.saturating_mul(self.steps)
    }

    /// Iterates frames `1..=steps`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use printer_mesh::GrowthSchedule;
    /// use std::time::Duration;
    ///
    /// let schedule = GrowthSchedule::new(4, Duration::from_millis(50)).unwrap();
    /// let frames: Vec<_> = schedule.frames().collect();
    /// assert_eq!(frames.len(), 4);
    /// assert_eq!(frames[1].progress, 0.5);
    /// assert_eq!(frames[3].delay, Duration::from_millis(200));
    /// ```
    pub fn frames(&self) -> Frames {
        Frames {
            schedule: *self,
            indices: 1..=self.steps,
        }
    }
}

/// One step of a growth animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthFrame {
    /// Frame number, starting at 1
    pub index: u32,
    /// `index / steps`
    pub progress: f64,
    /// `index * interval`
    pub delay: Duration,
}

/// Iterator over the frames of a [`GrowthSchedule`].
#[derive(Debug, Clone)]
pub struct Frames {
    schedule: GrowthSchedule,
    indices: RangeInclusive<u32>,
}

impl Iterator for Frames {
    type Item = GrowthFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        Some(GrowthFrame {
            index,
            progress: f64::from(index) / f64::from(self.schedule.steps),
            delay: self.schedule.interval.saturating_mul(index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for Frames {}

/// Lazily generated meshes of a growing piece.
///
/// The profile is built once; every frame re-samples it at the frame's
/// progress.
#[derive(Debug, Clone)]
pub struct Growth {
    request: GenerationRequest,
    config: GenerationConfig,
    kind: SweepKind,
    profile: Profile,
    frames: Frames,
}

impl Iterator for Growth {
    type Item = (GrowthFrame, Mesh);

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frames.next()?;
        let request = &self.request;
        let plan = self.kind.plan(
            request.resolution,
            request.height,
            request.theta,
            frame.progress,
            &self.config,
        );
        let mesh = build(&sample(&self.profile, &plan), self.kind);
        Some((frame, mesh))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}

impl ExactSizeIterator for Growth {}

/// Grows `request`'s piece over `schedule` with the default configuration.
///
/// The request's own `progress` is ignored.
///
/// # Errors
///
/// Fails before yielding anything if the request is invalid or the
/// complete piece exceeds the vertex limit.
pub fn grow(request: &GenerationRequest, schedule: &GrowthSchedule) -> MeshResult<Growth> {
    grow_with_config(request, schedule, &GenerationConfig::default())
}

/// Grows `request`'s piece over `schedule` with custom settings.
pub fn grow_with_config(
    request: &GenerationRequest,
    schedule: &GrowthSchedule,
    config: &GenerationConfig,
) -> MeshResult<Growth> {
    let request = request.with_progress(1.0);
    validate_request(&request)?;

    let descriptor = request.shape.descriptor();
    let kind = descriptor.sweep;

    // The complete piece is the largest frame
    let full = kind.plan(
        request.resolution,
        request.height,
        request.theta,
        1.0,
        config,
    );
    check_vertex_limit(&full, config)?;

    debug!(
        shape = %request.shape,
        steps = schedule.steps,
        interval_ms = schedule.interval.as_millis() as u64,
        "starting growth"
    );

    Ok(Growth {
        request,
        config: *config,
        kind,
        profile: descriptor.build_profile(request.width, request.height),
        frames: schedule.frames(),
    })
}
