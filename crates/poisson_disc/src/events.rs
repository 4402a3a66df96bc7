//! Event types and sinks for observing sampling runs.
//!
//! This module defines [`SamplerEvent`] and a set of sinks to collect or
//! forward events while executing
//! [`crate::sampler::PoissonDiscSampler::run_with_events`].
use glam::Vec2;

use crate::config::SamplerConfig;
use crate::grid::PointId;
use crate::sampler::SampleStats;

/// Describes events emitted by a sampling run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SamplerEvent {
    /// Emitted once, before the seed is placed.
    RunStarted {
        /// The validated configuration.
        config: SamplerConfig,
        /// Grid columns.
        grid_width: usize,
        /// Grid rows.
        grid_height: usize,
    },

    /// Emitted when the seed point enters grid, frontier and output.
    SeedPlaced {
        /// Handle of the seed (always the first slot).
        id: PointId,
        /// Seed position.
        point: Vec2,
    },

    /// Emitted when a candidate around `base` was accepted.
    CandidateAccepted {
        /// Handle assigned to the new point.
        id: PointId,
        /// Frontier point the candidate was spawned from.
        base: PointId,
        /// Accepted position.
        point: Vec2,
        /// Candidates drawn before this one succeeded, inclusive.
        attempts: usize,
    },

    /// Emitted when a base exhausted its attempts and left the frontier.
    BaseRetired {
        /// Handle of the retired point.
        id: PointId,
        /// Frontier entries remaining after removal.
        remaining: usize,
    },

    /// Emitted once the frontier is empty.
    RunFinished {
        /// Counters for the whole run.
        stats: SampleStats,
    },
}

impl SamplerEvent {
    pub fn kind(&self) -> SamplerEventKind {
        match self {
            SamplerEvent::RunStarted { .. } => SamplerEventKind::RunStarted,
            SamplerEvent::SeedPlaced { .. } => SamplerEventKind::SeedPlaced,
            SamplerEvent::CandidateAccepted { .. } => SamplerEventKind::CandidateAccepted,
            SamplerEvent::BaseRetired { .. } => SamplerEventKind::BaseRetired,
            SamplerEvent::RunFinished { .. } => SamplerEventKind::RunFinished,
        }
    }
}

/// Discriminant of [`SamplerEvent`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerEventKind {
    RunStarted,
    SeedPlaced,
    CandidateAccepted,
    BaseRetired,
    RunFinished,
}

/// A generic event sink that accepts [`SamplerEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SamplerEvent);

    /// Whether events of `kind` should be constructed and sent at all.
    #[inline]
    fn wants(&self, _kind: SamplerEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SamplerEvent) {}

    #[inline]
    fn wants(&self, _kind: SamplerEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SamplerEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SamplerEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SamplerEvent),
{
    #[inline]
    fn send(&mut self, event: SamplerEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SamplerEvent>,
    only: Option<Vec<SamplerEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Collects only events whose kind is listed.
    pub fn only(kinds: impl IntoIterator<Item = SamplerEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<SamplerEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SamplerEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of collected events of the given kind.
    pub fn count(&self, kind: SamplerEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SamplerEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: SamplerEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}
