//! Build observer trait and events

use crate::kit::builder::{BuildState, BuildStep};

/// Events emitted while a director drives a builder
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Construction started
    Started { builder: String },

    /// The director invoked one step on the builder
    StepApplied {
        builder: String,
        step: BuildStep,
        index: usize,
    },

    /// Every step in the sequence has been invoked
    Completed {
        builder: String,
        state: BuildState,
        /// Steps the builder treated as no-ops
        unpopulated: Vec<BuildStep>,
    },
}

/// Trait for observing construction progress
pub trait BuildObserver: Send + Sync {
    /// Called when a build event occurs
    fn on_event(&self, event: &BuildEvent);
}

/// Observer that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl BuildObserver for NoOpObserver {
    fn on_event(&self, _event: &BuildEvent) {}
}
