//! Logging-based build observer

use super::{BuildEvent, BuildObserver};
use tracing::{debug, info};

/// Observer that logs build events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl BuildObserver for LoggingObserver {
    fn on_event(&self, event: &BuildEvent) {
        match event {
            BuildEvent::Started { builder } => {
                info!(builder = %builder, "Starting construction");
            }
            BuildEvent::StepApplied {
                builder,
                step,
                index,
            } => {
                debug!(builder = %builder, step = %step, index, "Step applied");
            }
            BuildEvent::Completed {
                builder,
                state,
                unpopulated,
            } => {
                if unpopulated.is_empty() {
                    info!(builder = %builder, state = ?state, "Construction complete");
                } else {
                    info!(
                        builder = %builder,
                        state = ?state,
                        unpopulated = ?unpopulated,
                        "Construction complete, builder skipped some steps"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::builder::{BuildState, BuildStep};

    #[test]
    fn test_logging_observer_handles_all_events() {
        let observer = LoggingObserver;
        observer.on_event(&BuildEvent::Started {
            builder: "Gaming".to_string(),
        });
        observer.on_event(&BuildEvent::StepApplied {
            builder: "Gaming".to_string(),
            step: BuildStep::Ram,
            index: 3,
        });
        observer.on_event(&BuildEvent::Completed {
            builder: "Gaming".to_string(),
            state: BuildState::Complete,
            unpopulated: vec![BuildStep::Gpu, BuildStep::Storage],
        });
    }
}
