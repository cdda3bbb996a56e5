use super::{BuildStep, Computer, ComputerBuilder};
use crate::progress::{BuildEvent, BuildObserver};
use tracing::{debug, info};

/// Order in which the director invokes steps, independent of the builder
pub const CONSTRUCTION_SEQUENCE: [BuildStep; 4] = [
    BuildStep::Cpu,
    BuildStep::Gpu,
    BuildStep::Storage,
    BuildStep::Ram,
];

pub struct Director {
    observer: Option<Box<dyn BuildObserver>>,
}

impl Director {
    pub fn new(observer: Option<Box<dyn BuildObserver>>) -> Self {
        Self { observer }
    }

    pub fn steps(&self) -> &'static [BuildStep] {
        &CONSTRUCTION_SEQUENCE
    }

    /// Invokes every step of [`CONSTRUCTION_SEQUENCE`] on `builder`, unconditionally,
    /// and returns a copy of the resulting computer.
    pub fn construct(&self, builder: &mut dyn ComputerBuilder) -> Computer {
        let name = builder.name().to_string();
        info!(builder = %name, "Constructing computer");
        self.notify(&BuildEvent::Started {
            builder: name.clone(),
        });

        for (index, step) in CONSTRUCTION_SEQUENCE.iter().enumerate() {
            builder.apply(*step);
            self.notify(&BuildEvent::StepApplied {
                builder: name.clone(),
                step: *step,
                index,
            });
            debug!(builder = %name, step = %step, "Step complete");
        }

        let computer = builder.computer().clone();
        let unpopulated = computer.unpopulated();
        if !unpopulated.is_empty() {
            debug!(builder = %name, unpopulated = ?unpopulated, "Builder left fields empty");
        }

        self.notify(&BuildEvent::Completed {
            builder: name,
            state: builder.state(),
            unpopulated,
        });

        computer
    }

    fn notify(&self, event: &BuildEvent) {
        if let Some(observer) = &self.observer {
            observer.on_event(event);
        }
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::builder::{BuildState, BudgetBuilder, GamingBuilder, OfficeBuilder};
    use crate::progress::LoggingObserver;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingObserver {
        steps: Arc<Mutex<Vec<BuildStep>>>,
    }

    impl BuildObserver for RecordingObserver {
        fn on_event(&self, event: &BuildEvent) {
            if let BuildEvent::StepApplied { step, .. } = event {
                self.steps.lock().unwrap().push(*step);
            }
        }
    }

    #[test]
    fn test_director_creation() {
        let director = Director::new(None);
        assert!(director.observer.is_none());
        assert_eq!(director.steps(), &CONSTRUCTION_SEQUENCE);
    }

    #[test]
    fn test_director_with_observer() {
        let director = Director::new(Some(Box::new(LoggingObserver)));
        assert!(director.observer.is_some());
    }

    #[test]
    fn test_step_order_is_independent_of_builder() {
        let builders: Vec<Box<dyn ComputerBuilder>> = vec![
            Box::new(GamingBuilder::default()),
            Box::new(OfficeBuilder::default()),
            Box::new(BudgetBuilder::default()),
        ];

        for mut builder in builders {
            let steps = Arc::new(Mutex::new(Vec::new()));
            let director = Director::new(Some(Box::new(RecordingObserver {
                steps: steps.clone(),
            })));
            director.construct(builder.as_mut());

            assert_eq!(*steps.lock().unwrap(), CONSTRUCTION_SEQUENCE.to_vec());
            assert_eq!(builder.state(), BuildState::Complete);
        }
    }

    #[test]
    fn test_partial_builder_completes_with_empty_fields() {
        let mut builder = BudgetBuilder::default();
        let computer = Director::default().construct(&mut builder);

        assert_eq!(computer.cpu, "Intel Core i3");
        assert_eq!(computer.ram, "8GB DDR4");
        assert_eq!(computer.gpu, "");
        assert_eq!(computer.storage, "");
        assert_eq!(builder.state(), BuildState::Complete);
    }
}
