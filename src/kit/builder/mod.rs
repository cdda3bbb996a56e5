//! Step-wise computer construction
//!
//! A [`ComputerBuilder`] owns a [`BuildSession`] for one construction. Each step
//! sets exactly one field of the [`Computer`]; a builder that doesn't override
//! a step leaves that field empty. The [`Director`] drives every builder
//! through the same fixed sequence.
//!
//! # Example
//!
//! ```
//! use kitbox::kit::builder::{Director, GamingBuilder, BuildState, ComputerBuilder};
//!
//! let mut builder = GamingBuilder::default();
//! let computer = Director::new(None).construct(&mut builder);
//!
//! assert_eq!(computer.cpu, "Intel Core i9");
//! assert_eq!(builder.state(), BuildState::Complete);
//! ```

use serde::{Deserialize, Serialize};

crate::define_id_enum! {
    /// A single construction step; each one populates one `Computer` field
    BuildStep {
        Cpu => "cpu" | "CPU",
        Gpu => "gpu" | "GPU",
        Storage => "storage",
        Ram => "ram" | "RAM",
    }
}

/// The assembled product. Fields start empty and are filled by build steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    pub storage: String,
}

impl Computer {
    /// Overwrites the field owned by `step`; the last write wins
    pub fn set(&mut self, step: BuildStep, value: impl Into<String>) {
        let value = value.into();
        match step {
            BuildStep::Cpu => self.cpu = value,
            BuildStep::Gpu => self.gpu = value,
            BuildStep::Storage => self.storage = value,
            BuildStep::Ram => self.ram = value,
        }
    }

    pub fn get(&self, step: BuildStep) -> &str {
        match step {
            BuildStep::Cpu => &self.cpu,
            BuildStep::Gpu => &self.gpu,
            BuildStep::Storage => &self.storage,
            BuildStep::Ram => &self.ram,
        }
    }

    /// Steps whose field is still empty
    pub fn unpopulated(&self) -> Vec<BuildStep> {
        BuildStep::all_variants()
            .iter()
            .copied()
            .filter(|step| self.get(*step).is_empty())
            .collect()
    }

    pub fn describe(&self) -> String {
        format!(
            "CPU: {}\nRAM: {}\nStorage: {}\nGPU: {}",
            self.cpu, self.ram, self.storage, self.gpu
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "steps", rename_all = "snake_case")]
pub enum BuildState {
    Empty,
    PartiallyBuilt(usize),
    Complete,
}

/// Mutable record of one construction, owned by a single builder
#[derive(Debug, Clone, Default)]
pub struct BuildSession {
    computer: Computer,
    applied: Vec<BuildStep>,
}

impl BuildSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn computer(&self) -> &Computer {
        &self.computer
    }

    pub fn set(&mut self, step: BuildStep, value: impl Into<String>) {
        self.computer.set(step, value);
    }

    /// Marks `step` as invoked, whether or not the builder populated it
    pub fn record(&mut self, step: BuildStep) {
        if !self.applied.contains(&step) {
            self.applied.push(step);
        }
    }

    /// Distinct steps invoked so far, in first-invocation order
    pub fn applied(&self) -> &[BuildStep] {
        &self.applied
    }

    pub fn state(&self) -> BuildState {
        match self.applied.len() {
            0 => BuildState::Empty,
            n if n == BuildStep::all_variants().len() => BuildState::Complete,
            n => BuildState::PartiallyBuilt(n),
        }
    }

    pub fn into_computer(self) -> Computer {
        self.computer
    }
}

/// Builder contract. Every step defaults to a no-op.
pub trait ComputerBuilder: Send {
    fn name(&self) -> &str;

    fn session(&self) -> &BuildSession;

    fn session_mut(&mut self) -> &mut BuildSession;

    fn build_cpu(&mut self) {}

    fn build_gpu(&mut self) {}

    fn build_storage(&mut self) {}

    fn build_ram(&mut self) {}

    /// Runs the step and records it in the session
    fn apply(&mut self, step: BuildStep) {
        match step {
            BuildStep::Cpu => self.build_cpu(),
            BuildStep::Gpu => self.build_gpu(),
            BuildStep::Storage => self.build_storage(),
            BuildStep::Ram => self.build_ram(),
        }
        self.session_mut().record(step);
    }

    fn state(&self) -> BuildState {
        self.session().state()
    }

    /// Current product; may be partially populated before the build completes
    fn computer(&self) -> &Computer {
        self.session().computer()
    }
}

pub mod budget;
pub mod director;
pub mod gaming;
pub mod office;
pub mod profile;

pub use budget::BudgetBuilder;
pub use director::{Director, CONSTRUCTION_SEQUENCE};
pub use gaming::GamingBuilder;
pub use office::OfficeBuilder;
pub use profile::{BuildProfile, ProfileBuilder};
