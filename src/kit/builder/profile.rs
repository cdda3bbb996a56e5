//! Builders defined by data instead of code
//!
//! A profile names the value for each step it defines. Fields left out of the
//! profile are no-op steps, exactly like a coded builder that doesn't override
//! a step.

use super::{BuildSession, BuildStep, ComputerBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildProfile {
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
}

impl BuildProfile {
    pub fn value(&self, step: BuildStep) -> Option<&str> {
        match step {
            BuildStep::Cpu => self.cpu.as_deref(),
            BuildStep::Gpu => self.gpu.as_deref(),
            BuildStep::Storage => self.storage.as_deref(),
            BuildStep::Ram => self.ram.as_deref(),
        }
    }
}

#[derive(Debug)]
pub struct ProfileBuilder {
    name: String,
    profile: BuildProfile,
    session: BuildSession,
}

impl ProfileBuilder {
    pub fn new(name: impl Into<String>, profile: BuildProfile) -> Self {
        Self {
            name: name.into(),
            profile,
            session: BuildSession::new(),
        }
    }

    fn populate(&mut self, step: BuildStep) {
        if let Some(value) = self.profile.value(step) {
            let value = value.to_string();
            self.session.set(step, value);
        }
    }
}

impl ComputerBuilder for ProfileBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn session(&self) -> &BuildSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut BuildSession {
        &mut self.session
    }

    fn build_cpu(&mut self) {
        self.populate(BuildStep::Cpu);
    }

    fn build_gpu(&mut self) {
        self.populate(BuildStep::Gpu);
    }

    fn build_storage(&mut self) {
        self.populate(BuildStep::Storage);
    }

    fn build_ram(&mut self) {
        self.populate(BuildStep::Ram);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_toml() {
        let profile: BuildProfile = toml::from_str(
            r#"
            cpu = "AMD Ryzen 9"
            ram = "64 GB DDR5"
            "#,
        )
        .unwrap();

        assert_eq!(profile.value(BuildStep::Cpu), Some("AMD Ryzen 9"));
        assert_eq!(profile.value(BuildStep::Gpu), None);
    }

    #[test]
    fn test_profile_rejects_unknown_fields() {
        let result: Result<BuildProfile, _> = toml::from_str(r#"psu = "750W""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_fields_are_no_ops() {
        let profile = BuildProfile {
            cpu: Some("AMD Ryzen 9".to_string()),
            ..Default::default()
        };
        let mut builder = ProfileBuilder::new("Workstation", profile);
        for step in BuildStep::all_variants() {
            builder.apply(*step);
        }

        assert_eq!(builder.name(), "Workstation");
        assert_eq!(builder.computer().cpu, "AMD Ryzen 9");
        assert_eq!(builder.computer().gpu, "");
        assert_eq!(builder.computer().storage, "");
    }
}
