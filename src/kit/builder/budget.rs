//! Entry-level builder that only defines the CPU and RAM steps.
//! GPU and storage stay empty after a full director run.

use super::{BuildSession, BuildStep, ComputerBuilder};

#[derive(Debug, Default)]
pub struct BudgetBuilder {
    session: BuildSession,
}

impl ComputerBuilder for BudgetBuilder {
    fn name(&self) -> &str {
        "Budget"
    }

    fn session(&self) -> &BuildSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut BuildSession {
        &mut self.session
    }

    fn build_cpu(&mut self) {
        self.session.set(BuildStep::Cpu, "Intel Core i3");
    }

    fn build_ram(&mut self) {
        self.session.set(BuildStep::Ram, "8GB DDR4");
    }
}
