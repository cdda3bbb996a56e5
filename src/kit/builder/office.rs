use super::{BuildSession, BuildStep, ComputerBuilder};

#[derive(Debug, Default)]
pub struct OfficeBuilder {
    session: BuildSession,
}

impl ComputerBuilder for OfficeBuilder {
    fn name(&self) -> &str {
        "Office"
    }

    fn session(&self) -> &BuildSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut BuildSession {
        &mut self.session
    }

    fn build_cpu(&mut self) {
        self.session.set(BuildStep::Cpu, "Intel Core i5");
    }

    fn build_gpu(&mut self) {
        self.session.set(BuildStep::Gpu, "Integrated Graphics");
    }

    fn build_storage(&mut self) {
        self.session.set(BuildStep::Storage, "512GB SSD");
    }

    fn build_ram(&mut self) {
        self.session.set(BuildStep::Ram, "16GB DDR4");
    }
}
