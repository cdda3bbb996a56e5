use super::{BuildSession, BuildStep, ComputerBuilder};

#[derive(Debug, Default)]
pub struct GamingBuilder {
    session: BuildSession,
}

impl ComputerBuilder for GamingBuilder {
    fn name(&self) -> &str {
        "Gaming"
    }

    fn session(&self) -> &BuildSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut BuildSession {
        &mut self.session
    }

    fn build_cpu(&mut self) {
        self.session.set(BuildStep::Cpu, "Intel Core i9");
    }

    fn build_gpu(&mut self) {
        self.session.set(BuildStep::Gpu, "NVIDIA RTX 3080");
    }

    fn build_storage(&mut self) {
        self.session.set(BuildStep::Storage, "1 TB SSD");
    }

    fn build_ram(&mut self) {
        self.session.set(BuildStep::Ram, "32 GB DDR5");
    }
}
