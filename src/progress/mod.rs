//! Progress reporting for step-wise construction

mod handler;
mod logging;

pub use handler::{BuildEvent, BuildObserver, NoOpObserver};
pub use logging::LoggingObserver;
