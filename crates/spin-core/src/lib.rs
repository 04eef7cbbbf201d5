pub mod angle;
pub mod config;
pub mod constants;
pub mod estimator;
pub mod readout;
pub mod scheduler;
pub mod session;

pub use angle::*;
pub use config::*;
pub use constants::*;
pub use estimator::*;
pub use readout::*;
pub use scheduler::*;
pub use session::*;

// Re-exported so hosts can build samples without naming glam themselves.
pub use glam::DVec2;
