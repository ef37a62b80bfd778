// Port Layer - Interfaces for external dependencies

pub mod clock;
pub mod platform_info;
pub mod runtime_probe;
pub mod script_runner;

// Re-exports
pub use clock::{Clock, SystemClock};
pub use platform_info::{OsVersion, PlatformInfo};
pub use runtime_probe::RuntimeProbe;
pub use script_runner::{ExecutionError, ScriptRunner};
