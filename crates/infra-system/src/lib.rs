// PyBridge Infrastructure - System Adapters
// Implements: ScriptRunner, RuntimeProbe, PlatformInfo

pub mod fs_probe;
pub mod platform_info_impl;
pub mod subprocess_runner;

pub use fs_probe::FsRuntimeProbe;
pub use platform_info_impl::PlatformInfoImpl;
pub use subprocess_runner::SubprocessRunner;
