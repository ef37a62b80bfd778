// Application Layer - Use Cases over the Ports

pub mod runtime;
pub mod script;

// Re-exports
pub use runtime::{RuntimeConfig, RuntimeService, RuntimeStatus};
pub use script::ScriptService;
