// Domain Layer - Pure value types, no infrastructure

pub mod execution;

// Re-exports
pub use execution::{ExecutionRequest, ExecutionResult};
