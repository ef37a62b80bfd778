// Script Runner Port
// Abstraction for launching a child process and collecting its full output

use crate::domain::{ExecutionRequest, ExecutionResult};
use async_trait::async_trait;
use thiserror::Error;

/// Execution errors
///
/// A non-zero exit code is NOT in this taxonomy: it is reported inside
/// `ExecutionResult` as ordinary data for the caller to interpret.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Process timeout after {0}ms")]
    Timeout(u64),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Script Runner trait
///
/// Implementations:
/// - SubprocessRunner: spawns an external process with piped output
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Launch `request.program` with `request.args`, drain both output
    /// streams to end-of-stream, wait for termination, and return the
    /// structured result.
    ///
    /// # Errors
    /// - `ExecutionError::SpawnFailed` if the program is missing, not
    ///   executable, or the OS refuses to create the process
    /// - `ExecutionError::Timeout` if `request.timeout_ms` elapses first
    async fn run(&self, request: &ExecutionRequest) -> Result<ExecutionResult, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Succeed with the given exit code and streams
        Exit(i32, String, String),
        /// Fail with a spawn error
        SpawnFail(String),
        /// Fail with a timeout
        Timeout(u64),
    }

    /// Mock Script Runner for testing
    pub struct MockScriptRunner {
        behavior: Arc<Mutex<MockBehavior>>,
        calls: Arc<Mutex<Vec<ExecutionRequest>>>,
    }

    impl MockScriptRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn new_success(stdout: impl Into<String>) -> Self {
            Self::new(MockBehavior::Exit(0, stdout.into(), String::new()))
        }

        pub fn new_spawn_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::SpawnFail(message.into()))
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// Requests seen so far, in call order
        pub fn recorded_requests(&self) -> Vec<ExecutionRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ScriptRunner for MockScriptRunner {
        async fn run(
            &self,
            request: &ExecutionRequest,
        ) -> Result<ExecutionResult, ExecutionError> {
            self.calls.lock().unwrap().push(request.clone());

            let behavior = self.behavior.lock().unwrap().clone();
            match behavior {
                MockBehavior::Exit(code, stdout, stderr) => Ok(ExecutionResult {
                    exit_code: Some(code),
                    stdout,
                    stderr,
                    duration_ms: 1,
                }),
                MockBehavior::SpawnFail(msg) => Err(ExecutionError::SpawnFailed(msg)),
                MockBehavior::Timeout(ms) => Err(ExecutionError::Timeout(ms)),
            }
        }
    }
}
