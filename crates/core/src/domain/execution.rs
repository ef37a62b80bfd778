// Execution value types: one child process launch, one terminated outcome

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A request to launch one child process.
///
/// Invariant: `program` must reference an existing, executable file at the
/// moment the runner is invoked; otherwise the request fails before any
/// process is spawned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Optional upper bound on wall-clock run time. `None` means the runner
    /// waits indefinitely; bounding is the caller's call, not the runner's.
    pub timeout_ms: Option<u64>,
}

impl ExecutionRequest {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout_ms: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// Outcome of a fully terminated child process.
///
/// Constructed only after the child has exited and both output pipes have
/// been drained to end-of-stream; never partially populated. A non-zero exit
/// code is ordinary result data, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// The child's real exit code. `None` only when the child was terminated
    /// by a signal rather than exiting on its own.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: i64,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Exit code for wire reporting: the real code, or -1 for a
    /// signal-killed child.
    pub fn status(&self) -> i32 {
        self.exit_code.unwrap_or(-1)
    }
}
