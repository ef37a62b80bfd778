// Subprocess runner implementation
// tokio for async process management

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::info;

use pybridge_core::domain::{ExecutionRequest, ExecutionResult};
use pybridge_core::port::script_runner::{ExecutionError, ScriptRunner};
use pybridge_core::port::{Clock, SystemClock};

/// Subprocess runner
///
/// Spawns one isolated child per request with both output streams piped,
/// drains them to end-of-stream, and reports the child's real exit code.
pub struct SubprocessRunner {
    clock: Arc<dyn Clock>,
}

impl SubprocessRunner {
    /// Create a new subprocess runner
    ///
    /// # Arguments
    /// * `clock` - Clock for duration tracking
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The program must reference an existing, executable regular file
    /// before any process is created.
    async fn check_program(program: &Path) -> Result<(), ExecutionError> {
        let meta = tokio::fs::metadata(program).await.map_err(|e| {
            ExecutionError::SpawnFailed(format!("{}: {}", program.display(), e))
        })?;

        if !meta.is_file() {
            return Err(ExecutionError::SpawnFailed(format!(
                "{}: not a regular file",
                program.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if meta.permissions().mode() & 0o111 == 0 {
                return Err(ExecutionError::SpawnFailed(format!(
                    "{}: permission denied (no execute bit)",
                    program.display()
                )));
            }
        }

        Ok(())
    }

    /// Spawn the child and collect its output.
    ///
    /// `wait_with_output` reads stdout and stderr to EOF concurrently before
    /// reaping the child. Waiting must never precede the drain: a child
    /// filling one pipe while the parent blocks on exit deadlocks both sides.
    async fn spawn_and_wait(
        &self,
        request: &ExecutionRequest,
    ) -> Result<std::process::Output, ExecutionError> {
        let child = Command::new(&request.program)
            .args(&request.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExecutionError::SpawnFailed(e.to_string()))?;

        match request.timeout_ms {
            Some(ms) => match timeout(Duration::from_millis(ms), child.wait_with_output()).await {
                Ok(Ok(output)) => Ok(output),
                Ok(Err(e)) => Err(ExecutionError::IoError(e.to_string())),
                // Dropping the wait future kills the child (kill_on_drop)
                // and releases its pipe handles
                Err(_) => Err(ExecutionError::Timeout(ms)),
            },
            None => child
                .wait_with_output()
                .await
                .map_err(|e| ExecutionError::IoError(e.to_string())),
        }
    }

    /// Build execution result from fully drained process output
    fn build_result(output: std::process::Output, duration_ms: i64) -> ExecutionResult {
        ExecutionResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration_ms,
        }
    }
}

impl Default for SubprocessRunner {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[async_trait]
impl ScriptRunner for SubprocessRunner {
    async fn run(&self, request: &ExecutionRequest) -> Result<ExecutionResult, ExecutionError> {
        Self::check_program(&request.program).await?;

        let start_time = self.clock.now_millis();

        info!(
            program = %request.program.display(),
            args = ?request.args,
            timeout_ms = ?request.timeout_ms,
            "Starting subprocess"
        );

        let output = self.spawn_and_wait(request).await?;

        let duration_ms = self.clock.now_millis() - start_time;
        let result = Self::build_result(output, duration_ms);

        info!(
            program = %request.program.display(),
            duration_ms = %duration_ms,
            exit_code = ?result.exit_code,
            "Subprocess finished"
        );

        Ok(result)
    }
}
