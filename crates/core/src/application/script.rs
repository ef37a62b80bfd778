// Script execution use case: locate an interpreter, run the script, return
// the full captured outcome

use crate::application::RuntimeService;
use crate::domain::{ExecutionRequest, ExecutionResult};
use crate::error::{AppError, Result};
use crate::port::{ExecutionError, ScriptRunner};
use std::sync::Arc;
use tracing::info;

/// Script execution service
///
/// A script path that does not exist is passed through to the interpreter,
/// which reports its own non-zero exit; only the spawn itself can fail here.
pub struct ScriptService {
    runner: Arc<dyn ScriptRunner>,
    runtime: Arc<RuntimeService>,
}

impl ScriptService {
    pub fn new(runner: Arc<dyn ScriptRunner>, runtime: Arc<RuntimeService>) -> Self {
        Self { runner, runtime }
    }

    /// Execute `script_path` with the located Python interpreter.
    ///
    /// # Errors
    /// - `AppError::Execution(SpawnFailed)` when no interpreter exists among
    ///   the candidate paths, or the OS refuses to spawn
    /// - `AppError::Execution(Timeout)` when `timeout_ms` elapses first
    pub async fn execute(
        &self,
        script_path: &str,
        args: &[String],
        timeout_ms: Option<u64>,
    ) -> Result<ExecutionResult> {
        let interpreter = self.runtime.locate_interpreter().ok_or_else(|| {
            AppError::Execution(ExecutionError::SpawnFailed(
                "no Python interpreter found among candidate paths".to_string(),
            ))
        })?;

        let mut request = ExecutionRequest::new(interpreter)
            .arg(script_path)
            .args(args.iter().cloned());
        request.timeout_ms = timeout_ms;

        info!(
            script = %script_path,
            interpreter = %request.program.display(),
            "Executing script"
        );

        let result = self.runner.run(&request).await?;

        info!(
            script = %script_path,
            exit_code = ?result.exit_code,
            duration_ms = %result.duration_ms,
            "Script execution finished"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RuntimeConfig;
    use crate::port::runtime_probe::mocks::MockRuntimeProbe;
    use crate::port::script_runner::mocks::{MockBehavior, MockScriptRunner};
    use std::path::PathBuf;

    fn runtime_with_interpreter() -> Arc<RuntimeService> {
        let probe = Arc::new(MockRuntimeProbe::new(["/usr/bin/python3"]));
        Arc::new(RuntimeService::new(probe, RuntimeConfig::default()))
    }

    fn runtime_without_interpreter() -> Arc<RuntimeService> {
        let probe = Arc::new(MockRuntimeProbe::empty());
        Arc::new(RuntimeService::new(probe, RuntimeConfig::default()))
    }

    #[tokio::test]
    async fn test_execute_builds_interpreter_request() {
        let runner = Arc::new(MockScriptRunner::new_success("hello\n"));
        let service = ScriptService::new(runner.clone(), runtime_with_interpreter());

        let result = service
            .execute("hello.py", &["--verbose".to_string()], None)
            .await
            .unwrap();

        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout, "hello\n");

        let requests = runner.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].program, PathBuf::from("/usr/bin/python3"));
        assert_eq!(requests[0].args, vec!["hello.py", "--verbose"]);
    }

    #[tokio::test]
    async fn test_execute_without_interpreter_is_spawn_failure() {
        let runner = Arc::new(MockScriptRunner::new_success(""));
        let service = ScriptService::new(runner.clone(), runtime_without_interpreter());

        let err = service.execute("hello.py", &[], None).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Execution(ExecutionError::SpawnFailed(_))
        ));
        // Never reached the runner
        assert_eq!(runner.call_count(), 0);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_not_an_error() {
        let runner = Arc::new(MockScriptRunner::new(MockBehavior::Exit(
            2,
            String::new(),
            "traceback".to_string(),
        )));
        let service = ScriptService::new(runner, runtime_with_interpreter());

        let result = service.execute("broken.py", &[], None).await.unwrap();
        assert_eq!(result.exit_code, Some(2));
        assert_eq!(result.stderr, "traceback");
    }

    #[tokio::test]
    async fn test_spawn_failure_propagates() {
        let runner = Arc::new(MockScriptRunner::new_spawn_fail("permission denied"));
        let service = ScriptService::new(runner, runtime_with_interpreter());

        let err = service.execute("hello.py", &[], None).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Execution(ExecutionError::SpawnFailed(_))
        ));
    }
}
