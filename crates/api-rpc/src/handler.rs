//! RPC Method Handlers
//!
//! Implements the business logic for each JSON-RPC method.

use crate::error::to_rpc_error;
use crate::types::{
    ExecuteScriptRequest, ExecuteScriptResponse, PlatformVersionResponse, ResourcePathResponse,
    RuntimeStatusResponse,
};
use jsonrpsee::types::ErrorObjectOwned;
use pybridge_core::application::{RuntimeService, RuntimeStatus, ScriptService};
use pybridge_core::error::AppError;
use pybridge_core::port::PlatformInfo;
use std::sync::Arc;
use tokio::sync::RwLock;

/// RPC Handler with injected dependencies
///
/// Holds the outcome of the most recent setup probe so `runtime.status.v1`
/// can report it; the core services themselves stay stateless.
pub struct RpcHandler {
    runtime: Arc<RuntimeService>,
    scripts: Arc<ScriptService>,
    platform: Arc<dyn PlatformInfo>,
    last_setup: RwLock<Option<RuntimeStatus>>,
}

impl RpcHandler {
    pub fn new(
        runtime: Arc<RuntimeService>,
        scripts: Arc<ScriptService>,
        platform: Arc<dyn PlatformInfo>,
    ) -> Self {
        Self {
            runtime,
            scripts,
            platform,
            last_setup: RwLock::new(None),
        }
    }

    /// platform.version.v1
    pub fn platform_version(&self) -> Result<PlatformVersionResponse, ErrorObjectOwned> {
        let info = self.platform.os_version();
        Ok(PlatformVersionResponse {
            os: info.name,
            version: info.version,
            description: info.description,
        })
    }

    /// runtime.setup.v1
    pub async fn setup(&self) -> Result<RuntimeStatusResponse, ErrorObjectOwned> {
        let status = self.runtime.setup();
        let response = status_response(&status);
        *self.last_setup.write().await = Some(status);
        Ok(response)
    }

    /// runtime.status.v1
    ///
    /// Reports the prior setup outcome; unavailable before any setup call.
    pub async fn status(&self) -> Result<RuntimeStatusResponse, ErrorObjectOwned> {
        match self.last_setup.read().await.as_ref() {
            Some(status) => Ok(status_response(status)),
            None => Ok(status_response(&RuntimeStatus::unavailable())),
        }
    }

    /// runtime.resource_path.v1
    pub fn resource_path(&self) -> Result<ResourcePathResponse, ErrorObjectOwned> {
        Ok(ResourcePathResponse {
            path: self
                .runtime
                .resource_path()
                .map(|p| p.display().to_string()),
        })
    }

    /// script.execute.v1
    pub async fn execute_script(
        &self,
        params: ExecuteScriptRequest,
    ) -> Result<ExecuteScriptResponse, ErrorObjectOwned> {
        if params.script_path.is_empty() {
            return Err(to_rpc_error(AppError::Validation(
                "script_path must not be empty".to_string(),
            )));
        }

        let result = self
            .scripts
            .execute(&params.script_path, &params.args, params.timeout_ms)
            .await
            .map_err(to_rpc_error)?;

        Ok(ExecuteScriptResponse {
            status: result.status(),
            output: result.stdout,
            error: result.stderr,
            duration_ms: result.duration_ms,
        })
    }
}

fn status_response(status: &RuntimeStatus) -> RuntimeStatusResponse {
    RuntimeStatusResponse {
        available: status.available,
        interpreter: status
            .interpreter
            .as_ref()
            .map(|p| p.display().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use pybridge_core::application::RuntimeConfig;
    use pybridge_core::port::platform_info::mocks::MockPlatformInfo;
    use pybridge_core::port::runtime_probe::mocks::MockRuntimeProbe;
    use pybridge_core::port::script_runner::mocks::MockScriptRunner;

    fn handler(existing: &[&str], runner: Arc<MockScriptRunner>) -> RpcHandler {
        let probe = Arc::new(MockRuntimeProbe::new(existing.iter().copied()));
        let runtime = Arc::new(RuntimeService::new(probe, RuntimeConfig::default()));
        let scripts = Arc::new(ScriptService::new(runner, runtime.clone()));
        let platform = Arc::new(MockPlatformInfo::new("macOS", "14.5"));
        RpcHandler::new(runtime, scripts, platform)
    }

    #[tokio::test]
    async fn test_status_before_setup_is_unavailable() {
        let h = handler(
            &["/usr/bin/python3"],
            Arc::new(MockScriptRunner::new_success("")),
        );

        let status = h.status().await.unwrap();
        assert!(!status.available);
        assert!(status.interpreter.is_none());
    }

    #[tokio::test]
    async fn test_setup_then_status_reports_outcome() {
        let h = handler(
            &["/usr/bin/python3"],
            Arc::new(MockScriptRunner::new_success("")),
        );

        let setup = h.setup().await.unwrap();
        assert!(setup.available);
        assert_eq!(setup.interpreter.as_deref(), Some("/usr/bin/python3"));

        let status = h.status().await.unwrap();
        assert!(status.available);
        assert_eq!(status.interpreter.as_deref(), Some("/usr/bin/python3"));
    }

    #[tokio::test]
    async fn test_resource_path_unavailable_is_none_not_error() {
        let h = handler(&[], Arc::new(MockScriptRunner::new_success("")));

        let resource = h.resource_path().unwrap();
        assert!(resource.path.is_none());
    }

    #[tokio::test]
    async fn test_execute_script_maps_result() {
        let runner = Arc::new(MockScriptRunner::new_success("hello\n"));
        let h = handler(&["/usr/bin/python3"], runner);

        let response = h
            .execute_script(ExecuteScriptRequest {
                script_path: "hello.py".to_string(),
                args: vec![],
                timeout_ms: None,
            })
            .await
            .unwrap();

        assert_eq!(response.status, 0);
        assert_eq!(response.output, "hello\n");
        assert_eq!(response.error, "");
    }

    #[tokio::test]
    async fn test_execute_script_empty_path_is_validation_error() {
        let runner = Arc::new(MockScriptRunner::new_success(""));
        let h = handler(&["/usr/bin/python3"], runner.clone());

        let err = h
            .execute_script(ExecuteScriptRequest {
                script_path: String::new(),
                args: vec![],
                timeout_ms: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), code::VALIDATION_ERROR);
        assert_eq!(runner.call_count(), 0);
    }

    #[tokio::test]
    async fn test_execute_script_without_runtime_is_system_error() {
        let runner = Arc::new(MockScriptRunner::new_success(""));
        let h = handler(&[], runner);

        let err = h
            .execute_script(ExecuteScriptRequest {
                script_path: "hello.py".to_string(),
                args: vec![],
                timeout_ms: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), code::SYSTEM_ERROR);
    }

    #[tokio::test]
    async fn test_platform_version() {
        let h = handler(&[], Arc::new(MockScriptRunner::new_success("")));
        let v = h.platform_version().unwrap();

        assert_eq!(v.os, "macOS");
        assert_eq!(v.version, "14.5");
        assert_eq!(v.description, "macOS 14.5");
    }
}
