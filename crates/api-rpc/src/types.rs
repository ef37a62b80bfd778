//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use serde::{Deserialize, Serialize};

/// script.execute.v1 - Execute a Python script
///
/// A missing or mistyped `script_path` is rejected at parse time, before any
/// OS interaction.
#[derive(Debug, Deserialize)]
pub struct ExecuteScriptRequest {
    pub script_path: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecuteScriptResponse {
    /// The child's real exit code (zero or not); -1 for a signal-killed child
    pub status: i32,
    pub output: String,
    pub error: String,
    pub duration_ms: i64,
}

/// platform.version.v1 - Report host OS name and version
#[derive(Debug, Clone, Serialize)]
pub struct PlatformVersionResponse {
    pub os: String,
    pub version: String,
    pub description: String,
}

/// runtime.setup.v1 / runtime.status.v1 - Runtime availability
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeStatusResponse {
    pub available: bool,
    pub interpreter: Option<String>,
}

/// runtime.resource_path.v1 - Bundled resource directory
#[derive(Debug, Clone, Serialize)]
pub struct ResourcePathResponse {
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_execute_request_defaults() {
        let request: ExecuteScriptRequest =
            serde_json::from_value(json!({ "script_path": "hello.py" })).unwrap();

        assert_eq!(request.script_path, "hello.py");
        assert!(request.args.is_empty());
        assert_eq!(request.timeout_ms, None);
    }

    #[test]
    fn test_execute_request_rejects_missing_script_path() {
        let result = serde_json::from_value::<ExecuteScriptRequest>(json!({ "args": ["x"] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_response_wire_shape() {
        let response = ExecuteScriptResponse {
            status: 2,
            output: "out".to_string(),
            error: "err".to_string(),
            duration_ms: 7,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "status": 2, "output": "out", "error": "err", "duration_ms": 7 })
        );
    }
}
