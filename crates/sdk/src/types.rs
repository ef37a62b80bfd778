//! SDK Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use serde::Deserialize;

/// Host OS identification from `platform.version.v1`
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformVersion {
    pub os: String,
    pub version: String,
    pub description: String,
}

/// Runtime availability from `runtime.setup.v1` / `runtime.status.v1`
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeStatus {
    pub available: bool,
    pub interpreter: Option<String>,
}

/// Resource directory from `runtime.resource_path.v1`
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePath {
    pub path: Option<String>,
}

/// Captured outcome from `script.execute.v1`
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteScriptResult {
    /// The child's real exit code; -1 for a signal-killed child
    pub status: i32,
    pub output: String,
    pub error: String,
    pub duration_ms: i64,
}
