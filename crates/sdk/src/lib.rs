//! PyBridge SDK - Typed Rust client for the PyBridge daemon
//!
//! Wraps the JSON-RPC boundary with a small typed API for host applications.

pub mod client;
pub mod error;
pub mod types;

pub use client::PyBridgeClient;
pub use error::{Result, SdkError};
pub use types::{ExecuteScriptResult, PlatformVersion, ResourcePath, RuntimeStatus};
