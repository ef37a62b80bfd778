//! JSON-RPC API Layer
//!
//! Implements the JSON-RPC 2.0 server for PyBridge. The core exposes plain
//! services; this crate is the thin adapter mapping named remote calls onto
//! them.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
