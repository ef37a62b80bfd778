//! JSON-RPC Server
//!
//! Serves the PyBridge methods over TCP on localhost. Unrecognized methods
//! get jsonrpsee's standard method-not-found response, never a silent drop.

use crate::handler::RpcHandler;
use crate::types::ExecuteScriptRequest;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use pybridge_core::application::{RuntimeService, ScriptService};
use pybridge_core::port::PlatformInfo;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9528;

/// RPC Server Configuration
///
/// Security: only binds to localhost; the host application is the sole
/// intended caller.
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        runtime: Arc<RuntimeService>,
        scripts: Arc<ScriptService>,
        platform: Arc<dyn PlatformInfo>,
    ) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(runtime, scripts, platform)),
        }
    }

    /// Start the JSON-RPC server.
    ///
    /// Returns the bound address (the configured port may be 0 for an
    /// OS-assigned one) and the running server handle.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server on TCP (localhost only)"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let mut module = RpcModule::new(());

        // Register methods
        let handler = self.handler.clone();
        module
            .register_method("platform.version.v1", move |_params, _, _| {
                handler.platform_version()
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("runtime.setup.v1", move |_params, _, _| {
                let handler = handler.clone();
                async move { handler.setup().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("runtime.status.v1", move |_params, _, _| {
                let handler = handler.clone();
                async move { handler.status().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_method("runtime.resource_path.v1", move |_params, _, _| {
                handler.resource_path()
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("script.execute.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: ExecuteScriptRequest = params.parse()?;
                    handler.execute_script(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        info!(addr = %local_addr, "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}
