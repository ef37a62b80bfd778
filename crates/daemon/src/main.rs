//! PyBridge Daemon - Main Entry Point
//! JSON-RPC bridge between a host application and the local Python runtime

mod telemetry;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use pybridge_api_rpc::{RpcServer, RpcServerConfig};
use pybridge_core::application::{RuntimeConfig, RuntimeService, ScriptService};
use pybridge_core::port::SystemClock;
use pybridge_infra_system::{FsRuntimeProbe, PlatformInfoImpl, SubprocessRunner};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format = std::env::var("PYBRIDGE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("pybridge=info"))
        .expect("Failed to create env filter");

    let registry = tracing_subscriber::registry().with(env_filter);

    // The OTLP layer joins the same registry; a second subscriber would
    // never become the global default.
    #[cfg(feature = "telemetry")]
    let registry = registry.with(telemetry::otlp_layer().unwrap_or_else(|e| {
        eprintln!("OpenTelemetry setup failed, continuing without it: {e}");
        None
    }));

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            registry.with(fmt::layer().json()).init();
        }
        _ => {
            // Development: Pretty formatting with colors
            registry.with(fmt::layer().pretty()).init();
        }
    }

    info!("PyBridge daemon v{} starting...", VERSION);

    #[cfg(not(feature = "telemetry"))]
    telemetry::warn_if_configured();

    // 2. Load configuration from the environment
    let rpc_port: u16 = std::env::var("PYBRIDGE_RPC_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9528);

    let mut runtime_config = RuntimeConfig::default();
    if let Ok(python) = std::env::var("PYBRIDGE_PYTHON") {
        runtime_config.prepend_interpreter(shellexpand::tilde(&python).into_owned());
    }
    if let Ok(resources) = std::env::var("PYBRIDGE_RESOURCE_DIR") {
        runtime_config.prepend_resource_dir(shellexpand::tilde(&resources).into_owned());
    }

    // 3. Setup dependencies (DI wiring)
    let clock = Arc::new(SystemClock);
    let probe = Arc::new(FsRuntimeProbe::new());
    let platform = Arc::new(PlatformInfoImpl::new());

    let runtime = Arc::new(RuntimeService::new(probe, runtime_config));
    let runner = Arc::new(SubprocessRunner::new(clock));
    let scripts = Arc::new(ScriptService::new(runner, runtime.clone()));

    // 4. Report runtime availability at startup (informational; the host
    //    drives setup through the RPC boundary)
    let status = runtime.setup();
    info!(
        available = %status.available,
        interpreter = ?status.interpreter,
        "Initial runtime probe"
    );

    // 5. Start JSON-RPC server
    info!("Starting JSON-RPC server...");
    let rpc_config = RpcServerConfig {
        port: rpc_port,
        ..Default::default()
    };
    let rpc_server = RpcServer::new(rpc_config, runtime, scripts, platform);
    let (addr, rpc_handle) = rpc_server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "System ready. Waiting for host calls...");
    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;

    info!("Shutdown complete.");

    Ok(())
}
