//! PyBridge Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{ExecuteScriptResult, PlatformVersion, ResourcePath, RuntimeStatus};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use std::time::Duration;

/// PyBridge daemon client
///
/// # Example
///
/// ```no_run
/// use pybridge_sdk::PyBridgeClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PyBridgeClient::connect("http://127.0.0.1:9528")?;
/// let version = client.platform_version().await?;
/// println!("{}", version.description);
/// # Ok(())
/// # }
/// ```
pub struct PyBridgeClient {
    client: HttpClient,
}

impl PyBridgeClient {
    /// Connect to the PyBridge daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9528`)
    pub fn connect(url: impl AsRef<str>) -> Result<Self> {
        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url.as_ref())
            .map_err(|e| SdkError::Connect(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Connect with a custom request timeout; script execution may run
    /// longer than the default 30s window.
    pub fn connect_with_timeout(url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let client = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(url.as_ref())
            .map_err(|e| SdkError::Connect(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Report the host OS name and version
    pub async fn platform_version(&self) -> Result<PlatformVersion> {
        let response = self
            .client
            .request("platform.version.v1", ObjectParams::new())
            .await?;
        Ok(response)
    }

    /// Probe candidate paths for a Python runtime
    pub async fn setup(&self) -> Result<RuntimeStatus> {
        let response = self
            .client
            .request("runtime.setup.v1", ObjectParams::new())
            .await?;
        Ok(response)
    }

    /// Runtime availability from the daemon's most recent setup probe
    pub async fn status(&self) -> Result<RuntimeStatus> {
        let response = self
            .client
            .request("runtime.status.v1", ObjectParams::new())
            .await?;
        Ok(response)
    }

    /// Bundled resource directory, or `None` when unavailable
    pub async fn resource_path(&self) -> Result<ResourcePath> {
        let response = self
            .client
            .request("runtime.resource_path.v1", ObjectParams::new())
            .await?;
        Ok(response)
    }

    /// Execute a Python script, capturing both output streams in full.
    ///
    /// A non-zero `status` in the result is ordinary data; only a failed
    /// spawn or invalid arguments surface as `SdkError::Daemon`.
    pub async fn execute_script(
        &self,
        script_path: impl Into<String>,
        args: &[String],
        timeout_ms: Option<u64>,
    ) -> Result<ExecuteScriptResult> {
        let mut params = ObjectParams::new();
        params.insert("script_path", script_path.into())?;
        params.insert("args", args)?;
        if let Some(ms) = timeout_ms {
            params.insert("timeout_ms", ms)?;
        }

        let response = self.client.request("script.execute.v1", params).await?;
        Ok(response)
    }
}
