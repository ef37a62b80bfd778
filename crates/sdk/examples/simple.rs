//! Minimal SDK usage: probe the runtime and run a script.
//!
//! Requires a running daemon: `cargo run -p pybridge-daemon`

use pybridge_sdk::PyBridgeClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = PyBridgeClient::connect("http://127.0.0.1:9528")?;

    let version = client.platform_version().await?;
    println!("Host: {}", version.description);

    let status = client.setup().await?;
    if !status.available {
        println!("No Python runtime found; install Python 3.9+ first.");
        return Ok(());
    }
    println!("Interpreter: {}", status.interpreter.unwrap_or_default());

    let result = client
        .execute_script("hello.py", &[], Some(10_000))
        .await?;
    println!("status={} stdout={:?}", result.status, result.output);

    Ok(())
}
