//! PyBridge CLI - Command-line interface for the PyBridge daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9528";

#[derive(Parser)]
#[command(name = "pybridge")]
#[command(about = "PyBridge daemon CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "PYBRIDGE_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show host platform name and version
    Version,

    /// Probe candidate paths for a Python runtime
    Setup,

    /// Show runtime availability from the daemon's last setup
    Status,

    /// Show the bundled resource directory, if any
    ResourcePath,

    /// Execute a Python script and print its captured output
    Run {
        /// Path to the script
        script: String,

        /// Arguments passed to the script
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,

        /// Optional wall-clock bound in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize, Tabled)]
struct RunResult {
    status: i32,
    duration_ms: i64,
    #[tabled(skip)]
    output: String,
    #[tabled(skip)]
    error: String,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            let result = call_rpc(&cli.rpc_url, "platform.version.v1", json!({})).await?;

            println!("{}", "Platform".cyan().bold());
            println!("  {} {}", "OS:".bold(), result["os"].as_str().unwrap_or("?"));
            println!(
                "  {} {}",
                "Version:".bold(),
                result["version"].as_str().unwrap_or("?")
            );
            println!(
                "  {} {}",
                "Description:".bold(),
                result["description"].as_str().unwrap_or("?")
            );
        }

        Commands::Setup => {
            let result = call_rpc(&cli.rpc_url, "runtime.setup.v1", json!({})).await?;
            print_runtime_status(&result);
        }

        Commands::Status => {
            let result = call_rpc(&cli.rpc_url, "runtime.status.v1", json!({})).await?;
            print_runtime_status(&result);
        }

        Commands::ResourcePath => {
            let result = call_rpc(&cli.rpc_url, "runtime.resource_path.v1", json!({})).await?;

            match result.get("path").and_then(|v| v.as_str()) {
                Some(path) => println!("{}", path),
                None => println!("{}", "No resource directory found".yellow()),
            }
        }

        Commands::Run {
            script,
            args,
            timeout_ms,
        } => {
            let mut params = json!({
                "script_path": script,
                "args": args,
            });
            if let Some(ms) = timeout_ms {
                params["timeout_ms"] = json!(ms);
            }

            let result = call_rpc(&cli.rpc_url, "script.execute.v1", params).await?;
            let run: RunResult = serde_json::from_value(result)?;

            if run.status == 0 {
                println!("{}", "✓ Script completed".green().bold());
            } else {
                println!(
                    "{}",
                    format!("✗ Script exited with status {}", run.status).red().bold()
                );
            }
            println!();

            let table = Table::new(vec![&run]).to_string();
            println!("{}", table);

            if !run.output.is_empty() {
                println!();
                println!("{}", "stdout:".bold());
                println!("{}", run.output);
            }
            if !run.error.is_empty() {
                println!();
                println!("{}", "stderr:".bold());
                println!("{}", run.error);
            }

            std::process::exit(exit_code_for(run.status));
        }
    }

    Ok(())
}

fn print_runtime_status(result: &serde_json::Value) {
    let available = result["available"].as_bool().unwrap_or(false);

    println!("{}", "Runtime".cyan().bold());
    if available {
        println!("  {} {}", "Available:".bold(), "yes".green());
        println!(
            "  {} {}",
            "Interpreter:".bold(),
            result["interpreter"].as_str().unwrap_or("?")
        );
    } else {
        println!("  {} {}", "Available:".bold(), "no".red());
        println!("  Install Python 3.9+ or set PYBRIDGE_PYTHON");
    }
}

/// Map a script's reported status to this process's exit code.
///
/// A signal-killed child is reported as -1 and must not be mistaken
/// for success; statuses above 125 are folded down to stay clear of
/// the shell's reserved range.
fn exit_code_for(status: i32) -> i32 {
    match status {
        0 => 0,
        s if s < 0 => 1,
        s => s.min(125),
    }
}

#[cfg(test)]
mod tests {
    use super::exit_code_for;

    #[test]
    fn test_success_passes_through() {
        assert_eq!(exit_code_for(0), 0);
    }

    #[test]
    fn test_nonzero_status_is_preserved() {
        assert_eq!(exit_code_for(2), 2);
        assert_eq!(exit_code_for(125), 125);
    }

    #[test]
    fn test_signal_killed_child_fails_the_command() {
        assert_eq!(exit_code_for(-1), 1);
    }

    #[test]
    fn test_large_statuses_stay_below_reserved_range() {
        assert_eq!(exit_code_for(255), 125);
    }
}
