//! Full-stack script execution: ScriptService + SubprocessRunner +
//! FsRuntimeProbe, with /bin/sh standing in as the interpreter.

use pybridge_core::application::{RuntimeConfig, RuntimeService, ScriptService};
use pybridge_core::error::AppError;
use pybridge_core::port::ExecutionError;
use pybridge_infra_system::{FsRuntimeProbe, SubprocessRunner};
use std::path::PathBuf;
use std::sync::Arc;

fn write_script(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pybridge_it_{}_{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

fn service(interpreters: &[&str]) -> ScriptService {
    let config = RuntimeConfig {
        interpreter_candidates: interpreters.iter().map(PathBuf::from).collect(),
        resource_dir_candidates: vec![],
    };
    let runtime = Arc::new(RuntimeService::new(Arc::new(FsRuntimeProbe::new()), config));
    ScriptService::new(Arc::new(SubprocessRunner::default()), runtime)
}

#[tokio::test]
async fn test_hello_script() {
    let script = write_script("hello.sh", "echo hello\n");

    let result = service(&["/bin/sh"])
        .execute(script.to_str().unwrap(), &[], None)
        .await
        .unwrap();
    let _ = std::fs::remove_file(&script);

    assert_eq!(result.exit_code, Some(0));
    assert_eq!(result.stdout, "hello\n");
    assert_eq!(result.stderr, "");
}

#[tokio::test]
async fn test_exit_code_two_is_reported_not_raised() {
    let script = write_script("exit2.sh", "echo some output\nexit 2\n");

    let result = service(&["/bin/sh"])
        .execute(script.to_str().unwrap(), &[], None)
        .await
        .unwrap();
    let _ = std::fs::remove_file(&script);

    assert_eq!(result.exit_code, Some(2));
}

#[tokio::test]
async fn test_script_args_are_forwarded_in_order() {
    let script = write_script("args.sh", "echo \"$1 $2\"\n");

    let result = service(&["/bin/sh"])
        .execute(
            script.to_str().unwrap(),
            &["first".to_string(), "second".to_string()],
            None,
        )
        .await
        .unwrap();
    let _ = std::fs::remove_file(&script);

    assert_eq!(result.stdout, "first second\n");
}

#[tokio::test]
async fn test_no_interpreter_is_spawn_error_not_result() {
    let err = service(&["/nonexistent/python3"])
        .execute("whatever.py", &[], None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Execution(ExecutionError::SpawnFailed(_))
    ));
}

#[tokio::test]
async fn test_missing_script_file_surfaces_as_interpreter_exit() {
    // The interpreter reports the missing file itself; not a spawn error
    let result = service(&["/bin/sh"])
        .execute("/definitely/not/here.sh", &[], None)
        .await
        .unwrap();

    assert_ne!(result.exit_code, Some(0));
    assert!(!result.stderr.is_empty());
}

/// Pipe-drain regression at the service level: >64KB on both streams.
#[tokio::test]
async fn test_heavy_output_on_both_streams() {
    let script = write_script(
        "heavy.sh",
        "i=0\n\
         while [ $i -lt 4096 ]; do\n\
           echo 0123456789abcdef0123456789abcdef\n\
           echo 0123456789abcdef0123456789abcdef 1>&2\n\
           i=$((i+1))\n\
         done\n",
    );

    let result = service(&["/bin/sh"])
        .execute(script.to_str().unwrap(), &[], None)
        .await
        .unwrap();
    let _ = std::fs::remove_file(&script);

    assert_eq!(result.exit_code, Some(0));
    assert!(result.stdout.len() > 64 * 1024);
    assert!(result.stderr.len() > 64 * 1024);
}

#[tokio::test]
async fn test_timeout_is_surfaced() {
    let script = write_script("slow.sh", "sleep 30\n");

    let err = service(&["/bin/sh"])
        .execute(script.to_str().unwrap(), &[], Some(100))
        .await
        .unwrap_err();
    let _ = std::fs::remove_file(&script);

    assert!(matches!(
        err,
        AppError::Execution(ExecutionError::Timeout(100))
    ));
}
