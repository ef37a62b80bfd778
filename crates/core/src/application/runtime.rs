// Runtime location use cases: setup probe and resource-path lookup

use crate::port::RuntimeProbe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Default interpreter locations, probed in order: the system default first,
/// then the common Homebrew install locations. The order is the policy.
pub const DEFAULT_INTERPRETER_CANDIDATES: [&str; 3] = [
    "/usr/bin/python3",
    "/opt/homebrew/bin/python3",
    "/usr/local/bin/python3",
];

/// Runtime location configuration
///
/// Defaults keep the literal candidate lists; a deployment may prepend an
/// override path without disturbing the default order.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub interpreter_candidates: Vec<PathBuf>,
    pub resource_dir_candidates: Vec<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            interpreter_candidates: DEFAULT_INTERPRETER_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .collect(),
            resource_dir_candidates: default_resource_dirs(),
        }
    }
}

impl RuntimeConfig {
    /// Put an override path ahead of the existing candidates.
    pub fn prepend_interpreter(&mut self, path: impl Into<PathBuf>) {
        self.interpreter_candidates.insert(0, path.into());
    }

    pub fn prepend_resource_dir(&mut self, path: impl Into<PathBuf>) {
        self.resource_dir_candidates.insert(0, path.into());
    }
}

/// Resource directories relative to the running executable, mirroring an app
/// bundle layout: `<exe dir>/../Resources` first, then `<exe dir>/resources`.
fn default_resource_dirs() -> Vec<PathBuf> {
    let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
    else {
        return Vec::new();
    };

    vec![exe_dir.join("../Resources"), exe_dir.join("resources")]
}

/// Outcome of a runtime setup probe.
///
/// Explicit state value returned to the caller; the core keeps no "setup
/// complete" flag of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeStatus {
    pub available: bool,
    pub interpreter: Option<PathBuf>,
}

impl RuntimeStatus {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            interpreter: None,
        }
    }
}

/// Runtime location service
pub struct RuntimeService {
    probe: Arc<dyn RuntimeProbe>,
    config: RuntimeConfig,
}

impl RuntimeService {
    pub fn new(probe: Arc<dyn RuntimeProbe>, config: RuntimeConfig) -> Self {
        Self { probe, config }
    }

    /// Probe the interpreter candidates in order and report the outcome.
    /// Idempotent; either a runtime is found or it is not, no escalation.
    pub fn setup(&self) -> RuntimeStatus {
        match self.locate_interpreter() {
            Some(path) => {
                info!(interpreter = %path.display(), "Python runtime found");
                RuntimeStatus {
                    available: true,
                    interpreter: Some(path),
                }
            }
            None => {
                info!(
                    candidates = ?self.config.interpreter_candidates,
                    "No Python runtime found among candidate paths"
                );
                RuntimeStatus::unavailable()
            }
        }
    }

    /// First existing interpreter candidate, in configured order.
    pub fn locate_interpreter(&self) -> Option<PathBuf> {
        self.probe
            .find_first_existing(&self.config.interpreter_candidates)
    }

    /// First existing resource directory, or `None` when unavailable.
    pub fn resource_path(&self) -> Option<PathBuf> {
        self.probe
            .find_first_existing(&self.config.resource_dir_candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::runtime_probe::mocks::MockRuntimeProbe;

    fn config(interpreters: &[&str], resources: &[&str]) -> RuntimeConfig {
        RuntimeConfig {
            interpreter_candidates: interpreters.iter().map(PathBuf::from).collect(),
            resource_dir_candidates: resources.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn test_setup_reports_first_existing_candidate() {
        // Both alternates exist; the earlier one must win
        let probe = Arc::new(MockRuntimeProbe::new([
            "/opt/homebrew/bin/python3",
            "/usr/local/bin/python3",
        ]));
        let service = RuntimeService::new(
            probe,
            config(
                &[
                    "/usr/bin/python3",
                    "/opt/homebrew/bin/python3",
                    "/usr/local/bin/python3",
                ],
                &[],
            ),
        );

        let status = service.setup();
        assert!(status.available);
        assert_eq!(
            status.interpreter,
            Some(PathBuf::from("/opt/homebrew/bin/python3"))
        );
    }

    #[test]
    fn test_setup_unavailable_when_nothing_exists() {
        let probe = Arc::new(MockRuntimeProbe::empty());
        let service = RuntimeService::new(probe, config(&["/usr/bin/python3"], &[]));

        let status = service.setup();
        assert!(!status.available);
        assert!(status.interpreter.is_none());
    }

    #[test]
    fn test_prepended_override_wins() {
        let probe = Arc::new(MockRuntimeProbe::new([
            "/custom/python3",
            "/usr/bin/python3",
        ]));
        let mut cfg = config(&["/usr/bin/python3"], &[]);
        cfg.prepend_interpreter("/custom/python3");

        let service = RuntimeService::new(probe, cfg);
        assert_eq!(
            service.locate_interpreter(),
            Some(PathBuf::from("/custom/python3"))
        );
    }

    #[test]
    fn test_resource_path_lookup() {
        let probe = Arc::new(MockRuntimeProbe::new(["/app/resources"]));
        let service = RuntimeService::new(
            probe,
            config(&[], &["/app/../Resources", "/app/resources"]),
        );

        assert_eq!(
            service.resource_path(),
            Some(PathBuf::from("/app/resources"))
        );
    }
}
