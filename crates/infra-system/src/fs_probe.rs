// Filesystem runtime probe implementation

use std::path::PathBuf;
use tracing::debug;

use pybridge_core::port::RuntimeProbe;

/// Runtime probe backed by real filesystem existence checks
///
/// Pure lookup: no caching, no side effects; candidate order is preserved
/// exactly because it encodes the lookup policy.
pub struct FsRuntimeProbe;

impl FsRuntimeProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsRuntimeProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeProbe for FsRuntimeProbe {
    fn find_first_existing(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        let found = candidates.iter().find(|p| p.exists()).cloned();

        debug!(
            candidates = ?candidates,
            found = ?found,
            "Probed candidate paths"
        );

        found
    }
}
