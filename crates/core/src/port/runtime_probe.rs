// Runtime availability probe port
// Pure filesystem existence check over an ordered candidate list

use std::path::{Path, PathBuf};

/// Availability probe port
///
/// Candidate order encodes policy (system-default location before alternate
/// install locations) and must be preserved exactly.
pub trait RuntimeProbe: Send + Sync {
    /// Return the first candidate that exists on disk, or `None` if none do.
    /// No side effects.
    fn find_first_existing(&self, candidates: &[PathBuf]) -> Option<PathBuf>;

    /// Convenience: does this single path exist?
    fn exists(&self, path: &Path) -> bool {
        self.find_first_existing(std::slice::from_ref(&path.to_path_buf()))
            .is_some()
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Mock RuntimeProbe with a fixed set of "existing" paths
    pub struct MockRuntimeProbe {
        existing: HashSet<PathBuf>,
        probes: Mutex<usize>,
    }

    impl MockRuntimeProbe {
        pub fn new<I, P>(existing: I) -> Self
        where
            I: IntoIterator<Item = P>,
            P: Into<PathBuf>,
        {
            Self {
                existing: existing.into_iter().map(Into::into).collect(),
                probes: Mutex::new(0),
            }
        }

        pub fn empty() -> Self {
            Self::new(Vec::<PathBuf>::new())
        }

        pub fn probe_count(&self) -> usize {
            *self.probes.lock().unwrap()
        }
    }

    impl RuntimeProbe for MockRuntimeProbe {
        fn find_first_existing(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
            *self.probes.lock().unwrap() += 1;
            candidates
                .iter()
                .find(|c| self.existing.contains(*c))
                .cloned()
        }
    }
}
