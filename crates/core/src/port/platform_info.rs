// Platform information port

/// Host operating system identification
#[derive(Debug, Clone)]
pub struct OsVersion {
    /// OS name, e.g. "macOS"
    pub name: String,
    /// Version number, e.g. "14.5"
    pub version: String,
    /// Full human-readable string, e.g. "macOS 14.5 Sonoma"
    pub description: String,
}

/// Platform info port
pub trait PlatformInfo: Send + Sync {
    /// Report the host OS name and version.
    fn os_version(&self) -> OsVersion;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// Mock PlatformInfo returning a fixed version
    pub struct MockPlatformInfo {
        version: OsVersion,
    }

    impl MockPlatformInfo {
        pub fn new(name: &str, version: &str) -> Self {
            Self {
                version: OsVersion {
                    name: name.to_string(),
                    version: version.to_string(),
                    description: format!("{name} {version}"),
                },
            }
        }
    }

    impl PlatformInfo for MockPlatformInfo {
        fn os_version(&self) -> OsVersion {
            self.version.clone()
        }
    }
}
