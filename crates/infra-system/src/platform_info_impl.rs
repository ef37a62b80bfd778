// Platform info implementation
// sysinfo for cross-platform OS identification

use sysinfo::System;

use pybridge_core::port::{OsVersion, PlatformInfo};

/// Platform info backed by sysinfo's static OS accessors
pub struct PlatformInfoImpl;

impl PlatformInfoImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlatformInfoImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformInfo for PlatformInfoImpl {
    fn os_version(&self) -> OsVersion {
        let name = System::name().unwrap_or_else(|| "unknown".to_string());
        let version = System::os_version().unwrap_or_else(|| "unknown".to_string());
        let description =
            System::long_os_version().unwrap_or_else(|| format!("{name} {version}"));

        OsVersion {
            name,
            version,
            description,
        }
    }
}
