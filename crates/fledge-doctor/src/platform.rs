//! Host platform detection for fix dispatch.

use serde::{Deserialize, Serialize};

/// Host operating system, as seen by fix dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostPlatform {
    Windows,
    MacOs,
    Linux,
    /// Anything without a dedicated fix slot; only default fixes apply.
    Other,
}

impl HostPlatform {
    /// Detect the platform the doctor is running on.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// True on macOS, where the iOS toolchain checks apply.
    pub fn is_macos(self) -> bool {
        matches!(self, Self::MacOs)
    }
}
