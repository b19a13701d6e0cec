//! Built-in Healthchecks
//!
//! The stock probes a doctor run evaluates, grouped into the standard
//! categories: Common tooling, Android toolchain and, on macOS, the iOS
//! toolchain. Category and check order here is display order.

mod adb;
mod android_ndk;
mod android_sdk;
mod cocoapods;
mod jdk;
mod node;
mod npm;
mod watchman;
mod xcode;
mod yarn;

pub use adb::Adb;
pub use android_ndk::AndroidNdk;
pub use android_sdk::AndroidSdk;
pub use cocoapods::CocoaPods;
pub use jdk::Jdk;
pub use node::NodeJs;
pub use npm::Npm;
pub use watchman::Watchman;
pub use xcode::Xcode;
pub use yarn::Yarn;

use std::path::Path;
use std::sync::Arc;

use crate::config::DoctorConfig;
use crate::healthcheck::{Diagnosis, HealthcheckCategory, HealthcheckRegistry};
use crate::platform::HostPlatform;
use crate::versions::VersionChecker;

/// Package manager detected from project lockfiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// Detect from lockfiles in the project root. Yarn wins when both exist.
    ///
    /// `None` means detection was inconclusive; both package manager checks
    /// stay visible in that case.
    pub fn detect(project_root: Option<&Path>) -> Option<Self> {
        let root = project_root?;
        if root.join("yarn.lock").is_file() {
            Some(Self::Yarn)
        } else if root.join("package-lock.json").is_file() {
            Some(Self::Npm)
        } else {
            None
        }
    }
}

/// Diagnosis for a tool that must be installed within a version range.
///
/// The detected version and the supported range are always attached so the
/// renderer can show both when the check fails.
pub(crate) fn version_diagnosis(installed: Option<&str>, range: &str) -> Diagnosis {
    let satisfied = installed
        .map(|version| VersionChecker::satisfies(version, range))
        .unwrap_or(false);

    let diagnosis = if satisfied {
        Diagnosis::ok()
    } else {
        Diagnosis::needs_fix()
    };
    let diagnosis = match installed {
        Some(version) => diagnosis.with_version(version),
        None => diagnosis,
    };
    diagnosis.with_version_range(range)
}

/// Assemble the standard registry for one run.
///
/// The iOS category only exists on macOS; Watchman only joins the Common
/// category for contributor runs.
pub fn default_registry(config: &DoctorConfig, platform: HostPlatform) -> HealthcheckRegistry {
    let manager = PackageManager::detect(config.project_root());

    let mut common = HealthcheckCategory::new("Common")
        .register(Arc::new(NodeJs))
        .register(Arc::new(Npm::new(manager)))
        .register(Arc::new(Yarn::new(manager)));
    if config.contributor {
        common = common.register(Arc::new(Watchman));
    }

    let android = HealthcheckCategory::new("Android")
        .register(Arc::new(Jdk))
        .register(Arc::new(AndroidSdk))
        .register(Arc::new(AndroidNdk))
        .register(Arc::new(Adb));

    let mut registry = HealthcheckRegistry::new();
    registry.register(common);
    registry.register(android);

    if platform.is_macos() {
        registry.register(
            HealthcheckCategory::new("iOS")
                .register(Arc::new(Xcode))
                .register(Arc::new(CocoaPods)),
        );
    }

    registry
}
