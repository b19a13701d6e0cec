//! Environment Information
//!
//! Collects a read-only snapshot of the developer machine once per run.
//! Healthchecks only ever look at this snapshot, never probe on their own.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::process::Command;
use tracing::debug;

use crate::versions;

/// Tool versions and SDK locations the healthchecks inspect.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnvironmentInfo {
    pub node_version: Option<String>,
    pub npm_version: Option<String>,
    pub yarn_version: Option<String>,
    pub java_version: Option<String>,
    pub watchman_version: Option<String>,
    pub adb_version: Option<String>,
    pub cocoapods_version: Option<String>,
    pub xcode_version: Option<String>,
    /// Resolved from ANDROID_HOME, then ANDROID_SDK_ROOT
    pub android_sdk_root: Option<PathBuf>,
    /// Directory names under `<sdk>/build-tools`, sorted
    pub android_build_tools: Vec<String>,
    /// Directory names under `<sdk>/ndk`, sorted
    pub android_ndk_versions: Vec<String>,
}

impl EnvironmentInfo {
    /// Probe the machine. Absent tools simply stay `None`.
    pub async fn collect() -> Self {
        let (node, npm, yarn, java, watchman, adb, pod, xcode) = tokio::join!(
            probe_version("node", &["--version"]),
            probe_version("npm", &["--version"]),
            probe_version("yarn", &["--version"]),
            probe_version("java", &["-version"]),
            probe_version("watchman", &["--version"]),
            probe_version("adb", &["version"]),
            probe_version("pod", &["--version"]),
            probe_version("xcodebuild", &["-version"]),
        );

        let android_sdk_root = android_sdk_root();
        let android_build_tools = android_sdk_root
            .as_deref()
            .map(|root| list_sdk_component(root, "build-tools"))
            .unwrap_or_default();
        let android_ndk_versions = android_sdk_root
            .as_deref()
            .map(|root| list_sdk_component(root, "ndk"))
            .unwrap_or_default();

        Self {
            node_version: node,
            npm_version: npm,
            yarn_version: yarn,
            java_version: java,
            watchman_version: watchman,
            adb_version: adb,
            cocoapods_version: pod,
            xcode_version: xcode,
            android_sdk_root,
            android_build_tools,
            android_ndk_versions,
        }
    }
}

/// Run `binary args` and pull a version out of whatever it prints.
/// `java -version` writes to stderr, so both streams are considered.
async fn probe_version(binary: &str, args: &[&str]) -> Option<String> {
    let path = which::which(binary).ok()?;
    let output = Command::new(&path).args(args).output().await.ok()?;
    if !output.status.success() {
        debug!(binary, code = ?output.status.code(), "version probe exited uncleanly");
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = if stdout.trim().is_empty() {
        String::from_utf8_lossy(&output.stderr).into_owned()
    } else {
        stdout.into_owned()
    };

    let version = versions::extract(&text);
    debug!(binary, version = version.as_deref().unwrap_or("not found"), "probed");
    version
}

fn android_sdk_root() -> Option<PathBuf> {
    std::env::var_os("ANDROID_HOME")
        .or_else(|| std::env::var_os("ANDROID_SDK_ROOT"))
        .map(PathBuf::from)
        .filter(|root| root.is_dir())
}

/// List installed versions of an SDK component such as `build-tools` or `ndk`.
/// Each version lives in its own directory under `<sdk>/<component>`.
fn list_sdk_component(sdk_root: &Path, component: &str) -> Vec<String> {
    let dir = sdk_root.join(component);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut found: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    found.sort();
    found
}
