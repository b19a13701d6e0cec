//! Android NDK healthcheck.
//!
//! Looks for an NDK release under the SDK root that is recent enough to
//! compile the native modules.

use std::sync::Arc;

use async_trait::async_trait;
use console::style;

use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::{FixError, HealthcheckError};
use crate::healthcheck::{Diagnosis, Fix, FixContext, FixSlots, Healthcheck, ManualInstallation};
use crate::versions::VersionChecker;

/// Supported NDK releases.
const NDK_VERSION_RANGE: &str = ">=19.0.0";

const NDK_DOWNLOAD_URL: &str = "https://developer.android.com/ndk/downloads";

/// Verifies a recent enough NDK is installed under the SDK root.
pub struct AndroidNdk;

#[async_trait]
impl Healthcheck for AndroidNdk {
    fn label(&self) -> &str {
        "Android NDK"
    }

    fn description(&self) -> &str {
        "Required for building fledge from source"
    }

    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        _config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError> {
        let installed = &env.android_ndk_versions;
        let satisfied = installed
            .iter()
            .any(|version| VersionChecker::satisfies(version, NDK_VERSION_RANGE));

        let mut diagnosis = if satisfied {
            Diagnosis::ok()
        } else {
            Diagnosis::needs_fix()
        };
        if !installed.is_empty() {
            diagnosis = diagnosis.with_versions(installed.clone());
        }
        Ok(diagnosis.with_version_range(NDK_VERSION_RANGE))
    }

    fn fixes(&self) -> FixSlots {
        FixSlots::default().with_default(Arc::new(AndroidNdkFix))
    }
}

/// Points at update instructions when some NDK exists, otherwise at the
/// download page for a first install.
struct AndroidNdkFix;

#[async_trait]
impl Fix for AndroidNdkFix {
    async fn apply(&self, ctx: &mut FixContext<'_>) -> Result<(), FixError> {
        ctx.loader.fail_with("Android NDK");

        let note = if !ctx.env.android_ndk_versions.is_empty() {
            ManualInstallation::message(format!(
                "Read more about how to update Android NDK at {}",
                style(NDK_DOWNLOAD_URL).dim()
            ))
        } else {
            ManualInstallation::docs("Android NDK", NDK_DOWNLOAD_URL)
        };
        ctx.log_manual_installation(note);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Loader;

    fn env_with_ndk(installed: &[&str]) -> EnvironmentInfo {
        EnvironmentInfo {
            android_ndk_versions: installed.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_recent_ndk_is_healthy() {
        let diagnosis = AndroidNdk
            .diagnose(&env_with_ndk(&["26.1.10909125"]), &DoctorConfig::default())
            .await
            .unwrap();
        assert!(!diagnosis.needs_to_be_fixed);
        assert_eq!(diagnosis.version_range.as_deref(), Some(NDK_VERSION_RANGE));
    }

    #[tokio::test]
    async fn test_any_installed_release_in_range_passes() {
        let diagnosis = AndroidNdk
            .diagnose(
                &env_with_ndk(&["17.2.4988734", "25.2.9519653"]),
                &DoctorConfig::default(),
            )
            .await
            .unwrap();
        assert!(!diagnosis.needs_to_be_fixed);
    }

    #[tokio::test]
    async fn test_only_old_releases_need_fixing() {
        let diagnosis = AndroidNdk
            .diagnose(&env_with_ndk(&["17.2.4988734"]), &DoctorConfig::default())
            .await
            .unwrap();
        assert!(diagnosis.needs_to_be_fixed);
    }

    #[tokio::test]
    async fn test_missing_ndk_needs_fixing() {
        let diagnosis = AndroidNdk
            .diagnose(&EnvironmentInfo::default(), &DoctorConfig::default())
            .await
            .unwrap();
        assert!(diagnosis.needs_to_be_fixed);
        assert!(diagnosis.versions.is_none());
    }

    #[test]
    fn test_single_default_fix() {
        let slots = AndroidNdk.fixes();
        assert!(slots.default_fix.is_some());
        assert!(slots.windows.is_none());
        assert!(slots.macos.is_none());
    }

    #[tokio::test]
    async fn test_fix_points_at_update_note_when_ndk_exists() {
        let mut loader = Loader::hidden();
        let env = env_with_ndk(&["17.2.4988734"]);
        let config = DoctorConfig::default();

        let mut ctx = FixContext::new(&mut loader, &env, &config);
        AndroidNdkFix.apply(&mut ctx).await.unwrap();

        let notes = ctx.into_manual();
        assert_eq!(notes.len(), 1);
        match &notes[0] {
            ManualInstallation::Message(text) => {
                assert!(text.contains("update Android NDK"));
            }
            other => panic!("expected a message note, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fix_points_at_download_docs_without_ndk() {
        let mut loader = Loader::hidden();
        let env = EnvironmentInfo::default();
        let config = DoctorConfig::default();

        let mut ctx = FixContext::new(&mut loader, &env, &config);
        AndroidNdkFix.apply(&mut ctx).await.unwrap();

        let notes = ctx.into_manual();
        assert_eq!(
            notes,
            vec![ManualInstallation::docs("Android NDK", NDK_DOWNLOAD_URL)]
        );
    }
}
