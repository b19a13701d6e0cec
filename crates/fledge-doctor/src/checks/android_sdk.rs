//! Android SDK healthcheck.
//!
//! Compares the build-tools versions installed under the SDK root against
//! the version the project's `android/build.gradle` declares.

use std::sync::Arc;

use async_trait::async_trait;
use console::style;

use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::{FixError, HealthcheckError};
use crate::healthcheck::{
    Diagnosis, Fix, FixContext, FixSlots, Healthcheck, ManualFix, ManualInstallation,
};
use crate::versions;

const GRADLE_BUILD_FILE: &str = "android/build.gradle";

const ANDROID_STUDIO_URL: &str = "https://developer.android.com/studio";
const WINDOWS_INSTALL_URL: &str = "https://developer.android.com/studio/install#windows";
const SETUP_DOCS_URL: &str = "https://fledge.dev/docs/environment-setup#android-sdk";

/// Verifies the project's required build-tools version is installed.
///
/// Without a project gradle file the check degrades to an is-anything-installed
/// probe, so doctor stays useful outside a project directory.
pub struct AndroidSdk;

impl AndroidSdk {
    /// Build-tools version declared by the project, when one is declared.
    async fn required_build_tools(config: &DoctorConfig) -> Option<String> {
        let root = config.project_root()?;
        let content = tokio::fs::read_to_string(root.join(GRADLE_BUILD_FILE))
            .await
            .ok()?;
        let line = content
            .lines()
            .find(|line| line.contains("buildToolsVersion"))?;
        versions::extract(line)
    }
}

#[async_trait]
impl Healthcheck for AndroidSdk {
    fn label(&self) -> &str {
        "Android SDK"
    }

    fn description(&self) -> &str {
        "Required for building and installing your app on Android"
    }

    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError> {
        let required = Self::required_build_tools(config).await;
        let installed = &env.android_build_tools;

        let needs_to_be_fixed = match &required {
            Some(version) => !installed.contains(version),
            None => installed.is_empty(),
        };

        let mut diagnosis = if needs_to_be_fixed {
            Diagnosis::needs_fix()
        } else {
            Diagnosis::ok()
        };
        if !installed.is_empty() {
            diagnosis = diagnosis.with_versions(installed.clone());
        }
        if let Some(version) = required {
            diagnosis = diagnosis.with_version_range(version);
        }
        Ok(diagnosis)
    }

    fn fixes(&self) -> FixSlots {
        FixSlots::default()
            .with_default(Arc::new(AndroidSdkFix))
            .with_windows(Arc::new(ManualFix::docs(self.label(), WINDOWS_INSTALL_URL)))
    }
}

/// Points at update instructions when an SDK root exists, otherwise at the
/// from-scratch setup guide.
struct AndroidSdkFix;

#[async_trait]
impl Fix for AndroidSdkFix {
    async fn apply(&self, ctx: &mut FixContext<'_>) -> Result<(), FixError> {
        ctx.loader.fail_with("Android SDK");

        let note = if ctx.env.android_sdk_root.is_some() {
            ManualInstallation::message(format!(
                "Read more about how to update Android SDK at {}",
                style(ANDROID_STUDIO_URL).dim()
            ))
        } else {
            ManualInstallation::docs("Android SDK", SETUP_DOCS_URL)
        };
        ctx.log_manual_installation(note);
        Ok(())
    }
}
