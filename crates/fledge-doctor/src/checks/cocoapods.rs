//! CocoaPods healthcheck.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::HealthcheckError;
use crate::healthcheck::{Diagnosis, FixSlots, Healthcheck, ManualFix};

/// Verifies CocoaPods is installed.
pub struct CocoaPods;

#[async_trait]
impl Healthcheck for CocoaPods {
    fn label(&self) -> &str {
        "CocoaPods"
    }

    fn description(&self) -> &str {
        "Required for managing iOS project dependencies"
    }

    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        _config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError> {
        let diagnosis = match env.cocoapods_version.as_deref() {
            Some(version) => Diagnosis::ok().with_version(version),
            None => Diagnosis::needs_fix(),
        };
        Ok(diagnosis)
    }

    fn fixes(&self) -> FixSlots {
        // Installing gems is only meaningful where iOS builds run
        FixSlots::default().with_macos(Arc::new(ManualFix::command(
            self.label(),
            "sudo gem install cocoapods",
        )))
    }
}
