//! Adb healthcheck.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::HealthcheckError;
use crate::healthcheck::{Diagnosis, FixSlots, Healthcheck, ManualFix};

/// Verifies the Android debug bridge is on the PATH.
///
/// Optional: building works without it, deploying to a device does not.
pub struct Adb;

#[async_trait]
impl Healthcheck for Adb {
    fn label(&self) -> &str {
        "Adb"
    }

    fn description(&self) -> &str {
        "Required to verify if the android device is attached correctly"
    }

    fn is_required(&self) -> bool {
        false
    }

    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        _config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError> {
        let diagnosis = match env.adb_version.as_deref() {
            Some(version) => Diagnosis::ok().with_version(version),
            None => Diagnosis::needs_fix(),
        };
        Ok(diagnosis)
    }

    fn fixes(&self) -> FixSlots {
        FixSlots::default().with_default(Arc::new(ManualFix::message(
            self.label(),
            "Adb ships with the Android SDK platform-tools; add them to your PATH \
             and check the device is connected with USB debugging enabled",
        )))
    }
}
