//! Xcode healthcheck.

use std::sync::Arc;

use async_trait::async_trait;

use super::version_diagnosis;
use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::HealthcheckError;
use crate::healthcheck::{Diagnosis, FixSlots, Healthcheck, ManualFix};

/// Supported Xcode releases.
const XCODE_VERSION_RANGE: &str = ">=12.0.0";

const XCODE_URL: &str = "https://developer.apple.com/xcode/";

/// Verifies Xcode is installed and recent enough.
pub struct Xcode;

#[async_trait]
impl Healthcheck for Xcode {
    fn label(&self) -> &str {
        "Xcode"
    }

    fn description(&self) -> &str {
        "Required for building and installing your app on iOS"
    }

    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        _config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError> {
        Ok(version_diagnosis(
            env.xcode_version.as_deref(),
            XCODE_VERSION_RANGE,
        ))
    }

    fn fixes(&self) -> FixSlots {
        FixSlots::default().with_default(Arc::new(ManualFix::docs(self.label(), XCODE_URL)))
    }
}
