//! JDK healthcheck.

use std::sync::Arc;

use async_trait::async_trait;

use super::version_diagnosis;
use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::HealthcheckError;
use crate::healthcheck::{Diagnosis, FixSlots, Healthcheck, ManualFix};

/// Supported JDK releases.
const JDK_VERSION_RANGE: &str = ">=17.0.0";

const JDK_DOWNLOAD_URL: &str = "https://adoptium.net/temurin/releases";

/// Verifies a JDK is installed and recent enough.
pub struct Jdk;

#[async_trait]
impl Healthcheck for Jdk {
    fn label(&self) -> &str {
        "JDK"
    }

    fn description(&self) -> &str {
        "Required to compile Java code"
    }

    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        _config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError> {
        Ok(version_diagnosis(
            env.java_version.as_deref(),
            JDK_VERSION_RANGE,
        ))
    }

    fn fixes(&self) -> FixSlots {
        FixSlots::default().with_default(Arc::new(ManualFix::docs(self.label(), JDK_DOWNLOAD_URL)))
    }
}
