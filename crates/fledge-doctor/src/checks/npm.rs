//! npm healthcheck.

use std::sync::Arc;

use async_trait::async_trait;

use super::{version_diagnosis, PackageManager};
use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::HealthcheckError;
use crate::healthcheck::{Diagnosis, FixSlots, Healthcheck, ManualFix};

/// Supported npm releases.
const NPM_VERSION_RANGE: &str = ">=4.0.0";

const NODE_DOWNLOAD_URL: &str = "https://nodejs.org/en/download";

/// Verifies npm is installed and recent enough.
///
/// Hidden when the project's lockfile says Yarn manages dependencies.
pub struct Npm {
    visible: bool,
}

impl Npm {
    pub fn new(manager: Option<PackageManager>) -> Self {
        Self {
            visible: manager != Some(PackageManager::Yarn),
        }
    }
}

#[async_trait]
impl Healthcheck for Npm {
    fn label(&self) -> &str {
        "npm"
    }

    fn description(&self) -> &str {
        "Required to install NPM dependencies"
    }

    fn visible(&self) -> bool {
        self.visible
    }

    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        _config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError> {
        Ok(version_diagnosis(
            env.npm_version.as_deref(),
            NPM_VERSION_RANGE,
        ))
    }

    fn fixes(&self) -> FixSlots {
        // npm ships with Node.js
        FixSlots::default().with_default(Arc::new(ManualFix::docs(self.label(), NODE_DOWNLOAD_URL)))
    }
}
