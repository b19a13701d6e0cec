//! Yarn healthcheck.

use std::sync::Arc;

use async_trait::async_trait;

use super::{version_diagnosis, PackageManager};
use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::HealthcheckError;
use crate::healthcheck::{Diagnosis, FixSlots, Healthcheck, ManualFix};

/// Supported Yarn releases.
const YARN_VERSION_RANGE: &str = ">=1.10.0";

const YARN_INSTALL_URL: &str = "https://classic.yarnpkg.com/en/docs/install";

/// Verifies Yarn is installed and recent enough.
///
/// Optional: a broken Yarn is a warning, since npm can stand in. Hidden when
/// the project's lockfile says npm manages dependencies.
pub struct Yarn {
    visible: bool,
}

impl Yarn {
    pub fn new(manager: Option<PackageManager>) -> Self {
        Self {
            visible: manager != Some(PackageManager::Npm),
        }
    }
}

#[async_trait]
impl Healthcheck for Yarn {
    fn label(&self) -> &str {
        "Yarn"
    }

    fn description(&self) -> &str {
        "Required to install NPM dependencies"
    }

    fn is_required(&self) -> bool {
        false
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
            env.yarn_version.as_deref(),
            YARN_VERSION_RANGE,
        ))
    }

    fn fixes(&self) -> FixSlots {
        FixSlots::default().with_default(Arc::new(ManualFix::docs(self.label(), YARN_INSTALL_URL)))
    }
}
