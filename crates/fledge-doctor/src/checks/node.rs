//! Node.js healthcheck.

use std::sync::Arc;

use async_trait::async_trait;

use super::version_diagnosis;
use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::HealthcheckError;
use crate::healthcheck::{Diagnosis, FixSlots, Healthcheck, ManualFix};

/// Supported Node.js releases.
const NODE_VERSION_RANGE: &str = ">=18.0.0";

const NODE_DOWNLOAD_URL: &str = "https://nodejs.org/en/download";

/// Verifies Node.js is installed and recent enough.
pub struct NodeJs;

#[async_trait]
impl Healthcheck for NodeJs {
    fn label(&self) -> &str {
        "Node.js"
    }

    fn description(&self) -> &str {
        "Required to execute JavaScript code"
    }

    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        _config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError> {
        Ok(version_diagnosis(
            env.node_version.as_deref(),
            NODE_VERSION_RANGE,
        ))
    }

    fn fixes(&self) -> FixSlots {
        FixSlots::default().with_default(Arc::new(ManualFix::docs(self.label(), NODE_DOWNLOAD_URL)))
    }
}
