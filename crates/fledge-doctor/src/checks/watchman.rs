//! Watchman healthcheck.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::HealthcheckError;
use crate::healthcheck::{Diagnosis, FixSlots, Healthcheck, ManualFix};

const WATCHMAN_INSTALL_URL: &str = "https://facebook.github.io/watchman/docs/install";

/// Verifies Watchman is installed.
///
/// Only registered for contributor runs; missing Watchman is a warning.
pub struct Watchman;

#[async_trait]
impl Healthcheck for Watchman {
    fn label(&self) -> &str {
        "Watchman"
    }

    fn description(&self) -> &str {
        "Used for watching changes in the filesystem when in development mode"
    }

    fn is_required(&self) -> bool {
        false
    }

    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        _config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError> {
        let diagnosis = match env.watchman_version.as_deref() {
            Some(version) => Diagnosis::ok().with_version(version),
            None => Diagnosis::needs_fix(),
        };
        Ok(diagnosis)
    }

    fn fixes(&self) -> FixSlots {
        FixSlots::default()
            .with_default(Arc::new(ManualFix::docs(self.label(), WATCHMAN_INSTALL_URL)))
    }
}
