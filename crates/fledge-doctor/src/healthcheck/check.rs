//! The healthcheck trait.

use async_trait::async_trait;

use super::fix::FixSlots;
use super::types::Diagnosis;
use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::HealthcheckError;

/// A single environment probe with optional remediation.
///
/// Implementations are static configuration: everything except `diagnose`
/// must return the same answer for the lifetime of a run.
#[async_trait]
pub trait Healthcheck: Send + Sync {
    /// Short display label, unique within its category.
    fn label(&self) -> &str;

    /// One-line explanation shown next to the label.
    fn description(&self) -> &str;

    /// Required checks classify as errors when broken; optional ones as
    /// warnings.
    fn is_required(&self) -> bool {
        true
    }

    /// Hidden checks are skipped entirely; they never produce a result.
    fn visible(&self) -> bool {
        true
    }

    /// Probe the environment snapshot.
    ///
    /// An `Err` here aborts the whole doctor run: a broken probe must never
    /// pass as a healthy result.
    async fn diagnose(
        &self,
        env: &EnvironmentInfo,
        config: &DoctorConfig,
    ) -> Result<Diagnosis, HealthcheckError>;

    /// Platform-slotted remediation actions for this check.
    fn fixes(&self) -> FixSlots {
        FixSlots::default()
    }
}
