//! Diagnostic Runner
//!
//! Executes every visible healthcheck and classifies the outcomes. Checks
//! fan out concurrently, but results always come back in registration order,
//! so display never depends on completion timing.

pub mod aggregate;

use futures::future::try_join_all;
use tracing::debug;

use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::DoctorError;
use crate::healthcheck::{CategoryResult, CheckResult, Healthcheck, HealthcheckCategory, IssueKind};

/// Run all registered healthchecks against the environment snapshot.
///
/// A failing probe aborts the entire run: its category could otherwise
/// report a false healthy state.
pub async fn run_diagnostics(
    categories: &[HealthcheckCategory],
    env: &EnvironmentInfo,
    config: &DoctorConfig,
) -> Result<Vec<CategoryResult>, DoctorError> {
    try_join_all(
        categories
            .iter()
            .map(|category| run_category(category, env, config)),
    )
    .await
}

async fn run_category(
    category: &HealthcheckCategory,
    env: &EnvironmentInfo,
    config: &DoctorConfig,
) -> Result<CategoryResult, DoctorError> {
    let checks = try_join_all(
        category
            .checks()
            .iter()
            .filter(|check| check.visible())
            .map(|check| run_check(check.as_ref(), env, config)),
    )
    .await?;

    Ok(CategoryResult {
        label: category.label().to_string(),
        checks,
    })
}

async fn run_check(
    check: &dyn Healthcheck,
    env: &EnvironmentInfo,
    config: &DoctorConfig,
) -> Result<CheckResult, DoctorError> {
    debug!(label = check.label(), "running healthcheck");

    let diagnosis = check
        .diagnose(env, config)
        .await
        .map_err(|source| DoctorError::diagnostic(check.label(), source))?;

    let is_required = check.is_required();

    Ok(CheckResult {
        label: check.label().to_string(),
        needs_to_be_fixed: diagnosis.needs_to_be_fixed,
        kind: IssueKind::classify(diagnosis.needs_to_be_fixed, is_required),
        versions: diagnosis.versions,
        version_range: diagnosis.version_range,
        description: diagnosis
            .description
            .unwrap_or_else(|| check.description().to_string()),
        is_required,
        fixes: check.fixes(),
    })
}
