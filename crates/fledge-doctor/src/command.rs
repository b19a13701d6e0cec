//! Doctor Command
//!
//! Orchestrates one full run: snapshot the environment, fan diagnostics out,
//! render the report, then hand over to either the interactive selector or
//! the non-interactive fix pass.

use tracing::{debug, info};

use crate::checks;
use crate::config::DoctorConfig;
use crate::display;
use crate::envinfo::EnvironmentInfo;
use crate::error::DoctorError;
use crate::fixer;
use crate::healthcheck::{FixLevel, HealthcheckRegistry};
use crate::loader::Loader;
use crate::platform::HostPlatform;
use crate::runner::{self, aggregate};
use crate::selector::{self, SelectorOutcome};

/// How a doctor run ended. The binary maps this onto an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorOutcome {
    /// Everything healthy, nothing to do
    Clean,
    /// A fix pass ran to completion
    Fixed,
    /// The user left the interactive menu without fixing
    Exited,
}

/// Run the doctor command end to end.
pub async fn run_doctor(config: &DoctorConfig) -> Result<DoctorOutcome, DoctorError> {
    let mut loader = Loader::new();
    loader.start("Running diagnostics...");

    let env = EnvironmentInfo::collect().await;
    let registry = checks::default_registry(config, HostPlatform::current());
    run_with(&registry, &env, config, &mut loader).await
}

/// Diagnose, report, then remediate one prepared run.
async fn run_with(
    registry: &HealthcheckRegistry,
    env: &EnvironmentInfo,
    config: &DoctorConfig,
    loader: &mut Loader,
) -> Result<DoctorOutcome, DoctorError> {
    debug!(
        categories = registry.len(),
        checks = registry.check_count(),
        "running diagnostics"
    );

    let results = runner::run_diagnostics(registry.categories(), env, config).await?;
    loader.stop();

    let stats = aggregate::compute_stats(&results);
    display::print_results(&results)?;
    display::print_overall_stats(stats)?;

    if config.fix {
        // --fix repairs in one pass without the menu, clean runs included
        let remediation = aggregate::remove_fixed_categories(results);
        fixer::run_automatic_fix(&remediation, FixLevel::AllIssues, loader, env, config)
            .await
            .map_err(DoctorError::fix_runner)?;
        return Ok(DoctorOutcome::Fixed);
    }

    if stats.is_clean() {
        info!("no issues found");
        return Ok(DoctorOutcome::Clean);
    }

    let outcome = selector::run_interactive(&results, loader, env, config).await?;
    Ok(match outcome {
        SelectorOutcome::Exited => DoctorOutcome::Exited,
        SelectorOutcome::Fixed => DoctorOutcome::Fixed,
    })
}
