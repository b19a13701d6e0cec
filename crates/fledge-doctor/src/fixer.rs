//! Automatic Fix Runner
//!
//! Sequential remediation over the checks matching a fix level. Fixes run
//! strictly one at a time: they mutate shared, unsynchronized state such as
//! the filesystem, environment variables and package databases. One failing
//! fix never stops the rest of the queue.

use tracing::{debug, warn};

use crate::config::DoctorConfig;
use crate::display;
use crate::envinfo::EnvironmentInfo;
use crate::error::FixError;
use crate::healthcheck::{
    resolve_fix, CategoryResult, CheckResult, FixContext, FixLevel, ManualInstallation,
};
use crate::loader::Loader;
use crate::platform::HostPlatform;
use crate::runner::aggregate;

/// Attempt an automatic fix for every issue matching `level`.
///
/// `categories` must already be scoped to remediation-eligible categories.
/// Completion means every matching fix was attempted, not that all repairs
/// succeeded; the user re-runs diagnostics to verify.
pub async fn run_automatic_fix(
    categories: &[CategoryResult],
    level: FixLevel,
    loader: &mut Loader,
    env: &EnvironmentInfo,
    config: &DoctorConfig,
) -> Result<(), FixError> {
    run_on_platform(categories, level, HostPlatform::current(), loader, env, config).await
}

pub(crate) async fn run_on_platform(
    categories: &[CategoryResult],
    level: FixLevel,
    platform: HostPlatform,
    loader: &mut Loader,
    env: &EnvironmentInfo,
    config: &DoctorConfig,
) -> Result<(), FixError> {
    let stats = aggregate::compute_stats(categories);
    display::print_fix_intro(stats.issues_for(level))?;

    for category in categories {
        let matching: Vec<&CheckResult> = category
            .checks
            .iter()
            .filter(|check| matches_level(check, level))
            .collect();
        if matching.is_empty() {
            continue;
        }

        display::print_remediation_category(&category.label)?;

        for check in matching {
            debug!(label = check.label.as_str(), "attempting automatic fix");
            loader.start(check.label.clone());

            let fix = match resolve_fix(&check.fixes, platform) {
                Some(fix) => fix,
                None => {
                    loader.fail();
                    display::print_manual_installations(&[ManualInstallation::message(format!(
                        "{} cannot be fixed automatically on this platform",
                        check.label
                    ))])?;
                    continue;
                }
            };

            let (result, notes) = {
                let mut ctx = FixContext::new(&mut *loader, env, config);
                let result = fix.apply(&mut ctx).await;
                (result, ctx.into_manual())
            };

            if let Err(err) = result {
                warn!(label = check.label.as_str(), error = %err, "automatic fix failed");
                // The fix may have resolved the spinner before dying
                if !loader.message().is_empty() {
                    loader.fail();
                }
                if let Some(output) = err.captured_output() {
                    display::print_command_output(output)?;
                }
            }

            loader.stop();
            display::print_manual_installations(&notes)?;
        }
    }

    Ok(())
}

fn matches_level(check: &CheckResult, level: FixLevel) -> bool {
    match check.kind {
        Some(kind) => level.includes(kind),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::healthcheck::{DetectedVersions, Fix, FixSlots, IssueKind};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Fix that records call counts and observed concurrency
    #[derive(Default)]
    struct CountingFix {
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    #[async_trait]
    impl Fix for CountingFix {
        async fn apply(&self, _ctx: &mut FixContext<'_>) -> Result<(), FixError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingFix {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Fix for FailingFix {
        async fn apply(&self, _ctx: &mut FixContext<'_>) -> Result<(), FixError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(FixError::command("install failed", Some("stderr text".into())))
        }
    }

    fn issue(label: &str, kind: IssueKind, slots: FixSlots) -> CheckResult {
        CheckResult {
            label: label.to_string(),
            needs_to_be_fixed: true,
            kind: Some(kind),
            versions: DetectedVersions::None,
            version_range: None,
            description: String::new(),
            is_required: kind == IssueKind::Error,
            fixes: slots,
        }
    }

    fn category(checks: Vec<CheckResult>) -> CategoryResult {
        CategoryResult {
            label: "Common".into(),
            checks,
        }
    }

    async fn run(
        categories: &[CategoryResult],
        level: FixLevel,
        platform: HostPlatform,
    ) -> Result<(), FixError> {
        let mut loader = Loader::hidden();
        let env = EnvironmentInfo::default();
        let config = DoctorConfig::default();
        run_on_platform(categories, level, platform, &mut loader, &env, &config).await
    }

    #[tokio::test]
    async fn test_fixes_run_strictly_sequentially() {
        let fix = Arc::new(CountingFix::default());
        let categories = vec![category(vec![
            issue("a", IssueKind::Error, FixSlots::default().with_default(fix.clone())),
            issue("b", IssueKind::Error, FixSlots::default().with_default(fix.clone())),
            issue("c", IssueKind::Error, FixSlots::default().with_default(fix.clone())),
        ])];

        run(&categories, FixLevel::AllIssues, HostPlatform::Linux)
            .await
            .unwrap();

        assert_eq!(fix.calls.load(Ordering::SeqCst), 3);
        assert_eq!(fix.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failing_fix_does_not_stop_queue() {
        let before = Arc::new(CountingFix::default());
        let failing = Arc::new(FailingFix {
            calls: AtomicUsize::new(0),
        });
        let after = Arc::new(CountingFix::default());

        let categories = vec![category(vec![
            issue("a", IssueKind::Error, FixSlots::default().with_default(before.clone())),
            issue("b", IssueKind::Error, FixSlots::default().with_default(failing.clone())),
            issue("c", IssueKind::Error, FixSlots::default().with_default(after.clone())),
        ])];

        run(&categories, FixLevel::AllIssues, HostPlatform::Linux)
            .await
            .unwrap();

        assert_eq!(before.calls.load(Ordering::SeqCst), 1);
        assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
        assert_eq!(after.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_level_filters_fixes() {
        let error_fix = Arc::new(CountingFix::default());
        let warning_fix = Arc::new(CountingFix::default());

        let categories = vec![category(vec![
            issue(
                "err",
                IssueKind::Error,
                FixSlots::default().with_default(error_fix.clone()),
            ),
            issue(
                "warn",
                IssueKind::Warning,
                FixSlots::default().with_default(warning_fix.clone()),
            ),
        ])];

        run(&categories, FixLevel::ErrorsOnly, HostPlatform::Linux)
            .await
            .unwrap();
        assert_eq!(error_fix.calls.load(Ordering::SeqCst), 1);
        assert_eq!(warning_fix.calls.load(Ordering::SeqCst), 0);

        run(&categories, FixLevel::WarningsOnly, HostPlatform::Linux)
            .await
            .unwrap();
        assert_eq!(error_fix.calls.load(Ordering::SeqCst), 1);
        assert_eq!(warning_fix.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_healthy_checks_are_skipped() {
        let fix = Arc::new(CountingFix::default());
        let mut healthy = issue("ok", IssueKind::Error, FixSlots::default().with_default(fix.clone()));
        healthy.needs_to_be_fixed = false;
        healthy.kind = None;

        let categories = vec![category(vec![healthy])];
        run(&categories, FixLevel::AllIssues, HostPlatform::Linux)
            .await
            .unwrap();

        assert_eq!(fix.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unresolvable_slot_continues_queue() {
        let windows_only = Arc::new(CountingFix::default());
        let reachable = Arc::new(CountingFix::default());

        let categories = vec![category(vec![
            issue(
                "win",
                IssueKind::Error,
                FixSlots::default().with_windows(windows_only.clone()),
            ),
            issue(
                "any",
                IssueKind::Error,
                FixSlots::default().with_default(reachable.clone()),
            ),
        ])];

        run(&categories, FixLevel::AllIssues, HostPlatform::Linux)
            .await
            .unwrap();

        assert_eq!(windows_only.calls.load(Ordering::SeqCst), 0);
        assert_eq!(reachable.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_platform_slot_dispatch() {
        let macos_fix = Arc::new(CountingFix::default());
        let default_fix = Arc::new(CountingFix::default());

        let slots = FixSlots::default()
            .with_macos(macos_fix.clone())
            .with_default(default_fix.clone());
        let categories = vec![category(vec![issue("tool", IssueKind::Error, slots)])];

        run(&categories, FixLevel::AllIssues, HostPlatform::MacOs)
            .await
            .unwrap();
        assert_eq!(macos_fix.calls.load(Ordering::SeqCst), 1);
        assert_eq!(default_fix.calls.load(Ordering::SeqCst), 0);

        run(&categories, FixLevel::AllIssues, HostPlatform::Linux)
            .await
            .unwrap();
        assert_eq!(macos_fix.calls.load(Ordering::SeqCst), 1);
        assert_eq!(default_fix.calls.load(Ordering::SeqCst), 1);
    }
}
