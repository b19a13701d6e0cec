//! Property-based tests for the doctor engine
//!
//! Covers the classification rules, the aggregation counters, remediation
//! scoping and platform fix resolution against randomly generated results,
//! plus the version range checker.

use std::sync::Arc;

use async_trait::async_trait;
use fledge_doctor::healthcheck::resolve_fix;
use fledge_doctor::runner::aggregate::{compute_stats, remove_fixed_categories};
use fledge_doctor::versions::{Version, VersionChecker};
use fledge_doctor::{
    CategoryResult, CheckResult, DetectedVersions, Fix, FixContext, FixError, FixLevel, FixSlots,
    HostPlatform, IssueKind,
};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

struct NoopFix;

#[async_trait]
impl Fix for NoopFix {
    async fn apply(&self, _ctx: &mut FixContext<'_>) -> Result<(), FixError> {
        Ok(())
    }
}

fn slot() -> Arc<dyn Fix> {
    Arc::new(NoopFix)
}

/// Generate an arbitrary display label
fn arb_label() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}"
}

/// Generate one evaluated check from a (needs_to_be_fixed, is_required) pair
fn arb_check() -> impl Strategy<Value = CheckResult> {
    (arb_label(), any::<bool>(), any::<bool>()).prop_map(|(label, needs, required)| CheckResult {
        label,
        needs_to_be_fixed: needs,
        kind: IssueKind::classify(needs, required),
        versions: DetectedVersions::None,
        version_range: None,
        description: String::new(),
        is_required: required,
        fixes: FixSlots::default(),
    })
}

/// Generate a category of up to six checks
fn arb_category() -> impl Strategy<Value = CategoryResult> {
    (arb_label(), prop::collection::vec(arb_check(), 0..6))
        .prop_map(|(label, checks)| CategoryResult { label, checks })
}

/// Generate a full diagnostic report
fn arb_categories() -> impl Strategy<Value = Vec<CategoryResult>> {
    prop::collection::vec(arb_category(), 0..5)
}

/// Generate an arbitrary host platform
fn arb_platform() -> impl Strategy<Value = HostPlatform> {
    prop_oneof![
        Just(HostPlatform::Windows),
        Just(HostPlatform::MacOs),
        Just(HostPlatform::Linux),
        Just(HostPlatform::Other),
    ]
}

/// Generate fix slots with each slot independently populated
fn arb_slots() -> impl Strategy<Value = FixSlots> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(default_fix, windows, macos, linux)| {
            let mut slots = FixSlots::default();
            if default_fix {
                slots = slots.with_default(slot());
            }
            if windows {
                slots = slots.with_windows(slot());
            }
            if macos {
                slots = slots.with_macos(slot());
            }
            if linux {
                slots = slots.with_linux(slot());
            }
            slots
        },
    )
}

/// Generate an arbitrary version triple
fn arb_version_triple() -> impl Strategy<Value = (u32, u32, u32)> {
    (0u32..100, 0u32..100, 0u32..100)
}

// ============================================================================
// Classification and Aggregation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Healthy checks never carry a severity; broken ones always do, split
    /// by the required flag.
    #[test]
    fn prop_classification_follows_required_flag(
        needs in any::<bool>(),
        required in any::<bool>(),
    ) {
        let kind = IssueKind::classify(needs, required);
        match (needs, required) {
            (false, _) => prop_assert_eq!(kind, None),
            (true, true) => prop_assert_eq!(kind, Some(IssueKind::Error)),
            (true, false) => prop_assert_eq!(kind, Some(IssueKind::Warning)),
        }
    }

    /// Stats count exactly the broken checks, split by severity.
    #[test]
    fn prop_stats_count_broken_checks(categories in arb_categories()) {
        let stats = compute_stats(&categories);

        let expected_errors = categories
            .iter()
            .flat_map(|category| &category.checks)
            .filter(|check| check.needs_to_be_fixed && check.is_required)
            .count();
        let expected_warnings = categories
            .iter()
            .flat_map(|category| &category.checks)
            .filter(|check| check.needs_to_be_fixed && !check.is_required)
            .count();

        prop_assert_eq!(stats.errors, expected_errors);
        prop_assert_eq!(stats.warnings, expected_warnings);
    }

    /// Issue totals never exceed the number of checks, and the all-issues
    /// scope covers both counters.
    #[test]
    fn prop_stats_bounded_by_check_count(categories in arb_categories()) {
        let stats = compute_stats(&categories);
        let total: usize = categories.iter().map(|category| category.checks.len()).sum();

        prop_assert!(stats.errors + stats.warnings <= total);
        prop_assert_eq!(
            stats.issues_for(FixLevel::AllIssues),
            stats.errors + stats.warnings
        );
    }

    /// Remediation scoping keeps exactly the categories that still have an
    /// unfixed check, in their original order.
    #[test]
    fn prop_remove_fixed_keeps_only_unfixed(categories in arb_categories()) {
        let remaining = remove_fixed_categories(categories.clone());

        prop_assert!(remaining.iter().all(|category| category.has_unfixed()));

        let expected: Vec<&str> = categories
            .iter()
            .filter(|category| category.has_unfixed())
            .map(|category| category.label.as_str())
            .collect();
        let actual: Vec<&str> = remaining
            .iter()
            .map(|category| category.label.as_str())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Scoping twice changes nothing.
    #[test]
    fn prop_remove_fixed_is_idempotent(categories in arb_categories()) {
        let once = remove_fixed_categories(categories);
        let labels: Vec<String> = once.iter().map(|c| c.label.clone()).collect();

        let twice = remove_fixed_categories(once);
        let labels_twice: Vec<String> = twice.iter().map(|c| c.label.clone()).collect();

        prop_assert_eq!(labels, labels_twice);
    }

    /// Dropping fully-healthy categories never changes the issue counters.
    #[test]
    fn prop_remove_fixed_preserves_stats(categories in arb_categories()) {
        let before = compute_stats(&categories);
        let after = compute_stats(&remove_fixed_categories(categories));
        prop_assert_eq!(before, after);
    }

    /// Errors-only and warnings-only partition what all-issues covers.
    #[test]
    fn prop_fix_levels_partition(
        kind in prop_oneof![Just(IssueKind::Error), Just(IssueKind::Warning)],
    ) {
        prop_assert!(FixLevel::AllIssues.includes(kind));
        prop_assert_ne!(
            FixLevel::ErrorsOnly.includes(kind),
            FixLevel::WarningsOnly.includes(kind)
        );
    }
}

// ============================================================================
// Platform Fix Resolution
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Resolution picks the dedicated platform slot first, then the default,
    /// and never chains through another platform's slot.
    #[test]
    fn prop_resolve_fix_matrix(slots in arb_slots(), platform in arb_platform()) {
        let resolved = resolve_fix(&slots, platform);

        let dedicated = match platform {
            HostPlatform::Windows => slots.windows.clone(),
            HostPlatform::MacOs => slots.macos.clone(),
            HostPlatform::Linux => slots.linux.clone(),
            HostPlatform::Other => None,
        };

        match (dedicated, slots.default_fix.clone(), resolved) {
            (Some(fix), _, Some(resolved)) => prop_assert!(Arc::ptr_eq(&resolved, &fix)),
            (Some(_), _, None) => prop_assert!(false, "dedicated slot must resolve"),
            (None, Some(fix), Some(resolved)) => prop_assert!(Arc::ptr_eq(&resolved, &fix)),
            (None, Some(_), None) => prop_assert!(false, "default slot must resolve"),
            (None, None, resolved) => prop_assert!(resolved.is_none()),
        }
    }
}

// ============================================================================
// Version Range Checker
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Wildcard ranges accept every parseable version.
    #[test]
    fn prop_wildcard_accepts_everything((major, minor, patch) in arb_version_triple()) {
        let version = format!("{major}.{minor}.{patch}");
        prop_assert!(VersionChecker::satisfies(&version, "*"));
        prop_assert!(VersionChecker::satisfies(&version, "latest"));
    }

    /// Display output parses back to the same version.
    #[test]
    fn prop_version_display_roundtrip((major, minor, patch) in arb_version_triple()) {
        let version = Version { major, minor, patch };
        prop_assert_eq!(Version::parse(&version.to_string()), Some(version));
    }

    /// A version sits exactly on its own bounds.
    #[test]
    fn prop_version_on_its_own_bounds((major, minor, patch) in arb_version_triple()) {
        let version = format!("{major}.{minor}.{patch}");
        let at_least = format!(">={version}");
        let at_most = format!("<={version}");
        let above = format!(">{version}");
        let below = format!("<{version}");

        prop_assert!(VersionChecker::satisfies(&version, &at_least));
        prop_assert!(VersionChecker::satisfies(&version, &at_most));
        prop_assert!(!VersionChecker::satisfies(&version, &above));
        prop_assert!(!VersionChecker::satisfies(&version, &below));
    }

    /// Caret ranges never cross a major version.
    #[test]
    fn prop_caret_stays_within_major(
        range_major in 1u32..50,
        version_major in 1u32..50,
        minor in 0u32..20,
    ) {
        let range = format!("^{range_major}.0.0");
        let version = format!("{version_major}.{minor}.0");
        let satisfied = VersionChecker::satisfies(&version, &range);

        prop_assert_eq!(satisfied, version_major == range_major);
    }

    /// Ordering is lexicographic over (major, minor, patch).
    #[test]
    fn prop_version_ordering_matches_tuples(
        a in arb_version_triple(),
        b in arb_version_triple(),
    ) {
        let va = Version { major: a.0, minor: a.1, patch: a.2 };
        let vb = Version { major: b.0, minor: b.1, patch: b.2 };
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
    }
}
