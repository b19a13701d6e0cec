//! Result aggregation.
//!
//! Two small passes over classified results: run-wide counters for the
//! summary, and the category filter that scopes remediation.

use crate::healthcheck::{CategoryResult, IssueKind, RunStats};

/// Count classified issues across all categories.
///
/// Healthy checks contribute to neither counter.
pub fn compute_stats(categories: &[CategoryResult]) -> RunStats {
    let mut stats = RunStats::default();
    for check in categories.iter().flat_map(|category| &category.checks) {
        match check.kind {
            Some(IssueKind::Error) => stats.errors += 1,
            Some(IssueKind::Warning) => stats.warnings += 1,
            None => {}
        }
    }
    stats
}

/// Keep only categories that still contain something to fix.
///
/// Used exclusively to scope remediation; the display phase always renders
/// the unfiltered list.
pub fn remove_fixed_categories(categories: Vec<CategoryResult>) -> Vec<CategoryResult> {
    categories
        .into_iter()
        .filter(CategoryResult::has_unfixed)
        .collect()
}
