//! Healthcheck Registry
//!
//! Groups healthchecks into labeled categories. Registration order is
//! load-bearing: diagnosis results and display both follow it.

use std::sync::Arc;

use super::check::Healthcheck;

/// Labeled group of healthchecks.
pub struct HealthcheckCategory {
    label: String,
    checks: Vec<Arc<dyn Healthcheck>>,
}

impl HealthcheckCategory {
    /// Create an empty category
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checks: Vec::new(),
        }
    }

    /// Append a healthcheck
    pub fn register(mut self, check: Arc<dyn Healthcheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// Category label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Registered checks, in order
    pub fn checks(&self) -> &[Arc<dyn Healthcheck>] {
        &self.checks
    }
}

/// Ordered set of categories for one doctor run.
#[derive(Default)]
pub struct HealthcheckRegistry {
    categories: Vec<HealthcheckCategory>,
}

impl HealthcheckRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category
    pub fn register(&mut self, category: HealthcheckCategory) {
        self.categories.push(category);
    }

    /// Registered categories, in order
    pub fn categories(&self) -> &[HealthcheckCategory] {
        &self.categories
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when no category is registered
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of checks across all categories
    pub fn check_count(&self) -> usize {
        self.categories.iter().map(|c| c.checks.len()).sum()
    }
}
