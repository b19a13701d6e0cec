//! Doctor Run Configuration
//!
//! Options for one doctor run, populated from the command line. Healthchecks
//! receive the config read-only; nothing here is persisted.

use std::path::{Path, PathBuf};

/// Configuration handed to the runner, the fixer and every healthcheck.
#[derive(Debug, Clone, Default)]
pub struct DoctorConfig {
    /// Apply all automatic fixes without entering the interactive menu
    pub fix: bool,
    /// Include checks that only matter when contributing to fledge itself
    pub contributor: bool,
    /// Project directory used for lockfile and gradle lookups
    pub project_root: Option<PathBuf>,
}

impl DoctorConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the non-interactive fix flag
    pub fn with_fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    /// Set the contributor flag
    pub fn with_contributor(mut self, contributor: bool) -> Self {
        self.contributor = contributor;
        self
    }

    /// Set the project root
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Project root as a path, when one was supplied
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }
}
