//! Diagnostic result and classification types.

use serde::Serialize;

use super::fix::FixSlots;

/// Severity of a check that needs fixing.
///
/// Required checks classify as errors, optional ones as warnings. A healthy
/// check has no kind at all and never reaches a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    Error,
    Warning,
}

impl IssueKind {
    /// Classify a diagnosis. Healthy checks stay unclassified.
    pub fn classify(needs_to_be_fixed: bool, is_required: bool) -> Option<Self> {
        if !needs_to_be_fixed {
            return None;
        }
        if is_required {
            Some(Self::Error)
        } else {
            Some(Self::Warning)
        }
    }
}

/// Remediation scope chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixLevel {
    AllIssues,
    ErrorsOnly,
    WarningsOnly,
}

impl FixLevel {
    /// Whether an issue of `kind` falls inside this scope.
    pub fn includes(self, kind: IssueKind) -> bool {
        match self {
            Self::AllIssues => true,
            Self::ErrorsOnly => kind == IssueKind::Error,
            Self::WarningsOnly => kind == IssueKind::Warning,
        }
    }
}

/// Versions reported by a diagnostic probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum DetectedVersions {
    /// Nothing installed, or the probe does not report versions
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl DetectedVersions {
    /// True when no version was found.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Outcome of one diagnostic probe, as reported by the provider.
#[derive(Debug, Clone, Default)]
pub struct Diagnosis {
    pub needs_to_be_fixed: bool,
    pub versions: DetectedVersions,
    pub version_range: Option<String>,
    /// Overrides the descriptor's static description when set
    pub description: Option<String>,
}

impl Diagnosis {
    /// A healthy outcome
    pub fn ok() -> Self {
        Self::default()
    }

    /// An outcome that needs fixing
    pub fn needs_fix() -> Self {
        Self {
            needs_to_be_fixed: true,
            ..Self::default()
        }
    }

    /// Attach a single detected version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.versions = DetectedVersions::One(version.into());
        self
    }

    /// Attach a list of detected versions
    pub fn with_versions(mut self, versions: Vec<String>) -> Self {
        self.versions = DetectedVersions::Many(versions);
        self
    }

    /// Attach the supported version range
    pub fn with_version_range(mut self, range: impl Into<String>) -> Self {
        self.version_range = Some(range.into());
        self
    }

    /// Override the descriptor's description for this outcome
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One evaluated healthcheck, ready for display and remediation.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub label: String,
    pub needs_to_be_fixed: bool,
    /// `None` for healthy checks
    pub kind: Option<IssueKind>,
    pub versions: DetectedVersions,
    pub version_range: Option<String>,
    pub description: String,
    pub is_required: bool,
    /// Carried so remediation needs no second pass over the providers
    #[serde(skip)]
    pub fixes: FixSlots,
}

/// All results for one registry category, in registration order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub label: String,
    pub checks: Vec<CheckResult>,
}

impl CategoryResult {
    /// True when at least one check in this category still needs fixing.
    pub fn has_unfixed(&self) -> bool {
        self.checks.iter().any(|check| check.needs_to_be_fixed)
    }
}

/// Run-wide issue counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub errors: usize,
    pub warnings: usize,
}

impl RunStats {
    /// True when nothing needs fixing.
    pub fn is_clean(self) -> bool {
        self.errors == 0 && self.warnings == 0
    }

    /// Issues inside a remediation scope.
    pub fn issues_for(self, level: FixLevel) -> usize {
        match level {
            FixLevel::AllIssues => self.errors + self.warnings,
            FixLevel::ErrorsOnly => self.errors,
            FixLevel::WarningsOnly => self.warnings,
        }
    }
}
