//! Healthcheck Contract
//!
//! The provider boundary of the doctor: the `Healthcheck` trait, diagnostic
//! result types, platform-slotted fixes and the registry that groups checks
//! into display categories.

mod check;
mod fix;
mod registry;
mod types;

pub use check::Healthcheck;
pub use fix::{resolve_fix, Fix, FixContext, FixSlots, ManualFix, ManualInstallation};
pub use registry::{HealthcheckCategory, HealthcheckRegistry};
pub use types::{
    CategoryResult, CheckResult, DetectedVersions, Diagnosis, FixLevel, IssueKind, RunStats,
};
