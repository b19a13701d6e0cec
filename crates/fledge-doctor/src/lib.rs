//! Fledge Doctor
//!
//! Diagnoses a development environment against the toolchain fledge apps
//! need: runs healthchecks concurrently, renders a per-category report and
//! repairs what it can, either through an interactive key menu or in one
//! non-interactive pass.

pub mod checks;
pub mod command;
pub mod config;
pub mod display;
pub mod envinfo;
pub mod error;
pub mod fixer;
pub mod healthcheck;
pub mod loader;
pub mod platform;
pub mod runner;
pub mod selector;
pub mod versions;

pub use command::{run_doctor, DoctorOutcome};
pub use config::DoctorConfig;
pub use envinfo::EnvironmentInfo;
pub use error::{DoctorError, FixError, HealthcheckError};
pub use healthcheck::{
    CategoryResult, CheckResult, DetectedVersions, Diagnosis, Fix, FixContext, FixLevel, FixSlots,
    Healthcheck, HealthcheckCategory, HealthcheckRegistry, IssueKind, ManualFix,
    ManualInstallation, RunStats,
};
pub use loader::Loader;
pub use platform::HostPlatform;
