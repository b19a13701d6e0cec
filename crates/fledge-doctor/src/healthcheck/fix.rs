//! Remediation actions and platform dispatch.
//!
//! Each healthcheck exposes up to four fix slots: one per supported platform
//! plus a default. Resolution picks the platform slot when present, otherwise
//! the default, with no further fallback.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DoctorConfig;
use crate::envinfo::EnvironmentInfo;
use crate::error::FixError;
use crate::loader::Loader;
use crate::platform::HostPlatform;

/// Instructions shown when a check cannot be repaired automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManualInstallation {
    /// Free-form note
    Message(String),
    /// Pointer to setup documentation
    Docs { healthcheck: String, url: String },
    /// A command the user should run themselves
    Command { healthcheck: String, command: String },
}

impl ManualInstallation {
    /// Create a free-form note
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// Create a documentation pointer
    pub fn docs(healthcheck: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Docs {
            healthcheck: healthcheck.into(),
            url: url.into(),
        }
    }

    /// Create a run-this-command note
    pub fn command(healthcheck: impl Into<String>, command: impl Into<String>) -> Self {
        Self::Command {
            healthcheck: healthcheck.into(),
            command: command.into(),
        }
    }
}

/// Execution context handed to a fix.
///
/// Owns the loader for the duration of one fix; manual-installation notes
/// are queued here and rendered after the fix returns.
pub struct FixContext<'a> {
    pub loader: &'a mut Loader,
    pub env: &'a EnvironmentInfo,
    pub config: &'a DoctorConfig,
    manual: Vec<ManualInstallation>,
}

impl<'a> FixContext<'a> {
    /// Create a context for one fix invocation
    pub fn new(loader: &'a mut Loader, env: &'a EnvironmentInfo, config: &'a DoctorConfig) -> Self {
        Self {
            loader,
            env,
            config,
            manual: Vec::new(),
        }
    }

    /// Queue instructions to display once this fix finishes.
    pub fn log_manual_installation(&mut self, note: ManualInstallation) {
        self.manual.push(note);
    }

    /// Consume the context, releasing the loader and yielding queued notes.
    pub fn into_manual(self) -> Vec<ManualInstallation> {
        self.manual
    }
}

/// A single remediation action.
#[async_trait]
pub trait Fix: Send + Sync {
    /// Attempt the repair. Failures are isolated to this one check.
    async fn apply(&self, ctx: &mut FixContext<'_>) -> Result<(), FixError>;
}

/// Per-platform fix slots.
///
/// `default_fix` runs anywhere a dedicated slot is absent.
#[derive(Clone, Default)]
pub struct FixSlots {
    pub default_fix: Option<Arc<dyn Fix>>,
    pub windows: Option<Arc<dyn Fix>>,
    pub macos: Option<Arc<dyn Fix>>,
    pub linux: Option<Arc<dyn Fix>>,
}

impl FixSlots {
    /// Set the default slot
    pub fn with_default(mut self, fix: Arc<dyn Fix>) -> Self {
        self.default_fix = Some(fix);
        self
    }

    /// Set the Windows slot
    pub fn with_windows(mut self, fix: Arc<dyn Fix>) -> Self {
        self.windows = Some(fix);
        self
    }

    /// Set the macOS slot
    pub fn with_macos(mut self, fix: Arc<dyn Fix>) -> Self {
        self.macos = Some(fix);
        self
    }

    /// Set the Linux slot
    pub fn with_linux(mut self, fix: Arc<dyn Fix>) -> Self {
        self.linux = Some(fix);
        self
    }

    /// True when no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.default_fix.is_none()
            && self.windows.is_none()
            && self.macos.is_none()
            && self.linux.is_none()
    }
}

impl fmt::Debug for FixSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixSlots")
            .field("default_fix", &self.default_fix.is_some())
            .field("windows", &self.windows.is_some())
            .field("macos", &self.macos.is_some())
            .field("linux", &self.linux.is_some())
            .finish()
    }
}

/// Resolve the fix to run on `platform`.
///
/// A platform slot wins over the default; there is no chained fallback
/// through other platforms.
pub fn resolve_fix(slots: &FixSlots, platform: HostPlatform) -> Option<Arc<dyn Fix>> {
    let dedicated = match platform {
        HostPlatform::Windows => slots.windows.as_ref(),
        HostPlatform::MacOs => slots.macos.as_ref(),
        HostPlatform::Linux => slots.linux.as_ref(),
        HostPlatform::Other => None,
    };
    dedicated.or(slots.default_fix.as_ref()).cloned()
}

/// Fix that only emits installation instructions.
///
/// Covers the common case where repair means pointing at documentation:
/// the spinner is marked failed and the note is queued for display.
pub struct ManualFix {
    label: String,
    note: ManualInstallation,
}

impl ManualFix {
    /// Point at setup documentation
    pub fn docs(label: impl Into<String>, url: impl Into<String>) -> Self {
        let label = label.into();
        let note = ManualInstallation::docs(label.clone(), url);
        Self { label, note }
    }

    /// Ask the user to run a command
    pub fn command(label: impl Into<String>, command: impl Into<String>) -> Self {
        let label = label.into();
        let note = ManualInstallation::command(label.clone(), command);
        Self { label, note }
    }

    /// Show a free-form note
    pub fn message(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            note: ManualInstallation::message(text),
        }
    }
}

#[async_trait]
impl Fix for ManualFix {
    async fn apply(&self, ctx: &mut FixContext<'_>) -> Result<(), FixError> {
        ctx.loader.fail_with(&self.label);
        ctx.log_manual_installation(self.note.clone());
        Ok(())
    }
}
