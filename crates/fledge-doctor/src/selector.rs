//! Remediation Selector
//!
//! Interactive phase between diagnosis and remediation. A small state
//! machine (`Idle → AwaitingKey → FixTriggered | Exited`) driven by raw
//! keyboard input decides whether to run fixes and at which level.
//!
//! Raw capture is released exactly once, before any selected action runs;
//! the guard is idempotent so rapid repeated keys and early returns cannot
//! release twice.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::debug;

use crate::config::DoctorConfig;
use crate::display;
use crate::envinfo::EnvironmentInfo;
use crate::error::DoctorError;
use crate::fixer;
use crate::healthcheck::{CategoryResult, FixLevel};
use crate::loader::Loader;
use crate::runner::aggregate;

/// Classified keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    FixAll,
    FixErrors,
    FixWarnings,
    Exit,
    /// Any key outside the protocol; leaves the selector untouched
    Ignored,
}

impl KeyAction {
    /// Fix level for this action, when it triggers remediation.
    pub fn fix_level(self) -> Option<FixLevel> {
        match self {
            Self::FixAll => Some(FixLevel::AllIssues),
            Self::FixErrors => Some(FixLevel::ErrorsOnly),
            Self::FixWarnings => Some(FixLevel::WarningsOnly),
            Self::Exit | Self::Ignored => None,
        }
    }
}

/// Map one raw key event onto the menu protocol.
///
/// Ctrl-C arrives as a key event in raw mode and means exit, same as Enter.
pub fn classify_key(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignored;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Exit,
            _ => KeyAction::Ignored,
        };
    }

    match key.code {
        KeyCode::Char('f') => KeyAction::FixAll,
        KeyCode::Char('e') => KeyAction::FixErrors,
        KeyCode::Char('w') => KeyAction::FixWarnings,
        KeyCode::Enter => KeyAction::Exit,
        _ => KeyAction::Ignored,
    }
}

/// Selector states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Idle,
    AwaitingKey,
    FixTriggered,
    Exited,
}

/// The keypress state machine.
#[derive(Debug)]
pub struct RemediationSelector {
    state: SelectorState,
}

impl RemediationSelector {
    pub fn new() -> Self {
        Self {
            state: SelectorState::Idle,
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// Arm the selector. Keys only matter while `AwaitingKey`.
    pub fn begin(&mut self) {
        if self.state == SelectorState::Idle {
            self.state = SelectorState::AwaitingKey;
        }
    }

    /// Feed one classified key; returns the state after the transition.
    pub fn apply(&mut self, action: KeyAction) -> SelectorState {
        self.state = match (self.state, action) {
            (SelectorState::AwaitingKey, KeyAction::Ignored) => SelectorState::AwaitingKey,
            (SelectorState::AwaitingKey, KeyAction::Exit) => SelectorState::Exited,
            (SelectorState::AwaitingKey, _) => SelectorState::FixTriggered,
            // Terminal states absorb everything else
            (state, _) => state,
        };
        self.state
    }
}

impl Default for RemediationSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw-mode keyboard guard. Releases at most once, including on drop.
pub struct KeyCapture {
    active: bool,
}

impl KeyCapture {
    /// Switch the terminal into raw mode.
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    /// Leave raw mode. Safe to call more than once.
    pub fn release(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            disable_raw_mode()?;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for KeyCapture {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

/// Final outcome of the interactive phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// The user left without fixing anything
    Exited,
    /// A fix run was triggered and completed
    Fixed,
}

/// Show the menu, wait for a choice and act on it.
///
/// `categories` is the full display list; remediation scoping happens here.
pub async fn run_interactive(
    categories: &[CategoryResult],
    loader: &mut Loader,
    env: &EnvironmentInfo,
    config: &DoctorConfig,
) -> Result<SelectorOutcome, DoctorError> {
    display::print_fix_options()?;

    let mut selector = RemediationSelector::new();
    selector.begin();

    let mut capture = KeyCapture::enable()?;
    let action = wait_for_action(selector).await;
    // Release before acting, whatever the outcome
    capture.release()?;
    let action = action?;

    debug!(?action, "selection made");

    match action.fix_level() {
        Some(level) => {
            display::clear_fix_options()?;
            complete_fix(categories, level, loader, env, config).await
        }
        None => Ok(SelectorOutcome::Exited),
    }
}

/// Block on the keyboard until the selector leaves `AwaitingKey`.
async fn wait_for_action(mut selector: RemediationSelector) -> Result<KeyAction, DoctorError> {
    let action = tokio::task::spawn_blocking(move || -> io::Result<KeyAction> {
        loop {
            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                let action = classify_key(&key);
                if selector.apply(action) != SelectorState::AwaitingKey {
                    return Ok(action);
                }
            }
        }
    })
    .await
    .map_err(io::Error::other)??;

    Ok(action)
}

pub(crate) async fn complete_fix(
    categories: &[CategoryResult],
    level: FixLevel,
    loader: &mut Loader,
    env: &EnvironmentInfo,
    config: &DoctorConfig,
) -> Result<SelectorOutcome, DoctorError> {
    let remediation = aggregate::remove_fixed_categories(categories.to_vec());
    match fixer::run_automatic_fix(&remediation, level, loader, env, config).await {
        Ok(()) => Ok(SelectorOutcome::Fixed),
        Err(err) => Err(DoctorError::fix_runner(err)),
    }
}
