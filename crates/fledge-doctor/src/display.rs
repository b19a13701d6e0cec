//! Result Rendering
//!
//! Terminal output for diagnosis results, the overall summary, the
//! remediation menu and manual-installation notes. Formatting helpers are
//! pure; only the `print_*` functions touch the terminal.

use std::io;

use console::{style, Term};

use crate::healthcheck::{CategoryResult, CheckResult, DetectedVersions, ManualInstallation};
use crate::healthcheck::{IssueKind, RunStats};

/// Lines in the remediation menu, counted so it can be cleared again.
const FIX_OPTIONS_LINES: usize = 6;

/// Format the status line for one check.
pub fn format_issue(check: &CheckResult) -> String {
    let symbol = match check.kind {
        Some(IssueKind::Error) => style("✖").red().to_string(),
        Some(IssueKind::Warning) => style("●").yellow().to_string(),
        None => style("✓").green().to_string(),
    };

    let description = if check.description.is_empty() {
        String::new()
    } else {
        format!(" - {}", check.description)
    };

    format!(" {symbol} {}{description}", check.label)
}

/// Format the found/supported version lines for a failing check.
pub fn format_versions(check: &CheckResult) -> Vec<String> {
    let range = match &check.version_range {
        Some(range) => range,
        None => return Vec::new(),
    };

    let found = match &check.versions {
        DetectedVersions::Many(versions) => {
            format!("- Versions found: {}", style(versions.join(", ")).red())
        }
        DetectedVersions::One(version) => {
            format!("- Version found: {}", style(version).red())
        }
        DetectedVersions::None => format!("- Version found: {}", style("N/A").red()),
    };

    vec![
        format!("   {found}"),
        format!("   - Version supported: {}", style(range).green()),
    ]
}

/// Format one manual-installation note.
pub fn format_manual_installation(note: &ManualInstallation) -> String {
    match note {
        ManualInstallation::Message(text) => text.clone(),
        ManualInstallation::Docs { healthcheck, url } => format!(
            "Read more about how to download, install, and set up {} at {}",
            healthcheck,
            style(url).dim()
        ),
        ManualInstallation::Command {
            healthcheck,
            command,
        } => format!(
            "Please install {} by running {}",
            healthcheck,
            style(command).bold()
        ),
    }
}

/// Print every category with its check results.
pub fn print_results(categories: &[CategoryResult]) -> io::Result<()> {
    let term = Term::stdout();

    for (index, category) in categories.iter().enumerate() {
        if index > 0 {
            term.write_line("")?;
        }
        term.write_line(&style(&category.label).dim().to_string())?;

        for check in &category.checks {
            term.write_line(&format_issue(check))?;

            if check.needs_to_be_fixed {
                for line in format_versions(check) {
                    term.write_line(&line)?;
                }
            }
        }
    }

    Ok(())
}

/// Print the run-wide error and warning counters.
pub fn print_overall_stats(stats: RunStats) -> io::Result<()> {
    let term = Term::stdout();
    term.write_line("")?;
    term.write_line(&format!("{}   {}", style("Errors:").bold(), stats.errors))?;
    term.write_line(&format!("{} {}", style("Warnings:").bold(), stats.warnings))?;
    Ok(())
}

/// Print the interactive remediation menu.
pub fn print_fix_options() -> io::Result<()> {
    let term = Term::stdout();
    term.write_line("")?;
    term.write_line(&style("Usage").bold().to_string())?;
    term.write_line(&format!(
        " {} Press {} to try to fix issues automatically",
        style("›").dim(),
        style("f").bold()
    ))?;
    term.write_line(&format!(
        " {} Press {} to try to fix errors",
        style("›").dim(),
        style("e").bold()
    ))?;
    term.write_line(&format!(
        " {} Press {} to try to fix warnings",
        style("›").dim(),
        style("w").bold()
    ))?;
    term.write_line(&format!(
        " {} Press {} to exit",
        style("›").dim(),
        style("Enter").bold()
    ))?;
    Ok(())
}

/// Remove a previously printed remediation menu.
pub fn clear_fix_options() -> io::Result<()> {
    let term = Term::stdout();
    if term.is_term() {
        term.clear_last_lines(FIX_OPTIONS_LINES)?;
    }
    Ok(())
}

/// Print the remediation kickoff line.
pub fn print_fix_intro(count: usize) -> io::Result<()> {
    let term = Term::stdout();
    let plural = if count == 1 { "" } else { "s" };
    term.write_line("")?;
    term.write_line(&format!(
        "Attempting to fix {} issue{plural}...",
        style(count).bold()
    ))?;
    Ok(())
}

/// Print a category header inside the remediation pass.
pub fn print_remediation_category(label: &str) -> io::Result<()> {
    let term = Term::stdout();
    term.write_line("")?;
    term.write_line(&style(label).dim().to_string())?;
    Ok(())
}

/// Print queued manual-installation notes.
pub fn print_manual_installations(notes: &[ManualInstallation]) -> io::Result<()> {
    if notes.is_empty() {
        return Ok(());
    }

    let term = Term::stdout();
    for note in notes {
        term.write_line("")?;
        term.write_line(&format!(" {}", format_manual_installation(note)))?;
    }
    Ok(())
}

/// Print output captured from a failing fix command.
pub fn print_command_output(output: &str) -> io::Result<()> {
    let term = Term::stdout();
    for line in output.lines() {
        term.write_line(&format!("   {line}"))?;
    }
    Ok(())
}
