//! Fledge CLI
//!
//! Command line entry point. Subcommands live in their own crates; this
//! binary only parses arguments, wires up logging and maps outcomes onto
//! exit codes.

use std::error::Error;

use clap::{Parser, Subcommand};
use console::style;
use fledge_doctor::{DoctorConfig, DoctorError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SETUP_DOCS_URL: &str = "https://fledge.dev/docs/environment-setup";

#[derive(Parser)]
#[command(name = "fledge", version, about = "A toolkit for building cross-platform mobile apps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diagnose and optionally fix the development environment
    Doctor {
        /// Apply all automatic fixes without the interactive menu
        #[arg(long)]
        fix: bool,
        /// Include checks that only matter when contributing to fledge
        #[arg(long)]
        contributor: bool,
    },
}

// Diagnostics interleave on one thread; fixes are strictly sequential anyway
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Doctor { fix, contributor } => doctor(fix, contributor).await,
    }
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("FLEDGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;
    Ok(())
}

async fn doctor(fix: bool, contributor: bool) -> anyhow::Result<()> {
    let mut config = DoctorConfig::new().with_fix(fix).with_contributor(contributor);
    if let Ok(cwd) = std::env::current_dir() {
        config = config.with_project_root(cwd);
    }

    match fledge_doctor::run_doctor(&config).await {
        Ok(outcome) => {
            debug!(?outcome, "doctor finished");
            Ok(())
        }
        Err(err) => {
            report_doctor_error(&err);
            std::process::exit(1)
        }
    }
}

fn report_doctor_error(err: &DoctorError) {
    // Output captured from a failed fix command comes first, as if the
    // command itself had printed it
    if let Some(output) = err.captured_output() {
        eprintln!("{output}");
    }

    eprintln!("{} {err}", style("error:").red().bold());
    if let Some(source) = err.source() {
        eprintln!("  {} {source}", style("caused by:").dim());
    }
    eprintln!(
        "\nRead more about how to set up your environment at {}",
        style(SETUP_DOCS_URL).underlined()
    );
}
