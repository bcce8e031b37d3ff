//! Command-line interface module for dirsort.
//!
//! This is the thin outer layer over the organizer operations: it parses
//! arguments, loads and compiles filter configuration, invokes the
//! requested operation, and presents the structured result it gets back
//! (human-readable tables by default, pretty JSON with `--json`).

use crate::config::FilterConfig;
use crate::date_organizer::DateOrganizer;
use crate::extension_organizer::ExtensionOrganizer;
use crate::output::OutputFormatter;
use crate::report::OrganizeReport;
use crate::summary::SummaryAnalyzer;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Organize a directory's files by date or extension, or summarize its
/// file types.
#[derive(Debug, Parser)]
#[command(name = "dirsort", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a filter configuration file (TOML).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON instead of formatted text.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Move top-level files into year/month folders by modification date.
    Date {
        /// The directory to organize.
        dir: PathBuf,
    },
    /// Move top-level files into folders named after their extension.
    Extension {
        /// The directory to organize.
        dir: PathBuf,
        /// Create the extension folders under this base instead of inside
        /// the source directory.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
    },
    /// Recursively count files per extension without moving anything.
    Summary {
        /// The directory to summarize.
        dir: PathBuf,
    },
}

/// Runs the parsed CLI command.
///
/// Returns `Err` with a displayable message on precondition failures
/// (missing source directory, bad configuration, uncreatable destination
/// base); per-entry failures are part of the printed report instead.
pub fn run(cli: Cli) -> Result<(), String> {
    let filters = FilterConfig::load(cli.config.as_deref())
        .map_err(|e| format!("Error loading configuration: {}", e))?
        .compile()
        .map_err(|e| format!("Error compiling filters: {}", e))?;

    match cli.command {
        Command::Date { dir } => {
            let spinner = (!cli.json)
                .then(|| OutputFormatter::create_spinner("Organizing by date..."));
            let result = DateOrganizer::organize_with_filters(&dir, &filters);
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            let report = result.map_err(|e| e.to_string())?;
            present_report(&dir.display().to_string(), &report, cli.json)
        }
        Command::Extension { dir, dest } => {
            let spinner = (!cli.json)
                .then(|| OutputFormatter::create_spinner("Organizing by extension..."));
            let result =
                ExtensionOrganizer::organize_with_filters(&dir, dest.as_deref(), &filters);
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            let report = result.map_err(|e| e.to_string())?;
            present_report(&dir.display().to_string(), &report, cli.json)
        }
        Command::Summary { dir } => {
            let tally = SummaryAnalyzer::summarize(&dir);
            if cli.json {
                let json = serde_json::to_string_pretty(&tally)
                    .map_err(|e| format!("Failed to serialize summary: {}", e))?;
                println!("{}", json);
            } else {
                OutputFormatter::info(&format!("Summary of: {}", dir.display()));
                OutputFormatter::tally_table(&tally);
            }
            Ok(())
        }
    }
}

fn present_report(dir: &str, report: &OrganizeReport, json: bool) -> Result<(), String> {
    if json {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    OutputFormatter::info(&format!("Organized: {}", dir));
    OutputFormatter::organize_report(report);

    if report.is_clean() {
        OutputFormatter::success("Organization complete.");
    } else {
        OutputFormatter::warning("Some entries could not be organized. See failures above.");
    }

    Ok(())
}
