//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output, including colored
//! status lines, an in-flight spinner, and formatted result tables. The core
//! operations never print; everything user-visible goes through here.

use crate::report::OrganizeReport;
use crate::summary::ExtensionTally;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Creates a ticking spinner shown while an operation is in flight.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// let spinner = OutputFormatter::create_spinner("Organizing...");
    /// // ... do the work ...
    /// spinner.finish_and_clear();
    /// ```
    pub fn create_spinner(message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Prints the outcome of an organization run: the three counters and,
    /// when present, one line per failed entry.
    pub fn organize_report(report: &OrganizeReport) {
        Self::header("RESULT");
        println!("  Organized: {}", report.organized.to_string().green());
        println!("  Skipped:   {}", report.skipped.to_string().yellow());
        println!(
            "  Errored:   {}",
            if report.errored == 0 {
                report.errored.to_string().normal()
            } else {
                report.errored.to_string().red()
            }
        );
        println!("  Total:     {}", report.total.to_string().bold());

        if !report.failures.is_empty() {
            Self::header("FAILURES");
            for failure in &report.failures {
                eprintln!("  {} {}: {}", "✗".red(), failure.name, failure.reason);
            }
        }
    }

    /// Prints a summary table of file counts per extension, sorted by key.
    pub fn tally_table(tally: &ExtensionTally) {
        Self::header("SUMMARY");

        if tally.is_empty() {
            println!("  No files found.");
            return;
        }

        let mut rows: Vec<_> = tally.iter().collect();
        rows.sort_by_key(|&(key, _)| key);

        let max_key_len = rows
            .iter()
            .map(|(key, _)| if key.is_empty() { 14 } else { key.len() })
            .max()
            .unwrap_or(0)
            .max(9); // At least "Extension" width

        println!(
            "{:<width$} | {}",
            "Extension".bold(),
            "Files".bold(),
            width = max_key_len
        );
        println!("{}", "-".repeat(max_key_len + 10));

        let mut total = 0;
        for (key, count) in &rows {
            let label = if key.is_empty() { "(no extension)" } else { key };
            let file_word = if **count == 1 { "file" } else { "files" };
            println!(
                "{:<width$} | {} {}",
                label,
                count.to_string().green(),
                file_word,
                width = max_key_len
            );
            total += **count;
        }

        println!("{}", "-".repeat(max_key_len + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total.to_string().green().bold(),
            if total == 1 { "file" } else { "files" },
            width = max_key_len
        );
    }
}
