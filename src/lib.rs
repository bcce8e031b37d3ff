//! dirsort - organize a directory's files into subfolders
//!
//! This library provides three independent operations over a directory:
//! organizing top-level files into year/month folders by modification date,
//! organizing them into per-extension folders, and recursively summarizing
//! file counts per extension. Organizer runs return structured reports;
//! presentation is left to the caller.

pub mod cli;
pub mod config;
pub mod date_organizer;
pub mod extension_organizer;
pub mod file_mover;
pub mod output;
pub mod report;
pub mod summary;

pub use config::{CompiledFilters, ConfigError, FilterConfig};
pub use date_organizer::DateOrganizer;
pub use extension_organizer::{ExtensionOrganizer, NO_EXTENSION};
pub use file_mover::{FileMover, OrganizeError, OrganizeResult};
pub use report::{EntryFailure, OrganizeReport};
pub use summary::{ExtensionTally, SummaryAnalyzer};

pub use cli::{Cli, Command, run};
