//! Library interface for the `reltool` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The entry points are
//! `main.rs` (`reltool`) and the standalone programs under `src/bin/`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`ReleaseChangelogArgs`], [`ValidateSemverArgs`] - Standalone program parsers
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! [`command()`], [`release_changelog_command()`] and [`validate_semver_command()`]
//! return the clap `Command`s for generating man pages and shell completions
//! via `xtask`.

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG            Log filter (e.g., debug, reltool=trace)
    RELTOOL_LOG_PATH    Explicit log file path
    RELTOOL_LOG_DIR     Log directory
";

/// Command-line interface definition for reltool.
#[derive(Parser)]
#[command(name = "reltool")]
#[command(about = "Release helpers: changelog sections and version checks", long_about = None)]
#[command(version)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the current (unreleased) section of a changelog
    Changelog(commands::changelog::ChangelogArgs),

    /// Check that a version string is a valid release version
    Validate(commands::validate::ValidateArgs),

    /// Show package and configuration information
    Info(commands::info::InfoArgs),

    /// Diagnose configuration and environment
    Doctor(commands::doctor::DoctorArgs),
}

/// Arguments of the standalone `release-changelog` program.
///
/// The program takes exactly one positional argument and has no flags, so
/// `--help` names a file like any other value.
#[derive(Parser, Debug)]
#[command(name = "release-changelog", version)]
#[command(
    about = "Print the lines between the first and second top-level headings of a changelog",
    long_about = None
)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct ReleaseChangelogArgs {
    /// Changelog file to read
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    pub file: PathBuf,
}

/// Arguments of the standalone `validate-semver` program.
///
/// Any single argument, including `--version`, is the version to check.
#[derive(Parser, Debug)]
#[command(name = "validate-semver", version)]
#[command(
    about = "Exit 0 if VERSION is MAJOR.MINOR.PATCH with an optional -RC<n> suffix, 1 otherwise",
    long_about = None
)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct ValidateSemverArgs {
    /// Version string to check
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub version: String,
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

/// Returns the `release-changelog` clap command for documentation generation
pub fn release_changelog_command() -> clap::Command {
    ReleaseChangelogArgs::command()
}

/// Returns the `validate-semver` clap command for documentation generation
pub fn validate_semver_command() -> clap::Command {
    ValidateSemverArgs::command()
}
