//! Doctor command — diagnose configuration and environment.

use clap::Args;
use inquire::Confirm;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use reltool_core::config::{self, Config};

/// Arguments for the `doctor` subcommand.
#[derive(Args, Debug, Default)]
pub struct DoctorArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct DoctorReport {
    directories: DirectoryPaths,
    config: ConfigStatus,
    environment: Vec<EnvVar>,
}

#[derive(Serialize)]
struct DirectoryPaths {
    config: Option<String>,
    data_local: Option<String>,
}

#[derive(Serialize)]
struct ConfigStatus {
    /// Files merged into the loaded config, lowest precedence first
    files: Vec<String>,
    found: bool,
    /// Changelog file `reltool changelog` reads by default
    changelog: String,
    changelog_exists: bool,
}

#[derive(Serialize)]
struct EnvVar {
    name: &'static str,
    value: Option<String>,
    description: &'static str,
}

const ENV_VARS: &[(&str, &str)] = &[
    ("RUST_LOG", "Log filter directive"),
    ("RELTOOL_LOG_PATH", "Explicit log file path"),
    ("RELTOOL_LOG_DIR", "Log directory"),
    ("XDG_CONFIG_HOME", "Override config directory"),
];

impl DoctorReport {
    fn gather(config: &Config, cwd: &camino::Utf8Path) -> Self {
        let changelog = config.changelog_path(cwd);

        Self {
            directories: DirectoryPaths {
                config: config::user_config_dir().map(|p| p.to_string()),
                data_local: config::user_data_local_dir().map(|p| p.to_string()),
            },
            config: ConfigStatus {
                found: !config.sources.is_empty(),
                files: config.sources.iter().map(|p| p.to_string()).collect(),
                changelog_exists: changelog.is_file(),
                changelog: changelog.to_string(),
            },
            environment: ENV_VARS
                .iter()
                .map(|&(name, description)| EnvVar {
                    name,
                    value: std::env::var(name).ok(),
                    description,
                })
                .collect(),
        }
    }
}

/// Run diagnostics and report configuration status.
#[instrument(name = "cmd_doctor", skip_all, fields(json_output))]
pub fn cmd_doctor(
    _args: DoctorArgs,
    global_json: bool,
    config: &Config,
    cwd: &camino::Utf8Path,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing doctor command");

    let report = DoctorReport::gather(config, cwd);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Configuration".bold().underline());
    for file in &report.config.files {
        println!("  {} Config file: {}", "✓".green(), file.cyan());
    }
    if !report.config.found {
        println!("  {} No config file found", "○".yellow());
        offer_config_creation()?;
    }
    if report.config.changelog_exists {
        println!("  {} Changelog: {}", "✓".green(), report.config.changelog.cyan());
    } else {
        println!(
            "  {} Changelog not found: {}",
            "✗".red(),
            report.config.changelog.yellow()
        );
    }
    println!();

    println!("{}", "Directories".bold().underline());
    print_dir("  Config", report.directories.config.as_deref());
    print_dir("  Data (local)", report.directories.data_local.as_deref());
    println!();

    println!("{}", "Environment".bold().underline());
    println!("  {}: {}", "Working directory".dimmed(), cwd.cyan());
    let set_vars: Vec<_> = report
        .environment
        .iter()
        .filter(|v| v.value.is_some())
        .collect();
    if set_vars.is_empty() {
        println!("  {} No logging or XDG overrides set", "○".dimmed());
    }
    for var in set_vars {
        println!(
            "  {}: {} {}",
            var.name.dimmed(),
            var.value.as_deref().unwrap_or_default().cyan(),
            format!("({})", var.description).dimmed()
        );
    }

    Ok(())
}

fn print_dir(label: &str, path: Option<&str>) {
    match path {
        Some(p) => println!("{}: {}", label.dimmed(), p.cyan()),
        None => println!("{}: {}", label.dimmed(), "(unavailable)".yellow()),
    }
}

/// Offer to write a default user config when none exists.
fn offer_config_creation() -> anyhow::Result<()> {
    if !std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return Ok(());
    }
    let Some(config_dir) = config::user_config_dir() else {
        return Ok(());
    };
    let config_path = config_dir.join("config.yaml");
    if config_path.exists() {
        return Ok(());
    }

    let create = Confirm::new("Create a default user config file?")
        .with_default(false)
        .with_help_message(&format!("Will create {config_path}"))
        .prompt();

    // Declined or interrupted prompts leave everything as is.
    if let Ok(true) = create {
        std::fs::create_dir_all(&config_dir)?;
        let yaml = serde_saphyr::to_string(&Config::default())?;
        std::fs::write(&config_path, yaml)?;
        println!("  {} Created {}", "✓".green(), config_path.cyan());
    }

    Ok(())
}
