//! Validate command — check a release version string.

use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use tracing::{debug, instrument};

use reltool_core::version::{self, VersionCheck};

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Version string to check (e.g. 1.2.3 or 1.2.3-RC1)
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub version: String,
}

/// Check `version` and write the report to `out`.
///
/// In text mode a compliant version writes nothing and a non-compliant one
/// writes a single diagnostic line. Returns whether the version is valid.
pub fn check_version<W: Write>(version: &str, json: bool, out: &mut W) -> anyhow::Result<bool> {
    if json {
        let check = VersionCheck::new(version);
        serde_json::to_writer_pretty(&mut *out, &check)?;
        writeln!(out)?;
        return Ok(check.valid);
    }

    match version::validate(version) {
        Ok(()) => Ok(true),
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(false)
        }
    }
}

/// Execute the validate command, exiting 1 for a non-compliant version.
#[instrument(name = "cmd_validate", skip_all, fields(version = %args.version))]
pub fn cmd_validate(args: ValidateArgs, global_json: bool) -> anyhow::Result<ExitCode> {
    debug!(json_output = global_json, "executing validate command");

    let mut stdout = std::io::stdout().lock();
    if check_version(&args.version, global_json, &mut stdout)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
