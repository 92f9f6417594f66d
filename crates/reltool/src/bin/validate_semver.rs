//! Check that a version string is a valid release version.
//!
//! Usage: `validate-semver <VERSION>`
#![deny(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use reltool::ValidateSemverArgs;
use reltool::commands::validate::check_version;

fn main() -> anyhow::Result<ExitCode> {
    let args = ValidateSemverArgs::parse();
    if check_version(&args.version, false, &mut std::io::stdout().lock())? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
