//! Print the current section of a changelog file.
//!
//! Usage: `release-changelog <FILE>`
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use reltool::ReleaseChangelogArgs;
use reltool::commands::changelog::write_lines;
use reltool_core::changelog;

fn main() -> anyhow::Result<()> {
    let args = ReleaseChangelogArgs::parse();
    let path = Utf8PathBuf::try_from(args.file).map_err(|e| {
        anyhow::anyhow!(
            "changelog path is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;

    let lines = changelog::read_current_section(&path)?;
    write_lines(&mut std::io::stdout().lock(), &lines).context("failed to write changelog section")
}
