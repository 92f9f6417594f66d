//! Changelog command — print the current section of a changelog.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use reltool_core::changelog;
use reltool_core::config::Config;

/// Arguments for the `changelog` subcommand.
#[derive(Args, Debug, Default)]
pub struct ChangelogArgs {
    /// Changelog file (default: `changelog.path` from config, then CHANGELOG.md)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Serialize)]
struct SectionOutput<'a> {
    path: &'a Utf8Path,
    lines: &'a [String],
}

/// Write each line followed by a newline.
pub fn write_lines<W, S>(out: &mut W, lines: &[S]) -> std::io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()
}

/// Resolve the changelog file from the argument or configuration.
fn resolve_path(
    file: Option<PathBuf>,
    config: &Config,
    cwd: &Utf8Path,
) -> anyhow::Result<Utf8PathBuf> {
    match file {
        Some(path) => {
            let path = Utf8PathBuf::try_from(path).map_err(|e| {
                anyhow::anyhow!(
                    "changelog path is not valid UTF-8: {}",
                    e.into_path_buf().display()
                )
            })?;
            Ok(cwd.join(path))
        }
        None => Ok(config.changelog_path(cwd)),
    }
}

/// Print the current changelog section.
#[instrument(name = "cmd_changelog", skip_all, fields(json_output))]
pub fn cmd_changelog(
    args: ChangelogArgs,
    global_json: bool,
    config: &Config,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    let path = resolve_path(args.file, config, cwd)?;
    debug!(json_output = global_json, path = %path, "executing changelog command");

    let lines = changelog::read_current_section(&path)
        .with_context(|| format!("failed to extract current section of {path}"))?;

    let mut stdout = std::io::stdout().lock();
    if global_json {
        let output = SectionOutput {
            path: &path,
            lines: &lines,
        };
        serde_json::to_writer_pretty(&mut stdout, &output)?;
        writeln!(stdout)?;
    } else {
        write_lines(&mut stdout, &lines).context("failed to write changelog section")?;
    }

    Ok(())
}
