//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binaries as subprocesses to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command for the named binary, logging into a scratch directory.
#[allow(deprecated)]
fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env("RELTOOL_LOG_DIR", std::env::temp_dir().join("reltool-cli-tests"))
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("reltool-cli-tests-home"))
        .env_remove("RUST_LOG");
    cmd
}

fn cmd() -> Command {
    bin(env!("CARGO_PKG_NAME"))
}

fn write_changelog(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

const CHANGELOG: &str = "\
# Unreleased
## Bugfixes
- fix parser

# 1.0.0
- initial release
";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("changelog"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Changelog Command
// =============================================================================

#[test]
fn changelog_prints_current_section() {
    let tmp = TempDir::new().unwrap();
    let path = write_changelog(tmp.path(), "CHANGELOG.md", CHANGELOG);

    cmd()
        .args(["changelog", &path])
        .assert()
        .success()
        .stdout("## Bugfixes\n- fix parser\n\n");
}

#[test]
fn changelog_defaults_to_changelog_md_in_cwd() {
    let tmp = TempDir::new().unwrap();
    write_changelog(tmp.path(), "CHANGELOG.md", CHANGELOG);

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "changelog"])
        .assert()
        .success()
        .stdout("## Bugfixes\n- fix parser\n\n");
}

#[test]
fn changelog_uses_configured_path() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("docs")).unwrap();
    write_changelog(&tmp.path().join("docs"), "CHANGES.md", "# Next\n- configured");
    fs::write(
        tmp.path().join(".reltool.toml"),
        "[changelog]\npath = \"docs/CHANGES.md\"\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "changelog"])
        .assert()
        .success()
        .stdout("- configured\n");
}

#[test]
fn changelog_headerless_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    let path = write_changelog(tmp.path(), "CHANGELOG.md", "Changelog\n# 1.0.0\n- old\n");

    cmd()
        .args(["changelog", &path])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn changelog_json_outputs_lines() {
    let tmp = TempDir::new().unwrap();
    let path = write_changelog(tmp.path(), "CHANGELOG.md", CHANGELOG);

    let output = cmd().args(["--json", "changelog", &path]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("changelog --json should output valid JSON");

    assert_eq!(
        json["lines"],
        serde_json::json!(["## Bugfixes", "- fix parser", ""])
    );
    assert!(json["path"].as_str().unwrap().ends_with("CHANGELOG.md"));
}

#[test]
fn changelog_reads_crlf_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_changelog(tmp.path(), "CHANGELOG.md", "# Current\r\nKept\r\n# 1.0.0\r\nOld\r\n");

    cmd()
        .args(["changelog", &path])
        .assert()
        .success()
        .stdout("Kept\n");
}

#[test]
fn changelog_missing_file_fails() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "changelog", "missing.md"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("missing.md"));
}

// =============================================================================
// Validate Command
// =============================================================================

#[test]
fn validate_accepts_release_versions() {
    for version in ["1.2.3", "12.3.4", "1.23.4", "1.2.34", "1.2.3-RC0"] {
        cmd().args(["validate", version]).assert().success().stdout("");
    }
}

#[test]
fn validate_rejects_missing_rc_number() {
    cmd()
        .args(["validate", "1.2.3-RC"])
        .assert()
        .code(1)
        .stdout("'1.2.3-RC' does not comply to semantic versioning\n");
}

#[test]
fn validate_rejects_prefix() {
    cmd()
        .args(["validate", "oops1.0.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "'oops1.0.0' does not comply to semantic versioning",
        ));
}

#[test]
fn validate_accepts_hyphen_leading_value() {
    cmd()
        .args(["validate", "-1.2.3"])
        .assert()
        .code(1)
        .stdout("'-1.2.3' does not comply to semantic versioning\n");
}

#[test]
fn validate_json_reports_result() {
    let output = cmd()
        .args(["--json", "validate", "2.0.0-RC1"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["valid"], true);
    assert_eq!(json["release_candidate"], true);
}

// =============================================================================
// Info & Doctor
// =============================================================================

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().args(["info", "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["changelog"].is_string());
}

#[test]
fn doctor_json_outputs_valid_json() {
    let tmp = TempDir::new().unwrap();
    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "doctor", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["config"]["found"], false);
    assert_eq!(json["config"]["changelog_exists"], false);
}

#[test]
fn doctor_text_reports_missing_changelog() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "--color", "never", "doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changelog not found"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn verbosity_flags_accepted() {
    for flag in ["-q", "--quiet", "-v", "-vv", "--verbose"] {
        cmd().args([flag, "validate", "1.0.0"]).assert().success();
    }
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

#[test]
fn logs_never_reach_stdout() {
    cmd()
        .args(["-vv", "validate", "1.0.0"])
        .assert()
        .success()
        .stdout("");
}

// =============================================================================
// Standalone Programs
// =============================================================================

#[test]
fn release_changelog_prints_current_section() {
    let tmp = TempDir::new().unwrap();
    let path = write_changelog(tmp.path(), "CHANGELOG.md", "# Current\nKept\n# 1.0.0\nSkipped");

    bin("release-changelog")
        .arg(&path)
        .assert()
        .success()
        .stdout("Kept\n");
}

#[test]
fn release_changelog_keeps_subsections() {
    let tmp = TempDir::new().unwrap();
    let path = write_changelog(tmp.path(), "CHANGELOG.md", "# Current\n## Bugfixes\nOops");

    bin("release-changelog")
        .arg(&path)
        .assert()
        .success()
        .stdout("## Bugfixes\nOops\n");
}

#[test]
fn release_changelog_reads_crlf_and_cr_files() {
    let tmp = TempDir::new().unwrap();
    let crlf = write_changelog(tmp.path(), "crlf.md", "# Current\r\nKept\r\n# 1.0.0\r\nOld\r\n");
    let cr = write_changelog(tmp.path(), "cr.md", "# Current\rKept\r# 1.0.0\rOld\r");

    for path in [crlf, cr] {
        bin("release-changelog")
            .arg(&path)
            .assert()
            .success()
            .stdout("Kept\n");
    }
}

#[test]
fn release_changelog_treats_help_as_file_name() {
    let tmp = TempDir::new().unwrap();

    bin("release-changelog")
        .current_dir(tmp.path())
        .arg("--help")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("--help"));
}

#[test]
fn release_changelog_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.md");

    bin("release-changelog")
        .arg(path.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.md"));
}

#[test]
fn release_changelog_requires_argument() {
    bin("release-changelog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn validate_semver_valid_is_silent() {
    bin("validate-semver")
        .arg("1.2.3-RC0")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn validate_semver_invalid_exits_one() {
    bin("validate-semver")
        .arg("1.2.3+build")
        .assert()
        .code(1)
        .stdout("'1.2.3+build' does not comply to semantic versioning\n");
}

#[test]
fn validate_semver_treats_flags_as_versions() {
    for flag in ["--version", "--help"] {
        bin("validate-semver")
            .arg(flag)
            .assert()
            .code(1)
            .stdout(format!("'{flag}' does not comply to semantic versioning\n"));
    }
}
