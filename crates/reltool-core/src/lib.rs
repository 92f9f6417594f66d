//! Core library for reltool.
//!
//! # Modules
//!
//! - [`changelog`] - Current changelog section extraction
//! - [`version`] - Release version string validation
//! - [`config`] - Configuration loading, discovery, and errors
//!
//! # Quick Start
//!
//! ```
//! use reltool_core::{changelog, version};
//!
//! let text = "# Unreleased\n- fix parser\n# 1.0.0\n- initial";
//! assert_eq!(changelog::current_section_of(text), ["- fix parser"]);
//!
//! assert!(version::is_valid("1.1.0-RC1"));
//! assert!(!version::is_valid("v1.1.0"));
//! ```
#![deny(unsafe_code)]

pub mod changelog;

pub mod config;

pub mod version;

pub use changelog::{ChangelogError, ChangelogResult};

pub use config::{Config, ConfigError, ConfigLoader, ConfigResult, LogLevel};

pub use version::{VersionCheck, VersionError, VersionResult};
