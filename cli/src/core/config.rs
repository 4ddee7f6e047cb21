//! # devport Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module produces the `BindOptions` handed to the networking helpers:
//! the requested port (if any), the host the server binds, and whether it
//! serves TLS.
//!
//! ## Architecture
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Default values defined in the code
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/devport/config.toml` on Linux)
//! 3. Project-specific `.devport.toml` in the current directory or its
//!    ancestors (the search stops at a directory containing `.git`)
//! 4. Command-line flags
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! port = 3000
//! host = "0.0.0.0"
//! use_tls = false
//! ```
//!
//! Loading:
//!
//! ```rust,ignore
//! let options = config::load_bind_options(&BindOverrides::default())?;
//! println!("Binding {}:{:?}", options.host, options.port);
//! ```
//!
use crate::core::error::{DevportError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".devport.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// Host used when neither a file nor a flag sets one.
pub const DEFAULT_HOST: &str = "localhost";

/// # Bind Options (`BindOptions`)
///
/// How a development server intends to bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOptions {
    /// Explicitly requested port. `Some(0)` is a request for port 0, not "unset".
    pub port: Option<u16>,
    /// Host to bind; `0.0.0.0` means every interface.
    pub host: String,
    pub use_tls: bool,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            port: None,
            host: DEFAULT_HOST.to_string(),
            use_tls: false,
        }
    }
}

/// Settings read from a TOML file. Every field is optional so a file only
/// needs to name what it changes.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub use_tls: Option<bool>,
}

/// Values given on the command line. `None` leaves lower layers in effect.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BindOverrides {
    pub port: Option<u16>,
    pub host: Option<String>,
    /// `Some(false)` turns TLS off even when a configuration file enables it.
    pub tls: Option<bool>,
}

/// # Load Bind Options (`load_bind_options`)
///
/// Loads the user and project configuration files (if present), applies the
/// command-line overrides on top and validates the result.
///
/// ## Errors
///
/// Returns an error if the current directory cannot be determined, a config
/// file exists but cannot be read or parsed, or the merged options are invalid.
pub fn load_bind_options(overrides: &BindOverrides) -> Result<BindOptions> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = load_project_config(&current_dir)?;

    let options = merge_options(user_config, project_config, overrides);
    validate_options(&options).context("Configuration validation failed")?;
    debug!("Final bind options: {:?}", options);
    Ok(options)
}

fn load_user_config() -> Result<Option<FileConfig>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "devport", "devport") {
        let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<FileConfig>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in {} or ancestors.",
            PROJECT_CONFIG_FILENAME,
            start_dir.display()
        );
        Ok(None)
    }
}

/// Walks from `start_dir` towards the filesystem root looking for
/// `.devport.toml`. A directory holding `.git` ends the search after it has
/// been checked itself.
fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_options(
    user: Option<FileConfig>,
    project: Option<FileConfig>,
    overrides: &BindOverrides,
) -> BindOptions {
    let user = user.unwrap_or_default();
    let project = project.unwrap_or_default();
    let defaults = BindOptions::default();

    BindOptions {
        port: overrides.port.or(project.port).or(user.port),
        host: overrides
            .host
            .clone()
            .or(project.host)
            .or(user.host)
            .unwrap_or(defaults.host),
        use_tls: overrides
            .tls
            .or(project.use_tls)
            .or(user.use_tls)
            .unwrap_or(defaults.use_tls),
    }
}

fn validate_options(options: &BindOptions) -> Result<()> {
    if options.host.trim().is_empty() {
        return Err(anyhow!(DevportError::Config(
            "host must not be empty".to_string()
        )));
    }
    if options.host.contains('/') {
        return Err(anyhow!(DevportError::Config(format!(
            "Invalid host '{}': expected a hostname or IP address without a path.",
            options.host
        ))));
    }
    Ok(())
}
