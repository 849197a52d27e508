//! Locating and reading the configuration file.
//!
//! Search order: an explicit path, then `$XDG_CONFIG_HOME/tinyfetch/config.yml`,
//! then `~/.config/tinyfetch/config.yml`. When nothing is found the built-in
//! default configuration is used.

use crate::error::ParseError;
use crate::manifest::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use tinyfetch_core::Config;
use tracing::debug;

const CONFIG_FILE: &str = "tinyfetch/config.yml";

/// XDG-compliant config paths to search, highest priority first.
pub fn config_paths() -> Vec<PathBuf> {
    config_paths_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        home_dir(),
    )
}

/// Testable core of [`config_paths`].
pub fn config_paths_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(xdg) = xdg_config_home.filter(|p| !p.as_os_str().is_empty()) {
        paths.push(xdg.join(CONFIG_FILE));
    }

    if let Some(home) = home {
        paths.push(home.join(".config").join(CONFIG_FILE));
    }

    paths
}

/// `$HOME`, if set and non-empty.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Load and validate the configuration.
///
/// An explicit `path` must exist. Without one, the first existing search path
/// is used, or [`Config::default`] when none exists.
pub fn load(path: Option<&Path>) -> Result<Config, ParseError> {
    let home = home_dir();

    if let Some(path) = path {
        return load_from_file(path, home.as_deref());
    }

    for candidate in config_paths() {
        if candidate.is_file() {
            return load_from_file(&candidate, home.as_deref());
        }
    }

    debug!("no configuration file found, using defaults");
    Ok(Config::default())
}

/// Read, parse and validate one file.
pub fn load_from_file(path: &Path, home: Option<&Path>) -> Result<Config, ParseError> {
    debug!(path = %path.display(), "loading configuration");

    let contents = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Manifest::from_yaml(&contents)?.validate(home)
}
