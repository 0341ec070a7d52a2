//! User configuration.
//!
//! The configuration file is optional. It provides defaults for the
//! command-line options, which always take precedence:
//!
//! ```toml
//! delimiter = ","
//! columns = "name,size"
//! style = "f40"
//! ```

use anyhow::{Context, Result};
use log::{debug, trace};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::output::Style;

/// Represents the user config file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlConfig {
    /// Default field delimiter of input files.
    pub delimiter: Option<String>,
    /// Default column selection.
    pub columns: Option<String>,
    /// Default display style.
    pub style: Option<Style>,
}

impl TomlConfig {
    /// Read the config from the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("reading config from {:?}", path);
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file at {:?}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("cannot parse config file at {:?}", path))?;
        trace!("config: {:?}", config);
        Ok(config)
    }

    /// Read the config from the given path, or from the default path.
    ///
    /// An explicit path must exist. A missing file at the default path
    /// falls back to the default config.
    pub fn from_opt_path(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Path of the config file in the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tv").join("config.toml"))
    }
}

/// Parse a path argument.
///
/// The path is shell-expanded: `~` and environment variables are
/// replaced.
pub fn path_parser(path: &str) -> Result<PathBuf, String> {
    shellexpand::full(path)
        .map(|path| PathBuf::from(path.into_owned()))
        .map_err(|err| err.to_string())
}
