//! Configuration file support
//!
//! Loads settings from ~/.colorport.toml (or %USERPROFILE%\.colorport.toml on Windows)
//!
//! Example:
//! ```toml
//! # colorport configuration
//! scheme-name = "sunrise"
//! background = "light"
//! default-format = "vim"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, StyleError};
use crate::style::Color;

/// Editor background mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Derive from the scheme's background color
    #[default]
    Auto,
    Light,
    Dark,
}

impl Background {
    /// Concrete mode name for a scheme with background `bgcolor`
    pub fn resolve(self, bgcolor: Color) -> &'static str {
        match self {
            Background::Light => "light",
            Background::Dark => "dark",
            Background::Auto if bgcolor.is_light() => "light",
            Background::Auto => "dark",
        }
    }
}

impl FromStr for Background {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Background::Auto),
            "light" => Ok(Background::Light),
            "dark" => Ok(Background::Dark),
            _ => Err(StyleError::Config(format!("unknown background mode: {s}"))),
        }
    }
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Name written into generated schemes
    pub scheme_name: String,
    /// Background mode for generated editor schemes
    pub background: Background,
    /// Output format when none is given on the command line
    pub default_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme_name: "colorport".to_string(),
            background: Background::Auto,
            default_format: "vim".to_string(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".colorport.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".colorport.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file gives the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .map_err(|e| StyleError::Config(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| StyleError::Config(e.to_string()))
    }
}
