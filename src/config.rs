use crate::error::{DemoError, Result};
use colored::Colorize;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV: &str = "DS_DEMO_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub banner_fill: char,
    pub banner_width: usize,
    pub color: bool,
    /// Print each construction, copy, assignment and drop as it happens.
    pub echo_lifecycle: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            banner_fill: '*',
            banner_width: 20,
            color: true,
            echo_lifecycle: true,
        }
    }
}

impl DemoConfig {
    /// Reads the file named by `DS_DEMO_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| DemoError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn banner(&self, name: &str) -> String {
        let fill: String = std::iter::repeat(self.banner_fill)
            .take(self.banner_width)
            .collect();
        let line = format!("{fill}{name}{fill}");
        if self.color {
            line.bold().yellow().to_string()
        } else {
            line
        }
    }
}
