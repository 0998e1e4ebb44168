use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::options::TooltipOptions;
use crate::error::{Result, TipsyError};

pub const CONFIG_DIR: &str = "tipsy";
const CONFIG_FILE: &str = "config.toml";

/// `[[bind]]` entry: bind every element matching `selector`
#[derive(Debug, Clone, Deserialize)]
pub struct BindRule {
    pub selector: String,
    #[serde(flatten)]
    pub options: TooltipOptions,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Defaults shared by every binding
    #[serde(default)]
    pub tooltip: TooltipOptions,
    #[serde(default)]
    pub bind: Vec<BindRule>,
}

impl Config {
    /// Options for a rule, layered over the shared `[tooltip]` defaults
    pub fn options_for(&self, rule: &BindRule) -> TooltipOptions {
        rule.options.merged_over(&self.tooltip)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user's config; no home directory or no file means defaults
pub fn load_config() -> Result<Config> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(TipsyError::Io(e)),
    };

    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Result<Config> {
    toml::from_str::<Config>(content).map_err(|e| TipsyError::Config(e.message().to_string()))
}

#[cfg(test)]
#[path = "config_storage_tests.rs"]
mod config_storage_tests;
