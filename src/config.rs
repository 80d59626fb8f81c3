//! Optional user configuration.
//!
//! `~/.config/ferrofetch/config.toml` supplies defaults for the CLI
//! flags. A missing file means built-in defaults; a malformed one is
//! logged and ignored rather than aborting the run.

use dirs::config_dir;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default for the --zeroconfig flag.
    pub zeroconfig: bool,
    /// Force a specific profile's logo instead of the resolved one.
    pub logo: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("ferrofetch/config.toml"))
}

/// Load the user config, falling back to defaults on any failure.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }

    match fs::read_to_string(&path) {
        Ok(text) => match toml::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring malformed {}: {}", path.display(), err);
                Config::default()
            }
        },
        Err(err) => {
            warn!("cannot read {}: {}", path.display(), err);
            Config::default()
        }
    }
}
