//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/libris/libris.toml`
//! 3. Environment variables: `LIBRIS_*` prefix

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name shown in the menu banner.
    pub library_name: String,
    /// Whether to preload the demo catalog on startup.
    pub seed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library_name: "Community Library".to_string(),
            seed: true,
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("library_name", Settings::default().library_name)?
            .set_default("seed", Settings::default().seed)?;

        if let Some(dirs) = ProjectDirs::from("", "", "libris") {
            let global = dirs.config_dir().join("libris.toml");
            builder = builder.add_source(File::from(global).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("LIBRIS"));

        builder.build()?.try_deserialize()
    }
}
