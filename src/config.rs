//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rskel/rskel.toml`
//! 3. Environment variables: `RSKEL_*` prefix
//!
//! Command line flags override all of these.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub folders_only: Option<bool>,
    pub location: Option<PathBuf>,
}

/// Unified configuration for rskel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Create folders only, no empty files (default: false)
    pub folders_only: bool,
    /// Default target location when `--location` is not given
    pub location: Option<PathBuf>,
}

/// Get the XDG config directory for rskel.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rskel").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rskel.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    parse_raw_settings(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn parse_raw_settings(content: &str) -> Result<RawSettings, toml::de::Error> {
    toml::from_str(content)
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(location) = &self.location {
            let expanded = expand_env_vars(location.to_string_lossy().as_ref());
            self.location = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            folders_only: overlay.folders_only.unwrap_or(self.folders_only),
            location: overlay.location.clone().or_else(|| self.location.clone()),
        }
    }

    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Load settings from an explicit file, then apply env overrides.
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        let raw = load_raw_settings(path)?;
        let mut current = Self::apply_env_overrides(Self::default().merge_with(&raw))?;
        current.expand_paths();
        Ok(current)
    }

    /// Apply RSKEL_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RSKEL").try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("folders_only") {
            settings.folders_only = val;
        }
        if let Ok(val) = config.get_string("location") {
            settings.location = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rskel configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rskel/rskel.toml
#   Env:    RSKEL_* environment variables (e.g. RSKEL_FOLDERS_ONLY=true)
#   Flags:  --location, --folders-only

# Create folders only, skip empty files for leaf entries
# folders_only = false

# Target location used when --location is not given
# location = "~/projects"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
