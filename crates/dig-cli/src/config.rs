//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, handled at the call-site, not here)
//! 2. Config file (`--config <FILE>`, or `.dig.toml` in the current directory)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Project settings.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Root directory under which `app/` and `database/` live.
    pub root: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// With an explicit `--config` path the file must exist and parse; a
    /// missing `.dig.toml` at the default location is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(".dig.toml");
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dig.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "dig", "dig")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".dig.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_is_cwd() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.project.root, PathBuf::from("."));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: AppConfig = toml::from_str("[project]\nroot = \"/srv/api\"\n").unwrap();
        assert_eq!(cfg.project.root, PathBuf::from("/srv/api"));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/.dig.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
