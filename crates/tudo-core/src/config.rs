//! Configuration management for TUDO.
//!
//! Loads configuration from ${TUDO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for TUDO configuration and data directories.
    //!
    //! TUDO_HOME resolution order:
    //! 1. TUDO_HOME environment variable (if set)
    //! 2. ~/.config/tudo (default)

    use std::path::PathBuf;

    /// Returns the TUDO home directory.
    ///
    /// Checks TUDO_HOME env var first, falls back to ~/.config/tudo
    pub fn tudo_home() -> PathBuf {
        if let Ok(home) = std::env::var("TUDO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("tudo"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        tudo_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        tudo_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the task service API.
    pub base_url: String,

    /// Sync the task list with the remote API (false = local demo data).
    pub remote: bool,

    /// Log filter directive (tracing EnvFilter syntax).
    pub log_filter: Option<String>,
}

impl Config {
    const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the effective API base URL.
    ///
    /// Precedence: explicit override (CLI flag / env) > config > built-in default.
    /// Trailing slashes are stripped so endpoint paths can be appended uniformly.
    pub fn resolve_base_url(&self, override_url: Option<&str>) -> Result<String> {
        let raw = match override_url {
            Some(value) if !value.trim().is_empty() => value.trim(),
            _ => self.base_url.trim(),
        };
        let raw = if raw.is_empty() {
            Self::DEFAULT_BASE_URL
        } else {
            raw
        };

        url::Url::parse(raw).with_context(|| format!("Invalid API base URL: {raw}"))?;
        Ok(raw.trim_end_matches('/').to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            remote: false,
            log_filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.base_url, Config::DEFAULT_BASE_URL);
        assert!(!config.remote);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_load_parses_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "remote = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert!(config.remote);
        assert_eq!(config.base_url, Config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = [nope").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# existing").unwrap();

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("base_url ="));
        assert!(contents.contains("remote ="));
        // The template must round-trip through the parser.
        let config: Config = toml::from_str(&contents).unwrap();
        assert_eq!(config.base_url, Config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_precedence() {
        let config = Config {
            base_url: "http://config.example/api".to_string(),
            ..Config::default()
        };

        let resolved = config.resolve_base_url(None).unwrap();
        assert_eq!(resolved, "http://config.example/api");

        let resolved = config
            .resolve_base_url(Some("http://flag.example/api/"))
            .unwrap();
        assert_eq!(resolved, "http://flag.example/api");
    }

    #[test]
    fn test_resolve_base_url_rejects_garbage() {
        let config = Config::default();
        assert!(config.resolve_base_url(Some("not a url")).is_err());
    }
}
