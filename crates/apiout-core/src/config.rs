// Rust guideline compliant 2026-10-16

//! Configuration for response dispatch.

use crate::diagnostics;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`Config::debug`].
pub const DEBUG_ENV: &str = "APIOUT_DEBUG";

/// Settings shared by every dispatcher in a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether error paths also emit diagnostic log events.
    #[serde(default)]
    pub debug: bool,
}

impl Config {
    /// Loads configuration from an optional file and the environment.
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. The TOML file at `path`, if given and present
    /// 3. The `APIOUT_DEBUG` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file is not valid TOML
    /// - `APIOUT_DEBUG` is set to something other than `true` or `false`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(DEBUG_ENV) {
            self.debug = val.trim().parse().map_err(|_| {
                ConfigError::InvalidEnv(format!("{DEBUG_ENV} must be true or false"))
            })?;
        }
        Ok(())
    }

    /// Pushes these settings into the process-wide toggles.
    pub fn apply(&self) {
        diagnostics::set_debug(self.debug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Env-dependent cases live in a single test so they cannot race.
    #[test]
    fn test_load_sources() {
        std::env::remove_var(DEBUG_ENV);

        let config = Config::load(None).unwrap();
        assert!(!config.debug);

        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert_eq!(Config::load(Some(&missing)).unwrap(), Config::default());

        let path = temp_dir.path().join("apiout.toml");
        std::fs::write(&path, "debug = true\n").unwrap();
        assert!(Config::load(Some(&path)).unwrap().debug);

        std::env::set_var(DEBUG_ENV, "false");
        assert!(!Config::load(Some(&path)).unwrap().debug);

        std::env::set_var(DEBUG_ENV, "sometimes");
        let err = Config::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv(_)));

        std::env::remove_var(DEBUG_ENV);
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("apiout.toml");
        std::fs::write(&path, "debug = \"loud\"").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFile(_)));
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("apiout.toml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }
}
