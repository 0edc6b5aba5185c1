//! Configuration management and validation.
//!
//! Provides configuration structures for storage locations, statement
//! branding, and logging, with an optional TOML file layered over the
//! built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    APP_DIR_NAME, DEFAULT_BUSINESS_NUMBER, DEFAULT_OUTPUT_DIR, DEFAULT_UPLOAD_DIR,
};
use crate::{Error, Result};

/// Storage locations for uploads and generated statements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where received export files are stored
    pub upload_path: PathBuf,

    /// Directory where generated statement PDFs are written
    pub output_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_path: PathBuf::from(DEFAULT_UPLOAD_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Statement branding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Business number printed in the statement header
    pub business_number: String,

    /// Optional logo image embedded at the top of each statement
    pub logo_path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            business_number: DEFAULT_BUSINESS_NUMBER.to_string(),
            logo_path: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Global configuration for statement generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage locations
    pub storage: StorageConfig,

    /// Statement branding
    pub report: ReportConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration, layering an optional TOML file over defaults
    ///
    /// An explicitly given path must exist and parse; the default path is
    /// optional and silently falls back to defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if required {
                return Err(Error::file_not_found(path.display().to_string()));
            }
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Default config file location under the platform config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
    }

    /// Override the output directory
    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.storage.output_path = path;
        self
    }

    /// Override the business number
    pub fn with_business_number(mut self, business_number: String) -> Self {
        self.report.business_number = business_number;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.report.business_number.trim().is_empty() {
            return Err(Error::configuration("business_number must not be empty"));
        }

        if let Some(logo) = &self.report.logo_path {
            if !logo.exists() {
                return Err(Error::configuration(format!(
                    "logo file does not exist: {}",
                    logo.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.upload_path, PathBuf::from("uploads"));
        assert_eq!(config.storage.output_path, PathBuf::from("output"));
        assert_eq!(config.report.business_number, DEFAULT_BUSINESS_NUMBER);
        assert!(config.report.logo_path.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[storage]\n\
             upload_path = \"/tmp/uploads\"\n\
             output_path = \"/tmp/statements\"\n\
             \n\
             [report]\n\
             business_number = \"ABN 11 222 333 444\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.storage.output_path, PathBuf::from("/tmp/statements"));
        assert_eq!(config.report.business_number, "ABN 11 222 333 444");
        // Unspecified sections fall back to defaults
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid = [toml").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_business_number() {
        let config = Config::default().with_business_number("   ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_logo() {
        let mut config = Config::default();
        config.report.logo_path = Some(PathBuf::from("/does/not/exist.png"));
        assert!(config.validate().is_err());
    }
}
