//! Command-line defaults, optionally loaded from a configuration file.
//!
//! With the `config` feature enabled, defaults are read from
//! `<config_dir>/oldphone/config.toml`:
//!
//! ```toml
//! report = false
//! verbose = true
//! ```
//!
//! Command-line flags always take precedence over file values.

#[cfg(feature = "config")]
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file could not be read or parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error: {message}")]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Defaults applied when the matching flag is not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct Settings {
    /// Print the analysis report instead of the decoded message
    pub report: bool,
    /// Enable debug logging
    pub verbose: bool,
}

impl Settings {
    /// Load settings from the user configuration file, if any.
    ///
    /// A missing file yields defaults.
    #[cfg(feature = "config")]
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    #[cfg(not(feature = "config"))]
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::default())
    }

    /// Location of the configuration file on this platform
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("oldphone").join("config.toml"))
    }

    /// Read and parse a specific configuration file
    #[cfg(feature = "config")]
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::new(format!("{}: {e}", path.display())))
    }

    /// Combine with command-line flags.
    ///
    /// `Some` is an explicit flag (`--report` or `--no-report`) and always wins;
    /// `None` keeps the file value.
    pub fn merge_flags(self, report: Option<bool>, verbose: Option<bool>) -> Self {
        Self {
            report: report.unwrap_or(self.report),
            verbose: verbose.unwrap_or(self.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_flags() {
        let settings = Settings::default().merge_flags(Some(true), None);
        assert!(settings.report);
        assert!(!settings.verbose);

        let settings = Settings {
            report: false,
            verbose: true,
        }
        .merge_flags(None, None);
        assert!(settings.verbose);
    }

    #[test]
    fn test_flags_turn_off_file_values() {
        let from_file = Settings {
            report: true,
            verbose: true,
        };
        let settings = from_file.merge_flags(Some(false), Some(false));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("bad toml");
        assert_eq!(err.to_string(), "Configuration error: bad toml");
    }

    #[cfg(not(feature = "config"))]
    #[test]
    fn test_load_defaults_without_config_feature() {
        assert_eq!(Settings::load(), Ok(Settings::default()));
    }

    #[cfg(feature = "config")]
    mod file {
        use super::super::*;
        use std::io::Write;
        use tempfile::NamedTempFile;

        fn create_config_file(content: &str) -> NamedTempFile {
            let mut file = NamedTempFile::new().expect("Failed to create temp file");
            file.write_all(content.as_bytes())
                .expect("Failed to write config");
            file.flush().expect("Failed to flush config");
            file
        }

        #[test]
        fn test_load_from_file() {
            let file = create_config_file("report = true\n");
            let settings = Settings::load_from(file.path()).unwrap();
            assert!(settings.report);
            assert!(!settings.verbose);
        }

        #[test]
        fn test_invalid_file_is_config_error() {
            let file = create_config_file("report = \"yes\"\n");
            let err = Settings::load_from(file.path()).unwrap_err();
            assert!(err.message.contains(&file.path().display().to_string()));
        }

        #[test]
        fn test_missing_file_is_config_error() {
            let missing = std::path::Path::new("/this/config/does/not/exist.toml");
            let err = Settings::load_from(missing).unwrap_err();
            assert!(err.message.starts_with("cannot read"));
        }
    }
}
