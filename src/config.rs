//! Configuration management
//!
//! Settings live in a TOML file. The path is resolved from `--config`, then
//! `$WORDGRID_CONFIG`, then `<config dir>/wordgrid/config.toml`. Missing
//! default files mean defaults; a missing explicit file is an error.
//!
//! ```toml
//! [words]
//! list = "/usr/share/wordgrid/words.txt"
//! seed = 42
//!
//! [auth]
//! required = true
//! [auth.accounts]
//! ada = "hunter2"
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! file = "/tmp/wordgrid.log"
//! ```

use crate::error::ConfigError;
use crate::logging::LogFormat;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "WORDGRID_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub words: WordsConfig,
    pub auth: AuthConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordsConfig {
    /// Word list file; the embedded list is used when unset
    pub list: Option<PathBuf>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    /// Ask for a login before the first game
    pub required: bool,
    /// username -> password
    pub accounts: FxHashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load from an explicit path, the environment, or the default location
    ///
    /// # Errors
    /// Returns `ConfigError` if an explicitly named file is missing, or any
    /// file that exists cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from_path(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.required && self.auth.accounts.is_empty() {
            return Err(ConfigError::Invalid(
                "auth.required is set but no accounts are configured".to_string(),
            ));
        }
        Ok(())
    }
}

/// `<config dir>/wordgrid/config.toml`, if the platform has a config dir
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordgrid").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert!(config.words.list.is_none());
        assert!(!config.auth.required);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn load_full_file() {
        let file = write_config(
            r#"
[words]
list = "/tmp/words.txt"
seed = 9

[auth]
required = true
[auth.accounts]
ada = "hunter2"

[logging]
level = "debug"
format = "json"
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.words.list, Some(PathBuf::from("/tmp/words.txt")));
        assert_eq!(config.words.seed, Some(9));
        assert!(config.auth.required);
        assert_eq!(config.auth.accounts.get("ada").map(String::as_str), Some("hunter2"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn paths_are_taken_literally() {
        let file = write_config("[words]\nlist = \"~/words.txt\"\n");
        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.words.list, Some(PathBuf::from("~/words.txt")));

        let file = write_config("[words]\nlist = \"/usr/share/wordgrid/words.txt\"\n");
        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert!(config.words.list.unwrap().is_absolute());
    }

    #[test]
    fn partial_file_uses_defaults() {
        let file = write_config("[words]\nseed = 1\n");
        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.words.seed, Some(1));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("none.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn unknown_key_is_parse_error() {
        let file = write_config("[words]\ncolour = \"red\"\n");
        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn required_auth_without_accounts_is_invalid() {
        let file = write_config("[auth]\nrequired = true\n");
        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
