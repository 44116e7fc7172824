//! Configuration loading for Waybill.
//!
//! Reads `~/.waybill/config.toml` when it exists. Every section and field
//! is optional; a missing file is not an error and yields the defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct WaybillConfig {
    pub api: Option<ApiConfig>,
    pub login: Option<LoginConfig>,
    pub ui: Option<UiConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config at {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config at {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Default, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the shipping service, e.g. `http://host:7080/api/v1`.
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginConfig {
    /// Prefill for the login form's email field.
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

impl WaybillConfig {
    /// Load from the default location. `Ok(None)` when no config exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// The configured base URL, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.api.as_ref()?.base_url.as_deref()
    }

    /// Email to prefill on the login form, if any.
    #[must_use]
    pub fn login_email(&self) -> Option<&str> {
        self.login.as_ref()?.email.as_deref()
    }
}

/// `~/.waybill/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".waybill").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::WaybillConfig;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WaybillConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://localhost:9000/api/v1"

[login]
email = "me@example.com"

[ui]
ascii_only = true
"#,
        )
        .unwrap();

        let config = WaybillConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.base_url(), Some("http://localhost:9000/api/v1"));
        assert_eq!(config.login_email(), Some("me@example.com"));
        assert!(config.ui.unwrap().ascii_only);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = WaybillConfig::load_from(&path).unwrap().unwrap();
        assert!(config.base_url().is_none());
        assert!(config.login_email().is_none());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = 3").unwrap();

        let err = WaybillConfig::load_from(&path).unwrap_err();
        assert_eq!(err.path(), &path);
    }
}
