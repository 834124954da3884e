//! Configuration management for the VetDesk CLI.
//!
//! Configuration is an explicit struct loaded at startup, never ambient
//! globals. Resolution order for the API base URL:
//!
//! 1. `VETDESK_API_URL` environment variable
//! 2. `~/.vetdesk/config.json`
//! 3. built-in default (`http://localhost:8000/api`)

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default API base URL when neither the env var nor the config file sets one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable that overrides the configured base URL.
pub const API_URL_ENV: &str = "VETDESK_API_URL";

const CONFIG_FILE: &str = "config.json";

/// Persisted CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API base URL, including the `/api` prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Load configuration from `~/.vetdesk/config.json`.
    ///
    /// A missing file is not an error; defaults apply until the user writes
    /// a config. A present-but-corrupt file is an error so a typo does not
    /// silently fall back to another backend.
    pub fn load() -> Result<Self> {
        let Some(path) = config_file_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Write configuration to `~/.vetdesk/config.json`.
    pub fn save(&self) -> Result<()> {
        let path =
            config_file_path().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to encode config")?;
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Resolve the effective API base URL (env var takes precedence over
    /// the config file). Trailing slashes are stripped so path joining in
    /// the client stays uniform.
    pub fn base_url(&self) -> String {
        let url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        url.trim_end_matches('/').to_string()
    }
}

/// Directory holding CLI state (`~/.vetdesk`).
pub fn vetdesk_dir() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".vetdesk"))
}

fn config_file_path() -> Option<PathBuf> {
    vetdesk_dir().map(|d| d.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_default() {
        let config = Config::default();
        // Ignore the env override when the variable is set in the test
        // environment; the file/default path is what is under test here.
        if std::env::var(API_URL_ENV).is_err() {
            assert_eq!(config.base_url(), DEFAULT_API_URL);
        }
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        if std::env::var(API_URL_ENV).is_ok() {
            return;
        }
        let config = Config {
            api_url: Some("https://clinic.example.com/api/".to_string()),
        };
        assert_eq!(config.base_url(), "https://clinic.example.com/api");
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config {
            api_url: Some("https://clinic.example.com/api".to_string()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_url, config.api_url);
    }

    #[test]
    fn test_empty_config_omits_api_url() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(!json.contains("api_url"));
    }
}
