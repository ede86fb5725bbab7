//! Configuration Management
//!
//! Handles persistent provider endpoint and credential configuration for
//! crosscloud. Environment variables take precedence over the config file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Connection settings for one provider
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL of the provider API
    pub endpoint: String,
    /// Account identity (email, access key id, ...)
    #[serde(default)]
    pub identity: Option<String>,
    /// Account credential (password, signature, token, ...)
    #[serde(default)]
    pub credential: Option<String>,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cloudsigma: Option<ProviderConfig>,
    #[serde(default)]
    pub fgcp: Option<ProviderConfig>,
    #[serde(default)]
    pub vcloud: Option<ProviderConfig>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("crosscloud").join("config.json"))
    }

    /// Load configuration from disk, then apply environment overrides
    pub fn load() -> Self {
        Self::load_file().apply_env()
    }

    fn load_file() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Apply CROSSCLOUD_<PROVIDER>_* environment overrides
    fn apply_env(mut self) -> Self {
        self.cloudsigma = override_from_env("CLOUDSIGMA", self.cloudsigma);
        self.fgcp = override_from_env("FGCP", self.fgcp);
        self.vcloud = override_from_env("VCLOUD", self.vcloud);
        self
    }
}

fn override_from_env(provider: &str, base: Option<ProviderConfig>) -> Option<ProviderConfig> {
    let endpoint = std::env::var(format!("CROSSCLOUD_{provider}_ENDPOINT")).ok();
    let identity = std::env::var(format!("CROSSCLOUD_{provider}_IDENTITY")).ok();
    let credential = std::env::var(format!("CROSSCLOUD_{provider}_CREDENTIAL")).ok();

    if endpoint.is_none() && identity.is_none() && credential.is_none() {
        return base;
    }

    let mut config = base.unwrap_or_default();
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    if let Some(identity) = identity {
        config.identity = Some(identity);
    }
    if let Some(credential) = credential {
        config.credential = Some(credential);
    }
    Some(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let config: Config = serde_json::from_str(
            r#"{"cloudsigma": {"endpoint": "https://zrh.cloudsigma.com/api/2.0"}}"#,
        )
        .unwrap();

        let cloudsigma = config.cloudsigma.unwrap();
        assert_eq!(cloudsigma.endpoint, "https://zrh.cloudsigma.com/api/2.0");
        assert!(cloudsigma.identity.is_none());
        assert!(config.fgcp.is_none());
    }

    #[test]
    fn env_override_fills_missing_provider() {
        // No base config for this provider, env supplies the endpoint
        let result = {
            std::env::set_var("CROSSCLOUD_TESTONLY_ENDPOINT", "https://api.example.com");
            let result = override_from_env("TESTONLY", None);
            std::env::remove_var("CROSSCLOUD_TESTONLY_ENDPOINT");
            result
        };

        assert_eq!(result.unwrap().endpoint, "https://api.example.com");
    }
}
