/*
[INPUT]:  YAML configuration file, IMX_PRIVATE_KEY environment variable
[OUTPUT]: Parsed CLI configuration and client options
[POS]:    Configuration layer - environment, timeouts, key material
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, bail};
use imx_client::{ClientConfig, Environment, ImxClientOptions, KeyDerivationConfig};
use serde::{Deserialize, Serialize};

/// Environment variable consulted when the file carries no key
pub const PRIVATE_KEY_ENV: &str = "IMX_PRIVATE_KEY";

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Deployment: "mainnet" or "sandbox"
    #[serde(default)]
    pub environment: Environment,
    /// Overrides the environment's base URL
    #[serde(default)]
    pub base_url: Option<String>,
    /// Total request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Hex-encoded Ethereum private key
    #[serde(default)]
    pub private_key: Option<String>,
    /// Stark key derivation labels
    #[serde(default)]
    pub derivation: KeyDerivationConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            private_key: None,
            derivation: KeyDerivationConfig::default(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        if config.timeout_secs == 0 || config.connect_timeout_secs == 0 {
            bail!("timeouts must be at least one second");
        }
        Ok(config)
    }

    pub fn client_options(&self) -> ImxClientOptions {
        ImxClientOptions {
            environment: self.environment,
            base_url: self.base_url.clone(),
            http: ClientConfig {
                timeout: Duration::from_secs(self.timeout_secs),
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            },
            derivation: self.derivation.clone(),
        }
    }

    /// Key from the file, falling back to `IMX_PRIVATE_KEY`
    pub fn resolve_private_key(&self) -> anyhow::Result<String> {
        self.private_key_or(std::env::var(PRIVATE_KEY_ENV).ok())
    }

    fn private_key_or(&self, fallback: Option<String>) -> anyhow::Result<String> {
        self.private_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or(fallback.filter(|key| !key.trim().is_empty()))
            .with_context(|| format!("no private_key in config and {PRIVATE_KEY_ENV} is unset"))
    }
}
