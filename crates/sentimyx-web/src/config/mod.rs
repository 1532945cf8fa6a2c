//! Configuration loading for Sentimyx.
//! Reads sentimyx.toml from the current directory or the path in SENTIMYX_CONFIG,
//! then applies environment overrides. The provider key is only ever taken
//! from OPENAI_API_KEY.

use anyhow::Context;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "sentimyx.toml";

pub const ENV_CONFIG_PATH: &str = "SENTIMYX_CONFIG";
pub const ENV_BIND_ADDR: &str = "SENTIMYX_BIND_ADDR";
pub const ENV_MODEL: &str = "SENTIMYX_MODEL";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: default_bind_addr() }
    }
}

fn default_bind_addr() -> SocketAddr { SocketAddr::from(([127, 0, 0, 1], 8000)) }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self { model: default_model(), base_url: default_base_url() }
    }
}

fn default_model()    -> String { "gpt-4o-mini".to_string() }
fn default_base_url() -> String { sentimyx_llm::backend::OPENAI_BASE_URL.to_string() }

/// Fully resolved process configuration. Immutable after startup.
#[derive(Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    /// `None` puts the sentiment endpoint into degraded (always-503) mode.
    pub openai_api_key: Option<SecretString>,
}

mod tests;

impl AppConfig {
    /// Load configuration from sentimyx.toml and the process environment.
    /// A missing default file is fine; a missing SENTIMYX_CONFIG target is not.
    pub fn load() -> anyhow::Result<Self> {
        let explicit = std::env::var(ENV_CONFIG_PATH).ok();
        let path = explicit
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let content = if Path::new(&path).exists() {
            Some(
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path))?,
            )
        } else if explicit.is_some() {
            anyhow::bail!("Config file not found: {} (set via {})", path, ENV_CONFIG_PATH);
        } else {
            None
        };

        Self::from_sources(content.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build from optional TOML text plus an environment lookup.
    pub fn from_sources<F>(toml_text: Option<&str>, env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut file: FileConfig = match toml_text {
            Some(text) => toml::from_str(text).context("Invalid config file")?,
            None => FileConfig::default(),
        };

        if let Some(addr) = env(ENV_BIND_ADDR) {
            file.server.bind_addr = addr
                .parse()
                .with_context(|| format!("Invalid {}: {}", ENV_BIND_ADDR, addr))?;
        }
        if let Some(model) = env(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            file.llm.model = model;
        }
        if let Some(url) = env(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            file.llm.base_url = url;
        }

        let openai_api_key = env(ENV_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .map(SecretString::from);

        Ok(Self {
            server: file.server,
            llm: file.llm,
            openai_api_key,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }
}
