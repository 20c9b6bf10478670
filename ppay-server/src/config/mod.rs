//! Configuration module for ppay-server.
//!
//! Handles loading configuration from TOML files, CLI arguments,
//! and environment variables.

pub mod file;
pub mod runtime;

use crate::config::file::FileConfig;
use crate::config::runtime::{ServerConfig, SharedConfig, UpstreamConfig};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Values given on the command line or through the environment.
///
/// They win over the file and survive a SIGHUP reload.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub listen: Option<SocketAddr>,
    pub upstream_url: Option<String>,
    pub api_key: Option<String>,
}

/// Loaded configuration result containing all parts.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

impl LoadedConfig {
    /// Convert into a SharedConfig with Arc<RwLock<T>> wrappers.
    pub fn into_shared(self) -> SharedConfig {
        SharedConfig::new(self.server, self.upstream)
    }
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    overrides: ConfigOverrides,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, overrides: ConfigOverrides) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            overrides,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file (a missing file counts as empty)
    /// 2. Apply CLI / environment overrides
    /// 3. Validate and build the runtime configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let file_config = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Config file {:?} not found, relying on command line and environment",
                    self.config_path
                );
                FileConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        self.resolve(file_config)
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }

    fn resolve(&self, mut file_config: FileConfig) -> Result<LoadedConfig, ConfigError> {
        // Apply CLI overrides
        if let Some(listen) = self.overrides.listen {
            file_config.server.listen = listen;
        }
        if let Some(url) = &self.overrides.upstream_url {
            file_config.upstream.base_url = Some(url.clone());
        }
        if let Some(key) = &self.overrides.api_key {
            file_config.upstream.api_key = Some(key.clone());
        }

        let upstream = validate_upstream(&file_config.upstream)?;

        Ok(LoadedConfig {
            server: ServerConfig {
                listen: file_config.server.listen,
                public_url: file_config.server.public_url,
            },
            upstream,
        })
    }
}

fn validate_upstream(section: &file::UpstreamConfig) -> Result<UpstreamConfig, ConfigError> {
    let raw_url = section.base_url.as_deref().ok_or_else(|| {
        ConfigError::ValidationError(
            "upstream.base_url is not set (use --upstream-url or GOODPASS_API_URL)".to_owned(),
        )
    })?;
    let base_url = Url::parse(raw_url).map_err(|e| {
        ConfigError::ValidationError(format!("upstream.base_url {raw_url:?} is invalid: {e}"))
    })?;
    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError(format!(
            "upstream.base_url must be an http(s) URL, got scheme {:?}",
            base_url.scheme()
        )));
    }

    let api_key = section
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            ConfigError::ValidationError(
                "upstream.api_key is not set (use --api-key or PARTNER_API_KEY)".to_owned(),
            )
        })?;

    if section.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "upstream.timeout_secs must be greater than zero".to_owned(),
        ));
    }

    Ok(UpstreamConfig::new(base_url, api_key)
        .with_timeout(Duration::from_secs(section.timeout_secs)))
}
