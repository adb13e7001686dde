use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `api.base_url`.
pub const BASE_URL_ENV: &str = "PLATTR_API_BASE_URL";

/// Port of the local development backend.
pub const DEFAULT_DEV_PORT: u16 = 3000;

fn default_dev_port() -> u16 {
    DEFAULT_DEV_PORT
}

/// Backend API settings (the `[api]` section of config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute backend URL used by native builds; when unset, native builds
    /// guess a loopback address for the detected platform.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Port of the loopback backend used when `base_url` is unset.
    #[serde(default = "default_dev_port")]
    pub dev_port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            dev_port: DEFAULT_DEV_PORT,
        }
    }
}

impl ApiConfig {
    /// Check that the override (if any) is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dev_port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if let Some(value) = &self.base_url {
            let parsed = url::Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
                value: value.clone(),
                source,
            })?;
            match parsed.scheme() {
                "http" | "https" => {}
                other => {
                    return Err(ConfigError::UnsupportedScheme {
                        value: value.clone(),
                        scheme: other.to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Apply an environment override value. Empty strings are ignored.
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(v) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            tracing::debug!("api.base_url overridden by {}", BASE_URL_ENV);
            self.base_url = Some(v);
        }
    }
}

/// Global configuration loaded from `~/.config/plattr/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlattrConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("plattr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Read configuration from `path` and apply the environment override,
/// without validating it. Callers that replace `api.base_url` afterwards
/// validate the final value themselves.
pub fn read_from(path: &Path) -> Result<PlattrConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let mut cfg: PlattrConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.api.apply_env_override(std::env::var(BASE_URL_ENV).ok());
    Ok(cfg)
}

/// Read and validate configuration from `path`, including the environment override.
pub fn load_from(path: &Path) -> Result<PlattrConfig> {
    let cfg = read_from(path)?;
    cfg.api.validate()?;
    Ok(cfg)
}

/// Write `cfg` to `path`, creating parent directories.
pub fn write_to(path: &Path, cfg: &PlattrConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}

/// Read configuration from disk without validating it, creating a default
/// file if none exists.
pub fn read_or_init() -> Result<PlattrConfig> {
    let path = config_path()?;
    if !path.exists() {
        write_to(&path, &PlattrConfig::default())?;
        tracing::info!("created default config at {}", path.display());
    }
    read_from(&path)
}

/// Load and validate configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PlattrConfig> {
    let cfg = read_or_init()?;
    cfg.api.validate()?;
    Ok(cfg)
}
