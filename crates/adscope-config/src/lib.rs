//! Shared configuration for the adscope CLI and TUI.
//!
//! TOML settings layered through figment and translated to
//! `adscope_core::ServiceConfig`. Both binaries depend on this crate —
//! the CLI applies its flag overrides on top of the extracted settings.
//!
//! Precedence, lowest to highest: built-in defaults → platform config
//! dir → `adscope.toml` in the working directory → `ADSCOPE_*`
//! environment variables (nested keys split on `__`, e.g.
//! `ADSCOPE_API__BASE_URL`) → CLI flags.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use adscope_core::ServiceConfig;

/// Project-local config file name, looked up in the working directory.
pub const LOCAL_CONFIG: &str = "adscope.toml";

const ENV_PREFIX: &str = "ADSCOPE_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML settings structs ───────────────────────────────────────────

/// Top-level settings shared by CLI and TUI.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

/// How to reach the campaign service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Service root URL (e.g., "http://localhost:3000").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Auto-refresh interval for the TUI, in seconds. `0` disables it.
    #[serde(default = "default_refresh")]
    pub refresh_secs: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Default CLI output format ("table", "json", "json-compact",
    /// "yaml", or "plain").
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".into()
}
fn default_timeout() -> u64 {
    10
}
fn default_refresh() -> u64 {
    30
}
fn default_format() -> String {
    "table".into()
}

impl Settings {
    /// Validate and translate the API section into a `ServiceConfig`.
    pub fn service_config(&self) -> Result<ServiceConfig, ConfigError> {
        let base_url: Url =
            self.api
                .base_url
                .parse()
                .map_err(|_| ConfigError::Validation {
                    field: "api.base_url".into(),
                    reason: format!("invalid URL: {}", self.api.base_url),
                })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got scheme '{}'", base_url.scheme()),
            });
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation {
                field: "api.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(ServiceConfig {
            base_url,
            timeout_secs: self.api.timeout_secs,
        })
    }
}

// ── Config file paths ───────────────────────────────────────────────

/// Resolve the platform config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "adscope", "adscope").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("adscope");
    p
}

/// The TOML files consulted (in precedence order, lowest first) and
/// whether each currently exists. Used by `config show --origin`.
pub fn config_sources(custom: Option<&Path>) -> Vec<(PathBuf, bool)> {
    match custom {
        Some(path) => vec![(path.to_path_buf(), path.exists())],
        None => {
            let platform = config_path();
            let local = PathBuf::from(LOCAL_CONFIG);
            vec![
                (platform.clone(), platform.exists()),
                (local.clone(), local.exists()),
            ]
        }
    }
}

// ── Settings loading ────────────────────────────────────────────────

/// Load settings from the layered sources.
///
/// With `custom` set, that file replaces both TOML layers and must
/// exist; environment variables still apply on top.
pub fn load_settings(custom: Option<&Path>) -> Result<Settings, ConfigError> {
    let figment = Figment::new().merge(Serialized::defaults(Settings::default()));

    let figment = match custom {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::Validation {
                    field: "config".into(),
                    reason: format!("file not found: {}", path.display()),
                });
            }
            figment.merge(Toml::file(path))
        }
        None => figment
            .merge(Toml::file(config_path()))
            .merge(Toml::file(LOCAL_CONFIG)),
    };

    let settings = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()?;
    Ok(settings)
}
