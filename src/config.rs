//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/trocco-mcp/config.toml` (XDG) or platform config dir
//! 2. Project config: `.trocco-mcp.toml`
//! 3. Environment variables: `TROCCO_*`
//!
//! # Intended Usage
//!
//! Most setups only need the API key in the environment:
//!
//! ```sh
//! export TROCCO_API_KEY=xxxxxxxx
//! ```
//!
//! Everything else has defaults and can be overridden in a config file:
//! ```toml
//! [api]
//! base_url = "https://trocco.io"
//! user_agent = "trocco-mcp/0.1.0"
//!
//! [pagination]
//! max_pages = 1000
//! ```
//!
//! Environment variables map onto the section named by their first word:
//! `TROCCO_API_KEY` sets `api.key`, `TROCCO_API_BASE_URL` sets `api.base_url`
//! and `TROCCO_PAGINATION_MAX_PAGES` sets `pagination.max_pages`.

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Default origin of the TROCCO API.
pub const DEFAULT_BASE_URL: &str = "https://trocco.io";

/// Default cap on pages fetched by a single list operation.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Remote API connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API key sent as `Authorization: Token <key>`.
    ///
    /// Optional at load time: without it every remote call is rejected by
    /// the service with 401, which is reported per tool invocation.
    #[serde(default)]
    pub key: Option<String>,
    /// Origin of the TROCCO API (e.g., "https://trocco.io").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Limits applied by the pagination aggregator.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Maximum number of pages a single list operation may fetch.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
        }
    }
}

/// Turn `API_BASE_URL` into `api.base_url`; only the section prefix is split.
///
/// figment hands env keys over with their original case.
fn nest_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ["api", "pagination"] {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("trocco-mcp/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Self::user_config_path())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the layered figment. Split out so the layering can be tested.
    fn figment(user_config: std::path::PathBuf) -> Figment {
        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(".trocco-mcp.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("TROCCO_").map(|key| nest_env_key(key.as_str()).into()))
    }

    /// User config path: ~/.config/trocco-mcp/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("trocco-mcp").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("trocco-mcp").join("config.toml"))
            .unwrap_or_default()
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api.key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
