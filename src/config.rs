//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. System config: `/etc/occi-text.toml`
//! 2. User config: `~/.config/occi-text/config.toml` (XDG) or platform config dir
//! 3. Environment variables: `OCCI_TEXT_*`, nested with `__`
//!    (e.g. `OCCI_TEXT_MAIN__OUTPUT_FORMAT=json`)
//!
//! # Intended Usage
//!
//! ```toml
//! [main]
//! output_format = "json"
//! verbose = false
//! prefix = "categories: "
//! ```
//!
//! The `[main]` table is required and only the keys above are accepted; each
//! value is checked against its declared type. Nothing in a config file is
//! ever evaluated.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use once_cell::sync::{Lazy, OnceCell};
use serde::Deserialize;
use thiserror::Error;

use crate::report::OutputFormat;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/occi-text.toml";

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "OCCI_TEXT_";

static CONFIG: OnceCell<Config> = OnceCell::new();
static DEFAULT: Lazy<Config> = Lazy::new(Config::default);

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type.
    #[error(transparent)]
    Figment(Box<figment::Error>),

    #[error("missing required [main] section")]
    MissingSection,
}

impl ConfigError {
    /// True when no source provided a `[main]` table.
    pub fn is_missing_section(&self) -> bool {
        matches!(self, Self::MissingSection)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub main: MainConfig,
}

/// Settings from the `[main]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MainConfig {
    /// Report format used when none is given on the command line.
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Log at debug level.
    #[serde(default)]
    pub verbose: bool,
    /// Prepended to every parse diagnostic.
    #[serde(default)]
    pub prefix: String,
}

/// Shape of the merged sources before the required section is checked.
#[derive(Debug, Deserialize)]
struct RawConfig {
    main: Option<MainConfig>,
}

impl Config {
    /// Load config with layered resolution (system → user → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// The layered sources, lowest priority first.
    pub fn figment() -> Figment {
        Figment::new()
            // Layer 1: System config (lowest priority)
            .merge(Toml::file(SYSTEM_CONFIG_PATH))
            // Layer 2: User config
            .merge(Toml::file(Self::user_config_path()))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract and check a configuration from any set of sources.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let raw: RawConfig = figment.extract()?;
        let main = raw.main.ok_or(ConfigError::MissingSection)?;
        Ok(Self { main })
    }

    /// User config path: ~/.config/occi-text/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("occi-text").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("occi-text").join("config.toml"))
            .unwrap_or_default()
    }
}

/// Loads the process-wide configuration.
///
/// On error the defaults stay in place. Calling it again after a successful
/// load does nothing.
pub fn try_init() -> Result<(), ConfigError> {
    if CONFIG.get().is_some() {
        return Ok(());
    }
    let config = Config::load()?;
    tracing::debug!(?config, "loaded configuration");
    let _ = CONFIG.set(config);
    Ok(())
}

/// Loads the process-wide configuration, returning false and logging the
/// cause if it could not be loaded.
pub fn init() -> bool {
    match try_init() {
        Ok(()) => true,
        Err(e) => {
            log_fallback(&e);
            false
        }
    }
}

/// Logs why the defaults are in use.
///
/// No config file at all is normal and only logged at debug; anything else
/// means a config was found but rejected.
pub fn log_fallback(err: &ConfigError) {
    if err.is_missing_section() {
        tracing::debug!("No configuration with a [main] section found, using defaults");
    } else {
        tracing::warn!(error = %err, "Invalid configuration, using defaults");
    }
}

/// The process-wide configuration, or the defaults if [`init`] did not load one.
pub fn settings() -> &'static Config {
    CONFIG.get().unwrap_or(&DEFAULT)
}
