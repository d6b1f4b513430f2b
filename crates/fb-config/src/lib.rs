//! # fb-config
//!
//! Layered configuration loading for factbridge using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FACTBRIDGE_*` prefix, `__` as separator)
//! 2. Legacy variables `REQ_URL_EVENTS`, `REQ_URL_FACTS`, `COOKIE_SESS`
//! 3. Project-level `factbridge.toml`, or the file passed with `--config`
//! 4. User-level `~/.config/factbridge/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FACTBRIDGE_EVENTS__URL` -> `events.url`,
//! `FACTBRIDGE_TRANSPORT__ACCEPT_INVALID_CERTS` -> `transport.accept_invalid_certs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use fb_config::BridgeConfig;
//!
//! fb_config::load_dotenv();
//! let config = BridgeConfig::load(None).expect("config");
//! config.validate().expect("required values present");
//! println!("events: {}", config.events.url);
//! ```

mod error;
mod events;
mod facts;
mod session;
mod transport;

pub use error::ConfigError;
pub use events::{EventsConfig, MAX_EVENTS_LIMIT};
pub use facts::FactsConfig;
pub use session::SessionConfig;
pub use transport::TransportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "factbridge.toml";

/// Variable names used by earlier deployments, mapped onto config keys.
const LEGACY_ENV: [(&str, &str); 3] = [
    ("REQ_URL_EVENTS", "events.url"),
    ("REQ_URL_FACTS", "facts.url"),
    ("COOKIE_SESS", "session.cookie"),
];

/// Read `.env` from the working directory (or an ancestor) into the process
/// environment. Variables already set win over the file.
///
/// Returns the path that was loaded; a missing file is not an error.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default)]
    pub facts: FactsConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub transport: TransportConfig,
}

impl BridgeConfig {
    /// Load configuration from all sources.
    ///
    /// Does NOT read `.env`; call [`load_dotenv`] first for that. The result
    /// is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(config_file).extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // An explicit file replaces the project-local lookup.
        let local_path = config_file.map_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(Self::legacy_env());
        figment.merge(Env::prefixed("FACTBRIDGE_").split("__"))
    }

    /// Check that every required value is present and well formed.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::MissingField`] or
    /// [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.events.validate()?;
        self.facts.validate()?;
        self.session.validate()
    }

    fn legacy_env() -> Env {
        let names: Vec<&str> = LEGACY_ENV.iter().map(|(name, _)| *name).collect();
        Env::raw().only(&names).map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map_or_else(|| key.as_str().to_owned(), |(_, path)| (*path).to_owned())
                .into()
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("factbridge").join("config.toml"))
    }
}

pub(crate) fn validate_url(field: &'static str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected an http(s) URL, got '{url}'"),
        })
    }
}
