//! Facts API configuration.

use fb_core::{FactDefaults, PayloadEncoding};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_value() -> i64 {
    1
}

const fn default_auth_user_id() -> i64 {
    40
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FactsConfig {
    /// Full URL of the fact submission endpoint.
    #[serde(default)]
    pub url: String,

    /// Body encoding for fact submissions.
    #[serde(default)]
    pub encoding: PayloadEncoding,

    /// Value recorded for each fact.
    #[serde(default = "default_value")]
    pub value: i64,

    #[serde(default)]
    pub is_plan: bool,

    /// Submitting user id recorded by the facts API.
    #[serde(default = "default_auth_user_id")]
    pub auth_user_id: i64,

    /// Indicator id sent instead of the event's own, for every fact.
    #[serde(default)]
    pub indicator_override: Option<i64>,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            encoding: PayloadEncoding::default(),
            value: default_value(),
            is_plan: false,
            auth_user_id: default_auth_user_id(),
            indicator_override: None,
        }
    }
}

impl FactsConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    /// Fixed values stamped on every fact request.
    #[must_use]
    pub const fn fact_defaults(&self) -> FactDefaults {
        FactDefaults {
            value: self.value,
            is_plan: self.is_plan,
            auth_user_id: self.auth_user_id,
            indicator_override: self.indicator_override,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::MissingField {
                field: "facts.url",
                env: "FACTBRIDGE_FACTS__URL or REQ_URL_FACTS",
            });
        }
        crate::validate_url("facts.url", &self.url)
    }
}
