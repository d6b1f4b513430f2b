//! Events API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest page the events API is asked for.
pub const MAX_EVENTS_LIMIT: u32 = 10;

fn default_event_type() -> String {
    String::from("MATRIX_REQUEST")
}

const fn default_limit() -> u32 {
    MAX_EVENTS_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventsConfig {
    /// Full URL of the events query endpoint.
    #[serde(default)]
    pub url: String,

    /// Event `type` tag to filter on.
    #[serde(default = "default_event_type")]
    pub event_type: String,

    /// Number of most recent events to request.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            event_type: default_event_type(),
            limit: default_limit(),
        }
    }
}

impl EventsConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::MissingField {
                field: "events.url",
                env: "FACTBRIDGE_EVENTS__URL or REQ_URL_EVENTS",
            });
        }
        crate::validate_url("events.url", &self.url)?;
        if self.event_type.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "events.event_type",
                reason: "must not be empty".into(),
            });
        }
        if self.limit == 0 || self.limit > MAX_EVENTS_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "events.limit",
                reason: format!("must be between 1 and {MAX_EVENTS_LIMIT}, got {}", self.limit),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = EventsConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.event_type, "MATRIX_REQUEST");
        assert_eq!(config.limit, 10);
    }

    #[test]
    fn missing_url_is_reported() {
        let err = EventsConfig::default().validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: "events.url",
                ..
            }
        ));
    }

    #[test]
    fn limit_out_of_range_rejected() {
        let config = EventsConfig {
            url: "https://events.example.test/api".into(),
            limit: 11,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "events.limit",
                ..
            })
        ));
    }
}
