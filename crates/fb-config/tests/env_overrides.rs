//! Environment variable layering, including the legacy variable names.
//!
//! Uses `figment::Jail` so env changes never leak between tests.

use fb_config::{BridgeConfig, ConfigError};
use fb_core::PayloadEncoding;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn legacy_variables_fill_required_values() {
    Jail::expect_with(|jail| {
        jail.set_env("REQ_URL_EVENTS", "https://events.example.test/api/events");
        jail.set_env("REQ_URL_FACTS", "https://facts.example.test/api/facts");
        jail.set_env("COOKIE_SESS", "session=abc123");

        let config = BridgeConfig::load(None).expect("config loads");
        assert_eq!(config.events.url, "https://events.example.test/api/events");
        assert_eq!(config.facts.url, "https://facts.example.test/api/facts");
        assert_eq!(config.session.cookie, "session=abc123");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn prefixed_variables_beat_legacy_names() {
    Jail::expect_with(|jail| {
        jail.set_env("REQ_URL_EVENTS", "https://old.example.test/events");
        jail.set_env("FACTBRIDGE_EVENTS__URL", "https://new.example.test/events");

        let config = BridgeConfig::load(None).expect("config loads");
        assert_eq!(config.events.url, "https://new.example.test/events");
        Ok(())
    });
}

#[test]
fn nested_sections_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("FACTBRIDGE_FACTS__ENCODING", "json");
        jail.set_env("FACTBRIDGE_FACTS__INDICATOR_OVERRIDE", "315914");
        jail.set_env("FACTBRIDGE_TRANSPORT__ACCEPT_INVALID_CERTS", "true");
        jail.set_env("FACTBRIDGE_EVENTS__LIMIT", "5");

        let config = BridgeConfig::load(None).expect("config loads");
        assert_eq!(config.facts.encoding, PayloadEncoding::Json);
        assert_eq!(config.facts.indicator_override, Some(315_914));
        assert!(config.transport.accept_invalid_certs);
        assert_eq!(config.events.limit, 5);
        Ok(())
    });
}

#[test]
fn missing_cookie_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("FACTBRIDGE_EVENTS__URL", "https://events.example.test");
        jail.set_env("FACTBRIDGE_FACTS__URL", "https://facts.example.test");

        let config = BridgeConfig::load(None).expect("config loads");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: "session.cookie",
                ..
            }
        ));
        assert!(err.to_string().contains("COOKIE_SESS"));
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("FACTBRIDGE_EVENTS__LIMIT", "lots");
        let result = BridgeConfig::load(None);
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
