//! Session credential shared by both APIs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Raw `Cookie` header value, e.g. `session=abc123`.
    #[serde(default)]
    pub cookie: String,
}

impl SessionConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.cookie.trim().is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::MissingField {
                field: "session.cookie",
                env: "FACTBRIDGE_SESSION__COOKIE or COOKIE_SESS",
            });
        }
        if self.cookie.contains(['\r', '\n']) {
            return Err(ConfigError::InvalidValue {
                field: "session.cookie",
                reason: "must be a single header line".into(),
            });
        }
        Ok(())
    }
}

// Keep the cookie out of logs.
impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cookie = if self.cookie.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("SessionConfig").field("cookie", &cookie).finish()
    }
}
