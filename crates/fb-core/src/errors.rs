//! Errors raised while turning an event into a fact request.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    /// The event `time` field is not an RFC 3339 timestamp.
    #[error("event {event_id}: invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        event_id: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A nested JSON field (supertags, comment) failed to serialize.
    #[error("failed to serialize {field}: {source}")]
    Serialize {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
