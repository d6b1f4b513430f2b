//! Fact request construction from fetched events.

use chrono::DateTime;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::MappingError;
use crate::event::{Author, Event};

/// Display name of the actor tag attached to every fact.
pub const ACTOR_TAG_NAME: &str = "КТО";
/// Key of the actor tag attached to every fact.
pub const ACTOR_TAG_KEY: &str = "Who";

/// Fixed values stamped onto every fact, independent of the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactDefaults {
    /// Quantity recorded per event.
    pub value: i64,
    pub is_plan: bool,
    /// User id the facts API records as the submitter.
    pub auth_user_id: i64,
    /// When set, replaces the event's own `indicator_to_mo_id`.
    pub indicator_override: Option<i64>,
}

impl Default for FactDefaults {
    fn default() -> Self {
        Self {
            value: 1,
            is_plan: false,
            auth_user_id: 40,
            indicator_override: None,
        }
    }
}

/// Body of a single fact submission.
///
/// `supertags` and `comment` are JSON documents carried as strings; the
/// facts API expects them that way in both form and JSON bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactRequest {
    pub period_start: String,
    pub period_end: String,
    pub period_key: String,
    pub indicator_to_mo_id: i64,
    pub value: i64,
    #[serde(serialize_with = "bool_as_int")]
    pub is_plan: bool,
    pub auth_user_id: i64,
    pub supertags: String,
    pub comment: String,
    /// Date of the event, `YYYY-MM-DD`.
    pub fact_time: String,
}

impl FactRequest {
    /// Derive a fact request from one event.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidTimestamp`] if `event.time` is not
    /// RFC 3339.
    pub fn from_event(event: &Event, defaults: &FactDefaults) -> Result<Self, MappingError> {
        let period = &event.params.period;
        let indicator_to_mo_id = defaults
            .indicator_override
            .unwrap_or(event.params.indicator_to_mo_id);

        Ok(Self {
            period_start: period.start.clone(),
            period_end: period.end.clone(),
            period_key: period.type_key.clone(),
            indicator_to_mo_id,
            value: defaults.value,
            is_plan: defaults.is_plan,
            auth_user_id: defaults.auth_user_id,
            supertags: actor_supertags(&event.author)?,
            comment: fact_comment(indicator_to_mo_id, &event.params.platform)?,
            fact_time: fact_date(event)?,
        })
    }

    /// Field name/value pairs in the order the facts API documents them.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("period_start", self.period_start.clone()),
            ("period_end", self.period_end.clone()),
            ("period_key", self.period_key.clone()),
            ("indicator_to_mo_id", self.indicator_to_mo_id.to_string()),
            ("value", self.value.to_string()),
            ("is_plan", u8::from(self.is_plan).to_string()),
            ("auth_user_id", self.auth_user_id.to_string()),
            ("supertags", self.supertags.clone()),
            ("comment", self.comment.clone()),
            ("fact_time", self.fact_time.clone()),
        ]
    }
}

/// Response envelope of a successful fact submission (`DATA` member).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactResponse {
    pub indicator_to_mo_fact_id: i64,
}

#[derive(Serialize)]
struct Supertag<'a> {
    tag: SupertagTag,
    value: &'a str,
}

#[derive(Serialize)]
struct SupertagTag {
    id: i64,
    name: &'static str,
    key: &'static str,
    values_source: i64,
}

#[derive(Serialize)]
struct FactComment<'a> {
    indicator_to_mo_id: i64,
    platform: &'a str,
}

fn actor_supertags(author: &Author) -> Result<String, MappingError> {
    let tags = [Supertag {
        tag: SupertagTag {
            id: author.user_id,
            name: ACTOR_TAG_NAME,
            key: ACTOR_TAG_KEY,
            values_source: 0,
        },
        value: &author.user_name,
    }];
    serde_json::to_string(&tags).map_err(|source| MappingError::Serialize {
        field: "supertags",
        source,
    })
}

fn fact_comment(indicator_to_mo_id: i64, platform: &str) -> Result<String, MappingError> {
    let comment = [FactComment {
        indicator_to_mo_id,
        platform,
    }];
    serde_json::to_string(&comment).map_err(|source| MappingError::Serialize {
        field: "comment",
        source,
    })
}

/// Calendar date of the event in the timestamp's own offset.
fn fact_date(event: &Event) -> Result<String, MappingError> {
    let parsed = DateTime::parse_from_rfc3339(&event.time).map_err(|source| {
        MappingError::InvalidTimestamp {
            event_id: event.id.clone(),
            value: event.time.clone(),
            source,
        }
    })?;
    Ok(parsed.format("%Y-%m-%d").to_string())
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn bool_as_int<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}
