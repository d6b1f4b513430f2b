use serde::{Deserialize, Deserializer, Serialize};

/// A logged occurrence as returned in `DATA.rows` by the events API.
///
/// Fields mirror the API's JSON names. Anything the API leaves out or sends as
/// `null` defaults to an empty string or zero so a sparse row still
/// deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "_key", deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(rename = "_rev", deserialize_with = "null_as_default")]
    pub rev: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: Author,
    #[serde(deserialize_with = "null_as_default")]
    pub group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub msg: String,
    #[serde(deserialize_with = "null_as_default")]
    pub params: EventParams,
    /// RFC 3339 timestamp of the occurrence.
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub event_type: String,
}

/// The user that caused the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "null_as_default")]
    pub mo_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventParams {
    #[serde(deserialize_with = "null_as_default")]
    pub indicator_to_mo_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub period: Period,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
}

/// Reporting period the event refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    #[serde(deserialize_with = "null_as_default")]
    pub end: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(deserialize_with = "null_as_default")]
    pub type_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub type_key: String,
}

/// Deserialize `null` as `T::default()`.
///
/// Combined with `#[serde(default)]` this covers both absent and `null`
/// fields.
///
/// # Errors
///
/// Fails only if a non-null value has the wrong type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROW: &str = r#"{
        "_id": "events/1001",
        "_key": "1001",
        "_rev": "_hX2k",
        "author": {"mo_id": 42, "user_id": 7, "user_name": "Ivanova A."},
        "group": "REPORT",
        "msg": "matrix requested",
        "params": {
            "indicator_to_mo_id": 227,
            "period": {
                "end": "2024-03-31",
                "start": "2024-03-01",
                "type_id": 2,
                "type_key": "month"
            },
            "platform": "web"
        },
        "time": "2024-03-01T10:00:00Z",
        "type": "MATRIX_REQUEST"
    }"#;

    #[test]
    fn deserializes_api_row() {
        let event: Event = serde_json::from_str(ROW).unwrap();
        assert_eq!(event.id, "events/1001");
        assert_eq!(event.key, "1001");
        assert_eq!(event.author.user_id, 7);
        assert_eq!(event.author.user_name, "Ivanova A.");
        assert_eq!(event.params.indicator_to_mo_id, 227);
        assert_eq!(event.params.period.type_key, "month");
        assert_eq!(event.event_type, "MATRIX_REQUEST");
    }

    #[test]
    fn missing_fields_default() {
        let event: Event = serde_json::from_str(r#"{"_id": "events/1"}"#).unwrap();
        assert_eq!(event.id, "events/1");
        assert_eq!(event.author, Author::default());
        assert!(event.time.is_empty());
    }

    #[test]
    fn null_fields_default() {
        let event: Event = serde_json::from_str(
            r#"{
                "_id": "events/2",
                "msg": null,
                "author": {"mo_id": null, "user_id": 9, "user_name": null},
                "params": {"indicator_to_mo_id": 227, "period": null, "platform": null},
                "time": "2024-03-01T10:00:00Z",
                "type": null
            }"#,
        )
        .unwrap();
        assert_eq!(event.id, "events/2");
        assert!(event.msg.is_empty());
        assert_eq!(event.author.mo_id, 0);
        assert_eq!(event.author.user_id, 9);
        assert!(event.author.user_name.is_empty());
        assert_eq!(event.params.indicator_to_mo_id, 227);
        assert_eq!(event.params.period, Period::default());
        assert!(event.event_type.is_empty());
    }

    #[test]
    fn null_author_defaults() {
        let event: Event = serde_json::from_str(r#"{"_id": "events/3", "author": null}"#).unwrap();
        assert_eq!(event.author, Author::default());
    }

    #[test]
    fn null_does_not_hide_type_errors() {
        let parsed = serde_json::from_str::<Event>(r#"{"author": {"user_id": "seven"}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn serializes_with_api_names() {
        let event: Event = serde_json::from_str(ROW).unwrap();
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["_id"], "events/1001");
        assert_eq!(value["type"], "MATRIX_REQUEST");
        assert!(value.get("event_type").is_none());
    }
}
