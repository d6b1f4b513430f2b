//! Events API client.

use fb_config::{EventsConfig, SessionConfig};
use fb_core::{Event, null_as_default};
use reqwest::header::COOKIE;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::ClientError, http::check_response};

/// Filter/sort/limit document sent as the body of the events query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventsQuery {
    filter: QueryFilter,
    sort: QuerySort,
    limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct QueryFilter {
    field: FieldFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct FieldFilter {
    key: &'static str,
    sign: &'static str,
    values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct QuerySort {
    fields: Vec<&'static str>,
    direction: &'static str,
}

impl EventsQuery {
    /// Most recent `limit` events whose `type` matches `event_type`.
    #[must_use]
    pub fn latest_of_type(event_type: &str, limit: u32) -> Self {
        Self {
            filter: QueryFilter {
                field: FieldFilter {
                    key: "type",
                    sign: "LIKE",
                    values: vec![event_type.to_owned()],
                },
            },
            sort: QuerySort {
                fields: vec!["time"],
                direction: "DESC",
            },
            limit,
        }
    }
}

#[derive(Deserialize)]
struct EventsEnvelope {
    #[serde(rename = "DATA", deserialize_with = "null_as_default")]
    data: EventsData,
}

#[derive(Default, Deserialize)]
struct EventsData {
    #[serde(default, deserialize_with = "nullable_rows")]
    rows: Vec<Event>,
}

/// `null` rows and `null` entries both read as empty values.
fn nullable_rows<'de, D>(deserializer: D) -> Result<Vec<Event>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Option<Vec<Option<Event>>> = Option::deserialize(deserializer)?;
    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Parse an events API body into its rows, in response order.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] if the body is not JSON of the
/// `{"DATA": {"rows": [...]}}` shape.
pub fn parse_events(body: &str) -> Result<Vec<Event>, ClientError> {
    let envelope: EventsEnvelope = serde_json::from_str(body)
        .map_err(|e| ClientError::Parse(format!("events response: {e}")))?;
    Ok(envelope.data.rows)
}

/// Queries the events API with a fixed filter.
pub struct EventsClient {
    http: reqwest::Client,
    url: String,
    cookie: String,
    query: EventsQuery,
}

impl EventsClient {
    #[must_use]
    pub fn new(http: reqwest::Client, events: &EventsConfig, session: &SessionConfig) -> Self {
        Self {
            http,
            url: events.url.clone(),
            cookie: session.cookie.clone(),
            query: EventsQuery::latest_of_type(&events.event_type, events.limit),
        }
    }

    /// Fetch the latest matching events.
    ///
    /// The API expects a GET carrying a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn fetch_events(&self) -> Result<Vec<Event>, ClientError> {
        tracing::debug!(url = %self.url, limit = self.query.limit, "querying events");
        let resp = self
            .http
            .get(&self.url)
            .header(COOKIE, &self.cookie)
            .json(&self.query)
            .send()
            .await?;
        let body = check_response(resp).await?.text().await?;

        let events = parse_events(&body)?;
        tracing::debug!(count = events.len(), "events fetched");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "DATA": {
            "rows": [
                {
                    "_id": "events/1001",
                    "_key": "1001",
                    "_rev": "_hX2k",
                    "author": {"mo_id": 42, "user_id": 7, "user_name": "Ivanova A."},
                    "group": "REPORT",
                    "msg": "matrix requested",
                    "params": {
                        "indicator_to_mo_id": 227,
                        "period": {"end": "2024-03-31", "start": "2024-03-01", "type_id": 2, "type_key": "month"},
                        "platform": "web"
                    },
                    "time": "2024-03-01T10:00:00Z",
                    "type": "MATRIX_REQUEST"
                },
                {
                    "_id": "events/1000",
                    "author": {"user_id": 8, "user_name": "Orlov"},
                    "time": "2024-02-28T09:00:00Z",
                    "type": "MATRIX_REQUEST"
                }
            ]
        }
    }"#;

    #[test]
    fn query_document_shape() {
        let query = EventsQuery::latest_of_type("MATRIX_REQUEST", 10);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({
                "filter": {
                    "field": {"key": "type", "sign": "LIKE", "values": ["MATRIX_REQUEST"]}
                },
                "sort": {"fields": ["time"], "direction": "DESC"},
                "limit": 10
            })
        );
    }

    #[test]
    fn parses_rows_in_order() {
        let events = parse_events(FIXTURE).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "events/1001");
        assert_eq!(events[0].params.period.start, "2024-03-01");
        assert_eq!(events[1].id, "events/1000");
        assert_eq!(events[1].author.user_name, "Orlov");
    }

    #[test]
    fn empty_rows() {
        let events = parse_events(r#"{"DATA": {"rows": []}}"#).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_events(r#"{"DATA": {"rows": [{"_id": "#).unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn null_fields_do_not_abort_the_batch() {
        let events = parse_events(
            r#"{"DATA": {"rows": [
                {"_id": "events/1", "msg": null, "params": {"period": null}},
                {"_id": "events/2", "time": "2024-03-01T10:00:00Z"}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].msg.is_empty());
        assert!(events[0].params.period.start.is_empty());
        assert_eq!(events[1].id, "events/2");
    }

    #[test]
    fn null_rows_is_empty() {
        assert!(parse_events(r#"{"DATA": {"rows": null}}"#).unwrap().is_empty());
        assert!(parse_events(r#"{"DATA": null}"#).unwrap().is_empty());
    }

    #[test]
    fn null_row_entry_reads_as_empty_event() {
        let events = parse_events(r#"{"DATA": {"rows": [null, {"_id": "events/5"}]}}"#).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Event::default());
        assert_eq!(events[1].id, "events/5");
    }

    #[test]
    fn missing_envelope_is_parse_error() {
        let err = parse_events(r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn wrong_row_type_is_parse_error() {
        let err = parse_events(r#"{"DATA": {"rows": [{"author": {"user_id": "seven"}}]}}"#)
            .unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
