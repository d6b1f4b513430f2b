//! Facts API client.

use fb_config::{FactsConfig, SessionConfig};
use fb_core::{FactRequest, FactResponse};
use reqwest::header::{CONTENT_TYPE, COOKIE};

use crate::{
    encoder::{PayloadEncoder, encoder_for},
    error::ClientError,
    http::check_response,
};

const FACT_ID_FIELD: &str = "DATA.indicator_to_mo_fact_id";

/// Parse the created fact id out of a facts API body.
///
/// The id is accepted as a JSON integer or an integral float.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] for invalid JSON or a non-integral id, and
/// [`ClientError::MissingField`] if `DATA.indicator_to_mo_fact_id` is absent.
pub fn parse_fact_response(body: &str) -> Result<FactResponse, ClientError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ClientError::Parse(format!("facts response: {e}")))?;
    let id = value
        .get("DATA")
        .and_then(|data| data.get("indicator_to_mo_fact_id"))
        .filter(|id| !id.is_null())
        .ok_or(ClientError::MissingField(FACT_ID_FIELD))?;

    let indicator_to_mo_fact_id = id
        .as_i64()
        .or_else(|| id.as_f64().and_then(integral))
        .ok_or_else(|| ClientError::Parse(format!("{FACT_ID_FIELD} is not an integer: {id}")))?;

    Ok(FactResponse {
        indicator_to_mo_fact_id,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15).then_some(value as i64)
}

/// Submits fact requests to the facts API.
pub struct FactsClient {
    http: reqwest::Client,
    url: String,
    cookie: String,
    encoder: Box<dyn PayloadEncoder>,
}

impl FactsClient {
    #[must_use]
    pub fn new(http: reqwest::Client, facts: &FactsConfig, session: &SessionConfig) -> Self {
        Self::with_encoder(http, facts, session, encoder_for(facts.encoding))
    }

    #[must_use]
    pub fn with_encoder(
        http: reqwest::Client,
        facts: &FactsConfig,
        session: &SessionConfig,
        encoder: Box<dyn PayloadEncoder>,
    ) -> Self {
        Self {
            http,
            url: facts.url.clone(),
            cookie: session.cookie.clone(),
            encoder,
        }
    }

    /// Post one fact and return the id the API assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if encoding or the request fails, the API
    /// returns a non-success status, or the response lacks a fact id.
    pub async fn post_fact(&self, fact: &FactRequest) -> Result<FactResponse, ClientError> {
        let encoded = self.encoder.encode(fact)?;
        tracing::debug!(
            url = %self.url,
            encoding = %self.encoder.encoding(),
            indicator_to_mo_id = fact.indicator_to_mo_id,
            "posting fact"
        );

        let resp = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, encoded.content_type)
            .header(COOKIE, &self.cookie)
            .body(encoded.body)
            .send()
            .await?;
        let body = check_response(resp).await?.text().await?;

        parse_fact_response(&body)
    }
}
