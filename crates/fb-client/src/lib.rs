//! # fb-client
//!
//! HTTP clients for factbridge:
//! - [`EventsClient`] queries the events API for the latest events of a type
//! - [`FactsClient`] posts fact requests and reads back the created fact id
//! - [`PayloadEncoder`] implementations for form and JSON bodies
//! - [`Forwarder`] runs the sequential event → fact loop
//!
//! Every call is awaited in turn; there is no retry and no concurrency.

pub mod encoder;
pub mod events;
pub mod facts;
pub mod forward;

mod error;
mod http;

pub use encoder::{EncodedBody, FormEncoder, JsonEncoder, PayloadEncoder, encoder_for};
pub use error::ClientError;
pub use events::{EventsClient, EventsQuery};
pub use facts::FactsClient;
pub use forward::{ForwardOutcome, ForwardReport, Forwarder};
pub use http::build_client;

use fb_config::BridgeConfig;

/// Both API clients built from one validated configuration.
pub struct Bridge {
    pub events: EventsClient,
    pub forwarder: Forwarder,
}

impl Bridge {
    /// Build both clients sharing one connection pool.
    ///
    /// The configuration is expected to have passed
    /// [`BridgeConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &BridgeConfig) -> Result<Self, ClientError> {
        let http = build_client(&config.transport)?;
        let events = EventsClient::new(http.clone(), &config.events, &config.session);
        let facts = FactsClient::new(http, &config.facts, &config.session);
        Ok(Self {
            events,
            forwarder: Forwarder::new(facts, config.facts.fact_defaults()),
        })
    }
}
