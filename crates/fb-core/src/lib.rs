//! # fb-core
//!
//! Core types and field mapping for factbridge.
//!
//! This crate holds everything that does not touch the network:
//! - [`Event`] records as returned by the events API
//! - [`EventSummary`], the projection printed after a fetch
//! - [`FactRequest`] and the event-to-fact mapping
//! - [`FactResponse`] returned by the facts API
//! - [`PayloadEncoding`] selecting how fact requests go over the wire
//! - Mapping error types

pub mod enums;
pub mod errors;
pub mod event;
pub mod fact;
pub mod summary;

pub use enums::PayloadEncoding;
pub use errors::MappingError;
pub use event::{Author, Event, EventParams, Period, null_as_default};
pub use fact::{FactDefaults, FactRequest, FactResponse};
pub use summary::EventSummary;
