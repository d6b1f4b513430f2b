//! Sequential event → fact forwarding.

use fb_core::{Event, FactDefaults, FactRequest};

use crate::{error::ClientError, facts::FactsClient};

/// Result of forwarding one event.
#[derive(Debug)]
pub enum ForwardOutcome {
    Forwarded { event_id: String, fact_id: i64 },
    Failed { event_id: String, error: ClientError },
}

impl ForwardOutcome {
    #[must_use]
    pub fn event_id(&self) -> &str {
        match self {
            Self::Forwarded { event_id, .. } | Self::Failed { event_id, .. } => event_id,
        }
    }

    #[must_use]
    pub const fn is_forwarded(&self) -> bool {
        matches!(self, Self::Forwarded { .. })
    }
}

/// Per-event outcomes of one run, in event order.
#[derive(Debug, Default)]
pub struct ForwardReport {
    pub outcomes: Vec<ForwardOutcome>,
}

impl ForwardReport {
    #[must_use]
    pub fn forwarded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_forwarded()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.forwarded()
    }

    /// Fact ids in event order, skipping failed events.
    #[must_use]
    pub fn fact_ids(&self) -> Vec<i64> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ForwardOutcome::Forwarded { fact_id, .. } => Some(*fact_id),
                ForwardOutcome::Failed { .. } => None,
            })
            .collect()
    }
}

/// Maps events to fact requests and posts them one at a time.
pub struct Forwarder {
    facts: FactsClient,
    defaults: FactDefaults,
}

impl Forwarder {
    #[must_use]
    pub const fn new(facts: FactsClient, defaults: FactDefaults) -> Self {
        Self { facts, defaults }
    }

    /// Forward a single event.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Mapping`] if the event cannot be mapped, or any
    /// error from [`FactsClient::post_fact`].
    pub async fn forward(&self, event: &Event) -> Result<i64, ClientError> {
        let fact = FactRequest::from_event(event, &self.defaults)?;
        if let Some(indicator) = self.defaults.indicator_override {
            tracing::warn!(
                event_id = %event.id,
                event_indicator = event.params.indicator_to_mo_id,
                override_indicator = indicator,
                "indicator_to_mo_id overridden by configuration"
            );
        }
        let response = self.facts.post_fact(&fact).await?;
        Ok(response.indicator_to_mo_fact_id)
    }

    /// Forward every event in order. A failed event is recorded and skipped;
    /// it never stops the run.
    ///
    /// `on_outcome` sees each outcome as soon as its request completes.
    pub async fn forward_all<F>(&self, events: &[Event], mut on_outcome: F) -> ForwardReport
    where
        F: FnMut(&ForwardOutcome),
    {
        let mut report = ForwardReport::default();
        for event in events {
            let outcome = match self.forward(event).await {
                Ok(fact_id) => {
                    tracing::info!(event_id = %event.id, fact_id, "fact forwarded");
                    ForwardOutcome::Forwarded {
                        event_id: event.id.clone(),
                        fact_id,
                    }
                }
                Err(error) => {
                    tracing::warn!(event_id = %event.id, %error, "event skipped");
                    ForwardOutcome::Failed {
                        event_id: event.id.clone(),
                        error,
                    }
                }
            };
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let report = ForwardReport {
            outcomes: vec![
                ForwardOutcome::Forwarded {
                    event_id: "events/1".into(),
                    fact_id: 10,
                },
                ForwardOutcome::Failed {
                    event_id: "events/2".into(),
                    error: ClientError::MissingField("DATA.indicator_to_mo_fact_id"),
                },
                ForwardOutcome::Forwarded {
                    event_id: "events/3".into(),
                    fact_id: 11,
                },
            ],
        };
        assert_eq!(report.forwarded(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.fact_ids(), vec![10, 11]);
        assert_eq!(report.outcomes[1].event_id(), "events/2");
    }

    #[test]
    fn empty_report() {
        let report = ForwardReport::default();
        assert_eq!(report.forwarded(), 0);
        assert_eq!(report.failed(), 0);
    }
}
