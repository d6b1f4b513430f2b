use anyhow::Context;
use fb_client::{Bridge, ForwardOutcome};
use fb_config::BridgeConfig;

use crate::cli::GlobalFlags;

/// Where a per-event line is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// The line printed for one forward outcome: the new fact id on stdout, or
/// the failure on stderr.
fn outcome_line(outcome: &ForwardOutcome) -> (Stream, String) {
    match outcome {
        ForwardOutcome::Forwarded { fact_id, .. } => {
            (Stream::Stdout, format!("indicator_to_mo_fact_id: {fact_id}"))
        }
        ForwardOutcome::Failed { event_id, error } => (
            Stream::Stderr,
            format!("failed to forward event {event_id}: {error}"),
        ),
    }
}

/// Fetch events, print them, then forward each one.
///
/// A failed forward is reported and skipped; only config and fetch errors
/// end the run with an error.
pub async fn handle(config: &BridgeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let bridge = Bridge::from_config(config).context("failed to build HTTP client")?;
    let events = bridge
        .events
        .fetch_events()
        .await
        .context("failed to fetch events")?;

    super::print_summaries(&events, flags.format)?;

    let report = bridge
        .forwarder
        .forward_all(&events, |outcome| match outcome_line(outcome) {
            (Stream::Stdout, line) => println!("{line}"),
            (Stream::Stderr, line) => eprintln!("{line}"),
        })
        .await;

    tracing::info!(
        events = events.len(),
        forwarded = report.forwarded(),
        failed = report.failed(),
        "run complete"
    );
    Ok(())
}
