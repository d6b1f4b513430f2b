pub mod fetch;
pub mod run;

use fb_core::{Event, EventSummary};

use crate::cli::OutputFormat;
use crate::output::output;

/// Print the summary projection of fetched events.
fn print_summaries(events: &[Event], format: OutputFormat) -> anyhow::Result<()> {
    let summaries: Vec<EventSummary> = events.iter().map(EventSummary::from).collect();
    output(&summaries, format)
}
