use anyhow::Context;
use fb_client::Bridge;
use fb_config::BridgeConfig;

use crate::cli::{FetchArgs, GlobalFlags};
use crate::output::output;

pub async fn handle(
    args: &FetchArgs,
    config: &BridgeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let bridge = Bridge::from_config(config).context("failed to build HTTP client")?;
    let events = bridge
        .events
        .fetch_events()
        .await
        .context("failed to fetch events")?;

    if args.full {
        output(&events, flags.format)
    } else {
        super::print_summaries(&events, flags.format)
    }
}
