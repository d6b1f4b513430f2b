use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

use cli::GlobalFlags;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("factbridge error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    // `.env` may set FACTBRIDGE_LOG, so it is read before the subscriber.
    let dotenv = fb_config::load_dotenv();
    init_tracing(&flags)?;
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = bootstrap::load_config(&flags)?;

    match cli.command.unwrap_or(cli::Commands::Run) {
        cli::Commands::Run => commands::run::handle(&config, &flags).await,
        cli::Commands::Fetch(args) => commands::fetch::handle(&args, &config, &flags).await,
    }
}

/// Log filter used when `FACTBRIDGE_LOG` is not set.
const fn default_log_level(flags: &GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FACTBRIDGE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_level(flags)));

    // stdout carries event JSON and fact ids; logs stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
