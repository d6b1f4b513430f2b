use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::{EncodingArg, GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `factbridge` binary.
#[derive(Debug, Parser)]
#[command(
    name = "factbridge",
    version,
    about = "Forward event-log records to the facts API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format for fetched events: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Config file (defaults to ./factbridge.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fact body encoding, overrides facts.encoding
    #[arg(short, long, global = true)]
    pub encoding: Option<EncodingArg>,

    /// Skip TLS certificate validation (self-signed endpoints only)
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level command tree. Without a subcommand `run` is assumed.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch events and forward each one as a fact.
    Run,
    /// Fetch events and print them without forwarding.
    Fetch(FetchArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    /// Print complete event records instead of summaries.
    #[arg(long)]
    pub full: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
            encoding: self.encoding.map(Into::into),
            insecure: self.insecure,
        }
    }
}
