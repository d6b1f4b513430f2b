use std::path::PathBuf;

use clap::ValueEnum;
use fb_core::PayloadEncoding;

/// How fetched events are printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Fact body encoding as accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum EncodingArg {
    Form,
    Json,
}

impl From<EncodingArg> for PayloadEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Form => Self::Form,
            EncodingArg::Json => Self::Json,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
    pub encoding: Option<PayloadEncoding>,
    pub insecure: bool,
}
