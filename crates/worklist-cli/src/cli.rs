//! CLI argument definitions for the token inspector.

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "worklist",
    version,
    about = "Inspect and produce list-view URL query tokens",
    long_about = "Decode the query_props token a list-view URL carries back into its\n\
                  query configuration, or encode a configuration into a token.\n\
                  Useful when debugging why a shared URL restores the wrong view."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a token and print the query configuration as JSON.
    Decode(DecodeArgs),

    /// Encode a query configuration (JSON on stdin or as an argument) into a token.
    Encode(EncodeArgs),

    /// Decode a token and print a human-readable summary.
    Explain(DecodeArgs),
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// The query_props token, exactly as it appears in the URL.
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// The accompanying query_id URL parameter, if any.
    #[arg(long = "query-id", value_name = "ID")]
    pub query_id: Option<String>,
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Query configuration as a JSON string. Reads stdin when omitted.
    #[arg(value_name = "JSON")]
    pub json: Option<String>,
}
