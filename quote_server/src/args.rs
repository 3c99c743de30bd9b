//! Command-line arguments for the quote server.
//!
//! This module defines the CLI interface using `clap`. The port can also come from
//! the `PORT` environment variable; see `main` for end-to-end usage.
use clap::Parser;
use quote_common::id::IdStrategy;
use quote_common::net::{DEFAULT_HOST, DEFAULT_PORT, PORT_ENV};
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TCP port to listen on.
    #[clap(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind.
    #[clap(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// JSON file with an array of quotes to pre-load into the store.
    #[clap(long)]
    pub seed: Option<PathBuf>,

    /// How ids for new quotes are generated.
    #[clap(long, value_enum, default_value_t = IdStrategy::Sequential)]
    pub ids: IdStrategy,
}
