//! Quotes HTTP server.
//!
//! This binary keeps a collection of quotes in memory and exposes list/create/read/
//! update/delete over HTTP. Internally, it wires together:
//!
//! - `QuoteService` (from `quote_common`) — the store, the id generator and the five
//!   handlers. It owns all state; nothing survives a restart.
//! - `http` — the axum router mapping verbs and paths to handlers, the catch-all 404
//!   and a per-request access log.
//! - `seed` — optional JSON file loaded into the store before serving.
//! - `args` — `clap` configuration (`--port`/`PORT`, `--host`, `--seed`, `--ids`).
//!
//! Concurrency: the service lives behind `Arc<Mutex<_>>`; each handler holds the lock
//! for its whole (synchronous, in-memory) body, so requests are applied one at a time.
#![warn(missing_docs)]
use crate::args::Args;
use clap::Parser;
use log::info;
use quote_common::net::addr;
use quote_common::{QuoteError, QuoteService, QuoteStore, Result};
use std::sync::{Arc, Mutex};

mod args;
mod http;
mod seed;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let store = match &args.seed {
        Some(path) => seed::load(path)?,
        None => QuoteStore::new(),
    };
    info!("Using {} ids", args.ids);
    let service = QuoteService::new(store, args.ids.build());

    http::serve(Arc::new(Mutex::new(service)), &addr(&args.host, args.port)).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
