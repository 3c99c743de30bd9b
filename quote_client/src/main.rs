//! Quote Client — a command-line client for the quotes HTTP server. It performs one
//! CRUD operation per invocation and logs the server's answer.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client create --content "Be yourself" --author "Oscar Wilde" --genre-type inspiration
//! quote_client get 1
//! quote_client --server http://10.0.0.5:3000 delete 1
//! ```
#![warn(missing_docs)]
mod args;
mod sender;

use crate::args::{Action, Args};
use crate::sender::QuoteSender;
use clap::Parser;
use log::{error, info};
use quote_common::{QuoteError, QuoteFields, Result};

fn run(sender: &QuoteSender, action: Action) -> Result<(), QuoteError> {
    match action {
        Action::List => {
            let list = sender.list()?;
            info!("{} quotes", list.quotes.len());
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        Action::Create(fields) => {
            let created = sender.create(&QuoteFields::from(fields))?;
            info!("Created quote {}", created.id);
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Action::Get { id } => {
            let quote = sender.get(&id)?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        Action::Update { id, fields } => {
            let quote = sender.update(&id, &QuoteFields::from(fields))?;
            info!("Updated quote {}", id);
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        Action::Delete { id } => {
            sender.delete(&id)?;
            info!("Deleted quote {}", id);
        }
    }
    Ok(())
}

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let sender = QuoteSender::new(&args.server);
    info!("Using server {}", args.server);

    if let Err(e) = run(&sender, args.action) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
