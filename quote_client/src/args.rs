//! Command-line arguments for the quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Args as ClapArgs, Parser, Subcommand};
use quote_common::QuoteFields;
use quote_common::net::default_server_url;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote server.
    #[clap(long, default_value_t = default_server_url())]
    pub server: String,

    /// Operation to perform.
    #[command(subcommand)]
    pub action: Action,
}

/// One of the five CRUD operations.
#[derive(Debug, Subcommand)]
pub enum Action {
    /// List every quote.
    List,
    /// Create a quote and print its id.
    Create(FieldArgs),
    /// Show a single quote.
    Get {
        /// Quote id.
        id: String,
    },
    /// Replace the fields of a quote.
    Update {
        /// Quote id.
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a quote.
    Delete {
        /// Quote id.
        id: String,
    },
}

/// Quote fields given on the command line; omitted ones are sent empty.
#[derive(Debug, Clone, ClapArgs)]
pub struct FieldArgs {
    /// Quote text.
    #[clap(long, default_value = "")]
    pub content: String,

    /// Who said it.
    #[clap(long, default_value = "")]
    pub author: String,

    /// Genre label.
    #[clap(long, default_value = "")]
    pub genre_type: String,
}

impl From<FieldArgs> for QuoteFields {
    fn from(args: FieldArgs) -> Self {
        QuoteFields {
            content: args.content,
            author: args.author,
            genre_type: args.genre_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_takes_field_flags() {
        let args = Args::try_parse_from([
            "quote_client",
            "create",
            "--content",
            "Be yourself",
            "--author",
            "Oscar Wilde",
            "--genre-type",
            "inspiration",
        ])
        .unwrap();
        assert_eq!(args.server, default_server_url());
        let Action::Create(fields) = args.action else {
            panic!("expected create");
        };
        assert_eq!(
            QuoteFields::from(fields),
            QuoteFields::new("Be yourself", "Oscar Wilde", "inspiration")
        );
    }

    #[test]
    fn update_takes_id_and_partial_fields() {
        let args = Args::try_parse_from([
            "quote_client",
            "--server",
            "http://example.test:8080",
            "update",
            "42",
            "--author",
            "Anon",
        ])
        .unwrap();
        assert_eq!(args.server, "http://example.test:8080");
        match args.action {
            Action::Update { id, fields } => {
                assert_eq!(id, "42");
                assert_eq!(fields.author, "Anon");
                assert!(fields.content.is_empty());
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn get_requires_an_id() {
        assert!(Args::try_parse_from(["quote_client", "get"]).is_err());
    }
}
