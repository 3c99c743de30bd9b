//!
//! Core of the quotes service, shared by the HTTP server and the client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` record and the JSON request/response payloads.
//! - `id` — identifier generators for new quotes.
//! - `store` — the in-memory, insertion-ordered `QuoteStore`.
//! - `service` — `QuoteService`, the five CRUD handlers over the store.
//! - `reply` — framework-agnostic status + body returned to the router.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod id;
pub mod net;
pub mod quote;
pub mod reply;
pub mod result;
pub mod service;
pub mod store;

pub use error::QuoteError;
pub use quote::{Quote, QuoteFields};
pub use reply::Reply;
pub use result::Result;
pub use service::QuoteService;
pub use store::QuoteStore;
