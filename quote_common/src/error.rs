//! Error types shared between the quote server, the client and the core.
//!
//! The `QuoteError` enum unifies the single domain failure (`NotFound`) with the
//! ambient failures of startup, locking and transport, so every crate in the
//! workspace can propagate one error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by the server, the client and the core.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// No quote with the requested id exists in the store.
    #[error("Quote not found: {0}")]
    NotFound(String),

    /// A seed collection contains the same id more than once.
    #[error("Duplicate quote id in seed: {0}")]
    DuplicateId(String),

    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// HTTP transport failure on the client side.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with a status the client did not expect.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
}

impl QuoteError {
    /// HTTP status code used when this error is turned into a reply.
    pub fn status_code(&self) -> u16 {
        match self {
            QuoteError::NotFound(_) => 404,
            QuoteError::DuplicateId(_) => 409,
            QuoteError::Status(code) => *code,
            QuoteError::Http(_) => 502,
            QuoteError::Io(_) | QuoteError::SerdeJson(_) | QuoteError::MutexLock(_) => 500,
        }
    }
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
