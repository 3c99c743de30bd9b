//! In-memory, insertion-ordered quote store.
//!
//! The store keeps every `Quote` in a `Vec` and looks records up by a linear scan on
//! `id`. It exposes five primitives used by the handlers:
//!
//! - `QuoteStore::list_all()` — every quote in insertion order.
//! - `QuoteStore::find_by_id(id)` — read a single quote.
//! - `QuoteStore::append(quote)` — add a quote whose id is already assigned.
//! - `QuoteStore::replace_fields(id, fields)` — overwrite the mutable fields.
//! - `QuoteStore::remove_by_id(id)` — drop a quote.
//!
//! Lookups that miss return `QuoteError::NotFound` before anything is mutated, so an
//! unknown id can never touch another record.
//!
//! The store is not synchronized; if it is shared across threads, wrap it (or the
//! service that owns it) with a synchronization primitive.

use std::collections::HashSet;

use crate::error::QuoteError;
use crate::quote::{Quote, QuoteFields};
use crate::result::Result;

/// Ordered collection of quotes.
#[derive(Debug, Default, Clone)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { quotes: Vec::new() }
    }

    /// Create a store pre-seeded with `quotes`, kept in the given order.
    ///
    /// Fails with `DuplicateId` if two records share an id.
    pub fn from_seed(quotes: Vec<Quote>) -> Result<Self> {
        let mut seen = HashSet::new();
        for quote in &quotes {
            if !seen.insert(quote.id.clone()) {
                return Err(QuoteError::DuplicateId(quote.id.clone()));
            }
        }
        Ok(Self { quotes })
    }

    /// Every quote in insertion order.
    pub fn list_all(&self) -> &[Quote] {
        &self.quotes
    }

    /// Quote with the given id.
    pub fn find_by_id(&self, id: &str) -> Result<&Quote> {
        self.quotes
            .iter()
            .find(|quote| quote.id == id)
            .ok_or_else(|| QuoteError::NotFound(id.to_string()))
    }

    /// Whether a quote with `id` is present.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Append a quote at the end. The caller guarantees the id is not in use.
    pub fn append(&mut self, quote: Quote) {
        debug_assert!(!self.contains(&quote.id), "duplicate id {}", quote.id);
        self.quotes.push(quote);
    }

    /// Overwrite `content`, `author` and `genre_type` of the quote with `id`.
    pub fn replace_fields(&mut self, id: &str, fields: QuoteFields) -> Result<&Quote> {
        let idx = self
            .position(id)
            .ok_or_else(|| QuoteError::NotFound(id.to_string()))?;
        let quote = &mut self.quotes[idx];
        quote.apply(fields);
        Ok(quote)
    }

    /// Remove and return the quote with `id`, keeping the order of the rest.
    pub fn remove_by_id(&mut self, id: &str) -> Result<Quote> {
        let idx = self
            .position(id)
            .ok_or_else(|| QuoteError::NotFound(id.to_string()))?;
        Ok(self.quotes.remove(idx))
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.quotes.iter().position(|quote| quote.id == id)
    }
}
