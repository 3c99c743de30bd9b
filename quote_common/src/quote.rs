//! Quote data model and the JSON payloads exchanged over HTTP.
//!
//! A `Quote` is the only record kept by the store. `QuoteFields` is the body accepted
//! by create and update; the remaining types are the response envelopes returned by
//! the handlers (`{ quotes }`, `{ id }`, `{ data }`).

use serde::{Deserialize, Serialize};

/// A stored quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Identifier assigned at creation; never changes.
    pub id: String,
    /// Quote text.
    pub content: String,
    /// Who said it.
    pub author: String,
    /// Free-form genre label (e.g., `inspiration`).
    pub genre_type: String,
}

impl Quote {
    /// Build a quote from a freshly assigned `id` and the request fields.
    pub fn new(id: String, fields: QuoteFields) -> Self {
        Quote {
            id,
            content: fields.content,
            author: fields.author,
            genre_type: fields.genre_type,
        }
    }

    /// Overwrite the mutable fields, keeping `id`.
    pub fn apply(&mut self, fields: QuoteFields) {
        self.content = fields.content;
        self.author = fields.author;
        self.genre_type = fields.genre_type;
    }

    /// The mutable part of the quote.
    pub fn fields(&self) -> QuoteFields {
        QuoteFields {
            content: self.content.clone(),
            author: self.author.clone(),
            genre_type: self.genre_type.clone(),
        }
    }
}

/// Request body for create and update. Missing fields become empty strings and any
/// `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteFields {
    /// Quote text.
    pub content: String,
    /// Who said it.
    pub author: String,
    /// Free-form genre label.
    pub genre_type: String,
}

impl QuoteFields {
    /// Convenience constructor.
    pub fn new(content: &str, author: &str, genre_type: &str) -> Self {
        QuoteFields {
            content: String::from(content),
            author: String::from(author),
            genre_type: String::from(genre_type),
        }
    }
}

/// `GET /quotes` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteList {
    /// Every stored quote in insertion order.
    pub quotes: Vec<Quote>,
}

/// `POST /quotes` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    /// Id assigned to the new quote.
    pub id: String,
}

/// `GET /quotes/:id` and `PUT /quotes/:id` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteData {
    /// The requested (or just updated) quote.
    pub data: Quote,
}
