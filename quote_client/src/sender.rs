//! Sending CRUD requests to the quote server over HTTP.
//!
//! `QuoteSender` wraps a blocking `reqwest` client and maps every operation to its
//! verb and path. A 404 is surfaced as `QuoteError::NotFound`; any other status the
//! operation does not expect becomes `QuoteError::Status`.
use log::debug;
use quote_common::net::QUOTES_PATH;
use quote_common::quote::{Created, QuoteData, QuoteList};
use quote_common::{QuoteError, QuoteFields, Result};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

/// Helper type for sending requests to the server.
pub struct QuoteSender {
    client: Client,
    base: String,
}

impl QuoteSender {
    /// Sender targeting `base` (e.g. `http://127.0.0.1:3000`).
    pub fn new(base: &str) -> Self {
        Self {
            client: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /quotes`
    pub fn list(&self) -> Result<QuoteList> {
        let resp = self.client.get(self.collection_url()).send().map_err(http)?;
        decode(resp, "")
    }

    /// `POST /quotes`
    pub fn create(&self, fields: &QuoteFields) -> Result<Created> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(fields)
            .send()
            .map_err(http)?;
        decode(resp, "")
    }

    /// `GET /quotes/:id`
    pub fn get(&self, id: &str) -> Result<QuoteData> {
        let resp = self.client.get(self.item_url(id)).send().map_err(http)?;
        decode(resp, id)
    }

    /// `PUT /quotes/:id`
    pub fn update(&self, id: &str, fields: &QuoteFields) -> Result<QuoteData> {
        let resp = self
            .client
            .put(self.item_url(id))
            .json(fields)
            .send()
            .map_err(http)?;
        decode(resp, id)
    }

    /// `DELETE /quotes/:id`
    pub fn delete(&self, id: &str) -> Result<()> {
        let resp = self.client.delete(self.item_url(id)).send().map_err(http)?;
        check_status(resp.status().as_u16(), 202, id)
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base, QUOTES_PATH)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base, QUOTES_PATH, id)
    }
}

fn http(err: reqwest::Error) -> QuoteError {
    QuoteError::Http(err.to_string())
}

fn decode<T: DeserializeOwned>(resp: Response, id: &str) -> Result<T> {
    let status = resp.status().as_u16();
    debug!("{} -> {}", resp.url(), status);
    check_status(status, 200, id)?;
    resp.json::<T>().map_err(http)
}

/// Map a response status to the error the caller should see.
fn check_status(status: u16, expected: u16, id: &str) -> Result<()> {
    match status {
        s if s == expected => Ok(()),
        404 => Err(QuoteError::NotFound(id.to_string())),
        other => Err(QuoteError::Status(other)),
    }
}
