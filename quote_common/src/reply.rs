//! Framework-agnostic response type produced by the handlers.
//!
//! A `Reply` is what the router transmits: a status code and an optional JSON body.
//! The server converts it into its own response type; tests can inspect it directly.

use serde::Serialize;
use serde_json::Value;

use crate::error::QuoteError;
use crate::result::Result;

/// Status code plus optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body; `None` means an empty body.
    pub body: Option<Value>,
}

impl Reply {
    /// 200 with `payload` serialized as JSON.
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self {
                status: 200,
                body: Some(body),
            },
            Err(e) => Self::from_error(QuoteError::SerdeJson(e)),
        }
    }

    /// 202 with an empty body.
    pub fn accepted() -> Self {
        Self {
            status: 202,
            body: None,
        }
    }

    /// 404 with an empty body.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: None,
        }
    }

    /// Map an error to its reply. `NotFound` carries no body; everything else
    /// reports the message under `error`.
    pub fn from_error(err: QuoteError) -> Self {
        match err {
            QuoteError::NotFound(_) => Self::not_found(),
            other => Self {
                status: other.status_code(),
                body: Some(serde_json::json!({ "error": other.to_string() })),
            },
        }
    }

    /// 200 with the payload on success, the error's reply otherwise.
    pub fn from_result<T: Serialize>(result: Result<T>) -> Self {
        match result {
            Ok(payload) => Self::ok(&payload),
            Err(e) => Self::from_error(e),
        }
    }
}

impl From<QuoteError> for Reply {
    fn from(err: QuoteError) -> Self {
        Self::from_error(err)
    }
}
