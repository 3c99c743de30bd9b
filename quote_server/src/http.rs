//! HTTP transport for the quotes service, built on axum.
//!
//! ## Routes
//!
//! - `GET /` — plain-text greeting.
//! - `GET /quotes` — `{ "quotes": [...] }`. `/quotes/` is served the same as `/quotes`.
//! - `POST /quotes` — create from `{content, author, genre_type}`, returns `{ "id" }`.
//! - `GET /quotes/:id` — `{ "data": quote }` or an empty 404.
//! - `PUT /quotes/:id` — replace the fields, `{ "data": quote }` or an empty 404.
//! - `DELETE /quotes/:id` — empty 202 or an empty 404.
//! - anything else — 404 with the JSON string `"Not Found!"`.
//!
//! The `QuoteService` sits behind a mutex held for the whole handler body, so
//! requests mutate the store one at a time even on a multi-threaded runtime.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get};
use axum::{Json, Router};
use log::info;
use quote_common::net::QUOTES_PATH;
use quote_common::{QuoteError, QuoteFields, QuoteService, Reply, Result};

/// Service handle shared by every request.
pub type SharedService = Arc<Mutex<QuoteService>>;

/// Body of the catch-all 404.
pub const NOT_FOUND_BODY: &str = "Not Found!";

/// Build the axum `Router` for the quotes API.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/", get(index))
        .route(QUOTES_PATH, collection())
        .route(&format!("{}/", QUOTES_PATH), collection())
        .route(
            &format!("{}/:id", QUOTES_PATH),
            get(get_quote)
                .put(update_quote)
                .delete(delete_quote)
                .fallback(not_found),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(access_log))
        .with_state(service)
}

fn collection() -> MethodRouter<SharedService> {
    get(list_quotes).post(create_quote).fallback(not_found)
}

/// Serve the API at `addr` (e.g. `"0.0.0.0:3000"`) until the process exits.
pub async fn serve(service: SharedService, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on port {}", listener.local_addr()?.port());
    axum::serve(listener, router(service)).await
}

/// Adapter from the core `Reply` to an axum response.
struct HttpReply(Reply);

impl IntoResponse for HttpReply {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.0.body {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

impl From<QuoteError> for HttpReply {
    fn from(err: QuoteError) -> Self {
        HttpReply(Reply::from_error(err))
    }
}

fn lock(service: &SharedService) -> Result<MutexGuard<'_, QuoteService>> {
    Ok(service.lock()?)
}

async fn index() -> &'static str {
    "Hello World"
}

async fn list_quotes(State(service): State<SharedService>) -> HttpReply {
    HttpReply(Reply::from_result(lock(&service).map(|s| s.list())))
}

async fn create_quote(
    State(service): State<SharedService>,
    Json(fields): Json<QuoteFields>,
) -> HttpReply {
    HttpReply(Reply::from_result(
        lock(&service).map(|mut s| s.create(fields)),
    ))
}

async fn get_quote(State(service): State<SharedService>, Path(id): Path<String>) -> HttpReply {
    HttpReply(Reply::from_result(
        lock(&service).and_then(|s| s.get_one(&id)),
    ))
}

async fn update_quote(
    State(service): State<SharedService>,
    Path(id): Path<String>,
    Json(fields): Json<QuoteFields>,
) -> HttpReply {
    HttpReply(Reply::from_result(
        lock(&service).and_then(|mut s| s.update_one(&id, fields)),
    ))
}

async fn delete_quote(State(service): State<SharedService>, Path(id): Path<String>) -> HttpReply {
    let reply = match lock(&service).and_then(|mut s| s.delete_one(&id)) {
        Ok(()) => Reply::accepted(),
        Err(e) => Reply::from_error(e),
    };
    HttpReply(reply)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(NOT_FOUND_BODY))
}

/// One line per request: `METHOD PATH STATUS ELAPSED ms`.
async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();
    let response = next.run(request).await;
    info!(
        "{} {} {} {:.3} ms",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::id::IdStrategy;
    use quote_common::{Quote, QuoteStore};
    use serde_json::{Value, json};

    fn service_with(store: QuoteStore) -> SharedService {
        Arc::new(Mutex::new(QuoteService::new(
            store,
            IdStrategy::Sequential.build(),
        )))
    }

    /// Bind to port 0 and return the base URL.
    async fn start_server(service: SharedService) -> String {
        let app = router(service);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn start() -> (String, SharedService) {
        let service = service_with(QuoteStore::new());
        (start_server(service.clone()).await, service)
    }

    #[tokio::test]
    async fn index_says_hello() {
        let (base, _) = start().await;
        let resp = reqwest::get(format!("{base}/")).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.text().await.unwrap(), "Hello World");
    }

    #[tokio::test]
    async fn oscar_wilde_scenario() {
        let (base, _) = start().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/quotes"))
            .json(&json!({
                "content": "Be yourself",
                "author": "Oscar Wilde",
                "genre_type": "inspiration"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        let id = body["id"].as_str().unwrap().to_string();

        let resp = client
            .get(format!("{base}/quotes/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "data": {
                "id": id,
                "content": "Be yourself",
                "author": "Oscar Wilde",
                "genre_type": "inspiration"
            }})
        );

        let resp = client
            .delete(format!("{base}/quotes/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 202);
        assert!(resp.bytes().await.unwrap().is_empty());

        let resp = client
            .get(format!("{base}/quotes/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        assert!(resp.bytes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_seed_then_created() {
        let seed = vec![Quote::new(
            "seed".into(),
            QuoteFields::new("Less is more", "Mies", "design"),
        )];
        let service = service_with(QuoteStore::from_seed(seed).unwrap());
        let base = start_server(service).await;
        let client = reqwest::Client::new();

        for content in ["one", "two"] {
            client
                .post(format!("{base}/quotes"))
                .json(&json!({ "content": content, "author": "a", "genre_type": "g" }))
                .send()
                .await
                .unwrap();
        }

        let body: Value = client
            .get(format!("{base}/quotes"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let contents: Vec<&str> = body["quotes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["content"].as_str().unwrap())
            .collect();
        assert_eq!(contents, vec!["Less is more", "one", "two"]);
    }

    #[tokio::test]
    async fn trailing_slash_reaches_the_collection() {
        let (base, _) = start().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/quotes/"))
            .json(&json!({ "content": "slash", "author": "a", "genre_type": "g" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let resp = client.get(format!("{base}/quotes/")).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["quotes"][0]["content"], "slash");
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let (base, _) = start().await;
        let client = reqwest::Client::new();
        let created: Value = client
            .post(format!("{base}/quotes"))
            .json(&json!({ "content": "old", "author": "a", "genre_type": "g" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let id = created["id"].as_str().unwrap();

        let resp = client
            .put(format!("{base}/quotes/{id}"))
            .json(&json!({ "content": "new", "author": "b", "genre_type": "h" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["data"]["id"], id);
        assert_eq!(body["data"]["content"], "new");
        assert_eq!(body["data"]["genre_type"], "h");
    }

    #[tokio::test]
    async fn unknown_ids_return_404_and_leave_store_alone() {
        let (base, service) = start().await;
        let client = reqwest::Client::new();
        client
            .post(format!("{base}/quotes"))
            .json(&json!({ "content": "keep", "author": "me", "genre_type": "g" }))
            .send()
            .await
            .unwrap();

        let resp = client
            .put(format!("{base}/quotes/nope"))
            .json(&json!({ "content": "x", "author": "y", "genre_type": "z" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        let resp = client
            .delete(format!("{base}/quotes/nope"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);

        let list = service.lock().unwrap().list();
        assert_eq!(list.quotes.len(), 1);
        assert_eq!(list.quotes[0].content, "keep");
    }

    #[tokio::test]
    async fn unmatched_routes_fall_through_to_not_found() {
        let (base, _) = start().await;
        let client = reqwest::Client::new();

        let resp = client.get(format!("{base}/puppies/35")).send().await.unwrap();
        assert_eq!(resp.status(), 404);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!(NOT_FOUND_BODY));

        let resp = client
            .patch(format!("{base}/quotes/1"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_before_the_store() {
        let (base, service) = start().await;
        let resp = reqwest::Client::new()
            .post(format!("{base}/quotes"))
            .header("content-type", "application/json")
            .body("{ not json")
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
        assert!(service.lock().unwrap().store().is_empty());
    }

    #[tokio::test]
    async fn mistyped_or_untyped_bodies_are_rejected_before_the_store() {
        let (base, service) = start().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/quotes"))
            .json(&json!({ "content": 5 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 422);

        let resp = client
            .post(format!("{base}/quotes"))
            .body(r#"{"content":"no content type"}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 415);

        assert!(service.lock().unwrap().store().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_become_empty_strings() {
        let (base, service) = start().await;
        let resp = reqwest::Client::new()
            .post(format!("{base}/quotes"))
            .json(&json!({ "author": "Anonymous" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let service = service.lock().unwrap();
        let stored = &service.store().list_all()[0];
        assert_eq!(stored.author, "Anonymous");
        assert!(stored.content.is_empty());
    }

    #[test]
    fn http_reply_keeps_status() {
        let response = HttpReply::from(QuoteError::NotFound("1".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = HttpReply(Reply::accepted()).into_response();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
}
