//! HTTP surface for the quote store.
//!
//! # Responsibility
//! - Map the quote routes onto `QuoteService` calls.
//! - Serve static client assets for every other path.
//!
//! # Invariants
//! - Quote payloads are JSON; every error body is plain text.
//! - Store calls never run on the async worker threads.

#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use quotebook_core::{JsonFileQuoteRepository, QuoteService};
use std::sync::Arc;
use tower_http::services::ServeDir;

pub mod config;
pub mod http;

pub use config::{ApiConfig, ServerConfig};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub(crate) service: Arc<QuoteService<JsonFileQuoteRepository>>,
    pub api: ApiConfig,
}

impl AppState {
    pub fn new(service: QuoteService<JsonFileQuoteRepository>, api: ApiConfig) -> Self {
        Self {
            service: Arc::new(service),
            api,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.api.public_dir);
    Router::new()
        .route("/random-quote", get(http::handlers::random_quote_handler))
        .route("/add-quote", post(http::handlers::add_quote_handler))
        .route("/all-quotes", get(http::handlers::all_quotes_handler))
        .route("/healthz", get(http::handlers::healthz_handler))
        .fallback_service(assets)
        .layer(axum::middleware::from_fn(http::request_log::request_log_middleware))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
