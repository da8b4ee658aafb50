//! Quote route handlers.
//!
//! Each handler runs its store call on the blocking pool, logs one
//! metadata-only event, and maps failures through `response`.

use super::response::{
    plain_text, store_failure, task_failure, ADD_QUOTE_FAILED, ALL_QUOTES_FAILED,
    INVALID_PAYLOAD, PAYLOAD_TOO_LARGE, RANDOM_QUOTE_FAILED,
};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{info, warn};
use quotebook_core::{JsonFileQuoteRepository, Quote, QuoteService, RepoResult};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;

type Service = Arc<QuoteService<JsonFileQuoteRepository>>;

async fn run_store<T, F>(state: &AppState, call: F) -> Result<RepoResult<T>, JoinError>
where
    T: Send + 'static,
    F: FnOnce(&QuoteService<JsonFileQuoteRepository>) -> RepoResult<T> + Send + 'static,
{
    let service: Service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || call(&service)).await
}

/// `GET /random-quote`
pub async fn random_quote_handler(State(state): State<AppState>) -> Response {
    let started_at = Instant::now();
    match run_store(&state, |service| service.pick_random()).await {
        Ok(Ok(quote)) => {
            info!(
                "event=random_quote module=http status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Json(quote).into_response()
        }
        Ok(Err(err)) => store_failure("random_quote", &err, RANDOM_QUOTE_FAILED, started_at),
        Err(err) => task_failure("random_quote", &err, RANDOM_QUOTE_FAILED),
    }
}

/// `POST /add-quote`
///
/// Bodies that are not `{text, author}` string pairs, or that carry a blank
/// field, get `400`. Bodies over the configured limit get `413`. Neither
/// touches the document.
pub async fn add_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<Quote>, JsonRejection>,
) -> Response {
    let started_at = Instant::now();
    let Json(quote) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(
                "event=add_quote module=http status=rejected error_kind=payload rejection_status={}",
                rejection.status().as_u16()
            );
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                return plain_text(StatusCode::PAYLOAD_TOO_LARGE, PAYLOAD_TOO_LARGE);
            }
            return plain_text(StatusCode::BAD_REQUEST, INVALID_PAYLOAD);
        }
    };

    match run_store(&state, move |service| service.add_quote(&quote)).await {
        Ok(Ok(())) => {
            info!(
                "event=add_quote module=http status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            plain_text(StatusCode::CREATED, "Quote added")
        }
        Ok(Err(err)) => store_failure("add_quote", &err, ADD_QUOTE_FAILED, started_at),
        Err(err) => task_failure("add_quote", &err, ADD_QUOTE_FAILED),
    }
}

/// `GET /all-quotes`
pub async fn all_quotes_handler(State(state): State<AppState>) -> Response {
    let started_at = Instant::now();
    match run_store(&state, |service| service.load_all()).await {
        Ok(Ok(quotes)) => {
            info!(
                "event=all_quotes module=http status=ok duration_ms={} count={}",
                started_at.elapsed().as_millis(),
                quotes.len()
            );
            Json(quotes).into_response()
        }
        Ok(Err(err)) => store_failure("all_quotes", &err, ALL_QUOTES_FAILED, started_at),
        Err(err) => task_failure("all_quotes", &err, ALL_QUOTES_FAILED),
    }
}

pub async fn healthz_handler() -> &'static str {
    quotebook_core::ping()
}
