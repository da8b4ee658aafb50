//! Plain-text error responses.
//!
//! Store failures are logged with their `RepoError::kind()` tag and then
//! collapsed into the fixed per-route messages clients already display.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use quotebook_core::RepoError;
use std::time::Instant;

pub(crate) const RANDOM_QUOTE_FAILED: &str = "Error retrieving quotes";
pub(crate) const ADD_QUOTE_FAILED: &str = "Error saving the quote";
pub(crate) const ALL_QUOTES_FAILED: &str = "Error retrieving all quotes";
pub(crate) const NO_QUOTES_AVAILABLE: &str = "No quotes available";
pub(crate) const INVALID_PAYLOAD: &str =
    "Invalid quote payload: expected a JSON object with string `text` and `author`";
pub(crate) const PAYLOAD_TOO_LARGE: &str = "Quote payload too large";

pub(crate) fn plain_text(status: StatusCode, body: impl Into<String>) -> Response {
    (status, body.into()).into_response()
}

/// Maps a store error on `route` to its wire response.
pub(crate) fn store_failure(
    route: &str,
    err: &RepoError,
    fallback: &'static str,
    started_at: Instant,
) -> Response {
    let duration_ms = started_at.elapsed().as_millis();
    match err {
        RepoError::Validation(inner) => {
            warn!(
                "event={route} module=http status=rejected duration_ms={duration_ms} error_kind={}",
                err.kind()
            );
            plain_text(StatusCode::BAD_REQUEST, format!("Invalid quote: {inner}"))
        }
        RepoError::EmptyCollection => {
            warn!(
                "event={route} module=http status=error duration_ms={duration_ms} error_kind={}",
                err.kind()
            );
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, NO_QUOTES_AVAILABLE)
        }
        RepoError::Storage(inner) => {
            error!(
                "event={route} module=http status=error duration_ms={duration_ms} error_kind={} error={inner}",
                err.kind()
            );
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, fallback)
        }
    }
}

/// Response for a store task that panicked or was cancelled.
pub(crate) fn task_failure(
    route: &str,
    err: &tokio::task::JoinError,
    fallback: &'static str,
) -> Response {
    error!("event={route} module=http status=error error_kind=task error={err}");
    plain_text(StatusCode::INTERNAL_SERVER_ERROR, fallback)
}

#[cfg(test)]
mod tests {
    use super::{store_failure, ADD_QUOTE_FAILED};
    use axum::http::StatusCode;
    use quotebook_core::{QuoteValidationError, RepoError, StorageError};
    use std::time::Instant;

    #[test]
    fn status_follows_error_kind() {
        let cases = [
            (
                RepoError::Validation(QuoteValidationError::EmptyAuthor),
                StatusCode::BAD_REQUEST,
            ),
            (RepoError::EmptyCollection, StatusCode::INTERNAL_SERVER_ERROR),
            (
                RepoError::Storage(StorageError::Read {
                    path: "quotes.json".into(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = store_failure("test", &err, ADD_QUOTE_FAILED, Instant::now());
            assert_eq!(response.status(), expected, "{}", err.kind());
        }
    }
}
