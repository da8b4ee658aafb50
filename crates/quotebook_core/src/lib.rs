//! Core domain logic for Quotebook.
//! This crate owns the quote model, the file-backed quote store and the
//! client view model shared by the server and CLI.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::quote::{Quote, QuoteValidationError};
pub use repo::quote_repo::{JsonFileQuoteRepository, QuoteRepository, RepoError, RepoResult};
pub use service::quote_service::QuoteService;
pub use storage::{QuotesDocument, StorageError};
pub use view::{ApiError, MainView, QuoteApi, ResultPanel, ViewController, ViewState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
