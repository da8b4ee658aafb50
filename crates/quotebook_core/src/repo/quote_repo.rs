//! Quote repository contract and JSON file implementation.
//!
//! # Responsibility
//! - Provide read-all and append over the persisted quote collection.
//! - Keep document layout and file replacement inside the storage boundary.
//!
//! # Invariants
//! - Every call re-reads the document; external edits are observed.
//! - Appends within one repository are serialized by a writer lock, so
//!   concurrent appends from one process never lose updates.
//! - Append preserves the order of existing quotes and adds at the end.
//! - Write paths call `Quote::validate()` before touching the document.

use crate::model::quote::{Quote, QuoteValidationError};
use crate::storage::{self, StorageError, StorageResult};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for quote store operations.
#[derive(Debug)]
pub enum RepoError {
    /// Document missing, unreadable, malformed, or not writable.
    Storage(StorageError),
    /// Random selection over zero quotes.
    EmptyCollection,
    /// Quote rejected before any write.
    Validation(QuoteValidationError),
}

impl RepoError {
    /// Stable tag for logs and wire mapping.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Storage(_) => "storage",
            Self::EmptyCollection => "empty_collection",
            Self::Validation(_) => "validation",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::EmptyCollection => write!(f, "quote collection is empty"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::EmptyCollection => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<QuoteValidationError> for RepoError {
    fn from(value: QuoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for the quote collection.
pub trait QuoteRepository {
    fn load_all(&self) -> RepoResult<Vec<Quote>>;
    fn append(&self, quote: &Quote) -> RepoResult<()>;
}

/// Repository backed by a single JSON document on disk.
pub struct JsonFileQuoteRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileQuoteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty document if none exists yet.
    ///
    /// Returns `true` when a document was created.
    pub fn ensure_document(&self) -> StorageResult<bool> {
        storage::ensure_document(&self.path)
    }
}

impl QuoteRepository for JsonFileQuoteRepository {
    fn load_all(&self) -> RepoResult<Vec<Quote>> {
        let document = storage::read_document(&self.path)?;
        Ok(document.quotes)
    }

    fn append(&self, quote: &Quote) -> RepoResult<()> {
        quote.validate()?;

        // A poisoned lock only means another append panicked mid-cycle; the
        // document on disk is still whole because writes go through rename.
        let _guard = match self.write_lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!("event=quote_append module=repo status=recovered reason=lock_poisoned");
                poisoned.into_inner()
            }
        };

        let mut document = storage::read_document(&self.path)?;
        document.quotes.push(quote.clone());
        storage::write_document(&self.path, &document)?;
        Ok(())
    }
}

