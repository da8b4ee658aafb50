//! JSON document storage for the quote collection.
//!
//! # Responsibility
//! - Read and parse the quotes document from disk.
//! - Serialize and atomically replace the document on disk.
//!
//! # Invariants
//! - Every read goes to disk; nothing is cached between calls.
//! - Writes replace the whole document via temp file + rename, so readers
//!   never observe a partially written file.
//! - Unknown top-level keys survive a read/write cycle.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod document;
mod file;

pub use document::QuotesDocument;
pub use file::{ensure_document, read_document, write_document};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    /// Document missing or unreadable.
    Read { path: PathBuf, source: io::Error },
    /// Document is not JSON of the expected `{ "quotes": [...] }` shape.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Temp file creation, write or rename failed.
    Write { path: PathBuf, source: io::Error },
    /// In-memory document could not be serialized.
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid quotes document `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode quotes document: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}
