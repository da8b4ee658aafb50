//! File I/O for the quotes document.
//!
//! # Side effects
//! - Emits `document_read` / `document_write` logging events with duration
//!   and status. Quote content is never logged.

use super::{QuotesDocument, StorageError, StorageResult};
use log::{debug, error, info};
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tempfile::NamedTempFile;

/// Reads and parses the whole document at `path`.
pub fn read_document(path: &Path) -> StorageResult<QuotesDocument> {
    let started_at = Instant::now();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(
                "event=document_read module=storage status=error duration_ms={} error_code=read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match QuotesDocument::from_slice(&bytes) {
        Ok(document) => {
            debug!(
                "event=document_read module=storage status=ok duration_ms={} bytes={} quotes={}",
                started_at.elapsed().as_millis(),
                bytes.len(),
                document.quotes.len()
            );
            Ok(document)
        }
        Err(err) => {
            error!(
                "event=document_read module=storage status=error duration_ms={} error_code=parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(StorageError::Parse {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Replaces the document at `path` with `document`.
///
/// The encoded bytes go to a temp file in the same directory, which is then
/// renamed over `path`. A symlinked `path` is resolved first so the link
/// survives, and the replaced file keeps its permissions.
pub fn write_document(path: &Path, document: &QuotesDocument) -> StorageResult<()> {
    let started_at = Instant::now();
    let encoded = document.to_pretty_json().map_err(StorageError::Encode)?;

    match replace_file(path, encoded.as_bytes()) {
        Ok(()) => {
            info!(
                "event=document_write module=storage status=ok duration_ms={} bytes={} quotes={}",
                started_at.elapsed().as_millis(),
                encoded.len(),
                document.quotes.len()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=document_write module=storage status=error duration_ms={} error_code=write_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(StorageError::Write {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Creates an empty `{"quotes": []}` document when `path` does not exist.
///
/// Returns `true` when a new document was created. Existing files are left
/// untouched, even when their content is invalid.
pub fn ensure_document(path: &Path) -> StorageResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = parent_dir(path) {
        std::fs::create_dir_all(parent).map_err(|err| StorageError::Write {
            path: path.to_path_buf(),
            source: err,
        })?;
    }
    write_document(path, &QuotesDocument::default())?;
    info!(
        "event=document_init module=storage status=ok path={}",
        path.display()
    );
    Ok(true)
}

fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let (target, permissions) = match std::fs::canonicalize(path) {
        Ok(target) => {
            let permissions = std::fs::metadata(&target)?.permissions();
            (target, Some(permissions))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => (path.to_path_buf(), None),
        Err(err) => return Err(err),
    };

    let dir = parent_dir(&target).unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(())
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}
