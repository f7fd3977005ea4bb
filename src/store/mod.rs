use crate::store::models::MovieRecord;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub mod models;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store file error: {0}")]
    Io(#[from] io::Error),

    #[error("store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads the full record array from the store file.
pub fn read_store(path: &Path) -> Result<Vec<MovieRecord>, StorageError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Appends one record and rewrites the whole store file.
///
/// The store is a single JSON array; there is no streaming append, so
/// every write is a full read-push-rewrite cycle.
pub fn append_record(path: &Path, record: MovieRecord) -> Result<(), StorageError> {
    let mut movies = read_store(path)?;
    movies.push(record);

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    movies.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    Ok(())
}
