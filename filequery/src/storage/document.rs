// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! JSON document load/save helpers

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::IoError(err.to_string())
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Read a JSON document from disk.
///
/// Returns `Ok(None)` when the document does not exist, distinguishing
/// "never written" from an unreadable or malformed document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)?;
    let value = serde_json::from_str(&raw)
        .map_err(|e| StorageError::DeserializationError(e.to_string()))?;
    Ok(Some(value))
}

/// Write a JSON document to disk, replacing any prior content in full.
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let raw = serde_json::to_string_pretty(value)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    fs::write(path, raw)?;
    log::debug!("Wrote document {}", path.display());
    Ok(())
}
