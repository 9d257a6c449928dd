// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Write-once schema description cache
//!
//! Descriptions are expensive to compute (they consume the external
//! reader), so the first result for a file name - success text or failure
//! text alike - is persisted and returned for every later call. A
//! permanently broken file therefore fails once, not on every call. The
//! only recompute path is a schema override load, which always overwrites
//! the entry.

use crate::catalog::CatalogEntry;
use crate::loader::{LoadError, LoadResult};
use crate::storage::{read_document, write_document, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How much raw file content a failure diagnostic carries.
const FAILURE_PREVIEW_BYTES: usize = 500;

#[derive(Error, Debug, Clone)]
pub enum CacheError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for CacheError {
    fn from(err: StorageError) -> Self {
        CacheError::StorageError(err.to_string())
    }
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Persistent file-name -> description-text cache.
pub struct SchemaCache {
    document_path: PathBuf,
}

impl SchemaCache {
    pub fn new(document_path: PathBuf) -> Self {
        Self { document_path }
    }

    /// Return the cached description for a file, computing it on first use.
    ///
    /// On a miss the compute closure runs once. Its success text is cached
    /// as-is; its failure becomes a diagnostic string (augmented, best
    /// effort, with the first bytes of the file read as text) and is cached
    /// exactly like a success. Either way the document is persisted and the
    /// stored text returned - a later call for the same name is a pure
    /// cache hit that never re-invokes the closure.
    pub fn get_or_compute(
        &self,
        entry: &CatalogEntry,
        compute: impl FnOnce() -> LoadResult<String>,
    ) -> CacheResult<String> {
        let mut descriptions = self.load()?;
        if let Some(cached) = descriptions.get(&entry.file_name) {
            log::debug!("Schema cache hit for {}", entry.file_name);
            return Ok(cached.clone());
        }

        log::debug!("Schema cache miss for {}, introspecting", entry.file_name);
        let text = match compute() {
            Ok(description) => description,
            Err(err) => failure_text(&entry.file_name, &entry.source_path, &err),
        };

        descriptions.insert(entry.file_name.clone(), text.clone());
        write_document(&self.document_path, &descriptions)?;
        Ok(text)
    }

    /// Overwrite the entry for a file with a freshly computed description.
    ///
    /// This is the override path's invalidation: the prior entry, if any,
    /// is replaced unconditionally and the document persisted.
    pub fn store_override(&self, file_name: &str, description: &str) -> CacheResult<()> {
        let mut descriptions = self.load()?;
        descriptions.insert(file_name.to_string(), description.to_string());
        write_document(&self.document_path, &descriptions)?;
        log::debug!("Schema cache entry for {} overwritten", file_name);
        Ok(())
    }

    fn load(&self) -> CacheResult<BTreeMap<String, String>> {
        Ok(read_document(&self.document_path)?.unwrap_or_default())
    }
}

/// Diagnostic text cached for a failed introspection.
///
/// Includes a bounded preview of the raw file content to aid manual
/// schema-override decisions; skipped silently when the file cannot be
/// read as text.
fn failure_text(file_name: &str, source_path: &str, err: &LoadError) -> String {
    let mut text = format!("Error reading {}: {}\n", file_name, err);
    if let Some(preview) = text_preview(Path::new(source_path), FAILURE_PREVIEW_BYTES) {
        text.push_str(&format!(
            "First {} characters of the file:\n{}\n---\n to help with schema inference and override",
            FAILURE_PREVIEW_BYTES, preview
        ));
    }
    text
}

/// Read up to `limit` bytes of a file as UTF-8 text, truncating on a char
/// boundary. `None` when the file is missing or not valid text.
fn text_preview(path: &Path, limit: usize) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.len() <= limit {
        return Some(contents);
    }
    let boundary = (0..=limit).rev().find(|i| contents.is_char_boundary(*i))?;
    Some(contents[..boundary].to_string())
}
