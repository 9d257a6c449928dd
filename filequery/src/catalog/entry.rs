// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog entries and table identifier derivation

use serde::{Deserialize, Serialize};

/// One cataloged data file.
///
/// `file_name` is the unique user-facing key (base name including
/// extension); `source_path` is where discovery found the file;
/// `table_id` is the sanitized identifier the file is registered under in
/// the query engine session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub file_name: String,
    pub source_path: String,
    pub table_id: String,
}

impl CatalogEntry {
    /// Build an entry for a discovered file, deriving its table identifier.
    pub fn new(file_name: impl Into<String>, source_path: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let table_id = table_id_for(&file_name);
        Self {
            file_name,
            source_path: source_path.into(),
            table_id,
        }
    }
}

/// Derive the stable table identifier for a file name.
///
/// Every `.` and `-` becomes `_`, and the result is prefixed with a single
/// `_` so the identifier can never collide with a SQL keyword. The mapping
/// is a pure function of the file name: the same name always yields the
/// same identifier.
pub fn table_id_for(file_name: &str) -> String {
    let sanitized = file_name.replace(['.', '-'], "_");
    format!("_{}", sanitized)
}

/// Ordered collection of catalog entries.
///
/// Entry order is discovery order (filesystem walk order, not sorted) and
/// doubles as the iteration order of the query rewriter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Look up an entry by its user-facing file name.
    pub fn lookup(&self, file_name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.file_name == file_name)
    }

    /// Look up an entry by the path discovery recorded for it.
    pub fn lookup_by_path(&self, path: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.source_path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// File names in discovery order, for newline-joined listing output.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.file_name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
