// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Durable catalog store
//!
//! Walks a directory tree for supported data files, derives catalog entries
//! and persists them as `data_files.json`. The whole catalog is replaced on
//! every rebuild; concurrent rebuilds are not coordinated (last writer wins).

use super::entry::{table_id_for, Catalog, CatalogEntry};
use super::error::{CatalogError, CatalogResult};
use crate::loader::FileFormat;
use crate::storage::{read_document, write_document};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The durable form of the catalog.
///
/// A run that found no files persists an explicit marker rather than an
/// empty mapping, so external inspection can distinguish "ran, found
/// nothing" from "never run" (where the document is absent entirely).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CatalogDocument {
    NoFilesFound,
    Cataloged { entries: Vec<CatalogEntry> },
}

/// What loading the durable catalog observed.
#[derive(Debug, Clone)]
pub enum CatalogState {
    /// No document on disk - discovery never ran in this working directory.
    NeverBuilt,
    /// Discovery ran and found no supported files.
    Empty,
    /// Discovery ran and cataloged files.
    Built(Catalog),
}

impl CatalogState {
    /// Collapse to a catalog view; the never-built and empty states both
    /// read as a catalog with no entries.
    pub fn into_catalog(self) -> Catalog {
        match self {
            CatalogState::Built(catalog) => catalog,
            CatalogState::NeverBuilt | CatalogState::Empty => Catalog::default(),
        }
    }
}

/// Persistent store for the file catalog.
pub struct CatalogStore {
    document_path: PathBuf,
}

impl CatalogStore {
    pub fn new(document_path: PathBuf) -> Self {
        Self { document_path }
    }

    /// Rebuild the catalog from a directory tree and persist it.
    ///
    /// Recursively walks `root`, selecting files whose extension matches one
    /// of the supported formats exactly (case-sensitive; a typo'd extension
    /// is simply not discovered). Unreadable directory entries are skipped
    /// with a warning. The resulting catalog replaces the durable document
    /// in full; a walk that yields nothing persists the no-files marker.
    ///
    /// Entry order is walk order. A file name seen twice (same name in two
    /// directories) keeps its first position and takes the later path. Two
    /// distinct file names sanitizing to the same table identifier reject
    /// the rebuild without touching the durable document.
    pub fn rebuild(&self, root: &Path) -> CatalogResult<Catalog> {
        let mut entries: Vec<CatalogEntry> = Vec::new();
        let mut claimed: HashMap<String, String> = HashMap::new();

        for walked in WalkDir::new(root) {
            let walked = match walked {
                Ok(w) => w,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if !walked.file_type().is_file() {
                continue;
            }
            let file_name = match walked.file_name().to_str() {
                Some(name) => name,
                None => {
                    log::warn!("Skipping non-UTF-8 file name: {:?}", walked.file_name());
                    continue;
                }
            };
            if FileFormat::from_file_name(file_name).is_none() {
                continue;
            }

            let table_id = table_id_for(file_name);
            match claimed.get(&table_id) {
                Some(prior) if prior != file_name => {
                    return Err(CatalogError::DuplicateTableId {
                        table_id,
                        first: prior.clone(),
                        second: file_name.to_string(),
                    });
                }
                Some(_) => {
                    // Same name rediscovered in another directory: the later
                    // path wins, the original position is kept.
                    if let Some(existing) =
                        entries.iter_mut().find(|e| e.file_name == file_name)
                    {
                        existing.source_path = walked.path().display().to_string();
                    }
                }
                None => {
                    claimed.insert(table_id, file_name.to_string());
                    entries.push(CatalogEntry::new(
                        file_name,
                        walked.path().display().to_string(),
                    ));
                }
            }
        }

        let document = if entries.is_empty() {
            log::info!("No data files found under {}", root.display());
            CatalogDocument::NoFilesFound
        } else {
            log::info!(
                "Cataloged {} data files under {}",
                entries.len(),
                root.display()
            );
            CatalogDocument::Cataloged {
                entries: entries.clone(),
            }
        };
        write_document(&self.document_path, &document)?;

        Ok(Catalog::from_entries(entries))
    }

    /// Load the durable catalog.
    pub fn load(&self) -> CatalogResult<CatalogState> {
        let document: Option<CatalogDocument> = read_document(&self.document_path)?;
        Ok(match document {
            None => CatalogState::NeverBuilt,
            Some(CatalogDocument::NoFilesFound) => CatalogState::Empty,
            Some(CatalogDocument::Cataloged { entries }) => {
                CatalogState::Built(Catalog::from_entries(entries))
            }
        })
    }
}
