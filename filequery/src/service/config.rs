// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Service configuration

use crate::rewrite::RewriteMode;
use std::path::{Path, PathBuf};

/// Durable catalog document name.
pub const CATALOG_FILE: &str = "data_files.json";
/// Durable schema description cache document name.
pub const CACHE_FILE: &str = "schema_descriptions.json";

/// Configuration for a `CatalogService`.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding the two durable documents.
    pub workdir: PathBuf,
    /// How query rewriting replaces matched names (legacy whole-string by
    /// default).
    pub rewrite_mode: RewriteMode,
    /// Rows included in the description preview section.
    pub preview_rows: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            workdir: PathBuf::from("."),
            rewrite_mode: RewriteMode::default(),
            preview_rows: 5,
        }
    }
}

impl ServiceConfig {
    pub fn with_workdir(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.workdir.join(CATALOG_FILE)
    }

    pub fn cache_path(&self) -> PathBuf {
        self.workdir.join(CACHE_FILE)
    }
}
