// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Table loader
//!
//! Reads a cataloged file through the `FrameReader` capability, composes
//! its description text and registers it in the query engine session under
//! the entry's table identifier.

use super::error::{LoadError, LoadResult};
use super::format::FileFormat;
use super::overrides::ColumnOverrides;
use super::reader::FrameReader;
use crate::catalog::CatalogEntry;
use crate::exec::{QueryEngine, TableFrame};
use std::path::Path;

/// Loads files into the engine session and describes them.
pub struct TableLoader {
    preview_rows: usize,
}

impl TableLoader {
    pub fn new(preview_rows: usize) -> Self {
        Self { preview_rows }
    }

    /// Load a cataloged file and register it as a queryable table.
    ///
    /// Dispatches on the file extension, reads the frame (honoring any
    /// column type overrides), composes the description text and then moves
    /// the frame into the engine registration - the loader retains no
    /// reference to the loaded data afterwards. Re-registration under an
    /// existing table identifier silently replaces the prior binding.
    ///
    /// Returns the description text: inferred/overridden schema, descriptive
    /// statistics and a bounded row preview, concatenated in that order.
    pub fn load(
        &self,
        entry: &CatalogEntry,
        overrides: Option<&ColumnOverrides>,
        reader: &dyn FrameReader,
        engine: &mut dyn QueryEngine,
    ) -> LoadResult<String> {
        let format = FileFormat::from_file_name(&entry.file_name)
            .ok_or_else(|| LoadError::UnsupportedFormat(entry.file_name.clone()))?;

        let frame = reader.read(Path::new(&entry.source_path), format, overrides)?;
        let description = self.compose_description(entry, frame.as_ref(), overrides.is_some());

        engine
            .register(&entry.table_id, frame)
            .map_err(|e| LoadError::Register(e.to_string()))?;
        log::debug!(
            "Registered {} as table {}",
            entry.file_name,
            entry.table_id
        );

        Ok(description)
    }

    /// Schema, statistics and preview sections in a fixed order.
    fn compose_description(
        &self,
        entry: &CatalogEntry,
        frame: &dyn TableFrame,
        overridden: bool,
    ) -> String {
        let header = if overridden {
            format!("Schema for {} with override:", entry.file_name)
        } else {
            format!("Schema for {}:", entry.file_name)
        };

        format!(
            "{header}\n{schema}\n\nDescriptive statistics for {name}:\n{stats}\n\nTop {rows} rows of {name}:\n{preview}\n---\n",
            header = header,
            schema = frame.schema_text(),
            name = entry.file_name,
            stats = frame.stats_text(),
            rows = self.preview_rows,
            preview = frame.preview_text(self.preview_rows),
        )
    }
}
