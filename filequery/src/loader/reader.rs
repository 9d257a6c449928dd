// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Dataframe reader capability
//!
//! Parsing CSV/JSON/Excel/Parquet into a frame is an external collaborator
//! concern. The core only requires something that can turn a path plus a
//! format (and optional column type overrides) into a `TableFrame` it can
//! describe and hand to the query engine.

use super::error::LoadResult;
use super::format::FileFormat;
use super::overrides::ColumnOverrides;
use crate::exec::TableFrame;
use std::path::Path;

/// External capability that reads a data file into a queryable frame.
///
/// Implementations report failures as `LoadError::Read` carrying the
/// underlying parser's diagnostic; the core caches that diagnostic rather
/// than retrying.
pub trait FrameReader {
    fn read(
        &self,
        path: &Path,
        format: FileFormat,
        overrides: Option<&ColumnOverrides>,
    ) -> LoadResult<Box<dyn TableFrame>>;
}
