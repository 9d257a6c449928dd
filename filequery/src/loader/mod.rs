// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Table loading
//!
//! Turns a cataloged file into a queryable table: dispatches on the file
//! format, reads the file through the external `FrameReader` capability,
//! composes the schema/statistics/preview description and registers the
//! frame under the entry's table identifier in the query engine session.

pub mod error;
pub mod format;
pub mod overrides;
pub mod reader;
pub mod table_loader;

pub use error::{LoadError, LoadResult};
pub use format::FileFormat;
pub use overrides::{ColumnOverrides, TypeTag};
pub use reader::FrameReader;
pub use table_loader::TableLoader;
