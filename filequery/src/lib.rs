// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! FileQuery - File cataloging and SQL query translation for tabular data
//! files
//!
//! FileQuery lets a caller discover tabular data files (CSV, JSON, Excel,
//! Parquet) under a directory, inspect their inferred schemas and
//! statistics, optionally force column types, and run SQL against them
//! using plain file names as table references.
//!
//! # Features
//!
//! - **File Catalog**: durable mapping from file name to path and stable
//!   table identifier, rebuilt in full on each discovery call
//! - **Schema Cache**: write-once memoization of schema/statistics/preview
//!   text, so expensive introspection runs once per file
//! - **Query Translation**: file-name and path tokens in raw SQL are
//!   rewritten to registered table identifiers before execution
//! - **Pluggable Collaborators**: the per-format dataframe reader and the
//!   SQL engine are trait capabilities, not baked-in dependencies
//!
//! # Usage
//!
//! Construct one [`CatalogService`] per process with a `FrameReader` and a
//! `QueryEngine` implementation, then drive the four operations:
//!
//! ```no_run
//! use filequery::{CatalogService, ServiceConfig};
//!
//! # fn collaborators() -> (Box<dyn filequery::FrameReader>, Box<dyn filequery::QueryEngine>) { unimplemented!() }
//! let (reader, engine) = collaborators();
//! let mut service = CatalogService::new(ServiceConfig::default(), reader, engine);
//!
//! service.list_data_files("./datasets");
//! service.query_files("SELECT * FROM sales.csv WHERE amount > 100");
//! ```

// Public module - exposed to external users
pub mod service;

// Internal modules - only visible within the filequery crate
pub(crate) mod cache;
pub(crate) mod catalog;
pub(crate) mod exec;
pub(crate) mod loader;
pub(crate) mod rewrite;
pub(crate) mod storage;

// Re-export the public API - CatalogService is the entry point, the trait
// seams are what embedders implement.
pub use service::{CatalogService, SchemaOverrideRequest, ServiceConfig, ServiceError};

pub use catalog::{table_id_for, Catalog, CatalogEntry};
pub use exec::{ExecError, ExecResult, QueryEngine, ResultSet, TableFrame, Value};
pub use loader::{ColumnOverrides, FileFormat, FrameReader, LoadError, LoadResult, TypeTag};
pub use rewrite::RewriteMode;

/// FileQuery version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// FileQuery crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
