// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog service - orchestration of the file-query operations
//!
//! This provides the clean API wrapping the catalog store, the schema
//! cache, the table loader, the query rewriter and the executor. It is
//! the only entry point external callers use.

use super::config::ServiceConfig;
use super::error::{ServiceError, ServiceResult};
use crate::cache::SchemaCache;
use crate::catalog::CatalogStore;
use crate::exec::{self, QueryEngine};
use crate::loader::{ColumnOverrides, FrameReader, LoadError, TableLoader};
use crate::rewrite::rewrite;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Request to load a file with caller-declared column types.
///
/// `column_types` maps column names to one of the fixed type tags
/// (`int`, `float`, `str`/`string`, `bool`, `date`, `datetime`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaOverrideRequest {
    pub file_name: String,
    pub column_types: BTreeMap<String, String>,
}

/// Catalog service - the single owner of file-query state.
///
/// Holds the durable catalog and schema-cache documents, the dataframe
/// reader capability and the query engine session. Constructed once per
/// process and passed by reference to each call site - there are no
/// ambient globals. Operations take `&mut self`: the service is
/// single-writer by construction.
///
/// Every public operation returns a `String`. Success and failure are both
/// rendered as text at this boundary; internal code uses typed errors.
///
/// # Example
/// ```no_run
/// use filequery::{CatalogService, ServiceConfig};
///
/// # fn collaborators() -> (Box<dyn filequery::FrameReader>, Box<dyn filequery::QueryEngine>) { unimplemented!() }
/// let (reader, engine) = collaborators();
/// let mut service = CatalogService::new(ServiceConfig::default(), reader, engine);
///
/// let names = service.list_data_files("./datasets");
/// let schemas = service.list_file_schema(&["sales.csv".to_string()]);
/// let result = service.query_files("SELECT * FROM sales.csv");
/// ```
pub struct CatalogService {
    config: ServiceConfig,
    store: CatalogStore,
    cache: SchemaCache,
    loader: TableLoader,
    reader: Box<dyn FrameReader>,
    engine: Box<dyn QueryEngine>,
}

impl CatalogService {
    /// Create a service from a configuration and its two external
    /// collaborators: the per-format dataframe reader and the SQL engine
    /// session.
    pub fn new(
        config: ServiceConfig,
        reader: Box<dyn FrameReader>,
        engine: Box<dyn QueryEngine>,
    ) -> Self {
        let store = CatalogStore::new(config.catalog_path());
        let cache = SchemaCache::new(config.cache_path());
        let loader = TableLoader::new(config.preview_rows);
        Self {
            config,
            store,
            cache,
            loader,
            reader,
            engine,
        }
    }

    /// Discover and catalog all data files under a directory tree.
    ///
    /// Rebuilds the durable catalog in full (overwrite, not merge) and
    /// returns the discovered file names newline-joined, in walk order.
    ///
    /// # Arguments
    /// * `path` - Root directory to search for data files
    pub fn list_data_files(&mut self, path: &str) -> String {
        self.try_list_data_files(path)
            .unwrap_or_else(|e| e.to_string())
    }

    /// Return schema/statistics/preview text for the given files, in input
    /// order.
    ///
    /// Descriptions come from the schema cache; a file not yet introspected
    /// is loaded through the reader (which also registers its table in the
    /// engine session) and the resulting text - success or failure - is
    /// cached. Names absent from the catalog are reported inline as not
    /// found.
    pub fn list_file_schema(&mut self, file_names: &[String]) -> String {
        self.try_list_file_schema(file_names)
            .unwrap_or_else(|e| e.to_string())
    }

    /// Reload a cataloged file with caller-declared column types.
    ///
    /// The override always recomputes: the file is re-read with the forced
    /// types, its table binding is replaced in the engine session and the
    /// cached description is overwritten. An unknown type tag fails the
    /// whole request with no partial effects.
    pub fn load_override_schema(&mut self, request: SchemaOverrideRequest) -> String {
        self.try_load_override_schema(&request)
            .unwrap_or_else(|e| e.to_string())
    }

    /// Execute a SQL query whose table references may be file names or
    /// paths.
    ///
    /// Catalog-known tokens are rewritten to table identifiers before the
    /// query is submitted to the engine; the full result set is rendered as
    /// text.
    pub fn query_files(&mut self, raw_query: &str) -> String {
        self.try_query_files(raw_query)
            .unwrap_or_else(|e| e.to_string())
    }

    fn try_list_data_files(&mut self, path: &str) -> ServiceResult<String> {
        let catalog = self.store.rebuild(Path::new(path))?;
        Ok(catalog.names().join("\n"))
    }

    fn try_list_file_schema(&mut self, file_names: &[String]) -> ServiceResult<String> {
        let catalog = self.store.load()?.into_catalog();
        let Self {
            cache,
            loader,
            reader,
            engine,
            ..
        } = self;

        let mut sections = Vec::with_capacity(file_names.len());
        for name in file_names {
            match catalog.lookup(name) {
                None => {
                    log::debug!("Schema requested for uncataloged file {}", name);
                    sections.push(format!("File {} not found.\n", name));
                }
                Some(entry) => {
                    let text = cache.get_or_compute(entry, || {
                        loader.load(entry, None, reader.as_ref(), engine.as_mut())
                    })?;
                    sections.push(text);
                }
            }
        }

        Ok(sections.join("\n"))
    }

    fn try_load_override_schema(&mut self, request: &SchemaOverrideRequest) -> ServiceResult<String> {
        let catalog = self.store.load()?.into_catalog();
        let entry = catalog
            .lookup(&request.file_name)
            .ok_or_else(|| ServiceError::NotFound(request.file_name.clone()))?;

        let overrides = ColumnOverrides::parse(&request.column_types)
            .map_err(|e| override_error(&request.file_name, e))?;

        let description = self
            .loader
            .load(
                entry,
                Some(&overrides),
                self.reader.as_ref(),
                self.engine.as_mut(),
            )
            .map_err(|e| override_error(&request.file_name, e))?;

        self.cache.store_override(&request.file_name, &description)?;
        log::info!(
            "Loaded {} with override schema ({} columns forced)",
            request.file_name,
            overrides.len()
        );

        Ok(format!(
            "Successfully loaded {} with override schema.\nHere is the schema:\n{}",
            request.file_name, description
        ))
    }

    fn try_query_files(&mut self, raw_query: &str) -> ServiceResult<String> {
        let catalog = self.store.load()?.into_catalog();
        let sql = rewrite(raw_query, &catalog, self.config.rewrite_mode)?;
        if sql != raw_query {
            log::debug!("Rewrote query to: {}", sql);
        }
        Ok(exec::run(self.engine.as_mut(), &sql)?)
    }
}

/// Map loader failures on the override path to their boundary form.
fn override_error(file_name: &str, err: LoadError) -> ServiceError {
    match err {
        LoadError::UnsupportedFormat(name) => ServiceError::UnsupportedFormat(name),
        LoadError::UnsupportedType { column, tag } => {
            ServiceError::UnsupportedType { column, tag }
        }
        LoadError::Read(message) | LoadError::Register(message) => ServiceError::OverrideFailure {
            file: file_name.to_string(),
            message,
        },
    }
}
