// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Boundary error type
//!
//! Internal components fail with typed per-module errors; this enum is the
//! convergence point whose `Display` text is what callers of the public
//! operations actually see.

use crate::cache::CacheError;
use crate::catalog::CatalogError;
use crate::exec::ExecError;
use crate::rewrite::RewriteError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    #[error("Error: File {0} not found in loaded data files.")]
    NotFound(String),

    #[error("Error: Unsupported file format for {0}.")]
    UnsupportedFormat(String),

    #[error("Error: Unsupported data type {tag} for column {column}.")]
    UnsupportedType { column: String, tag: String },

    #[error("Error loading {file} with override schema: {message}")]
    OverrideFailure { file: String, message: String },

    #[error("Error: File {0} does not exist.")]
    MissingSourceFile(String),

    #[error("Error executing query: {0}")]
    ExecutionFailure(String),

    #[error("Error: Catalog failure: {0}")]
    Catalog(String),

    #[error("Error: Schema cache failure: {0}")]
    Cache(String),
}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        ServiceError::Catalog(err.to_string())
    }
}

impl From<CacheError> for ServiceError {
    fn from(err: CacheError) -> Self {
        ServiceError::Cache(err.to_string())
    }
}

impl From<RewriteError> for ServiceError {
    fn from(err: RewriteError) -> Self {
        match err {
            RewriteError::MissingSourceFile(path) => ServiceError::MissingSourceFile(path),
        }
    }
}

impl From<ExecError> for ServiceError {
    fn from(err: ExecError) -> Self {
        ServiceError::ExecutionFailure(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
