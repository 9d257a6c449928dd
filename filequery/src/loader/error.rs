// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for table loading

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("Unsupported file format for {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported data type {tag} for column {column}")]
    UnsupportedType { column: String, tag: String },

    /// The underlying reader failed; the message carries its diagnostic.
    #[error("{0}")]
    Read(String),

    /// The engine rejected the registration.
    #[error("{0}")]
    Register(String),
}

pub type LoadResult<T> = Result<T, LoadError>;
