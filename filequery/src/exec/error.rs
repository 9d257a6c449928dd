// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for query execution

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ExecError {
    /// The engine raised while executing or registering.
    #[error("{0}")]
    Engine(String),

    /// The SQL referenced a table identifier with no binding in the
    /// session.
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

pub type ExecResult<T> = Result<T, ExecError>;
