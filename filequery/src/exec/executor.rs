// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query executor
//!
//! Submits rewritten SQL to the engine session and renders the result.
//! Runs to completion or raises - there is no cancellation, timeout or
//! row limit.

use super::engine::QueryEngine;
use super::error::ExecResult;

/// Execute SQL against the session and render the full result as text.
pub fn run(engine: &mut dyn QueryEngine, sql: &str) -> ExecResult<String> {
    log::debug!("Executing query: {}", sql);
    let result = engine.execute(sql)?;
    log::debug!("Query produced {} rows", result.rows.len());
    Ok(result.render_text())
}
