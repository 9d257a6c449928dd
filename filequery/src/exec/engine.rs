// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query engine capability
//!
//! The execution engine and the frames it holds are black boxes to the
//! core: the core registers frames under table identifiers and submits
//! SQL, nothing more. Frame bytes live only inside the engine session -
//! registration takes ownership so the core cannot retain a duplicate.

use super::error::ExecResult;
use super::result::ResultSet;

/// A loaded, queryable table as the core sees it.
///
/// The three text accessors feed the description the schema cache stores:
/// schema, descriptive statistics and a bounded row preview. What exactly
/// the statistics contain is reader/engine behavior, not a core concern.
pub trait TableFrame {
    fn schema_text(&self) -> String;
    fn stats_text(&self) -> String;
    fn preview_text(&self, rows: usize) -> String;
}

/// External SQL engine session.
///
/// Holds every table binding registered so far. Exactly one binding exists
/// per table identifier; registering an identifier again silently replaces
/// the prior binding.
pub trait QueryEngine {
    /// Bind a frame under a table identifier, taking ownership of it.
    fn register(&mut self, table_id: &str, frame: Box<dyn TableFrame>) -> ExecResult<()>;

    /// Execute SQL against the session's current bindings.
    fn execute(&mut self, sql: &str) -> ExecResult<ResultSet>;
}
