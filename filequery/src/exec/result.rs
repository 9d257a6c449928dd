// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Structured engine results and their text rendering

use super::value::Value;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::{Deserialize, Serialize};

/// Full result set of one query: column names plus rows of typed values.
///
/// The engine materializes the whole set before returning it; rendering
/// likewise emits every row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the full result set as a table.
    ///
    /// A result with no columns at all (e.g. a statement that produced no
    /// shape) renders as a short notice instead of an empty grid.
    pub fn render_text(&self) -> String {
        if self.columns.is_empty() {
            return "No results found".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(self.columns.clone());
        for row in &self.rows {
            table.add_row(row.iter().map(|v| v.to_string()));
        }
        table.to_string()
    }
}
