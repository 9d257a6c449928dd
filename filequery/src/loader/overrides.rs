// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Column type overrides
//!
//! When automatic schema inference fails or produces the wrong types, a
//! caller can force specific columns to a declared type at load time. The
//! tag vocabulary is a fixed enumeration; an unknown tag aborts the load
//! before anything is read or registered.

use super::error::{LoadError, LoadResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed set of column type tags a caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Int,
    Float,
    Str,
    Bool,
    Date,
    Datetime,
}

impl TypeTag {
    /// Parse a caller-supplied tag. Matching is case-insensitive and
    /// accepts `string` as an alias for `str`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "int" => Some(TypeTag::Int),
            "float" => Some(TypeTag::Float),
            "str" | "string" => Some(TypeTag::Str),
            "bool" => Some(TypeTag::Bool),
            "date" => Some(TypeTag::Date),
            "datetime" => Some(TypeTag::Datetime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Str => "str",
            TypeTag::Bool => "bool",
            TypeTag::Date => "date",
            TypeTag::Datetime => "datetime",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated column-to-type mapping for one load.
///
/// Not persisted; consumed once per override call.
#[derive(Debug, Clone, Default)]
pub struct ColumnOverrides {
    columns: Vec<(String, TypeTag)>,
}

impl ColumnOverrides {
    /// Validate raw caller input into typed overrides.
    ///
    /// The first unrecognized tag fails the whole request - there is no
    /// partial application.
    pub fn parse(input: &BTreeMap<String, String>) -> LoadResult<Self> {
        let mut columns = Vec::with_capacity(input.len());
        for (column, tag) in input {
            match TypeTag::parse(tag) {
                Some(parsed) => columns.push((column.clone(), parsed)),
                None => {
                    return Err(LoadError::UnsupportedType {
                        column: column.clone(),
                        tag: tag.clone(),
                    })
                }
            }
        }
        Ok(Self { columns })
    }

    pub fn get(&self, column: &str) -> Option<TypeTag> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, tag)| *tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TypeTag)> {
        self.columns.iter().map(|(name, tag)| (name.as_str(), *tag))
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}
