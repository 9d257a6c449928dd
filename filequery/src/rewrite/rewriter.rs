// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! File-name to table-identifier substitution
//!
//! Candidate references are found by a whitespace token-membership test
//! over the raw query; quoted identifiers, punctuation-adjacent references
//! and names with embedded whitespace are not reliably matched. That is an
//! accepted approximation of the contract, not SQL correctness.

use crate::catalog::Catalog;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RewriteError {
    /// A path referenced in the query no longer exists on disk.
    #[error("File {0} does not exist")]
    MissingSourceFile(String),
}

pub type RewriteResult<T> = Result<T, RewriteError>;

/// How occurrences of a matched file name or path are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteMode {
    /// Replace every textual occurrence of the matched name, including
    /// inside longer tokens. When one cataloged name is a substring of
    /// another (`a.csv` vs `data_a.csv`) this can corrupt unrelated
    /// tokens; the mode exists for compatibility with that observed
    /// behavior.
    #[default]
    Legacy,
    /// Replace only complete whitespace-delimited tokens.
    TokenBounded,
}

/// Rewrite raw SQL, substituting catalog-known file names and paths with
/// their table identifiers.
///
/// Tokenization happens once, over the raw query. Catalog entries are
/// visited in catalog (discovery) order; for each entry a file-name token
/// hit replaces all occurrences of the name, otherwise a path token hit
/// first verifies the path still exists on disk - failing the whole
/// rewrite before any execution - and then replaces all occurrences of
/// the path.
pub fn rewrite(raw_query: &str, catalog: &Catalog, mode: RewriteMode) -> RewriteResult<String> {
    let words: HashSet<&str> = raw_query.split_whitespace().collect();
    let mut sql = raw_query.to_string();

    for entry in catalog.iter() {
        if words.contains(entry.file_name.as_str()) {
            sql = replace_occurrences(&sql, &entry.file_name, &entry.table_id, mode);
            continue;
        }

        if words.contains(entry.source_path.as_str()) {
            if !Path::new(&entry.source_path).exists() {
                return Err(RewriteError::MissingSourceFile(entry.source_path.clone()));
            }
            sql = replace_occurrences(&sql, &entry.source_path, &entry.table_id, mode);
        }
    }

    Ok(sql)
}

fn replace_occurrences(sql: &str, from: &str, to: &str, mode: RewriteMode) -> String {
    match mode {
        RewriteMode::Legacy => sql.replace(from, to),
        RewriteMode::TokenBounded => replace_whole_tokens(sql, from, to),
    }
}

/// Replace only tokens exactly equal to `from`, preserving all original
/// whitespace.
fn replace_whole_tokens(sql: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut rest = sql;

    while !rest.is_empty() {
        let token_start = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        out.push_str(&rest[..token_start]);
        rest = &rest[token_start..];
        if rest.is_empty() {
            break;
        }

        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = &rest[..token_end];
        out.push_str(if token == from { to } else { token });
        rest = &rest[token_end..];
    }

    out
}
