// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query rewriting
//!
//! Converts file-name and path tokens in raw SQL into the table
//! identifiers the engine session knows, using the catalog as the token
//! vocabulary. A text-substitution pass, deliberately not a SQL parser.

pub mod rewriter;

pub use rewriter::{rewrite, RewriteError, RewriteMode, RewriteResult};
