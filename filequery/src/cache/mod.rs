// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Schema description cache
//!
//! Durable memoization of per-file schema/statistics/preview text, keyed
//! by file name. Introspection of a given file runs at most once per
//! catalog lifetime; entries are never invalidated automatically.

pub mod schema_cache;

pub use schema_cache::{CacheError, CacheResult, SchemaCache};
