// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Flat document persistence
//!
//! The catalog and the schema cache are durable as plain JSON documents in
//! the service working directory. Documents are loaded eagerly on each
//! relevant call and rewritten in full on update - there is no incremental
//! append and no locking.

pub mod document;

pub use document::{read_document, write_document, StorageError, StorageResult};
