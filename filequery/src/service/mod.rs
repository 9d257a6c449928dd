// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog service - the public entry point
//!
//! One `CatalogService` per process owns the durable catalog documents and
//! the engine session handle, and exposes the four file-query operations.
//! Every operation is total: failures come back as descriptive text, never
//! as panics or faults visible past this boundary.

pub mod catalog_service;
pub mod config;
pub mod error;

pub use catalog_service::{CatalogService, SchemaOverrideRequest};
pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
