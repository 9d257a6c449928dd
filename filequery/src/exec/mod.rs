// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query execution
//!
//! The SQL engine is an external collaborator behind the `QueryEngine`
//! trait: it owns every registered table binding and executes rewritten
//! SQL. The core's executor submits the SQL and renders the structured
//! result fully as text - no pagination, no row limit.

pub mod engine;
pub mod error;
pub mod executor;
pub mod result;
pub mod value;

pub use engine::{QueryEngine, TableFrame};
pub use error::{ExecError, ExecResult};
pub use executor::run;
pub use result::ResultSet;
pub use value::Value;
