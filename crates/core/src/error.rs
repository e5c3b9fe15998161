// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for dod-core operations.
//!
//! The generation engine itself (extract, classify, assemble, render) never
//! fails; these errors only arise when parsing user-supplied strings into
//! the closed enums, or from serde/io passthrough at the input boundary.

use thiserror::Error;

/// All possible errors that can occur in dod-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid category: '{0}'\n  hint: valid categories are: backend, frontend, infrastructure")]
    InvalidCategory(String),

    #[error("invalid review status: '{0}'\n  hint: valid statuses are: succeeded, failed, running, queued, aborted")]
    InvalidReviewStatus(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for dod-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
