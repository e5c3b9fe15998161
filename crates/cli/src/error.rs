// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the dodrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
/// They all come from the input boundary (files, JSON, flag values); the
/// generation engine itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}\n  hint: expected a JSON object, see 'dod generate --help'")]
    ParseInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid ticket in {path}: {reason}")]
    InvalidTicket { path: String, reason: String },

    #[error("cannot write {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] dod_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for dodrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
