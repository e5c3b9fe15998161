// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading already-parsed ticket and review records from JSON files.
//!
//! This is the boundary the retrieval layer hands records across: the
//! engine never fetches anything itself. Files hold a single JSON object
//! matching the serde shape of [`Ticket`] / [`ReviewRecord`].

use std::fs;

use dod_core::{ReviewRecord, Ticket};

use crate::error::{Error, Result};

/// Loads and validates a ticket from a JSON file.
pub fn load_ticket(path: &str) -> Result<Ticket> {
    let ticket: Ticket = load_json(path)?;
    if ticket.key.trim().is_empty() {
        return Err(Error::InvalidTicket {
            path: path.to_string(),
            reason: "ticket key must not be empty".to_string(),
        });
    }
    Ok(ticket)
}

/// Loads a review record from a JSON file.
pub fn load_review(path: &str) -> Result<ReviewRecord> {
    load_json(path)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::ParseInput {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
