// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dod_core::{classify, Category, Ticket};

use crate::error::Result;
use crate::input;

pub fn run(ticket_path: &str) -> Result<()> {
    let ticket = input::load_ticket(ticket_path)?;
    println!("{}", run_impl(&ticket));
    Ok(())
}

/// Internal implementation that takes a loaded ticket, for testing.
pub(crate) fn run_impl(ticket: &Ticket) -> Category {
    classify(ticket, None)
}

#[cfg(test)]
#[path = "categorize_tests.rs"]
mod tests;
