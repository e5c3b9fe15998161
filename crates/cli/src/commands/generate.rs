// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;

use dod_core::{assemble, classify, render, to_wiki_markup, Category, ReviewRecord, Ticket};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::input;

pub fn run(
    ticket_path: &str,
    review_path: Option<&str>,
    category: Option<&str>,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<()> {
    let ticket = input::load_ticket(ticket_path)?;
    let review = match review_path {
        Some(path) => Some(input::load_review(path)?),
        None => None,
    };
    let explicit = match category {
        Some(raw) => Some(raw.parse::<Category>().map_err(Error::from)?),
        None => None,
    };

    let text = run_impl(&ticket, review.as_ref(), explicit, format)?;

    match output {
        Some(path) => fs::write(path, text).map_err(|source| Error::WriteOutput {
            path: path.to_string(),
            source,
        })?,
        None => print!("{}", text),
    }
    Ok(())
}

/// Internal implementation that takes loaded records, for testing.
pub(crate) fn run_impl(
    ticket: &Ticket,
    review: Option<&ReviewRecord>,
    explicit: Option<Category>,
    format: OutputFormat,
) -> Result<String> {
    let category = classify(ticket, explicit);
    let document = assemble(ticket, category, review);

    Ok(match format {
        OutputFormat::Markdown => render(&document),
        OutputFormat::Wiki => to_wiki_markup(&render(&document)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&document).map_err(dod_core::Error::from)?;
            json.push('\n');
            json
        }
    })
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
