// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for the generated checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Generic lightweight markup.
    #[default]
    Markdown,
    /// Jira-style wiki markup for posting back to the ticket system.
    Wiki,
    /// The document structure itself, as JSON.
    Json,
}

#[derive(Parser)]
#[command(name = "dod")]
#[command(about = "Generate definition-of-done checklists from tickets and code reviews")]
#[command(
    long_about = "Generate definition-of-done checklists from tickets and code reviews.\n\n\
    Reads an already-fetched ticket (and optionally a review record) as JSON,\n\
    classifies the work, and emits a section-by-section completion checklist."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a checklist document from a ticket file
    #[command(after_help = "Examples:\n  \
        dod generate ticket.json                    Markdown checklist to stdout\n  \
        dod generate ticket.json --review mr.json   Include the review's CI status\n  \
        dod generate ticket.json -f wiki            Wiki markup for the ticket system\n  \
        dod generate ticket.json --category frontend  Override classification\n  \
        dod generate ticket.json -o done.md         Write to a file")]
    Generate {
        /// Path to the ticket JSON file
        ticket: String,
        /// Path to an optional review-record JSON file
        #[arg(long)]
        review: Option<String>,
        /// Explicit category override (backend, frontend, infrastructure)
        #[arg(long, short = 'c')]
        category: Option<String>,
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t)]
        format: OutputFormat,
        /// Write to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
    /// Print the category a ticket resolves to
    #[command(after_help = "Examples:\n  \
        dod categorize ticket.json        Show the resolved category")]
    Categorize {
        /// Path to the ticket JSON file
        ticket: String,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
