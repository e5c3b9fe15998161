// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dodrs - definition-of-done checklist generation library.
//!
//! This crate provides the thin orchestration layer for the `dod` CLI tool:
//! argument parsing, loading ticket and review records from JSON files, and
//! writing rendered output. All generation logic lives in [`dod_core`].
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap definitions for the command surface
//! - [`input`] - loading already-parsed Ticket / ReviewRecord JSON
//! - [`Error`] - error types for the input/output boundary
//!
//! The engine itself never fails; every error a user sees from this crate
//! comes from a file that could not be read or parsed.

mod cli;
mod commands;

pub mod error;
pub mod input;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            ticket,
            review,
            category,
            format,
            output,
        } => commands::generate::run(
            &ticket,
            review.as_deref(),
            category.as_deref(),
            format,
            output.as_deref(),
        ),
        Command::Categorize { ticket } => commands::categorize::run(&ticket),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "dod", &mut std::io::stdout());
            Ok(())
        }
    }
}
