// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dod-core: checklist generation engine for the dod tool.
//!
//! This crate turns a work item (ticket plus optional code-review record)
//! into a structured definition-of-done document, and serializes that
//! document to generic markup or Jira-style wiki markup. Everything here is
//! a pure function over immutable value objects: there is no I/O, no shared
//! state, and no failure mode inside the engine itself.

pub mod assemble;
pub mod category;
pub mod classify;
pub mod document;
pub mod error;
pub mod extract;
pub mod markdown;
pub mod ticket;
pub mod wiki;

pub use assemble::assemble;
pub use category::Category;
pub use classify::classify;
pub use document::{titles, Document, DocumentMeta, Row, Section};
pub use error::{Error, Result};
pub use extract::acceptance_criteria;
pub use markdown::render;
pub use ticket::{ReviewRecord, ReviewStatus, Ticket};
pub use wiki::to_wiki_markup;
