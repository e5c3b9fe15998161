// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The generated checklist document model.
//!
//! A Document is an ordered list of titled Sections, each holding Rows of
//! (label, items, done flag), plus metadata about the generation call.
//! Documents are built fresh per call by the assembler and only read by the
//! renderers; nothing here is mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Section titles used by the assembler. The five mandatory sections appear
/// in every document; the category titles only for the matching category.
pub mod titles {
    pub const ACCEPTANCE_CRITERIA: &str = "Acceptance Criteria";
    pub const AUTOMATED_TESTS: &str = "Automated Tests";
    pub const MANUAL_TEST_STEPS: &str = "Manual Test Steps";
    pub const DOCUMENTATION_UPDATES: &str = "Documentation Updates";
    pub const CONTINUOUS_INTEGRATION: &str = "Continuous Integration";
    pub const REVIEWER_CHECKLIST: &str = "Reviewer Checklist";

    pub const API_CONTRACT_CHANGES: &str = "API Contract Changes";
    pub const MONITORING_AND_LOGGING: &str = "Monitoring and Logging";
    pub const ROLLBACK_AND_MIGRATION: &str = "Rollback and Migration Notes";
    pub const UI_UX_VALIDATION: &str = "UI/UX Validation";
    pub const ACCESSIBILITY_COMPLIANCE: &str = "Accessibility Compliance";
    pub const DEPLOYMENT_PROCEDURES: &str = "Deployment Procedures";
    pub const INFRASTRUCTURE_VALIDATION: &str = "Infrastructure Validation";
}

/// A single checklist entry: a label, one or more item strings, and a
/// completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Short label naming what the row checks.
    pub label: String,
    /// Item texts under the label. Never empty.
    pub items: Vec<String>,
    /// Whether the row is already satisfied.
    pub done: bool,
}

impl Row {
    /// Creates an unchecked row.
    pub fn new(label: impl Into<String>, items: Vec<String>) -> Self {
        Row {
            label: label.into(),
            items,
            done: false,
        }
    }

    /// Sets the completion flag (builder pattern).
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title. Non-empty.
    pub title: String,
    /// Rows in presentation order.
    pub rows: Vec<Row>,
}

impl Section {
    /// Creates a section from a title and its rows.
    pub fn new(title: impl Into<String>, rows: Vec<Row>) -> Self {
        Section {
            title: title.into(),
            rows,
        }
    }
}

/// Metadata recorded with every generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Ticket identifier, copied verbatim.
    pub ticket_key: String,
    /// Category the ticket resolved to.
    pub category: Category,
    /// When the document was generated.
    pub generated_at: DateTime<Utc>,
}

/// The generated checklist: metadata plus an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub meta: DocumentMeta,
    pub sections: Vec<Section>,
}

impl Document {
    /// Looks up a section by title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Section titles in document order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
