// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core work-item types for the dod checklist generator.
//!
//! This module contains the input side of the data model: Ticket,
//! ReviewRecord, and ReviewStatus. All of them are immutable value objects
//! constructed by the caller (typically from parsed JSON) before the
//! generation engine runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A unit of work to be checked for completion.
///
/// Tickets arrive already parsed; the engine never fetches them. All fields
/// are plain values and nothing here is mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier within the source system (e.g., "PROJ-123").
    pub key: String,
    /// Short summary of the work.
    pub title: String,
    /// Free-form description text.
    #[serde(default)]
    pub description: String,
    /// Tags attached to the ticket. Matched case-insensitively.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Issue-kind hint from the source system (e.g., "Story", "Bug", "Task").
    #[serde(default)]
    pub kind: String,
    /// Identifiers of related tickets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,
    /// Pre-supplied acceptance criteria, bypassing extraction when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<String>>,
}

impl Ticket {
    /// Creates a ticket with the required fields; everything else empty.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Ticket {
            key: key.into(),
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            kind: String::new(),
            related: Vec::new(),
            criteria: None,
        }
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the tags (builder pattern).
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the issue-kind hint (builder pattern).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets pre-supplied acceptance criteria (builder pattern).
    pub fn with_criteria(mut self, criteria: Vec<String>) -> Self {
        self.criteria = Some(criteria);
        self
    }

    /// Title and description joined for keyword scanning.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// CI-style status of a code review's latest build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// The build passed.
    Succeeded,
    /// The build failed.
    Failed,
    /// The build is still running.
    Running,
    /// The build is waiting to start.
    Queued,
    /// The build was canceled before finishing.
    Aborted,
    /// Any status the source system reports that we do not recognize.
    #[serde(other)]
    Unknown,
}

impl ReviewStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Succeeded => "succeeded",
            ReviewStatus::Failed => "failed",
            ReviewStatus::Running => "running",
            ReviewStatus::Queued => "queued",
            ReviewStatus::Aborted => "aborted",
            ReviewStatus::Unknown => "unknown",
        }
    }

    /// Single-character glyph shown next to the status in rendered output.
    pub fn glyph(&self) -> &'static str {
        match self {
            ReviewStatus::Succeeded => "✓",
            ReviewStatus::Failed => "✗",
            ReviewStatus::Running => "⟳",
            ReviewStatus::Queued => "⏳",
            ReviewStatus::Aborted => "⊘",
            ReviewStatus::Unknown => "?",
        }
    }

    /// Human-readable outcome word paired with the glyph.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Succeeded => "passed",
            ReviewStatus::Failed => "failed",
            ReviewStatus::Running => "running",
            ReviewStatus::Queued => "pending",
            ReviewStatus::Aborted => "canceled",
            ReviewStatus::Unknown => "unknown",
        }
    }

    /// Returns true only for a successful build.
    pub fn is_passed(&self) -> bool {
        matches!(self, ReviewStatus::Succeeded)
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "succeeded" => Ok(ReviewStatus::Succeeded),
            "failed" => Ok(ReviewStatus::Failed),
            "running" => Ok(ReviewStatus::Running),
            "queued" => Ok(ReviewStatus::Queued),
            "aborted" => Ok(ReviewStatus::Aborted),
            _ => Err(Error::InvalidReviewStatus(s.to_string())),
        }
    }
}

/// A code-review artifact associated with a ticket.
///
/// Absent entirely when no review accompanies the generation call; the
/// assembler substitutes a placeholder CI row in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Review title as shown in the source system.
    pub title: String,
    /// Status of the review's latest build.
    pub status: ReviewStatus,
    /// Paths changed by the review.
    #[serde(default)]
    pub changed_files: Vec<String>,
    /// Canonical link to the review.
    #[serde(default)]
    pub url: String,
}

impl ReviewRecord {
    /// Creates a review record with the given title and status.
    pub fn new(title: impl Into<String>, status: ReviewStatus) -> Self {
        ReviewRecord {
            title: title.into(),
            status,
            changed_files: Vec::new(),
            url: String::new(),
        }
    }

    /// Sets the changed-file list (builder pattern).
    pub fn with_changed_files(mut self, files: Vec<String>) -> Self {
        self.changed_files = files;
        self
    }

    /// Sets the canonical link (builder pattern).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
