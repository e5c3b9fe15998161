// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work category classification targets and their lookup tables.
//!
//! Category is a closed enum; there is no behavioral polymorphism per
//! category, only data-driven branching, so the synonym and keyword tables
//! live here as plain constants consumed by the classifier and assembler.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The three work categories a ticket can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Server-side work: APIs, services, databases.
    Backend,
    /// Client-side work: UI components, styling, browser behavior.
    Frontend,
    /// Platform work: deployment, pipelines, provisioning.
    Infrastructure,
}

/// Tag substrings that resolve directly to a category.
///
/// Checked in [`Category::ALL`] order, so a ticket tagged with both a
/// backend and a frontend synonym resolves to backend. That tie-break is
/// deliberate and covered by tests.
pub const BACKEND_TAG_SYNONYMS: &[&str] = &["backend", "back-end", "api", "server", "database", "db"];
pub const FRONTEND_TAG_SYNONYMS: &[&str] = &["frontend", "front-end", "ui", "ux", "client", "web"];
pub const INFRASTRUCTURE_TAG_SYNONYMS: &[&str] =
    &["infrastructure", "infra", "devops", "deployment", "ci/cd", "cicd"];

/// Keywords scored over title + description + kind when no tag matches.
pub const BACKEND_KEYWORDS: &[&str] = &[
    "api",
    "endpoint",
    "rest",
    "graphql",
    "database",
    "sql",
    "migration",
    "server",
    "backend",
    "microservice",
    "service",
];
pub const FRONTEND_KEYWORDS: &[&str] = &[
    "ui",
    "ux",
    "component",
    "react",
    "vue",
    "angular",
    "frontend",
    "button",
    "form",
    "page",
    "view",
    "css",
    "html",
    "styling",
];
pub const INFRASTRUCTURE_KEYWORDS: &[&str] = &[
    "infrastructure",
    "deployment",
    "ci/cd",
    "pipeline",
    "docker",
    "kubernetes",
    "k8s",
    "terraform",
    "ansible",
    "devops",
    "monitoring",
    "logging",
];

impl Category {
    /// All categories in tie-break priority order (backend wins ties).
    pub const ALL: [Category; 3] = [Category::Backend, Category::Frontend, Category::Infrastructure];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Backend => "backend",
            Category::Frontend => "frontend",
            Category::Infrastructure => "infrastructure",
        }
    }

    /// Tag substrings that resolve to this category.
    pub fn tag_synonyms(&self) -> &'static [&'static str] {
        match self {
            Category::Backend => BACKEND_TAG_SYNONYMS,
            Category::Frontend => FRONTEND_TAG_SYNONYMS,
            Category::Infrastructure => INFRASTRUCTURE_TAG_SYNONYMS,
        }
    }

    /// Keywords scored against ticket text for this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Backend => BACKEND_KEYWORDS,
            Category::Frontend => FRONTEND_KEYWORDS,
            Category::Infrastructure => INFRASTRUCTURE_KEYWORDS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "backend" => Ok(Category::Backend),
            "frontend" => Ok(Category::Frontend),
            "infrastructure" => Ok(Category::Infrastructure),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
