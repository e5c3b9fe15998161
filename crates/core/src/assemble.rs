// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule-driven assembly of the checklist document.
//!
//! The assembler builds sections in a fixed order: the five mandatory
//! sections, then the sections specific to the resolved category, then the
//! Reviewer Checklist, which is always last. Rows are conditioned on the
//! category and on textual signals found in the ticket. Assembly is total;
//! every ticket, however empty, produces a well-formed document.

use chrono::Utc;

use crate::category::Category;
use crate::document::{titles, Document, DocumentMeta, Row, Section};
use crate::extract;
use crate::ticket::{ReviewRecord, Ticket};

/// Substrings of title + description that indicate API surface changes.
const API_SIGNALS: &[&str] = &[
    "api",
    "endpoint",
    "rest",
    "graphql",
    "http",
    "request",
    "response",
    "webhook",
    "microservice",
];

/// Substrings of title + description that indicate data-shape changes.
const DATA_SIGNALS: &[&str] = &[
    "database",
    "schema",
    "migration",
    "data",
    "table",
    "column",
    "index",
    "query",
    "sql",
    "nosql",
    "collection",
    "document",
];

/// Substrings of title + description that indicate user-facing feature work.
const FEATURE_SIGNALS: &[&str] = &[
    "new feature",
    "feature",
    "user story",
    "enhancement",
    "capability",
];

/// Builds the checklist document for a ticket.
///
/// `category` is the already-resolved category (see
/// [`classify`](crate::classify::classify)); `review` is the optional code
/// review record. Section order is a documented invariant: Acceptance
/// Criteria, Automated Tests, Manual Test Steps, Documentation Updates,
/// Continuous Integration, category-specific sections, Reviewer Checklist.
pub fn assemble(ticket: &Ticket, category: Category, review: Option<&ReviewRecord>) -> Document {
    let text = ticket.search_text().to_lowercase();

    let mut sections = vec![
        acceptance_criteria_section(ticket),
        automated_tests_section(category, &text),
        manual_test_steps_section(category, &text),
        documentation_section(ticket, category, &text),
        continuous_integration_section(review),
        reviewer_checklist_section(),
    ];

    // Category sections slot in just before the final Reviewer Checklist.
    let insert_at = sections.len() - 1;
    for (offset, section) in category_sections(category).into_iter().enumerate() {
        sections.insert(insert_at + offset, section);
    }

    Document {
        meta: DocumentMeta {
            ticket_key: ticket.key.clone(),
            category,
            generated_at: Utc::now(),
        },
        sections,
    }
}

/// True when any of the signal substrings occurs in the lowercased text.
fn has_signal(text: &str, signals: &[&str]) -> bool {
    signals.iter().any(|s| text.contains(s))
}

/// One row per criterion; a single placeholder row when none were found.
fn acceptance_criteria_section(ticket: &Ticket) -> Section {
    let criteria = match &ticket.criteria {
        Some(supplied) => supplied.clone(),
        None => extract::acceptance_criteria(&ticket.description),
    };

    let rows = if criteria.is_empty() {
        vec![Row::new(
            titles::ACCEPTANCE_CRITERIA,
            vec!["No acceptance criteria found - manual review needed".to_string()],
        )]
    } else {
        criteria
            .into_iter()
            .map(|c| Row::new(titles::ACCEPTANCE_CRITERIA, vec![c]))
            .collect()
    };

    Section::new(titles::ACCEPTANCE_CRITERIA, rows)
}

fn automated_tests_section(category: Category, text: &str) -> Section {
    let mut rows = match category {
        Category::Backend => vec![
            row(
                "Unit Tests",
                "Cover new business logic and service-layer branches",
            ),
            row(
                "Integration Tests",
                "Exercise API endpoints against a real database",
            ),
            row(
                "End-to-End Tests",
                "Verify the full request/response flow across services",
            ),
        ],
        Category::Frontend => vec![
            row(
                "Component Tests",
                "Cover new and changed UI components in isolation",
            ),
            row(
                "Integration Tests",
                "Exercise component interaction and state wiring",
            ),
            row(
                "End-to-End Tests",
                "Verify the user-visible flow in a real browser",
            ),
        ],
        Category::Infrastructure => vec![
            row("Unit Tests", "Cover new logic introduced by this change"),
            row(
                "Integration Tests",
                "Exercise the change against its collaborators",
            ),
            row(
                "End-to-End Tests",
                "Verify the change in a production-like environment",
            ),
        ],
    };

    if has_signal(text, API_SIGNALS) {
        rows.push(row(
            "API Contract Testing",
            "Verify request and response schemas against the published contract",
        ));
    }

    Section::new(titles::AUTOMATED_TESTS, rows)
}

fn manual_test_steps_section(category: Category, text: &str) -> Section {
    let mut rows = vec![match category {
        Category::Backend => Row::new(
            "Manual Verification",
            vec![
                "Call each changed endpoint with valid and invalid payloads".to_string(),
                "Exercise authentication and authorization flows end to end".to_string(),
                "Confirm error responses carry useful status codes and messages".to_string(),
            ],
        ),
        Category::Frontend => Row::new(
            "Manual Verification",
            vec![
                "Verify the change in Chrome, Firefox, and Safari".to_string(),
                "Check responsive layout at mobile, tablet, and desktop widths".to_string(),
                "Walk the main flow using only the keyboard".to_string(),
            ],
        ),
        Category::Infrastructure => row(
            "Manual Verification",
            "Walk through the changed behavior as a user would",
        ),
    }];

    if has_signal(text, DATA_SIGNALS) {
        rows.push(Row::new(
            "Data Validation",
            vec![
                "Verify data integrity before and after the change".to_string(),
                "Check migrations apply and roll back cleanly".to_string(),
            ],
        ));
    }

    Section::new(titles::MANUAL_TEST_STEPS, rows)
}

/// A single row whose item list grows with category and feature signals.
fn documentation_section(ticket: &Ticket, category: Category, text: &str) -> Section {
    let mut items = vec!["Update README and inline docs touched by this change".to_string()];

    if category == Category::Infrastructure {
        items.push("Update runbooks with new operational procedures".to_string());
        items.push("Record infrastructure changes in the architecture notes".to_string());
    }

    if has_feature_signal(ticket, text) {
        items.push("Update user-facing documentation for the new behavior".to_string());
        items.push("Add release notes describing the feature".to_string());
    }

    Section::new(
        titles::DOCUMENTATION_UPDATES,
        vec![Row::new("Documentation", items)],
    )
}

/// Feature work is signaled by a "story" kind hint or feature wording.
fn has_feature_signal(ticket: &Ticket, text: &str) -> bool {
    ticket.kind.eq_ignore_ascii_case("story") || has_signal(text, FEATURE_SIGNALS)
}

/// Exactly one row: the mapped review status, or a manual-check placeholder.
fn continuous_integration_section(review: Option<&ReviewRecord>) -> Section {
    let row = match review {
        Some(record) => {
            let status = record.status;
            let mut items = vec![format!(
                "{} Build {}: {}",
                status.glyph(),
                status.label(),
                record.title
            )];
            if !record.url.is_empty() {
                items.push(record.url.clone());
            }
            Row::new("Pipeline Status", items).with_done(status.is_passed())
        }
        None => Row::new(
            "Pipeline Status",
            vec!["No CI information available - verify the pipeline manually".to_string()],
        ),
    };

    Section::new(titles::CONTINUOUS_INTEGRATION, vec![row])
}

/// The advisory sections appended for the resolved category, in fixed order.
fn category_sections(category: Category) -> Vec<Section> {
    match category {
        Category::Backend => vec![
            Section::new(
                titles::API_CONTRACT_CHANGES,
                vec![Row::new(
                    "API Review",
                    vec![
                        "Document new or changed endpoints".to_string(),
                        "Confirm backwards compatibility or bump the API version".to_string(),
                        "Regenerate OpenAPI or GraphQL schema artifacts".to_string(),
                    ],
                )],
            ),
            Section::new(
                titles::MONITORING_AND_LOGGING,
                vec![Row::new(
                    "Observability",
                    vec![
                        "Add structured logs around new code paths".to_string(),
                        "Expose metrics for new operations".to_string(),
                        "Wire alerts for new failure modes".to_string(),
                    ],
                )],
            ),
            Section::new(
                titles::ROLLBACK_AND_MIGRATION,
                vec![Row::new(
                    "Rollback Plan",
                    vec![
                        "Describe how to roll the change back safely".to_string(),
                        "Confirm migrations are reversible or gated".to_string(),
                        "Note any data backfill that cannot be undone".to_string(),
                    ],
                )],
            ),
        ],
        Category::Frontend => vec![
            Section::new(
                titles::UI_UX_VALIDATION,
                vec![Row::new(
                    "Design Review",
                    vec![
                        "Compare the result against the design mockups".to_string(),
                        "Check loading, empty, and error states".to_string(),
                        "Verify copy against the content guidelines".to_string(),
                    ],
                )],
            ),
            Section::new(
                titles::ACCESSIBILITY_COMPLIANCE,
                vec![Row::new(
                    "Accessibility",
                    vec![
                        "Check color contrast meets WCAG AA".to_string(),
                        "Verify screen-reader labels on interactive elements".to_string(),
                        "Confirm focus order follows the visual order".to_string(),
                    ],
                )],
            ),
        ],
        Category::Infrastructure => vec![
            Section::new(
                titles::DEPLOYMENT_PROCEDURES,
                vec![Row::new(
                    "Deployment",
                    vec![
                        "Document the rollout order and timing".to_string(),
                        "Stage the change in a pre-production environment".to_string(),
                        "Confirm secrets and configuration are in place".to_string(),
                    ],
                )],
            ),
            Section::new(
                titles::INFRASTRUCTURE_VALIDATION,
                vec![Row::new(
                    "Validation",
                    vec![
                        "Verify provisioned resources match the plan".to_string(),
                        "Run smoke checks against the new infrastructure".to_string(),
                        "Confirm cost and capacity limits are respected".to_string(),
                    ],
                )],
            ),
        ],
    }
}

fn reviewer_checklist_section() -> Section {
    Section::new(
        titles::REVIEWER_CHECKLIST,
        vec![Row::new(
            "Final Review",
            vec![
                "Code follows project conventions and style".to_string(),
                "No debug code or commented-out blocks remain".to_string(),
                "Commit history is clean and messages are descriptive".to_string(),
                "All review conversations are resolved".to_string(),
            ],
        )],
    )
}

/// Shorthand for a single-item unchecked row.
fn row(label: &str, item: &str) -> Row {
    Row::new(label, vec![item.to_string()])
}

#[cfg(test)]
#[path = "assemble_tests.rs"]
mod tests;
