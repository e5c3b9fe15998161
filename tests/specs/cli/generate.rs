// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `dod generate` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dod() -> Command {
    cargo_bin_cmd!("dod")
}

fn write_json(temp: &TempDir, name: &str, content: &str) -> String {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn backend_ticket(temp: &TempDir) -> String {
    write_json(
        temp,
        "ticket.json",
        r#"{
            "key": "BACKEND-123",
            "title": "Add export endpoint",
            "description": "Acceptance Criteria:\n- exports finish within 30s\n- guests get 403",
            "tags": ["backend", "api"]
        }"#,
    )
}

// =============================================================================
// Markdown output
// =============================================================================

#[test]
fn generates_markdown_checklist_to_stdout() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);

    dod()
        .arg("generate")
        .arg(&ticket)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# BACKEND-123 Definition of Done"))
        .stdout(predicate::str::contains("Category: backend"))
        .stdout(predicate::str::contains("## Acceptance Criteria"))
        .stdout(predicate::str::contains(
            "- [ ] **Acceptance Criteria**: exports finish within 30s",
        ))
        .stdout(predicate::str::contains("## Reviewer Checklist"));
}

#[test]
fn backend_ticket_gets_backend_sections() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);

    dod()
        .arg("generate")
        .arg(&ticket)
        .assert()
        .success()
        .stdout(predicate::str::contains("## API Contract Changes"))
        .stdout(predicate::str::contains("## Monitoring and Logging"))
        .stdout(predicate::str::contains("## Rollback and Migration Notes"))
        .stdout(predicate::str::contains("## UI/UX Validation").not());
}

#[test]
fn criteria_free_ticket_gets_placeholder_row() {
    let temp = TempDir::new().unwrap();
    let ticket = write_json(
        &temp,
        "ticket.json",
        r#"{"key":"PROJ-9","title":"Tidy the build scripts"}"#,
    );

    dod()
        .arg("generate")
        .arg(&ticket)
        .assert()
        .success()
        .stdout(predicate::str::contains("manual review"));
}

#[test]
fn full_markdown_output_matches_golden() {
    let temp = TempDir::new().unwrap();
    let ticket = write_json(
        &temp,
        "ticket.json",
        r#"{"key":"PROJ-77","title":"Tidy the build scripts"}"#,
    );

    let output = dod().arg("generate").arg(&ticket).output().unwrap();
    assert!(output.status.success());

    // The Generated line carries a wall-clock timestamp; drop it.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let actual: String = stdout
        .lines()
        .filter(|line| !line.starts_with("Generated: "))
        .collect::<Vec<_>>()
        .join("\n");

    let expected = "\
# PROJ-77 Definition of Done

Category: backend

## Acceptance Criteria

- [ ] **Acceptance Criteria**: No acceptance criteria found - manual review needed

## Automated Tests

- [ ] **Unit Tests**: Cover new business logic and service-layer branches
- [ ] **Integration Tests**: Exercise API endpoints against a real database
- [ ] **End-to-End Tests**: Verify the full request/response flow across services

## Manual Test Steps

- [ ] **Manual Verification**
  - Call each changed endpoint with valid and invalid payloads
  - Exercise authentication and authorization flows end to end
  - Confirm error responses carry useful status codes and messages

## Documentation Updates

- [ ] **Documentation**: Update README and inline docs touched by this change

## Continuous Integration

- [ ] **Pipeline Status**: No CI information available - verify the pipeline manually

## API Contract Changes

- [ ] **API Review**
  - Document new or changed endpoints
  - Confirm backwards compatibility or bump the API version
  - Regenerate OpenAPI or GraphQL schema artifacts

## Monitoring and Logging

- [ ] **Observability**
  - Add structured logs around new code paths
  - Expose metrics for new operations
  - Wire alerts for new failure modes

## Rollback and Migration Notes

- [ ] **Rollback Plan**
  - Describe how to roll the change back safely
  - Confirm migrations are reversible or gated
  - Note any data backfill that cannot be undone

## Reviewer Checklist

- [ ] **Final Review**
  - Code follows project conventions and style
  - No debug code or commented-out blocks remain
  - Commit history is clean and messages are descriptive
  - All review conversations are resolved";

    similar_asserts::assert_eq!(actual, expected);
}

// =============================================================================
// Category override and formats
// =============================================================================

#[test]
fn explicit_category_override_wins() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);

    dod()
        .arg("generate")
        .arg(&ticket)
        .arg("--category")
        .arg("frontend")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: frontend"))
        .stdout(predicate::str::contains("## Accessibility Compliance"))
        .stdout(predicate::str::contains("## API Contract Changes").not());
}

#[test]
fn invalid_category_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);

    dod()
        .arg("generate")
        .arg(&ticket)
        .arg("--category")
        .arg("middleware")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid category"))
        .stderr(predicate::str::contains("backend, frontend, infrastructure"));
}

#[test]
fn wiki_format_uses_wiki_tokens() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);

    dod()
        .arg("generate")
        .arg(&ticket)
        .arg("-f")
        .arg("wiki")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("h1. BACKEND-123 Definition of Done"))
        .stdout(predicate::str::contains("h2. Acceptance Criteria"))
        .stdout(predicate::str::contains("*Acceptance Criteria*: exports finish within 30s"))
        .stdout(predicate::str::contains("##").not());
}

#[test]
fn json_format_emits_the_document() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);

    let output = dod()
        .arg("generate")
        .arg(&ticket)
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["meta"]["ticket_key"], "BACKEND-123");
    assert_eq!(document["meta"]["category"], "backend");
    assert!(document["sections"].as_array().unwrap().len() >= 6);
}

// =============================================================================
// Review records
// =============================================================================

#[test]
fn succeeded_review_checks_the_ci_row() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);
    let review = write_json(
        &temp,
        "review.json",
        r#"{"title":"Export endpoint","status":"succeeded","url":"https://git.example.com/mr/3"}"#,
    );

    dod()
        .arg("generate")
        .arg(&ticket)
        .arg("--review")
        .arg(&review)
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] **Pipeline Status**"))
        .stdout(predicate::str::contains("✓ Build passed: Export endpoint"));
}

#[test]
fn failed_review_leaves_the_ci_row_unchecked() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);
    let review = write_json(
        &temp,
        "review.json",
        r#"{"title":"Export endpoint","status":"failed"}"#,
    );

    dod()
        .arg("generate")
        .arg(&ticket)
        .arg("--review")
        .arg(&review)
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] **Pipeline Status**"))
        .stdout(predicate::str::contains("✗ Build failed"));
}

#[test]
fn missing_review_yields_manual_placeholder() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);

    dod()
        .arg("generate")
        .arg(&ticket)
        .assert()
        .success()
        .stdout(predicate::str::contains("verify the pipeline manually"));
}

// =============================================================================
// Output file and error handling
// =============================================================================

#[test]
fn output_flag_writes_a_file() {
    let temp = TempDir::new().unwrap();
    let ticket = backend_ticket(&temp);
    let out = temp.path().join("done.md");

    dod()
        .arg("generate")
        .arg(&ticket)
        .arg("-o")
        .arg(out.to_str().unwrap())
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("# BACKEND-123 Definition of Done"));
}

#[test]
fn missing_ticket_file_fails_with_path() {
    dod()
        .arg("generate")
        .arg("/no/such/ticket.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("/no/such/ticket.json"));
}

#[test]
fn malformed_ticket_json_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    let ticket = write_json(&temp, "ticket.json", "{broken");

    dod()
        .arg("generate")
        .arg(&ticket)
        .assert()
        .failure()
        .stderr(predicate::str::contains("hint"));
}
