// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `dod categorize` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn dod() -> Command {
    cargo_bin_cmd!("dod")
}

fn write_ticket(temp: &TempDir, content: &str) -> String {
    let path = temp.path().join("ticket.json");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[parameterized(
    backend_tag = { r#"{"key":"T-1","title":"x","tags":["backend"]}"#, "backend" },
    frontend_tag = { r#"{"key":"T-2","title":"x","tags":["ui"]}"#, "frontend" },
    infra_tag = { r#"{"key":"T-3","title":"x","tags":["devops"]}"#, "infrastructure" },
    keyword_only = { r#"{"key":"T-4","title":"Provision with terraform"}"#, "infrastructure" },
    default = { r#"{"key":"T-5","title":"Untangle the thing"}"#, "backend" },
)]
fn categorize_prints_the_resolved_category(ticket_json: &str, expected: &str) {
    let temp = TempDir::new().unwrap();
    let ticket = write_ticket(&temp, ticket_json);

    dod()
        .arg("categorize")
        .arg(&ticket)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", expected)));
}

#[test]
fn mixed_tags_tie_break_to_backend() {
    let temp = TempDir::new().unwrap();
    let ticket = write_ticket(
        &temp,
        r#"{"key":"T-6","title":"x","tags":["frontend","backend"]}"#,
    );

    dod()
        .arg("categorize")
        .arg(&ticket)
        .assert()
        .success()
        .stdout(predicate::str::diff("backend\n".to_string()));
}

#[test]
fn missing_file_fails() {
    dod()
        .arg("categorize")
        .arg("/no/such/ticket.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
