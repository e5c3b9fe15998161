// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Heuristic extraction of acceptance criteria from ticket text.
//!
//! The extractor scans line by line. A header line ("Acceptance Criteria",
//! "AC:") opens the block; inside it, list markers, checkboxes, and
//! Given/When/Then lines each start a new criterion, "And" lines and plain
//! text continue the current one, and a short colon-terminated label line
//! closes the block. Extraction is pure and never fails; unrecognizable
//! input yields an empty list.

/// Lines shorter than this that end in ':' and contain no space are treated
/// as a new section label, closing the criteria block.
const TERMINATOR_MAX_LEN: usize = 50;

/// Extracts acceptance criteria from free-form ticket text, in input order.
///
/// Whitespace inside each criterion is normalized to single spaces; the
/// text itself is preserved verbatim (no truncation, no re-casing).
pub fn acceptance_criteria(text: &str) -> Vec<String> {
    let mut criteria = Vec::new();
    let mut current = String::new();
    let mut in_block = false;

    for raw in text.lines() {
        let line = raw.trim();

        if !in_block {
            if is_block_header(line) {
                in_block = true;
            }
            continue;
        }

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = strip_list_markers(line) {
            flush(&mut current, &mut criteria);
            current.push_str(rest);
            continue;
        }

        let lower = line.to_lowercase();
        if ["given ", "when ", "then "].iter().any(|p| lower.starts_with(p)) {
            flush(&mut current, &mut criteria);
            current.push_str(line);
            continue;
        }

        if lower.starts_with("and ") {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line);
            continue;
        }

        if is_block_terminator(line) {
            flush(&mut current, &mut criteria);
            in_block = false;
            continue;
        }

        // Anything else continues the current (possibly multi-line) criterion.
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(line);
    }

    flush(&mut current, &mut criteria);
    criteria
}

/// Returns true for a line that opens the acceptance-criteria block.
/// The header line itself never becomes a criterion.
fn is_block_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("acceptance criteria")
        || lower.contains("acceptance criterion")
        || lower == "ac:"
        || lower == "acs:"
}

/// Returns true for a short label line ("Examples:") that closes the block.
fn is_block_terminator(line: &str) -> bool {
    line.ends_with(':') && line.chars().count() < TERMINATOR_MAX_LEN && !line.contains(' ')
}

/// Strips leading list markers (numbered, bullet, checkbox) from a line.
///
/// Markers are peeled repeatedly so "- [x] foo" reduces to "foo". Returns
/// `None` when the line carries no marker at all.
fn strip_list_markers(line: &str) -> Option<&str> {
    let mut rest = line;
    let mut matched = false;
    loop {
        if let Some(r) = strip_numbered(rest) {
            rest = r.trim_start();
            matched = true;
            continue;
        }
        if let Some(r) = strip_bullet(rest) {
            rest = r.trim_start();
            matched = true;
            continue;
        }
        if let Some(r) = strip_checkbox(rest) {
            rest = r.trim_start();
            matched = true;
            continue;
        }
        break;
    }
    if matched {
        Some(rest)
    } else {
        None
    }
}

/// Strips a `N.` or `N)` numbered-list prefix.
fn strip_numbered(s: &str) -> Option<&str> {
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &s[digits..];
    rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))
}

/// Strips a `-`, `*`, or `•` bullet prefix.
fn strip_bullet(s: &str) -> Option<&str> {
    s.strip_prefix('-')
        .or_else(|| s.strip_prefix('*'))
        .or_else(|| s.strip_prefix('•'))
}

/// Strips a `[ ]` / `[x]` checkbox prefix (case-insensitive on the x).
fn strip_checkbox(s: &str) -> Option<&str> {
    s.strip_prefix("[ ]")
        .or_else(|| s.strip_prefix("[x]"))
        .or_else(|| s.strip_prefix("[X]"))
}

/// Moves the accumulated criterion into the result list, whitespace
/// normalized, dropping it when empty.
fn flush(current: &mut String, criteria: &mut Vec<String>) {
    let normalized = current.split_whitespace().collect::<Vec<_>>().join(" ");
    if !normalized.is_empty() {
        criteria.push(normalized);
    }
    current.clear();
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
