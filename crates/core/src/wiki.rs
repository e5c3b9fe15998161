// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transcoding of generic markup into the wiki dialect used by the ticket
//! system (Jira-style).
//!
//! The rewrite is content-preserving: every label, item, checkbox state,
//! and metadata value in the input is recoverable from the output, only
//! delimiter styles change. Transformations are applied in a fixed order
//! (headings, emphasis, code fences, tables) so they cannot interfere.

use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled separator-row pattern.
// Using match with unreachable! since the pattern is hard-coded and known-valid.
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^[\s|:-]+$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Rewrites generic markup into wiki markup. Pure; never fails.
pub fn to_wiki_markup(markup: &str) -> String {
    let lines: Vec<&str> = markup.lines().collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut in_code = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if let Some(tag) = line.trim_end().strip_prefix("```") {
            out.push(if in_code || tag.is_empty() {
                "{code}".to_string()
            } else {
                format!("{{code:{}}}", tag)
            });
            in_code = !in_code;
            i += 1;
            continue;
        }

        if in_code {
            // Code bodies pass through byte for byte.
            out.push(line.to_string());
            i += 1;
            continue;
        }

        // Header rows are recognized by the separator row beneath them;
        // the separator itself has no wiki counterpart and is dropped.
        if line.contains('|') && lines.get(i + 1).is_some_and(|next| is_separator_row(next)) {
            out.push(line.replace('|', "||"));
            i += 2;
            continue;
        }

        out.push(transcode_line(line));
        i += 1;
    }

    let mut result = out.join("\n");
    if markup.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Applies heading and emphasis rewrites to an ordinary line. Checkbox
/// tokens (`- [ ]`, `- [x]`) pass through unchanged.
fn transcode_line(line: &str) -> String {
    let line = if let Some(rest) = line.strip_prefix("### ") {
        format!("h3. {}", rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        format!("h2. {}", rest)
    } else if let Some(rest) = line.strip_prefix("# ") {
        format!("h1. {}", rest)
    } else {
        line.to_string()
    };

    rewrite_emphasis(&line)
}

/// Rewrites `**span**` to `*span*`.
///
/// A span only counts when its inner text neither starts nor ends with the
/// delimiter, so runs like `***x***` stay untouched, and each span is
/// closed by the nearest eligible `**`, so adjacent spans never collapse
/// into one.
fn rewrite_emphasis(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());

    let mut i = 0;
    while i < chars.len() {
        if is_opener(&chars, i) {
            if let Some(j) = find_closer(&chars, i + 2) {
                out.push('*');
                out.extend(&chars[i + 2..j]);
                out.push('*');
                i = j + 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// An opening `**` not adjacent to further delimiters on either side.
fn is_opener(chars: &[char], i: usize) -> bool {
    chars.get(i) == Some(&'*')
        && chars.get(i + 1) == Some(&'*')
        && (i == 0 || chars[i - 1] != '*')
        && chars.get(i + 2).is_some_and(|c| *c != '*')
}

/// The nearest closing `**` whose inner text does not end with the
/// delimiter and that is not followed by another delimiter.
fn find_closer(chars: &[char], start: usize) -> Option<usize> {
    (start..chars.len().saturating_sub(1)).find(|&j| {
        chars[j] == '*'
            && chars[j + 1] == '*'
            && chars[j - 1] != '*'
            && chars.get(j + 2) != Some(&'*')
    })
}

/// A table separator row: nothing but dashes, colons, pipes, whitespace.
fn is_separator_row(line: &str) -> bool {
    line.contains('-') && SEPARATOR_RE.is_match(line)
}

#[cfg(test)]
#[path = "wiki_tests.rs"]
mod tests;
