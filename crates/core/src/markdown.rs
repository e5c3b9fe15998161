// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of a Document to the generic lightweight-markup form.
//!
//! The exact syntax here is load-bearing: headings (`# `, `## `), checkbox
//! tokens (`- [ ] `, `- [x] `), and bold labels (`**label**`) are the
//! contract consumed by the wiki transcoder and any posting collaborator.

use chrono::SecondsFormat;

use crate::document::{Document, Row};

/// Renders a document to generic markup. Pure; never fails.
pub fn render(document: &Document) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# {} Definition of Done\n\n",
        document.meta.ticket_key
    ));
    out.push_str(&format!("Category: {}\n", document.meta.category));
    out.push_str(&format!(
        "Generated: {}\n",
        document
            .meta
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    ));

    for section in &document.sections {
        out.push_str(&format!("\n## {}\n\n", section.title));
        for row in &section.rows {
            render_row(&mut out, row);
        }
    }

    out
}

/// Renders one row: inline item when there is exactly one, otherwise the
/// label stands alone and each item becomes an indented sub-bullet.
fn render_row(out: &mut String, row: &Row) {
    let mark = if row.done { 'x' } else { ' ' };
    let label = escape_label(&row.label);
    if let [only] = row.items.as_slice() {
        out.push_str(&format!("- [{}] **{}**: {}\n", mark, label, only));
    } else {
        out.push_str(&format!("- [{}] **{}**\n", mark, label));
        for item in &row.items {
            out.push_str(&format!("  - {}\n", item));
        }
    }
}

/// Escapes literal emphasis delimiters inside a label so wrapping it in
/// `**` cannot produce ambiguous nested emphasis. Items are not escaped.
fn escape_label(label: &str) -> String {
    label.replace('*', "\\*")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
