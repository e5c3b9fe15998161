// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket classification into a work category.
//!
//! Priority chain, first match wins: explicit caller override, then tag
//! synonym matching, then keyword scoring over the ticket text, then the
//! backend default. Classification is total; it always returns one of the
//! three categories.

use crate::category::Category;
use crate::ticket::Ticket;

/// Resolves the work category for a ticket.
///
/// An explicit override always wins. Ties in both the tag and keyword
/// stages resolve in [`Category::ALL`] order (backend first).
pub fn classify(ticket: &Ticket, explicit: Option<Category>) -> Category {
    if let Some(category) = explicit {
        return category;
    }

    if let Some(category) = match_tags(&ticket.tags) {
        return category;
    }

    if let Some(category) = score_keywords(ticket) {
        return category;
    }

    Category::Backend
}

/// Matches normalized tags against each category's synonym table.
fn match_tags(tags: &[String]) -> Option<Category> {
    let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    for category in Category::ALL {
        for synonym in category.tag_synonyms() {
            if tags.iter().any(|tag| tag.contains(synonym)) {
                return Some(category);
            }
        }
    }
    None
}

/// Scores category keywords over title + description + kind.
///
/// Returns the category with the highest occurrence count, or `None` when
/// nothing matched anywhere.
fn score_keywords(ticket: &Ticket) -> Option<Category> {
    let text = format!("{} {} {}", ticket.title, ticket.description, ticket.kind).to_lowercase();

    let mut best: Option<(Category, usize)> = None;
    for category in Category::ALL {
        let count: usize = category
            .keywords()
            .iter()
            .map(|kw| text.matches(kw).count())
            .sum();
        if count > 0 && best.map_or(true, |(_, max)| count > max) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
