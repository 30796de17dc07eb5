//! Text transformations: case conversion, statistics, dedupe, sorting

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Target style for case conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    Upper,
    Lower,
    Title,
    Sentence,
}

/// Convert `text` to the requested case style
pub fn convert_case(text: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => text.to_uppercase(),
        CaseStyle::Lower => text.to_lowercase(),
        CaseStyle::Title => text
            .to_lowercase()
            .split(' ')
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(" "),
        CaseStyle::Sentence => sentence_case(text),
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase everything, then capitalize the first letter of the text and of
/// every sentence started by `.`, `!` or `?`.
fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for ch in text.to_lowercase().chars() {
        if capitalize_next && ch.is_alphanumeric() {
            out.extend(ch.to_uppercase());
            capitalize_next = false;
            continue;
        }
        if matches!(ch, '.' | '!' | '?') {
            capitalize_next = true;
        }
        out.push(ch);
    }
    out
}

/// Word-counter statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
    pub chars_no_spaces: usize,
    pub lines: usize,
    /// Estimated reading time in whole minutes at 200 words per minute
    pub reading_time_minutes: usize,
}

/// Compute word/character/line statistics for `text`
pub fn text_stats(text: &str) -> TextStats {
    let trimmed = text.trim();
    let words = if trimmed.is_empty() {
        0
    } else {
        trimmed.split_whitespace().count()
    };
    TextStats {
        words,
        chars: text.chars().count(),
        chars_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        lines: if trimmed.is_empty() {
            0
        } else {
            text.split('\n').count()
        },
        reading_time_minutes: words.div_ceil(200),
    }
}

/// Remove duplicate lines, trimming each line, dropping empty ones, and
/// keeping the first occurrence order.
pub fn dedupe_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if seen.insert(line) {
            unique.push(line);
        }
    }
    unique.join("\n")
}

/// Sort direction for [`sort_lines`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort lines case-insensitively, dropping blank lines. The sort is stable,
/// so lines that compare equal keep their input order.
pub fn sort_lines(text: &str, direction: SortDirection) -> String {
    let mut lines: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
    match direction {
        SortDirection::Ascending => {
            lines.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        }
        SortDirection::Descending => {
            lines.sort_by(|a, b| b.to_lowercase().cmp(&a.to_lowercase()));
        }
    }
    lines.join("\n")
}
