//! # Tokenizer
//!
//! Splits raw pasted text into candidate number strings.
//!
//! Two passes run over the same text (after U+00A0 is turned into a plain
//! space):
//!
//! 1. **Delimiter split** on runs of newline, comma, semicolon or tab, or on
//!    two or more plain spaces. Pieces are trimmed and empty ones dropped.
//! 2. **Embedded scan** for number-shaped runs: optional `+`, a digit, five
//!    or more of {digit, space, hyphen, parenthesis}, ending in a digit. This
//!    recovers numbers sitting inside prose or malformed CSV cells.
//!
//! Results are concatenated (split pieces first) with exact duplicates
//! removed, keeping the first occurrence. Nothing here can fail; junk
//! candidates are left for validation to reject.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\n,;\t]+| {2,}").expect("valid delimiter regex"));

static EMBEDDED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9][0-9 ()\-]{5,}[0-9]").expect("valid embedded number regex"));

/// Split `text` into an ordered, duplicate-free list of candidate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.replace('\u{00A0}', " ");

    let pieces = DELIMITERS
        .split(&normalized)
        .map(str::trim)
        .filter(|piece| !piece.is_empty());
    let embedded = EMBEDDED_NUMBER.find_iter(&normalized).map(|m| m.as_str());

    let mut seen: HashSet<&str> = HashSet::new();
    let mut tokens = Vec::new();
    for candidate in pieces.chain(embedded) {
        if seen.insert(candidate) {
            tokens.push(candidate.to_string());
        }
    }

    tracing::trace!(tokens = tokens.len(), "tokenized input");
    tokens
}
