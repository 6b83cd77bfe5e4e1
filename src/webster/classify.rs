//! Headword detection.
//!
//! The corpus has no markup, so headwords are recognised by shape: an
//! all-capitals line with none of the punctuation that shows up in
//! definitions, etymologies and citations. This is a heuristic over raw text
//! and will misfire on adversarial input.

use std::sync::OnceLock;

use regex::Regex;

use super::types::models::LineKind;

/// Characters that never appear on a headword line: lowercase letters,
/// digits and `. ( ) [ ] + ,`.
static NON_HEADWORD_CHARS: OnceLock<Regex> = OnceLock::new();

fn non_headword_regex() -> &'static Regex {
    NON_HEADWORD_CHARS.get_or_init(|| {
        Regex::new(r"[\p{Ll}\p{Nd}.()\[\]+,]").expect("Invalid headword regex pattern")
    })
}

/// Classify one line (terminator already stripped).
///
/// ```
/// use webster_reader::{classify, LineKind};
///
/// assert_eq!(
///     classify("FOO; BAR"),
///     LineKind::Headword(vec!["FOO".to_string(), "BAR".to_string()])
/// );
/// assert_eq!(classify("E.G."), LineKind::Body);
/// ```
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() || line.starts_with("--") || non_headword_regex().is_match(line) {
        return LineKind::Body;
    }
    LineKind::Headword(split_aliases(line))
}

/// Split a headword line on `;` and trim each piece. Empty pieces are kept.
pub fn split_aliases(line: &str) -> Vec<String> {
    line.split(';').map(|piece| piece.trim().to_string()).collect()
}

/// Inverse of [`split_aliases`] for canonical headwords.
pub fn join_aliases(aliases: &[String]) -> String {
    aliases.join("; ")
}
