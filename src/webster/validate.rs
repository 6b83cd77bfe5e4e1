//! Bulk validation of the whole corpus.
//!
//! Walks the sequential mode from the first headword to exhaustion and checks
//! that every headword is in canonical form and that no headword is reached
//! twice. The walk stops at the first violation.

use std::collections::HashSet;

use log::{info, warn};

use super::parser::EntryParser;
use super::source::LineSource;
use super::types::error::Result;
use super::types::models::{Entry, IntegrityViolation, ValidationReport};

/// Validate the corpus behind `parser`. The parser's cursor is reset first.
pub fn validate<S: LineSource>(parser: &mut EntryParser<S>) -> Result<ValidationReport> {
    validate_with(parser, |_| {})
}

/// Like [`validate`], handing every entry that passes the checks to `sink`.
///
/// I/O errors abort the walk and are returned as `Err`; integrity violations
/// are returned in the report.
pub fn validate_with<S, F>(parser: &mut EntryParser<S>, mut sink: F) -> Result<ValidationReport>
where
    S: LineSource,
    F: FnMut(Entry),
{
    parser.reset();
    let mut seen: HashSet<String> = HashSet::new();

    while let Some(entry) = parser.next_entry()? {
        if let Some(violation) = check(&entry, &seen) {
            warn!("Validation stopped after {} entries: {}", seen.len(), violation);
            return Ok(ValidationReport {
                entries: seen.len(),
                violation: Some(violation),
            });
        }
        seen.insert(entry.key.clone());
        sink(entry);
    }

    info!("Validation passed: {} distinct entries", seen.len());
    Ok(ValidationReport {
        entries: seen.len(),
        violation: None,
    })
}

fn check(entry: &Entry, seen: &HashSet<String>) -> Option<IntegrityViolation> {
    let display_key = entry.display_key();
    if entry.key != display_key {
        return Some(IntegrityViolation::KeyMismatch {
            key: entry.key.clone(),
            display_key,
        });
    }
    if seen.contains(&entry.key) {
        return Some(IntegrityViolation::DuplicateKey {
            key: entry.key.clone(),
        });
    }
    None
}
