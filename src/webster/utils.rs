//! Encoding helpers

use encoding_rs::Encoding;
use log::debug;

use super::types::error::{Result, WebsterError};
use super::types::models::TextEncoding;

/// WHATWG labels that `encoding_rs` folds into windows-1252 but that name true ISO-8859-1.
const LATIN1_LABELS: &[&str] = &[
    "latin1",
    "l1",
    "iso-8859-1",
    "iso8859-1",
    "iso88591",
    "iso_8859-1",
    "iso_8859-1:1987",
    "iso-ir-100",
    "csisolatin1",
    "ibm819",
    "cp819",
];

/// Resolve an encoding label (`latin1`, `iso-8859-1`, `windows-1252`, ...).
///
/// Only single-byte encodings are accepted; the scanner assumes one byte per
/// character and never transcodes.
pub fn parse_encoding(label: &str) -> Result<TextEncoding> {
    let trimmed = label.trim();
    if LATIN1_LABELS.iter().any(|l| trimmed.eq_ignore_ascii_case(l)) {
        debug!("Encoding label '{}' resolved to ISO-8859-1", label);
        return Ok(TextEncoding::Latin1);
    }
    let encoding = Encoding::for_label(trimmed.as_bytes())
        .ok_or_else(|| WebsterError::UnknownEncoding(label.to_string()))?;
    if !encoding.is_single_byte() {
        return Err(WebsterError::MultiByteEncoding(encoding.name()));
    }
    debug!("Encoding label '{}' resolved to {}", label, encoding.name());
    Ok(TextEncoding::Other(encoding))
}
