//! Data structures shared by the scanner, the renderers and the validator.

use encoding_rs::{mem, Encoding};
use thiserror::Error;

/// Result of classifying one physical line of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Definition text, blank lines, front matter. Anything that is not a headword.
    Body,
    /// A headword line, split into its `;`-separated alias tokens.
    Headword(Vec<String>),
}

/// One dictionary entry as extracted from the corpus.
///
/// `blocks` holds one string per consecutive occurrence of the headword line.
/// Every block starts with the headword line itself, followed by the body
/// lines joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub aliases: Vec<String>,
    pub blocks: Vec<String>,
}

impl Entry {
    pub(crate) fn new(key: String, aliases: Vec<String>) -> Self {
        Self {
            key,
            aliases,
            blocks: Vec::new(),
        }
    }

    /// Aliases rejoined with `"; "`. Used as the anchor id in HTML output.
    pub fn display_key(&self) -> String {
        crate::webster::classify::join_aliases(&self.aliases)
    }

    /// `true` when the raw headword line is already in canonical form.
    pub fn is_canonical(&self) -> bool {
        self.key == self.display_key()
    }

    /// All blocks concatenated in order. No separator is added and nothing is trimmed.
    pub fn plain_text(&self) -> String {
        self.blocks.concat()
    }

    /// Block-annotated markup: the first line of each block in `<b>`, every line closed by `<br>`.
    ///
    /// Content is emitted verbatim, without escaping.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            for (i, line) in block.split('\n').enumerate() {
                if i == 0 {
                    out.push_str("<b>");
                    out.push_str(line);
                    out.push_str("</b>");
                } else {
                    out.push_str(line);
                }
                out.push_str("<br>\n");
            }
        }
        out
    }
}

/// Position of the sequential walk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cursor {
    /// No scan has set the cursor yet; the walk begins at the first key.
    #[default]
    Start,
    /// The next headword the walk will look for.
    At(String),
    /// The walk consumed the final entry.
    Exhausted,
}

/// A failed integrity check during a bulk walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("headword {key:?} is not in canonical form (expected {display_key:?})")]
    KeyMismatch { key: String, display_key: String },

    #[error("headword {key:?} was reached twice")]
    DuplicateKey { key: String },
}

impl IntegrityViolation {
    /// The headword the walk stopped on.
    pub fn key(&self) -> &str {
        match self {
            IntegrityViolation::KeyMismatch { key, .. } => key,
            IntegrityViolation::DuplicateKey { key } => key,
        }
    }
}

/// Outcome of a bulk validation walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Distinct entries that passed every check.
    pub entries: usize,
    /// The first violation; the walk stops there.
    pub violation: Option<IntegrityViolation>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.violation.is_none()
    }

    /// Turns a violation into an error, or yields the entry count.
    pub fn into_result(self) -> crate::webster::types::error::Result<usize> {
        match self.violation {
            Some(violation) => Err(violation.into()),
            None => Ok(self.entries),
        }
    }
}

/// Fixed text of the particular corpus that the scanner relies on to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusMarkers {
    /// Any line containing this text ends the scan (start of the trailing license matter).
    pub footer: String,
    /// The last headword of the dictionary.
    pub last_headword: String,
    /// Text on the final line of the last entry; the scan stops after it.
    pub last_headword_terminal: String,
}

impl Default for CorpusMarkers {
    fn default() -> Self {
        Self {
            footer: "End of Project Gutenberg's Webster's Unabridged Dictionary".to_string(),
            last_headword: "ZYTHUM".to_string(),
            last_headword_terminal: "a liquor made from malt and wheat.".to_string(),
        }
    }
}

/// Single-byte text encoding of the corpus.
///
/// `encoding_rs` resolves the `latin1` / `iso-8859-1` labels to windows-1252,
/// which remaps bytes 0x80-0x9F. The corpus is true ISO-8859-1, so that case
/// gets its own variant that maps every byte to U+0000-U+00FF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Latin1,
    /// Any other single-byte encoding known to `encoding_rs`.
    Other(&'static Encoding),
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Latin1 => "ISO-8859-1",
            TextEncoding::Other(encoding) => encoding.name(),
        }
    }

    /// Decode one line of raw bytes.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Latin1 => mem::decode_latin1(bytes).into_owned(),
            TextEncoding::Other(encoding) => {
                encoding.decode_without_bom_handling(bytes).0.into_owned()
            }
        }
    }
}

/// Settings for opening and scanning a corpus.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    pub encoding: TextEncoding,
    /// Headword the sequential walk starts from.
    pub first_key: String,
    pub markers: CorpusMarkers,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Latin1,
            first_key: "A".to_string(),
            markers: CorpusMarkers::default(),
        }
    }
}

impl ReaderOptions {
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_first_key(mut self, first_key: impl Into<String>) -> Self {
        self.first_key = first_key.into();
        self
    }

    pub fn with_markers(mut self, markers: CorpusMarkers) -> Self {
        self.markers = markers;
        self
    }
}
