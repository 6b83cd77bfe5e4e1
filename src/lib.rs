//! # webster-reader
//!
//! Headword lookup over the plain-text Webster's Unabridged Dictionary
//! (Project Gutenberg ebook 29765).
//!
//! The corpus is a flat Latin-1 text file with no markup. Headwords are
//! recognised by shape, and each request rescans the file from the top:
//! there is no index to build or keep in sync.
//!
//! ```no_run
//! use webster_reader::{EntryParser, ReaderOptions};
//!
//! let mut parser = EntryParser::open("29765-8.txt", ReaderOptions::default())?;
//! if let Some(entry) = parser.lookup("HOME")? {
//!     print!("{}", entry.plain_text());
//! }
//! # Ok::<(), webster_reader::WebsterError>(())
//! ```
pub mod webster;

// Re-export the main types for convenience
pub use webster::{
    classify::{classify, join_aliases, split_aliases},
    iter::EntryIterator,
    parser::EntryParser,
    render::{line_style, write_console, HtmlPage, LineStyle},
    source::{LineSource, TextLineSource},
    types::models::{
        CorpusMarkers,
        Cursor,
        Entry,
        IntegrityViolation,
        LineKind,
        ReaderOptions,
        TextEncoding,
        ValidationReport,
    },
    utils::parse_encoding,
    validate::{validate, validate_with},
    Result,
    WebsterError,
};
