//! Core entry-extraction engine for the plain-text Webster's dictionary.
//!
//! # Module Organization
//!
//! - [`types`]: entries, reader options, errors
//! - [`source`]: rewindable line reader ([`LineSource`](source::LineSource))
//! - [`classify`]: headword detection
//! - [`parser`]: lookup and sequential extraction
//! - [`iter`]: iterator over the sequential walk
//! - [`validate`]: whole-corpus integrity walk
//! - [`render`]: console and HTML output
//!
//! # Data flow
//!
//! ```text
//! lookup("HOME") / next_entry()
//!        │
//!        ▼
//! ┌──────────────┐  rewind + next_line  ┌──────────────┐
//! │ EntryParser  │ ───────────────────► │ LineSource   │
//! └──────────────┘                      └──────────────┘
//!        │ classify(line)
//!        ▼
//!   LineKind::Headword / Body ──► Entry { key, aliases, blocks }
//! ```

pub mod classify;
pub mod iter;
pub mod parser;
pub mod render;
pub mod source;
pub mod types;
pub mod utils;
pub mod validate;

pub use types::error::{Result, WebsterError};
