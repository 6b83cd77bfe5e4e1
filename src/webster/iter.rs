//! Iterator adapter over the sequential walk.
//!
//! # Example
//! ```no_run
//! # use webster_reader::{EntryParser, ReaderOptions};
//! # let mut parser = EntryParser::open("29765-8.txt", ReaderOptions::default()).unwrap();
//! for result in parser.iter() {
//!     let entry = result.unwrap();
//!     println!("{}: {} block(s)", entry.key, entry.blocks.len());
//! }
//! ```

use std::collections::HashSet;

use log::warn;

use super::parser::EntryParser;
use super::source::LineSource;
use super::types::error::Result;
use super::types::models::Entry;

/// Yields entries from the parser's cursor until the walk is exhausted.
///
/// Each step is a full rescan of the corpus. A headword that occurs twice
/// non-contiguously sends the walk back to its first occurrence, which would
/// cycle forever; the iterator ends instead when a headword comes round a
/// second time. Use [`validate`](crate::validate) to have that reported.
///
/// Created by [`EntryParser::iter()`].
pub struct EntryIterator<'a, S: LineSource> {
    parser: &'a mut EntryParser<S>,
    seen: HashSet<String>,
    done: bool,
}

impl<'a, S: LineSource> EntryIterator<'a, S> {
    pub(super) fn new(parser: &'a mut EntryParser<S>) -> Self {
        Self {
            parser,
            seen: HashSet::new(),
            done: false,
        }
    }
}

impl<'a, S: LineSource> Iterator for EntryIterator<'a, S> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.parser.next_entry() {
            Ok(Some(entry)) => {
                if !self.seen.insert(entry.key.clone()) {
                    warn!("Headword {:?} reached again, stopping iteration", entry.key);
                    self.done = true;
                    return None;
                }
                Some(Ok(entry))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
