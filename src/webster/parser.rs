//! Entry extraction.
//!
//! Every request rewinds the line source and scans the corpus from the top
//! until the requested headword has been read in full. There is no index:
//! the position of an entry is re-derived from its headword text on every
//! call. Lookups and the sequential walk share the same scan; they only
//! differ in where the target headword comes from.

use std::fs::File;
use std::io::BufReader;
use std::mem;
use std::path::Path;

use log::{debug, trace, warn};

use super::classify::classify;
use super::iter::EntryIterator;
use super::source::{LineSource, TextLineSource};
use super::types::error::Result;
use super::types::models::{Cursor, Entry, LineKind, ReaderOptions};

/// What a single scan produced.
#[derive(Debug)]
struct Scan {
    entry: Option<Entry>,
    /// The differing headword that sealed the entry, if the scan stopped on one.
    next: Option<String>,
}

/// Extracts entries from a corpus by headword.
///
/// A parser owns its line source and its walk cursor. It is not meant to be
/// shared: concurrent callers should each open their own parser.
#[derive(Debug)]
pub struct EntryParser<S> {
    source: S,
    options: ReaderOptions,
    cursor: Cursor,
}

impl EntryParser<TextLineSource<BufReader<File>>> {
    /// Open the corpus file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        let source = TextLineSource::open(path, options.encoding)?;
        Ok(Self::new(source, options))
    }
}

impl<S: LineSource> EntryParser<S> {
    pub fn new(source: S, options: ReaderOptions) -> Self {
        Self {
            source,
            options,
            cursor: Cursor::Start,
        }
    }

    /// Where the next [`next_entry`](Self::next_entry) call will start.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Restart the sequential walk from the first headword.
    pub fn reset(&mut self) {
        self.cursor = Cursor::Start;
    }

    /// Find the entry whose headword line is exactly `key`.
    ///
    /// Matching is exact and case-sensitive; callers upper-case user input
    /// themselves. An unknown key gives `Ok(None)`.
    ///
    /// When the scan stops on the headword following the entry, the cursor
    /// moves there, so a later [`next_entry`](Self::next_entry) continues
    /// after the looked-up entry.
    pub fn lookup(&mut self, key: &str) -> Result<Option<Entry>> {
        let scan = self.scan(key)?;
        debug!(
            "Lookup {:?}: {}",
            key,
            match &scan.entry {
                Some(entry) => format!("{} block(s)", entry.blocks.len()),
                None => "not found".to_string(),
            }
        );
        if let Some(next) = scan.next {
            self.cursor = Cursor::At(next);
        }
        Ok(scan.entry)
    }

    /// The entry at the cursor, advancing the cursor past it.
    ///
    /// Returns `Ok(None)` once the final entry has been consumed. The walk
    /// does not wrap around; call [`reset`](Self::reset) to start over.
    pub fn next_entry(&mut self) -> Result<Option<Entry>> {
        let target = match &self.cursor {
            Cursor::Start => self.options.first_key.clone(),
            Cursor::At(key) => key.clone(),
            Cursor::Exhausted => return Ok(None),
        };

        let scan = self.scan(&target)?;
        if scan.entry.is_none() {
            warn!("Headword {:?} not found, ending sequential walk", target);
        }
        self.cursor = match scan.next {
            Some(next) => Cursor::At(next),
            None => Cursor::Exhausted,
        };
        debug!("Sequential {:?} -> cursor {:?}", target, self.cursor);
        Ok(scan.entry)
    }

    /// Walk the remaining entries in corpus order.
    pub fn iter(&mut self) -> EntryIterator<'_, S> {
        EntryIterator::new(self)
    }

    /// Rescan the corpus from the top and collect the entry headed by `target`.
    fn scan(&mut self, target: &str) -> Result<Scan> {
        self.source.rewind()?;
        let markers = &self.options.markers;

        let mut found: Option<Entry> = None;
        let mut block = String::new();
        let mut next = None;

        while let Some(line) = self.source.next_line()? {
            if line.contains(markers.footer.as_str()) {
                trace!("Footer reached while looking for {:?}", target);
                break;
            }

            // The footer can follow the last entry with no blank line between.
            let at_terminal = found
                .as_ref()
                .is_some_and(|entry| entry.key == markers.last_headword)
                && line.contains(markers.last_headword_terminal.as_str());
            if at_terminal {
                block.push('\n');
                block.push_str(&line);
                break;
            }

            let kind = classify(&line);
            let Some(entry) = found.as_mut() else {
                if let LineKind::Headword(aliases) = kind {
                    if line == target {
                        block.push_str(&line);
                        found = Some(Entry::new(line, aliases));
                    }
                }
                continue;
            };

            match kind {
                LineKind::Headword(_) if line == target => {
                    trace!("{:?} repeats, closing block {}", target, entry.blocks.len());
                    entry.blocks.push(mem::take(&mut block));
                    block = line;
                }
                LineKind::Headword(_) => {
                    next = Some(line);
                    break;
                }
                LineKind::Body => {
                    block.push('\n');
                    block.push_str(&line);
                }
            }
        }

        if let Some(entry) = found.as_mut() {
            entry.blocks.push(block);
        }
        Ok(Scan { entry: found, next })
    }
}
