//! Rewindable line reader over the corpus.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use log::info;

use super::types::error::Result;
use super::types::models::TextEncoding;

/// A sequential source of corpus lines that can be restarted from the top.
///
/// `rewind` followed by repeated `next_line` calls must yield the same
/// sequence every time.
pub trait LineSource {
    /// Reset to the start of the corpus, dropping any read-ahead.
    fn rewind(&mut self) -> Result<()>;

    /// The next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// A [`LineSource`] over any seekable buffered reader holding single-byte text.
///
/// Lines end at `\n`; a trailing `\r` is stripped as well.
#[derive(Debug)]
pub struct TextLineSource<R> {
    reader: R,
    encoding: TextEncoding,
    buf: Vec<u8>,
}

impl TextLineSource<BufReader<File>> {
    /// Open a corpus file. The handle is kept for the lifetime of the source.
    pub fn open(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening corpus: {} ({})", path.display(), encoding.name());
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), encoding))
    }
}

impl<R: BufRead + Seek> TextLineSource<R> {
    pub fn new(reader: R, encoding: TextEncoding) -> Self {
        Self {
            reader,
            encoding,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead + Seek> LineSource for TextLineSource<R> {
    fn rewind(&mut self) -> Result<()> {
        // Seeking a BufReader discards its internal buffer.
        self.reader.rewind()?;
        self.buf.clear();
        Ok(())
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        let mut bytes = self.buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }

        Ok(Some(self.encoding.decode(bytes)))
    }
}
