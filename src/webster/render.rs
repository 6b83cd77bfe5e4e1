//! Output for extracted entries: colored console text and HTML pages.
//!
//! Both work from the views on [`Entry`]: the console from
//! [`Entry::plain_text`], HTML from [`Entry::markup`]. Entry text is never
//! escaped.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use log::info;

use super::types::error::Result;
use super::types::models::Entry;

/// How the console renderer shows one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Has letters, none of them lowercase: headwords and small-caps labels.
    Heading,
    Body,
}

pub fn line_style(line: &str) -> LineStyle {
    let has_letter = line.chars().any(char::is_alphabetic);
    let has_lower = line.chars().any(char::is_lowercase);
    if has_letter && !has_lower {
        LineStyle::Heading
    } else {
        LineStyle::Body
    }
}

/// Print an entry line by line, headings highlighted.
pub fn write_console<W: Write>(out: &mut W, entry: &Entry) -> io::Result<()> {
    for line in entry.plain_text().split('\n') {
        match line_style(line) {
            LineStyle::Heading => writeln!(out, "{}", line.bold().yellow())?,
            LineStyle::Body => writeln!(out, "{}", line)?,
        }
    }
    Ok(())
}

/// A single HTML page holding several entries and a jump-link index.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    title: String,
    entries: Vec<Entry>,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assemble the page. Anchors use [`Entry::display_key`].
    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", self.title);
        html.push_str("</head>\n<body>\n");

        html.push_str("<p class=\"index\">\n");
        for entry in &self.entries {
            let anchor = entry.display_key();
            let _ = writeln!(html, "<a href=\"#{anchor}\">{anchor}</a>");
        }
        html.push_str("</p>\n<hr>\n");

        for entry in &self.entries {
            let _ = writeln!(html, "<div class=\"entry\">\n<a id=\"{}\"></a>", entry.display_key());
            html.push_str(&entry.markup());
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write the rendered page to `path` as UTF-8.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render())?;
        info!("Wrote {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}

impl Extend<Entry> for HtmlPage {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
