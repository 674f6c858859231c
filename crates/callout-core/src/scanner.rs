//! Line-oriented scanning of blockquote regions.
//!
//! The scanner walks a normalized line sequence and groups consecutive
//! blockquote lines into blocks; every other line passes through untouched.
//! Blocks are never empty.

use std::sync::LazyLock;

use regex::Regex;

static BLOCKQUOTE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s{0,3}>").unwrap());

static BLOCKQUOTE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s{0,3}>\s?").unwrap());

/// Normalize line-ending variants (`\r\n`, lone `\r`) to `\n`.
pub(crate) fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// A scanned region of input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// A single non-blockquote line, passed through untouched.
    Line(&'a str),
    /// A non-empty run of contiguous blockquote lines.
    Blockquote(Vec<&'a str>),
}

/// Iterator grouping consecutive blockquote lines into blocks.
pub(crate) struct BlockScanner<'a> {
    lines: &'a [&'a str],
    cursor: usize,
}

impl<'a> BlockScanner<'a> {
    pub(crate) fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, cursor: 0 }
    }
}

impl<'a> Iterator for BlockScanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = *self.lines.get(self.cursor)?;
        if !is_blockquote_line(line) {
            self.cursor += 1;
            return Some(Segment::Line(line));
        }

        let start = self.cursor;
        while self
            .lines
            .get(self.cursor)
            .is_some_and(|line| is_blockquote_line(line))
        {
            self.cursor += 1;
        }
        Some(Segment::Blockquote(self.lines[start..self.cursor].to_vec()))
    }
}

/// Check whether a line belongs to a blockquote: up to 3 leading whitespace
/// characters followed by `>`.
pub(crate) fn is_blockquote_line(line: &str) -> bool {
    BLOCKQUOTE_LINE.is_match(line)
}

/// Strip the blockquote prefix from a line: up to 3 leading whitespace
/// characters, `>`, and at most one following whitespace character.
pub(crate) fn strip_blockquote_prefix(line: &str) -> &str {
    match BLOCKQUOTE_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}
