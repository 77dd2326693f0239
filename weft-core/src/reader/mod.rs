//! Splits a document into significant lines and classifies each of them.
//!
//! Blank lines and `#` comment lines never leave the reader. Every other line
//! comes out as a [`Line`] carrying its indentation and [`LineKind`].

use memchr::memchr;

/// The shape of a trimmed, non-comment line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'input> {
    /// `-` on its own, opening a mapping item of a block sequence.
    ItemMarker,
    /// `- rest`, a scalar item of a block sequence.
    Item(&'input str),
    /// `key: value`, split on the first colon. `value` is trimmed and may be
    /// empty.
    Entry {
        key: &'input str,
        value: &'input str,
    },
    /// Anything else.
    Unknown(&'input str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'input> {
    /// One indexed.
    pub number: u32,
    /// Leading whitespace, in characters.
    pub indent: usize,
    pub kind: LineKind<'input>,
}

pub struct LineReader<'input> {
    slice: &'input str,
    pos: usize,
    line: u32,
}

impl<'input> From<&'input str> for LineReader<'input> {
    fn from(value: &'input str) -> Self {
        Self {
            slice: value,
            pos: 0,
            line: 0,
        }
    }
}

impl<'input> LineReader<'input> {
    pub fn new(input: &'input str) -> Self {
        Self::from(input)
    }

    fn next_raw(&mut self) -> Option<&'input str> {
        if self.pos >= self.slice.len() {
            return None;
        }
        let rest = &self.slice.as_bytes()[self.pos..];
        let end = memchr(b'\n', rest).map_or(self.slice.len(), |i| self.pos + i);
        let raw = &self.slice[self.pos..end];
        self.pos = end + 1;
        self.line += 1;
        Some(raw.strip_suffix('\r').unwrap_or(raw))
    }
}

impl<'input> Iterator for LineReader<'input> {
    type Item = Line<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.next_raw()?;
            let content = raw.trim_start();
            let indent = raw[..raw.len() - content.len()].chars().count();
            let content = content.trim_end();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            return Some(Line {
                number: self.line,
                indent,
                kind: classify(content),
            });
        }
    }
}

/// Sequence items are recognised before entries, so `- key: value` is an
/// item whose text is `key: value`.
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn classify(content: &str) -> LineKind<'_> {
    if content == "-" {
        return LineKind::ItemMarker;
    }
    if let Some(rest) = content.strip_prefix("- ") {
        return LineKind::Item(rest.trim_start());
    }
    match memchr(b':', content.as_bytes()) {
        Some(colon) => {
            let key = content[..colon].trim_end();
            if key.is_empty() {
                return LineKind::Unknown(content);
            }
            LineKind::Entry {
                key,
                value: content[colon + 1..].trim(),
            }
        }
        None => LineKind::Unknown(content),
    }
}
