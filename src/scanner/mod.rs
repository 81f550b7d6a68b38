/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::borrow::Cow;
use std::iter::FusedIterator;

use memchr::memchr;
use memchr::memmem;

use crate::Location;
use crate::ValidationError;

/// Classification of a `<...>` construct.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TagKind {
    /// A `<?name ...?>` declaration. Never opens a scope.
    Declaration,
    /// A `<name ...>` start tag.
    Opening,
    /// A `</name>` end tag.
    Closing,
    /// A `<name .../>` tag which needs no end tag.
    SelfClosing,
}

/// A tag found by the [Scanner].
///
/// This is a view into the scanned document. Nothing is copied; the name
/// and attribute slices borrow the document bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tag<'a> {
    pub kind: TagKind,
    pub name: &'a [u8],
    /// Raw attribute tokens in document order. Always empty for closing tags.
    pub attributes: Vec<&'a [u8]>,
    /// Byte offset of the `<` character.
    pub offset: usize,
}

/// Strips Unicode white space from both ends.
///
/// Only the valid UTF-8 runs at the edges are looked at, so invalid
/// bytes in the middle do not prevent trimming.
fn trim(bytes: &[u8]) -> &[u8] {
    let bytes = match bytes.utf8_chunks().next() {
        Some(chunk) => {
            let valid = chunk.valid();
            &bytes[valid.len() - valid.trim_start().len()..]
        }
        None => bytes,
    };
    match bytes.utf8_chunks().last() {
        Some(chunk) if chunk.invalid().is_empty() => {
            let valid = chunk.valid();
            &bytes[..bytes.len() - (valid.len() - valid.trim_end().len())]
        }
        _ => bytes,
    }
}

impl<'a> Tag<'a> {
    // Tokens are separated by single spaces only. Consecutive spaces
    // produce empty tokens which the attribute checks reject.
    fn split(kind: TagKind, content: &'a [u8], offset: usize) -> Tag<'a> {
        let mut parts = content.split(|&c| c == b' ');
        let name = trim(parts.next().unwrap_or_default());
        Tag {
            kind,
            name,
            attributes: parts.collect(),
            offset,
        }
    }

    /// Returns the tag name as text, replacing invalid UTF-8 sequences.
    pub fn name_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.name)
    }
}

/// Iterator over the tags of a document.
///
/// The scanner only segments the document; it does not check attributes
/// or tag balance. The only error it can return is
/// [UnterminatedTag](ValidationError::UnterminatedTag), after which it
/// returns `None` forever.
///
/// Text between the tags is skipped without inspection.
///
/// # Examples
///
/// ```
/// use tagcheck::{Scanner, TagKind};
///
/// let kinds: Vec<TagKind> = Scanner::new(b"<?xml version=\"1.0\"?><a><b/></a>")
///     .map(|tag| tag.map(|tag| tag.kind))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(
///     kinds,
///     [TagKind::Declaration, TagKind::Opening, TagKind::SelfClosing, TagKind::Closing]
/// );
/// ```
pub struct Scanner<'a> {
    document: &'a [u8],
    pos: usize,
    text_bytes: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of the document.
    pub fn new(document: &'a [u8]) -> Scanner<'a> {
        Scanner {
            document,
            pos: 0,
            text_bytes: 0,
            failed: false,
        }
    }

    /// Number of bytes skipped outside of tags so far.
    pub fn text_bytes(&self) -> usize {
        self.text_bytes
    }

    /// Byte offset where the next tag search starts.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn unterminated(&self, offset: usize) -> ValidationError {
        ValidationError::UnterminatedTag {
            location: Location::at(self.document, offset),
        }
    }

    fn next_tag(&mut self) -> Result<Option<Tag<'a>>, ValidationError> {
        let rest = &self.document[self.pos..];
        let Some(start) = memchr(b'<', rest) else {
            self.text_bytes += rest.len();
            self.pos = self.document.len();
            return Ok(None);
        };
        self.text_bytes += start;
        let offset = self.pos + start;
        let after = &self.document[offset + 1..];

        let Some(end) = memchr(b'>', after) else {
            return Err(self.unterminated(offset));
        };

        if after.first() == Some(&b'?') {
            let body = &after[1..];
            let Some(end) = memmem::find(body, b"?>") else {
                return Err(self.unterminated(offset));
            };
            self.pos = offset + 2 + end + 2;
            return Ok(Some(Tag::split(
                TagKind::Declaration,
                trim(&body[..end]),
                offset,
            )));
        }

        self.pos = offset + 1 + end + 1;
        let content = trim(&after[..end]);
        let tag = if let Some(name) = content.strip_prefix(b"/") {
            Tag {
                kind: TagKind::Closing,
                name: trim(name),
                attributes: Vec::new(),
                offset,
            }
        } else if let Some(content) = content.strip_suffix(b"/") {
            Tag::split(TagKind::SelfClosing, trim(content), offset)
        } else {
            Tag::split(TagKind::Opening, content, offset)
        };
        Ok(Some(tag))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Tag<'a>, ValidationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_tag() {
            Ok(tag) => tag.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}


mod nocompile;
