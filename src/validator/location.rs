/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::fmt::Display;

/// A position in the validated document.
///
/// Every [ValidationError](crate::ValidationError) carries the location
/// of the `<` which started the offending construct, or the end of the
/// document for problems only detectable there.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Location {
    /// Byte offset in the document.
    pub bytes: usize,
    /// How many newline characters precede the offset.
    pub lines: usize,
    /// How many bytes after the last newline character.
    pub column: usize,
}

impl Location {
    /// Creates a new location at the beginning of the document.
    pub fn new() -> Self {
        Location {
            bytes: 0,
            lines: 0,
            column: 0,
        }
    }

    /// Computes the location of a byte offset in the document.
    ///
    /// Offsets past the end are clamped to the document length.
    pub fn at(document: &[u8], offset: usize) -> Self {
        let mut location = Location::new();
        for &c in &document[..offset.min(document.len())] {
            location.advance(c);
        }
        location
    }

    fn advance(&mut self, c: u8) {
        self.bytes += 1;
        if c == b'\n' {
            self.lines += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "byte: {}, line: {}, column: {}",
            self.bytes, self.lines, self.column
        )
    }
}
