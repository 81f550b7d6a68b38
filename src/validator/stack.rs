/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

/// Names of the currently open tags, innermost last.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TagStack {
    names: Vec<Vec<u8>>,
}

impl TagStack {
    pub fn new() -> TagStack {
        TagStack { names: Vec::new() }
    }

    pub fn push(&mut self, name: &[u8]) {
        self.names.push(name.to_vec());
    }

    /// Pops the innermost tag if it has the given name.
    ///
    /// Returns false and leaves the stack untouched otherwise.
    pub fn pop_if_matches(&mut self, name: &[u8]) -> bool {
        if self.top() == Some(name) {
            self.names.pop();
            true
        } else {
            false
        }
    }

    pub fn top(&self) -> Option<&[u8]> {
        self.names.last().map(Vec::as_slice)
    }

    pub fn depth(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Open tag names from the outermost to the innermost.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.names.iter().map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
