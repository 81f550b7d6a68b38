/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use thiserror::Error;

use super::Location;

/// Category of a validation failure.
///
/// Categories do not overlap. The first violation found in scan order
/// decides the category of the whole validation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A `<` has no following `>`, or a `<?` has no following `?>`.
    UnterminatedTag,

    /// An attribute token does not have the `key="value"` shape.
    MalformedAttribute,

    /// An attribute token is not well-formed UTF-8.
    InvalidEncoding,

    /// The same `key="value"` token appears twice in one tag.
    ///
    /// Tokens are compared as a whole, so `x="1" x="2"` is not a duplicate.
    DuplicateAttribute,

    /// A closing tag does not match the innermost open tag, or tags are
    /// left open at the end of the document.
    MismatchedClosingTag,

    /// Nesting went deeper than the configured limit.
    DepthLimitExceeded,
}

/// Error returned when a document is not well-formed.
///
/// Tag and attribute texts are converted lossily, so invalid UTF-8 bytes
/// show up as replacement characters in the messages.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    #[error("Malformed XML: Missing closing '>' for a tag.")]
    UnterminatedTag { location: Location },

    #[error("Malformed XML: Invalid attribute '{attribute}' in tag <{tag}>.")]
    MalformedAttribute {
        tag: String,
        attribute: String,
        location: Location,
    },

    #[error(
        "Malformed XML: Invalid attribute '{attribute}' in tag <{tag}>. Unsupported character encoding."
    )]
    InvalidEncoding {
        tag: String,
        attribute: String,
        location: Location,
    },

    #[error("Malformed XML: Duplicate attributes in tag <{tag}>.")]
    DuplicateAttribute { tag: String, location: Location },

    #[error("Malformed XML: Mismatched or unexpected closing tag </{tag}>.")]
    MismatchedClosingTag { tag: String, location: Location },

    #[error("Malformed XML: Unclosed tag <{tag}> at end of document.")]
    UnclosedTag { tag: String, location: Location },

    #[error("Malformed XML: Tag <{tag}> exceeds the maximum nesting depth of {limit}.")]
    DepthLimitExceeded {
        tag: String,
        limit: usize,
        location: Location,
    },
}

impl ValidationError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::UnterminatedTag { .. } => ErrorKind::UnterminatedTag,
            ValidationError::MalformedAttribute { .. } => ErrorKind::MalformedAttribute,
            ValidationError::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            ValidationError::DuplicateAttribute { .. } => ErrorKind::DuplicateAttribute,
            ValidationError::MismatchedClosingTag { .. } | ValidationError::UnclosedTag { .. } => {
                ErrorKind::MismatchedClosingTag
            }
            ValidationError::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
        }
    }

    /// Returns where in the document the problem was found.
    pub fn location(&self) -> Location {
        match self {
            ValidationError::UnterminatedTag { location }
            | ValidationError::MalformedAttribute { location, .. }
            | ValidationError::InvalidEncoding { location, .. }
            | ValidationError::DuplicateAttribute { location, .. }
            | ValidationError::MismatchedClosingTag { location, .. }
            | ValidationError::UnclosedTag { location, .. }
            | ValidationError::DepthLimitExceeded { location, .. } => *location,
        }
    }
}
