/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

mod error;
mod location;
mod stack;

use std::collections::BTreeMap;

pub use error::ErrorKind;
pub use error::ValidationError;
pub use location::Location;
pub use stack::TagStack;

use crate::attributes::AttributeFault;
use crate::attributes::check_attributes;
use crate::scanner::Scanner;
use crate::scanner::Tag;
use crate::scanner::TagKind;

const LOG_TARGET: &str = "tagcheck::validator";

/// Settings of a [Validator].
///
/// Defaults reject tags left open at the end of the document and put no
/// limit on the nesting depth.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Options {
    allow_unclosed_tags: bool,
    max_depth: Option<usize>,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    /// Accepts documents which end with open tags.
    pub fn allow_unclosed_tags(mut self, allow: bool) -> Options {
        self.allow_unclosed_tags = allow;
        self
    }

    /// Rejects documents nesting tags deeper than the given limit.
    pub fn max_depth(mut self, depth: Option<usize>) -> Options {
        self.max_depth = depth;
        self
    }
}

/// Statistics collected while validating a document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Opening tags matched with a closing tag.
    pub tag_pairs: usize,
    /// Self-closing tags.
    pub empty_tags: usize,
    /// `<?...?>` declarations.
    pub declarations: usize,
    /// Attribute tokens checked, declarations included.
    pub attributes: usize,
    pub max_depth: usize,
    /// Bytes outside of any tag.
    pub text_bytes: usize,
    /// Opening and self-closing tag counts by name.
    pub tag_counts: BTreeMap<String, usize>,
}

/// Structural validator for XML-like documents.
///
/// The validator checks that tags are balanced, attribute tokens have
/// the `key="value"` shape and are valid UTF-8, and that no tag repeats
/// an attribute token. The first problem stops the validation.
///
/// The instance can be reused for multiple documents. Each call to
/// [validate()](Validator::validate) starts from a clean state.
///
/// # Examples
///
/// ```
/// use tagcheck::{ErrorKind, Options, Validator};
///
/// let mut validator = Validator::new(Options::new());
/// let summary = validator.validate("<a x=\"1\"><b/></a>").unwrap();
/// assert_eq!(summary.tag_pairs, 1);
/// assert_eq!(summary.empty_tags, 1);
///
/// let err = validator.validate("<a></b>").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MismatchedClosingTag);
/// println!("error at {}: {}", err.location(), err);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    options: Options,
    stack: TagStack,
    summary: Summary,
}

impl Validator {
    pub fn new(options: Options) -> Validator {
        Validator {
            options,
            stack: TagStack::new(),
            summary: Summary::default(),
        }
    }

    /// Tags open at the point where the last validation stopped.
    pub fn open_tags(&self) -> &TagStack {
        &self.stack
    }

    /// Resets the validator into a clean state.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.summary = Summary::default();
    }

    /// Validates a whole document.
    pub fn validate(&mut self, document: impl AsRef<[u8]>) -> Result<Summary, ValidationError> {
        let document = document.as_ref();
        self.reset();

        let mut scanner = Scanner::new(document);
        for tag in scanner.by_ref() {
            self.check_tag(document, &tag?)?;
        }
        self.summary.text_bytes = scanner.text_bytes();
        self.check_finish(document)?;

        log::debug!(
            target: LOG_TARGET,
            "validated {} bytes: {} tag pairs, {} empty tags, max depth {}",
            document.len(),
            self.summary.tag_pairs,
            self.summary.empty_tags,
            self.summary.max_depth
        );
        Ok(std::mem::take(&mut self.summary))
    }

    pub(crate) fn check_tag(&mut self, document: &[u8], tag: &Tag) -> Result<(), ValidationError> {
        log::trace!(
            target: LOG_TARGET,
            "{:?} tag <{}> at byte {}",
            tag.kind,
            tag.name_lossy(),
            tag.offset
        );

        match tag.kind {
            TagKind::Declaration => {
                self.check_attributes(document, tag)?;
                self.summary.declarations += 1;
            }
            TagKind::Closing => {
                if !self.stack.pop_if_matches(tag.name) {
                    return Err(ValidationError::MismatchedClosingTag {
                        tag: tag.name_lossy().into_owned(),
                        location: Location::at(document, tag.offset),
                    });
                }
                self.summary.tag_pairs += 1;
            }
            TagKind::SelfClosing => {
                self.check_attributes(document, tag)?;
                self.summary.empty_tags += 1;
                self.count_tag(tag);
            }
            TagKind::Opening => {
                self.check_attributes(document, tag)?;
                if let Some(limit) = self.options.max_depth {
                    if self.stack.depth() >= limit {
                        return Err(ValidationError::DepthLimitExceeded {
                            tag: tag.name_lossy().into_owned(),
                            limit,
                            location: Location::at(document, tag.offset),
                        });
                    }
                }
                self.stack.push(tag.name);
                self.summary.max_depth = self.summary.max_depth.max(self.stack.depth());
                self.count_tag(tag);
            }
        }
        Ok(())
    }

    fn check_attributes(&mut self, document: &[u8], tag: &Tag) -> Result<(), ValidationError> {
        if let Err(fault) = check_attributes(&tag.attributes) {
            let name = tag.name_lossy().into_owned();
            let location = Location::at(document, tag.offset);
            return Err(match fault {
                AttributeFault::Malformed(token) => ValidationError::MalformedAttribute {
                    tag: name,
                    attribute: String::from_utf8_lossy(token).into_owned(),
                    location,
                },
                AttributeFault::Encoding(token) => ValidationError::InvalidEncoding {
                    tag: name,
                    attribute: String::from_utf8_lossy(token).into_owned(),
                    location,
                },
                AttributeFault::Duplicate => ValidationError::DuplicateAttribute {
                    tag: name,
                    location,
                },
            });
        }
        self.summary.attributes += tag.attributes.len();
        Ok(())
    }

    fn count_tag(&mut self, tag: &Tag) {
        *self
            .summary
            .tag_counts
            .entry(tag.name_lossy().into_owned())
            .or_insert(0) += 1;
    }

    fn check_finish(&self, document: &[u8]) -> Result<(), ValidationError> {
        if self.options.allow_unclosed_tags {
            return Ok(());
        }
        match self.stack.top() {
            Some(name) => Err(ValidationError::UnclosedTag {
                tag: String::from_utf8_lossy(name).into_owned(),
                location: Location::at(document, document.len()),
            }),
            None => Ok(()),
        }
    }
}

/// Validates a document with the default [Options].
///
/// # Examples
///
/// ```
/// use tagcheck::{ErrorKind, validate};
///
/// assert!(validate("<?xml version=\"1.0\"?><a><b></b></a>").is_ok());
///
/// let err = validate("<a x=1></a>").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedAttribute);
/// assert_eq!(err.to_string(), "Malformed XML: Invalid attribute 'x=1' in tag <a>.");
/// ```
pub fn validate(document: impl AsRef<[u8]>) -> Result<(), ValidationError> {
    Validator::default().validate(document).map(|_| ())
}
