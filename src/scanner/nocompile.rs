/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

/// # Must not compile tests
///
/// Scanned tag cannot outlive the document bytes:
/// ```compile_fail
/// use tagcheck::Scanner;
/// use tagcheck::Tag;
/// let tag: Tag;
/// {
///     let bytes = b"<root/>".to_vec();
///     let mut scanner = Scanner::new(&bytes);
///     tag = scanner.next().unwrap().unwrap();
/// }
/// println!("{:?}", tag);
/// ```
///
/// Attribute slices cannot outlive the document bytes either:
/// ```compile_fail
/// use tagcheck::Scanner;
/// let attribute: &[u8];
/// {
///     let bytes = b"<root a=\"1\"/>".to_vec();
///     let tag = Scanner::new(&bytes).next().unwrap().unwrap();
///     attribute = tag.attributes[0];
/// }
/// println!("{:?}", attribute);
/// ```
///
#[cfg(doctest)]
struct MustNotCompileTests;
