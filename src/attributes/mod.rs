/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

macro_rules! key_start {
    () => {
        b'a'..=b'z' | b'A'..=b'Z' | b'_' | b':'
    };
}

macro_rules! key_char {
    () => {
        key_start!() | b'0'..=b'9' | b'-' | b'.'
    };
}

/// Problem found in the attribute tokens of a single tag.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum AttributeFault<'a> {
    Malformed(&'a [u8]),
    Encoding(&'a [u8]),
    Duplicate,
}

/// Checks the attribute tokens of one tag.
///
/// Each token is checked for syntax and then encoding before moving to
/// the next one. Duplicates are only looked for once every token passed.
pub(crate) fn check_attributes<'a>(tokens: &[&'a [u8]]) -> Result<(), AttributeFault<'a>> {
    for &token in tokens {
        if !is_valid_attribute(token) {
            return Err(AttributeFault::Malformed(token));
        }
        if !is_valid_encoding(token) {
            return Err(AttributeFault::Encoding(token));
        }
    }
    if has_duplicates(tokens) {
        return Err(AttributeFault::Duplicate);
    }
    Ok(())
}

fn is_valid_key(key: &[u8]) -> bool {
    match key.split_first() {
        Some((key_start!(), rest)) => rest.iter().all(|&c| matches!(c, key_char!())),
        _ => false,
    }
}

fn is_valid_value(value: &[u8]) -> bool {
    match value {
        [b'"', inner @ .., b'"'] => !inner.contains(&b'"'),
        _ => false,
    }
}

/// Matches `key="value"`.
pub(crate) fn is_valid_attribute(token: &[u8]) -> bool {
    // Keys cannot contain '=' so the first one separates the value.
    match token.iter().position(|&c| c == b'=') {
        Some(pos) => is_valid_key(&token[..pos]) && is_valid_value(&token[pos + 1..]),
        None => false,
    }
}

/// Well-formed UTF-8: ASCII bytes and the standard 2, 3 and 4 byte
/// sequences, without overlong forms, surrogates or values past U+10FFFF.
pub(crate) fn is_valid_encoding(token: &[u8]) -> bool {
    std::str::from_utf8(token).is_ok()
}

/// Whole token comparison, `x="1"` and `x="2"` are different attributes.
pub(crate) fn has_duplicates(tokens: &[&[u8]]) -> bool {
    let mut sorted = tokens.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).any(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests;
