/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use super::*;

#[test]
fn attribute_syntax() {
    for good in [
        "x=\"1\"",
        "version=\"1.0\"",
        "_id=\"\"",
        ":ns=\"a\"",
        "xml:lang=\"en\"",
        "data-value.x=\"a b c\"",
        "a9=\"<>&'\"",
        "A_Z-0.9:x=\"v\"",
    ] {
        assert!(is_valid_attribute(good.as_bytes()), "{}", good);
    }

    for bad in [
        "",
        "x",
        "x=",
        "x=1",
        "foo=bar",
        "x='1'",
        "x=\"1",
        "x=1\"",
        "x=\"",
        "x=\"a\"b\"",
        "=\"1\"",
        "1x=\"1\"",
        "-x=\"1\"",
        ".x=\"1\"",
        "x y=\"1\"",
        "x!=\"1\"",
        "x==\"1\"",
        "x=\"1\" ",
        "\u{e9}=\"1\"",
    ] {
        assert!(!is_valid_attribute(bad.as_bytes()), "{}", bad);
    }
}

#[test]
fn attribute_value_bytes() {
    // The value grammar only excludes the quote byte.
    assert!(is_valid_attribute(b"x=\"\xff\xfe\""));
    assert!(is_valid_attribute("x=\"\u{e7}a va\"".as_bytes()));
}

#[test]
fn encoding() {
    assert!(is_valid_encoding(b""));
    assert!(is_valid_encoding(b"x=\"\x00\x7f\""));
    assert!(is_valid_encoding("x=\"\u{e9}\u{20ac}\u{1f600}\"".as_bytes()));
    assert!(is_valid_encoding(b"\xc2\x80\xdf\xbf"));
    assert!(is_valid_encoding(b"\xe0\xa0\x80\xed\x9f\xbf\xee\x80\x80"));
    assert!(is_valid_encoding(b"\xf0\x90\x80\x80\xf4\x8f\xbf\xbf"));

    // Invalid continuation byte
    assert!(!is_valid_encoding(b"x=\"\xc3\x28\""));
    // Truncated sequence
    assert!(!is_valid_encoding(b"x=\"\xe2\x82\""));
    // Bare continuation bytes
    assert!(!is_valid_encoding(b"x=\"\x80\""));
    assert!(!is_valid_encoding(b"x=\"\x80\x80\""));
    // Overlong forms
    assert!(!is_valid_encoding(b"\xc0\xaf"));
    assert!(!is_valid_encoding(b"\xc1\xbf"));
    assert!(!is_valid_encoding(b"\xe0\x80\xaf"));
    assert!(!is_valid_encoding(b"\xf0\x80\x80\xaf"));
    // Surrogates
    assert!(!is_valid_encoding(b"\xed\xa0\x80"));
    // Past U+10FFFF
    assert!(!is_valid_encoding(b"\xf4\x90\x80\x80"));
    assert!(!is_valid_encoding(b"\xf5\x80\x80\x80"));
    assert!(!is_valid_encoding(b"\xff"));
}

#[test]
fn duplicates() {
    assert!(!has_duplicates(&[]));
    assert!(!has_duplicates(&[b"x=\"1\""]));
    assert!(has_duplicates(&[b"x=\"1\"", b"x=\"1\""]));
    assert!(has_duplicates(&[b"b=\"2\"", b"a=\"1\"", b"b=\"2\""]));
    assert!(!has_duplicates(&[b"x=\"1\"", b"x=\"2\""]));
    assert!(!has_duplicates(&[b"x=\"1\"", b"X=\"1\""]));
}

#[test]
fn check_order() {
    assert_eq!(check_attributes(&[]), Ok(()));
    assert_eq!(check_attributes(&[b"a=\"1\"", b"b=\"2\""]), Ok(()));

    // First bad token in list order wins.
    assert_eq!(
        check_attributes(&[b"a=\"1\"", b"b", b"c=\"\xff\""]),
        Err(AttributeFault::Malformed(b"b"))
    );
    assert_eq!(
        check_attributes(&[b"a=\"1\"", b"c=\"\xff\"", b"b"]),
        Err(AttributeFault::Encoding(b"c=\"\xff\""))
    );

    // Duplicates are only reported when every token is fine.
    assert_eq!(
        check_attributes(&[b"a=\"1\"", b"a=\"1\"", b"b"]),
        Err(AttributeFault::Malformed(b"b"))
    );
    assert_eq!(
        check_attributes(&[b"a=\"1\"", b"a=\"1\""]),
        Err(AttributeFault::Duplicate)
    );
    assert_eq!(check_attributes(&[b"a=\"1\"", b"a=\"2\""]), Ok(()));
}
