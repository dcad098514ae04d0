//! Character-level parsers
//!
//! Literal matchers (`str`, `symbol`) swallow whitespace to their right, so
//! a grammar built from them never has to skip whitespace between tokens.

use super::combinators::{Parser, any, satisfy};
use super::library::{ignore, many, sequence};
use super::state::ParseError;

/// Exactly the character `expected`.
pub fn character(expected: char) -> Parser<char> {
    satisfy(
        any(),
        move |ch| *ch == expected,
        move |ch| ParseError::new(expected.to_string(), ch.to_string()),
    )
}

/// One whitespace character
pub fn whitespace1() -> Parser<char> {
    satisfy(any(), |ch| ch.is_whitespace(), |ch| {
        ParseError::new("whitespace", ch.to_string())
    })
}

/// Zero or more whitespace characters
pub fn whitespace() -> Parser<Vec<char>> {
    many(whitespace1())
}

pub fn skip_whitespace() -> Parser<()> {
    ignore(whitespace())
}

/// One ASCII digit
pub fn digit() -> Parser<char> {
    satisfy(any(), |ch| ch.is_ascii_digit(), |ch| {
        ParseError::new("digit", ch.to_string())
    })
}

/// The literal `s`, followed by any amount of whitespace.
pub fn str(s: &str) -> Parser<String> {
    sequence(s.chars().map(character).collect())
        .map(|chars| chars.into_iter().collect::<String>())
        .keep_left(skip_whitespace())
}

pub fn symbol(s: &str) -> Parser<String> {
    str(s).keep_left(whitespace())
}
