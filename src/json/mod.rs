//! JSON grammar
//!
//! Built only from the public combinators in [`crate::parser`]. Every token
//! skips the whitespace that follows it; [`document`] additionally skips
//! leading whitespace.
//!
//! Supported syntax: numbers (optional `-`, no leading zeros, optional
//! fraction, no exponent), strings with the `\n`, `\t`, `\"` and `\\`
//! escapes, `true`/`false`, arrays and objects.

mod value;

pub use value::JsonValue;

use std::collections::BTreeMap;
use std::iter;

use once_cell::sync::OnceCell;

use crate::parser::{
    ParseError, Parser, any, braces, brackets, character, choice, constant, digit, many, many1,
    noop, optional, reject, satisfy, sep_by, sequence, skip_whitespace, symbol,
};

/// number := "-"? ("0" | [1-9] [0-9]*) ("." [0-9]+)?
pub fn number() -> Parser<f64> {
    let sign = optional(character('-').map(String::from), String::new());
    let non_zero = satisfy(
        digit(),
        |d| *d != '0',
        |d| ParseError::new("non-zero digit", d.to_string()),
    );
    let positive = non_zero.then(|first| {
        many(digit()).map(move |rest| iter::once(first).chain(rest).collect::<String>())
    });
    let integer = character('0').map(String::from).or(positive);
    let fraction = character('.')
        .keep_right(many1(digit()))
        .map(|digits| format!(".{}", digits.into_iter().collect::<String>()));

    sequence(vec![sign, integer, optional(fraction, String::new())])
        .then(|parts| {
            let text = parts.concat();
            match text.parse::<f64>() {
                Ok(n) => constant(n),
                Err(_) => reject(ParseError::new("number", text)),
            }
        })
        .keep_left(skip_whitespace())
}

/// boolean := "true" | "false"
pub fn boolean() -> Parser<bool> {
    choice(
        "boolean",
        vec![
            symbol("true").replace(true),
            symbol("false").replace(false),
        ],
    )
}

fn escape(code: char, replacement: char) -> Parser<char> {
    character('\\')
        .keep_right(character(code))
        .replace(replacement)
}

fn string_character() -> Parser<char> {
    choice(
        "JSON string character",
        vec![
            escape('n', '\n'),
            escape('t', '\t'),
            escape('"', '"'),
            escape('\\', '\\'),
            satisfy(
                any(),
                |ch| *ch != '"',
                |ch| ParseError::new("not a quote", ch.to_string()),
            ),
        ],
    )
}

/// string := '"' string_character* '"'
///
/// Whitespace inside the quotes is content, so the quotes are matched with
/// `character` rather than `symbol`.
pub fn string() -> Parser<String> {
    character('"')
        .keep_right(many(string_character()))
        .keep_left(character('"'))
        .map(|chars| chars.into_iter().collect::<String>())
        .keep_left(skip_whitespace())
}

/// entry := string ":" value
fn entry() -> Parser<(String, JsonValue)> {
    string()
        .keep_left(symbol(":"))
        .then(|key| value().map(move |v| (key.clone(), v)))
}

/// object := "{" (entry ("," entry)*)? "}"
///
/// A repeated key keeps its last value.
pub fn object() -> Parser<BTreeMap<String, JsonValue>> {
    braces(sep_by(entry(), symbol(","))).map(|entries| entries.into_iter().collect())
}

/// array := "[" (value ("," value)*)? "]"
pub fn array() -> Parser<Vec<JsonValue>> {
    // `value` is only looked up once the parser runs, which breaks the cycle
    // between `value` and `array`.
    noop().then(|_| brackets(sep_by(value(), symbol(","))))
}

/// value := number | boolean | string | object | array
///
/// Built on first use and shared afterwards.
pub fn value() -> Parser<JsonValue> {
    static VALUE: OnceCell<Parser<JsonValue>> = OnceCell::new();

    VALUE
        .get_or_init(|| {
            choice(
                "JSON value",
                vec![
                    number().map(JsonValue::Number),
                    boolean().map(JsonValue::Boolean),
                    string().map(JsonValue::String),
                    object().map(JsonValue::Object),
                    array().map(JsonValue::Array),
                ],
            )
        })
        .clone()
}

/// A complete JSON text: optional leading whitespace, then a value.
pub fn document() -> Parser<JsonValue> {
    skip_whitespace().keep_right(value())
}
