//! Structural combinators built purely from the public [`Parser`] algebra

use super::combinators::{Parser, constant, reject};
use super::state::{ParseError, ParseValue, PartialParse};
use super::text::symbol;

/// Ordered choice over `parsers`.
///
/// When every alternative fails the error is `{description, "no match"}`;
/// which alternative came closest is not reported.
pub fn choice<T: ParseValue>(description: &str, parsers: Vec<Parser<T>>) -> Parser<T> {
    parsers
        .into_iter()
        .rev()
        .fold(reject(ParseError::new(description, "no match")), |acc, p| {
            p.or(acc)
        })
}

/// Run `parsers` in order, collecting their values.
///
/// The first failure fails the whole sequence.
pub fn sequence<T: ParseValue>(parsers: Vec<Parser<T>>) -> Parser<Vec<T>> {
    parsers
        .into_iter()
        .rev()
        .fold(constant(Vec::new()), |acc, p| {
            p.then(move |head| acc.clone().map(move |tail| prepend(head.clone(), tail)))
        })
}

/// Discard the value of `parser`.
pub fn ignore<T: ParseValue>(parser: Parser<T>) -> Parser<()> {
    parser.replace(())
}

/// Optional: `parser`, or `default` without consuming anything
pub fn optional<T: ParseValue>(parser: Parser<T>, default: T) -> Parser<T> {
    parser.or(constant(default))
}

/// Parse zero or more occurrences
///
/// Never fails. Loops forever if `parser` can succeed without consuming.
pub fn many<T: ParseValue>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input| {
        let (rest, values) = repeat(&parser, input, Vec::new());
        Ok(PartialParse {
            rest,
            value: values,
        })
    })
}

/// Parse one or more occurrences
///
/// Fails with the error of the first attempt.
pub fn many1<T: ParseValue>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input| {
        let PartialParse { rest, value } = parser.run_step(input)?;
        let (rest, values) = repeat(&parser, rest, vec![value]);
        Ok(PartialParse {
            rest,
            value: values,
        })
    })
}

/// Run `parser` until it fails, restarting each attempt where the last
/// success left off. The failed attempt consumes nothing.
fn repeat<'a, T: ParseValue>(
    parser: &Parser<T>,
    input: &'a str,
    mut values: Vec<T>,
) -> (&'a str, Vec<T>) {
    let mut rest = input;
    loop {
        match parser.run_step(rest) {
            Ok(step) => {
                values.push(step.value);
                rest = step.rest;
            }
            Err(_) => break,
        }
    }
    (rest, values)
}

/// One or more `parser`s separated by `separator`; separators are dropped.
pub fn sep_by1<T, S>(parser: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>>
where
    T: ParseValue,
    S: ParseValue,
{
    let tail = separator.keep_right(parser.clone());
    parser.then(move |head| many(tail.clone()).map(move |rest| prepend(head.clone(), rest)))
}

/// Zero or more `parser`s separated by `separator`.
pub fn sep_by<T, S>(parser: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>>
where
    T: ParseValue,
    S: ParseValue,
{
    optional(sep_by1(parser, separator), Vec::new())
}

pub fn between<T, O, C>(open: Parser<O>, close: Parser<C>, parser: Parser<T>) -> Parser<T>
where
    T: ParseValue,
    O: ParseValue,
    C: ParseValue,
{
    open.keep_right(parser).keep_left(close)
}

/// `[ parser ]`
pub fn brackets<T: ParseValue>(parser: Parser<T>) -> Parser<T> {
    between(symbol("["), symbol("]"), parser)
}

/// `{ parser }`
pub fn braces<T: ParseValue>(parser: Parser<T>) -> Parser<T> {
    between(symbol("{"), symbol("}"), parser)
}

/// `" parser "`. Whitespace after either quote is skipped, so this is for
/// quote-delimited tokens, not for string literals whose content matters.
pub fn quotes<T: ParseValue>(parser: Parser<T>) -> Parser<T> {
    between(symbol("\""), symbol("\""), parser)
}

fn prepend<T>(head: T, tail: Vec<T>) -> Vec<T> {
    let mut values = Vec::with_capacity(tail.len() + 1);
    values.push(head);
    values.extend(tail);
    values
}
