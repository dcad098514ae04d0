use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::sync::Arc;

use tracing::trace;

use crate::option::OptionExt;
use crate::result::ResultExt;

use super::state::{ParseError, ParseValue, PartialParse, StepResult};

type StepFn<T> = Arc<dyn for<'a> Fn(&'a str) -> StepResult<'a, T> + Send + Sync>;

#[derive(Clone)]
enum Variant<T> {
    /// Succeeds with the value without consuming anything.
    Always(T),
    /// Fails with the error without looking at the input.
    Fail(ParseError),
    Step(StepFn<T>),
}

// === Parser ===

/// A reusable description of how to consume a prefix of a string.
///
/// Parsers are immutable and cheap to clone; every combinator returns a new
/// parser. Constant and rejecting parsers are kept as their own variants so
/// that `or` and `then` can short-circuit on them:
///
/// - `constant(x).or(p)` is `constant(x)`: an always-succeeding parser placed
///   first in an alternation masks everything after it.
/// - `reject(e).or(p)` is `p`, and `reject(e)` passes through every other
///   combinator without calling the supplied closures.
/// - `constant(x).then(f)` is `f(x)`, evaluated immediately. Use [`noop`]
///   instead of `constant(())` when construction has to be deferred.
#[derive(Clone)]
pub struct Parser<T> {
    variant: Variant<T>,
}

impl<T: ParseValue> Parser<T> {
    /// Wrap an explicit step function.
    pub fn new<F>(step: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> StepResult<'a, T> + Send + Sync + 'static,
    {
        Parser {
            variant: Variant::Step(Arc::new(step)),
        }
    }

    /// Attempt to consume a prefix of `input`.
    pub fn run_step<'a>(&self, input: &'a str) -> StepResult<'a, T> {
        match &self.variant {
            Variant::Always(value) => Ok(PartialParse {
                rest: input,
                value: value.clone(),
            }),
            Variant::Fail(error) => Err(error.clone()),
            Variant::Step(step) => step(input),
        }
    }

    /// Whether both parsers share the same step function.
    ///
    /// Only step parsers have an identity; constant and rejecting parsers
    /// are never `ptr_eq`, not even to themselves.
    pub fn ptr_eq(&self, other: &Parser<T>) -> bool {
        match (&self.variant, &other.variant) {
            (Variant::Step(a), Variant::Step(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Bind: run self, build the next parser from its value and run that on
    /// the remaining input.
    pub fn then<U, F>(self, f: F) -> Parser<U>
    where
        U: ParseValue,
        F: Fn(T) -> Parser<U> + Send + Sync + 'static,
    {
        match self.variant {
            Variant::Always(value) => f(value),
            Variant::Fail(error) => reject(error),
            Variant::Step(step) => Parser::new(move |input| {
                step(input).then(|PartialParse { rest, value }| f(value).run_step(rest))
            }),
        }
    }

    /// Choice: try self, and if it fails try `other` from the same input.
    ///
    /// The error of the first attempt is dropped.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        match self.variant {
            Variant::Always(value) => constant(value),
            Variant::Fail(_) => other,
            Variant::Step(step) => Parser::new(move |input| {
                step(input).catch(|error| {
                    trace!(%error, "alternative failed, backtracking");
                    other.run_step(input)
                })
            }),
        }
    }

    /// Map: transform the result
    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: ParseValue,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        match self.variant {
            Variant::Always(value) => constant(f(value)),
            Variant::Fail(error) => reject(error),
            Variant::Step(_) => self.then(move |value| constant(f(value))),
        }
    }

    /// Succeed with `value` wherever self succeeds.
    pub fn replace<U: ParseValue>(self, value: U) -> Parser<U> {
        match self.variant {
            Variant::Always(_) => constant(value),
            Variant::Fail(error) => reject(error),
            Variant::Step(_) => self.keep_right(constant(value)),
        }
    }

    /// Keep right: parse self then `next`, discard self's result
    pub fn keep_right<U: ParseValue>(self, next: Parser<U>) -> Parser<U> {
        match self.variant {
            Variant::Always(_) => next,
            Variant::Fail(error) => reject(error),
            Variant::Step(_) => self.then(move |_| next.clone()),
        }
    }

    /// Keep left: parse self then `next`, discard `next`'s result
    pub fn keep_left<U: ParseValue>(self, next: Parser<U>) -> Parser<T> {
        match self.variant {
            Variant::Always(value) => next.replace(value),
            Variant::Fail(error) => reject(error),
            Variant::Step(_) => self.then(move |value| next.clone().replace(value)),
        }
    }

    /// Sequence: parse self then `next`, return both values
    pub fn seq<U: ParseValue>(self, next: Parser<U>) -> Parser<(T, U)> {
        self.then(move |a| next.clone().map(move |b| (a.clone(), b)))
    }

    /// Replace the `expected` part of any failure with `name`.
    pub fn label(self, name: impl Into<String>) -> Parser<T> {
        let name = name.into();
        match self.variant {
            Variant::Always(value) => constant(value),
            Variant::Fail(error) => reject(ParseError {
                expected: name,
                ..error
            }),
            Variant::Step(step) => Parser::new(move |input| {
                step(input).map_err(|error| ParseError {
                    expected: name.clone(),
                    ..error
                })
            }),
        }
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: ParseValue, U: ParseValue> Add<Parser<U>> for Parser<T> {
    type Output = Parser<(T, U)>;

    fn add(self, rhs: Parser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: ParseValue, U: ParseValue> Sub<Parser<U>> for Parser<T> {
    type Output = Parser<T>;

    fn sub(self, rhs: Parser<U>) -> Self::Output {
        self.keep_left(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: ParseValue, U: ParseValue> Mul<Parser<U>> for Parser<T> {
    type Output = Parser<U>;

    fn mul(self, rhs: Parser<U>) -> Self::Output {
        self.keep_right(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: ParseValue> BitOr<Parser<T>> for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T, U, F> Shr<F> for Parser<T>
where
    T: ParseValue,
    U: ParseValue,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    type Output = Parser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Succeed with `value`, consuming nothing.
pub fn constant<T: ParseValue>(value: T) -> Parser<T> {
    Parser {
        variant: Variant::Always(value),
    }
}

/// Fail with `error`, consuming nothing.
pub fn reject<T: ParseValue>(error: ParseError) -> Parser<T> {
    Parser {
        variant: Variant::Fail(error),
    }
}

/// Consume exactly one character.
pub fn any() -> Parser<char> {
    Parser::new(|input| {
        input.chars().next().fold(
            |ch| {
                Ok(PartialParse {
                    rest: &input[ch.len_utf8()..],
                    value: ch,
                })
            },
            || Err(ParseError::new("any character", "end of input")),
        )
    })
}

/// Succeed only when no input is left.
pub fn eof() -> Parser<()> {
    Parser::new(|input| match input.chars().next() {
        None => Ok(PartialParse {
            rest: input,
            value: (),
        }),
        Some(ch) => Err(ParseError::new("end of input", ch.to_string())),
    })
}

/// Like `constant(())`, but a real step, so `noop().then(f)` defers `f` until
/// the parser runs. Recursive grammars rely on this.
pub fn noop() -> Parser<()> {
    Parser::new(|input| {
        Ok(PartialParse {
            rest: input,
            value: (),
        })
    })
}

/// Run `base` and keep its value only if `predicate` holds.
///
/// Whatever `base` consumed stays consumed on failure; an enclosing `or`
/// restarts from its own input, which is what makes this backtrack.
pub fn satisfy<T, P, E>(base: Parser<T>, predicate: P, error: E) -> Parser<T>
where
    T: ParseValue,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    E: Fn(&T) -> ParseError + Send + Sync + 'static,
{
    base.then(move |value| {
        if predicate(&value) {
            constant(value)
        } else {
            reject(error(&value))
        }
    })
}
