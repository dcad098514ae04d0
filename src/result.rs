//! Monadic helpers over [`std::result::Result`]
//!
//! Every parse step produces a `Result`, so the engine leans on these to
//! chain steps (`then`) and to recover from failed alternatives (`catch`).
//! `map` and `map_err` are the inherent `Result` methods and are not repeated
//! here.

use std::fmt::Display;

/// Extension operations for the two-arm `Result`.
pub trait ResultExt<A, E>: Sized {
    /// Collapse both arms into a single value.
    fn fold<T>(self, ok: impl FnOnce(A) -> T, err: impl FnOnce(E) -> T) -> T;

    /// Return the success payload or `default`, discarding any error.
    fn or_default(self, default: A) -> A;

    /// Return the success payload or panic with the message built by `f`.
    ///
    /// This is the one operation that leaves the `Result` world. Keep it at
    /// the edges (drivers, tests), never inside a parser.
    fn or_throw<X: Display>(self, f: impl FnOnce(E) -> X) -> A;

    /// Chain on success, short-circuit on failure.
    fn then<B>(self, f: impl FnOnce(A) -> Result<B, E>) -> Result<B, E>;

    /// Chain on failure. Recovery may change the error type.
    fn catch<F>(self, f: impl FnOnce(E) -> Result<A, F>) -> Result<A, F>;

    /// Substitute the success payload; failures pass through.
    fn replace_ok<B>(self, value: B) -> Result<B, E>;
}

impl<A, E> ResultExt<A, E> for Result<A, E> {
    fn fold<T>(self, ok: impl FnOnce(A) -> T, err: impl FnOnce(E) -> T) -> T {
        match self {
            Ok(value) => ok(value),
            Err(error) => err(error),
        }
    }

    fn or_default(self, default: A) -> A {
        match self {
            Ok(value) => value,
            Err(_) => default,
        }
    }

    fn or_throw<X: Display>(self, f: impl FnOnce(E) -> X) -> A {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{}", f(error)),
        }
    }

    fn then<B>(self, f: impl FnOnce(A) -> Result<B, E>) -> Result<B, E> {
        match self {
            Ok(value) => f(value),
            Err(error) => Err(error),
        }
    }

    fn catch<F>(self, f: impl FnOnce(E) -> Result<A, F>) -> Result<A, F> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => f(error),
        }
    }

    fn replace_ok<B>(self, value: B) -> Result<B, E> {
        self.map(|_| value)
    }
}
