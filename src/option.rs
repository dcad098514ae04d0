//! Monadic helpers over [`std::option::Option`]
//!
//! The same algebra as [`crate::result::ResultExt`], with a failure arm that
//! carries nothing.

use std::fmt::Display;

/// Extension operations for `Option`.
pub trait OptionExt<A>: Sized {
    /// Collapse both arms into a single value.
    fn fold<T>(self, some: impl FnOnce(A) -> T, none: impl FnOnce() -> T) -> T;

    /// Return the payload or `default`.
    fn or_default(self, default: A) -> A;

    /// Return the payload or panic with the message built by `f`.
    fn or_throw<X: Display>(self, f: impl FnOnce() -> X) -> A;

    fn then<B>(self, f: impl FnOnce(A) -> Option<B>) -> Option<B>;

    fn catch(self, f: impl FnOnce() -> Option<A>) -> Option<A>;

    /// Substitute the payload; `None` stays `None`.
    fn replace_some<B>(self, value: B) -> Option<B>;
}

impl<A> OptionExt<A> for Option<A> {
    fn fold<T>(self, some: impl FnOnce(A) -> T, none: impl FnOnce() -> T) -> T {
        match self {
            Some(value) => some(value),
            None => none(),
        }
    }

    fn or_default(self, default: A) -> A {
        self.unwrap_or(default)
    }

    fn or_throw<X: Display>(self, f: impl FnOnce() -> X) -> A {
        match self {
            Some(value) => value,
            None => panic!("{}", f()),
        }
    }

    fn then<B>(self, f: impl FnOnce(A) -> Option<B>) -> Option<B> {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }

    fn catch(self, f: impl FnOnce() -> Option<A>) -> Option<A> {
        match self {
            Some(value) => Some(value),
            None => f(),
        }
    }

    fn replace_some<B>(self, value: B) -> Option<B> {
        self.map(|_| value)
    }
}
