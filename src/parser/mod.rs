//! Parser engine and combinator library
//!
//! - `state`: error and step result types
//! - `combinators`: the [`Parser`] type, its algebra and the atomic primitives
//! - `text`: character and token helpers
//! - `library`: repetition, choice and bracketing combinators

mod combinators;
mod library;
mod state;
mod text;

pub use combinators::*;
pub use library::*;
pub use state::*;
pub use text::*;

use tracing::debug;

/// Run `parser` against the whole of `input`.
///
/// Trailing unparsed input is an error. On failure only the mismatch at the
/// end of the path the search settled on is reported.
pub fn parse<T: ParseValue>(parser: &Parser<T>, input: &str) -> Result<T, ParseError> {
    let result = parser
        .clone()
        .keep_left(eof())
        .run_step(input)
        .map(|PartialParse { value, .. }| value);
    match &result {
        Ok(_) => debug!(len = input.len(), "parse succeeded"),
        Err(error) => debug!(len = input.len(), %error, "parse failed"),
    }
    result
}
