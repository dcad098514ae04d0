//! # Parsley - Composable Parser Combinators
//!
//! Parsley builds recursive-descent parsers out of small pieces. A parser is
//! a value describing how to consume a prefix of a string; combinators glue
//! parsers together into bigger ones, and [`parse`] runs the result against a
//! whole input.
//!
//! ## Architecture Overview
//!
//! 1. **Result / Option** (`result`, `option`) - monadic extension traits over
//!    the standard two-arm types. Every parse step returns a `Result`.
//! 2. **Engine** (`parser`) - the [`Parser`] type with its `then` / `or` /
//!    `map` algebra and the primitives `any`, `eof`, `constant`, `reject`.
//! 3. **Combinators** (`parser`) - `many`, `sep_by`, `between`, `choice`,
//!    `sequence` and the character-level helpers.
//! 4. **JSON** (`json`) - a complete grammar assembled from the above.
//!
//! ## Pipeline Flow
//!
//! ```text
//! &str
//!     ↓
//! [run_step] → Result<PartialParse { rest, value }, ParseError>
//!     ↓
//! [then / or chaining] → larger parsers
//!     ↓
//! [parse: keep_left(eof)] → Result<T, ParseError>
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Backtracking without commitment
//! `a.or(b)` retries `b` from the input `a` started on, whatever `a` consumed.
//! The error of `a` is dropped. There is no cut operator, so deeply nested
//! alternatives may re-scan the same input many times.
//!
//! ### Constant parsers are their own variant
//! `constant(x).or(p)` never runs `p`, and `reject(e)` never calls the
//! closures handed to it. These short-circuits are part of the contract.
//!
//! ### Recursive grammars
//! A grammar that refers to itself (JSON arrays contain values) builds itself
//! lazily: the recursive reference sits behind `noop().then(..)` and the
//! finished parser is memoized in a `OnceCell`.
//!
//! ## Example
//!
//! ```text
//! let list = brackets(sep_by(digit(), symbol(",")));
//! assert_eq!(parse(&list, "[1, 2, 3]"), Ok(vec!['1', '2', '3']));
//! ```

pub mod json;
pub mod option;
pub mod parser;
pub mod result;

pub use parser::{ParseError, Parser, parse};
