use thiserror::Error;

/// Failure of a single parse attempt.
///
/// Carries only what was expected and what was found instead. There is no
/// position: callers that need one should keep the input around themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {actual}")]
pub struct ParseError {
    pub expected: String,
    pub actual: String,
}

impl ParseError {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// A value produced by a step together with the unconsumed input.
///
/// `rest` is always a suffix of the input the step was given.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialParse<'a, T> {
    pub rest: &'a str,
    pub value: T,
}

pub type StepResult<'a, T> = Result<PartialParse<'a, T>, ParseError>;

/// Bound shared by every value a parser can produce.
///
/// Values are cloned out of constant parsers on each run, and parsers are
/// shared across threads, hence `Clone + Send + Sync`.
pub trait ParseValue: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> ParseValue for T {}
