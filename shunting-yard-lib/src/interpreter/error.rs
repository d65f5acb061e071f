use thiserror::Error;

/// Why an expression could not be calculated.
///
/// Returned as the root cause of the `anyhow::Error`s of this crate,
/// so callers can inspect it with `downcast_ref::<ExpressionError>()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// A character (or token) that is not a digit, operator or parenthesis.
    #[error("invalid token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },
    /// A closing parenthesis without an opening one of the same kind,
    /// or an opening parenthesis that is never closed.
    #[error("unmatched parenthesis '{bracket}'")]
    UnmatchedParenthesis { bracket: char },
    /// The operators and operands do not add up to a single value.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
}
