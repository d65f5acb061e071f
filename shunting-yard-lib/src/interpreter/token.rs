use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// The shape of a parenthesis pair. A closing parenthesis only matches
/// an opening one of the same kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bracket {
    Round,
    Square,
    Curly,
}

impl Bracket {
    pub fn opening(&self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    pub fn closing(&self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }
}

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A run of decimal digits, kept as text until it is evaluated.
    Number(String),
    Operator(BinaryOperator),
    /// Negation. Never produced by the lexer, only by the infix converter.
    UnaryMinus,
    LeftParenthesis(Bracket),
    RightParenthesis(Bracket),
}

impl Token {
    /// Maps a single non-digit character to its token, if it has one.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        let token = match symbol {
            '(' => Token::LeftParenthesis(Bracket::Round),
            '[' => Token::LeftParenthesis(Bracket::Square),
            '{' => Token::LeftParenthesis(Bracket::Curly),
            ')' => Token::RightParenthesis(Bracket::Round),
            ']' => Token::RightParenthesis(Bracket::Square),
            '}' => Token::RightParenthesis(Bracket::Curly),
            symbol => Token::Operator(BinaryOperator::from_symbol(symbol)?),
        };
        Some(token)
    }

    /// Both binary operators and the negation marker count as operators.
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_) | Token::UnaryMinus)
    }

    pub fn is_left_parenthesis(&self) -> bool {
        matches!(self, Token::LeftParenthesis(_))
    }

    pub fn is_minus(&self) -> bool {
        matches!(self, Token::Operator(BinaryOperator::Subtract))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(digits) => write!(f, "{}", digits),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::UnaryMinus => write!(f, "{}", UnaryOperator::Negate),
            Token::LeftParenthesis(bracket) => write!(f, "{}", bracket.opening()),
            Token::RightParenthesis(bracket) => write!(f, "{}", bracket.closing()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let invalid = || ExpressionError::InvalidToken {
            token: input.to_string(),
            position: 0,
        };

        if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Token::Number(input.to_string()));
        }

        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (Some(symbol), None) => Token::from_symbol(symbol).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}
