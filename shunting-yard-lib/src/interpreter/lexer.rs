use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use anyhow::{bail, Result};
use itertools::Itertools;

/// Splits an infix expression into tokens.
///
/// Whitespace is removed before scanning, which means digits separated only by
/// whitespace form a single number (`"1 2"` is `12`). Every `-` comes out as a
/// binary subtraction; telling negation apart is left to the infix converter.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use shunting_yard::interpreter::lexer::tokenize;
/// use shunting_yard::interpreter::token::Token;
///
/// let tokens = tokenize("12 + 3")?;
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0], Token::Number("12".to_string()));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut characters = expression
        .chars()
        .enumerate()
        .filter(|(_, character)| !character.is_whitespace())
        .peekable();
    let mut tokens = vec![];

    while let Some((position, character)) = characters.next() {
        if character.is_ascii_digit() {
            let mut digits = character.to_string();
            digits.extend(
                characters
                    .peeking_take_while(|(_, next)| next.is_ascii_digit())
                    .map(|(_, digit)| digit),
            );
            tokens.push(Token::Number(digits));
            continue;
        }

        match Token::from_symbol(character) {
            Some(token) => tokens.push(token),
            None => bail!(ExpressionError::InvalidToken {
                token: character.to_string(),
                position,
            }),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::Bracket;
    use pretty_assertions::assert_eq;

    fn number(digits: &str) -> Token {
        Token::Number(digits.to_string())
    }

    #[test]
    fn simple_expression_returns_tokens() {
        let expected = vec![number("2"), "+".parse().unwrap(), number("1")];

        let actual = tokenize("2  +  1").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn adjacent_digits_are_merged_into_one_number() {
        let expected = vec![number("42"), "*".parse().unwrap(), number("1000")];

        let actual = tokenize("42*1000").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn digits_separated_by_whitespace_are_merged() {
        let actual = tokenize("1 2\t3").unwrap();

        assert_eq!(actual, vec![number("123")])
    }

    #[test]
    fn every_bracket_kind_is_recognised() {
        let expected = vec![
            Token::LeftParenthesis(Bracket::Curly),
            Token::LeftParenthesis(Bracket::Square),
            Token::LeftParenthesis(Bracket::Round),
            number("1"),
            Token::RightParenthesis(Bracket::Round),
            Token::RightParenthesis(Bracket::Square),
            Token::RightParenthesis(Bracket::Curly),
        ];

        let actual = tokenize("{[(1)]}").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_is_always_lexed_as_subtraction() {
        let actual = tokenize("-4").unwrap();

        assert_eq!(actual, vec!["-".parse().unwrap(), number("4")])
    }

    #[test]
    fn empty_expression_returns_no_tokens() {
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn invalid_character_returns_err_with_position() {
        let error = tokenize("2 $ 3").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ExpressionError>(),
            Some(&ExpressionError::InvalidToken {
                token: "$".to_string(),
                position: 2,
            })
        );
    }

    #[test]
    fn decimal_point_is_invalid() {
        tokenize("1.5").expect_err("Should return Err");
    }
}
