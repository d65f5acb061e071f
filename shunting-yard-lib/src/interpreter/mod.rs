pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::debug;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::parser::{infix_to_postfix, ConverterConfig};
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Calculates the value of the given infix expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, made of integers,
///   `+ - * / ^` and `()`, `[]` or `{}` pairs.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use shunting_yard::interpreter::calculate;
///
/// let value = calculate("1+(2*3-1)-2")?;
/// assert_eq!(value, 4.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64> {
    calculate_with(expression, &ConverterConfig::default())
}

/// Calculates the value of the given infix expression, converting it with
/// the given configuration.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use shunting_yard::interpreter::calculate_with;
/// use shunting_yard::interpreter::operator::Associativity;
/// use shunting_yard::interpreter::parser::ConverterConfig;
///
/// let config = ConverterConfig {
///     exponent_associativity: Associativity::Right,
/// };
/// assert_eq!(calculate_with("2^3^2", &config)?, 512.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate_with(expression: &str, config: &ConverterConfig) -> Result<f64> {
    let postfix_tokens = convert(expression, config)?;
    let value = evaluate_postfix(&postfix_tokens)
        .with_context(|| format!("Failed to evaluate '{}'", expression))?;
    debug!(value);
    Ok(value)
}

/// Converts the given infix expression into postfix tokens.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
/// * `config`: How chained exponentiation should be grouped.
///
/// returns: The equivalent tokens in postfix order.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use shunting_yard::interpreter::{convert, tokens_to_string};
/// use shunting_yard::interpreter::parser::ConverterConfig;
///
/// let postfix_tokens = convert("-(1 + 2)", &ConverterConfig::default())?;
/// assert_eq!(tokens_to_string(&postfix_tokens)?, "1 2 + u");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str, config: &ConverterConfig) -> Result<Vec<Token>> {
    let infix_tokens = lexer::tokenize(expression)
        .with_context(|| format!("Failed to tokenize '{}'", expression))?;
    let postfix_tokens = infix_to_postfix(infix_tokens, config)
        .with_context(|| format!("Failed to convert '{}' to postfix", expression))?;
    debug!(&postfix_tokens);
    Ok(postfix_tokens)
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use shunting_yard::interpreter::tokens_to_string;
/// use shunting_yard::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number("4".to_string()),
///     Token::UnaryMinus,
///     Token::Number("2".to_string()),
///     "^".parse()?,
/// ];
/// let printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(printed_tokens, "4 u 2 ^");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    let printed_tokens = tokens.iter().map(ToString::to_string);
    // Have to use fully qualified syntax here until 'intersperse' is added into stdlib
    for text in itertools::Itertools::intersperse(printed_tokens, " ".to_string()) {
        builder.append(text);
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::ExpressionError;
    use crate::interpreter::operator::Associativity;
    use parameterized_macro::parameterized;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn error_of(expression: &str) -> ExpressionError {
        let error = calculate(expression).expect_err("Should return Err");
        error
            .downcast_ref::<ExpressionError>()
            .cloned()
            .expect("Should be an ExpressionError")
    }

    #[parameterized(
        expression = {
            "2  +  1",
            "1+(2*3-1)-2",
            "1*2-3/4+5*6-7*8+9/10",
            "-4*-2/-(1-3)^2",
        },
        expected_value = {
            3.0,
            4.0,
            -23.85,
            -2.0,
        }
    )]
    fn sample_expression_returns_correct_value(expression: &str, expected_value: f64) {
        let actual_value = calculate(expression).unwrap();
        assert_close(actual_value, expected_value);
    }

    #[parameterized(
        expression = {
            "-4",
            "--4",
            "(-2)",
            "2-(1)",
            "2*-3",
            "-2^2",
            "2^-1",
            "-(3)*2",
            "(1+[2*3])",
            "{[(1+2)*3]-4}/5",
            "10/4",
            "2^3^2",
            "123456789",
            "1 2 + 3",
        },
        expected_value = {
            -4.0,
            4.0,
            -2.0,
            1.0,
            -6.0,
            -4.0,
            0.5,
            -6.0,
            7.0,
            1.0,
            2.5,
            64.0,
            123456789.0,
            15.0,
        }
    )]
    fn expression_returns_correct_value(expression: &str, expected_value: f64) {
        let actual_value = calculate(expression).unwrap();
        assert_close(actual_value, expected_value);
    }

    #[test]
    fn right_associative_config_groups_exponentiation_from_the_right() {
        let config = ConverterConfig {
            exponent_associativity: Associativity::Right,
        };

        assert_close(calculate_with("2^3^2", &config).unwrap(), 512.0);
        assert_close(calculate_with("2^3*2", &config).unwrap(), 16.0);
    }

    #[test]
    fn sample_expression_converts_to_expected_postfix() {
        let postfix_tokens = convert("-4*-2/-(1-3)^2", &ConverterConfig::default()).unwrap();

        let printed_tokens = tokens_to_string(&postfix_tokens).unwrap();

        assert_eq!(printed_tokens, "4 u 2 u * 1 3 - 2 ^ u /")
    }

    #[test]
    fn same_expression_calculates_to_same_value_twice() {
        let expression = "1*2-3/4+5*6-7*8+9/10";
        assert_eq!(
            calculate(expression).unwrap(),
            calculate(expression).unwrap()
        );
    }

    #[test]
    fn tokens_to_string_of_nothing_is_empty() {
        assert_eq!(tokens_to_string(&[]).unwrap(), "");
    }

    #[test]
    fn unclosed_parenthesis_returns_err() {
        assert_eq!(
            error_of("(1+2"),
            ExpressionError::UnmatchedParenthesis { bracket: '(' }
        );
    }

    #[test]
    fn unopened_parenthesis_returns_err() {
        assert_eq!(
            error_of("1+2)"),
            ExpressionError::UnmatchedParenthesis { bracket: ')' }
        );
    }

    #[test]
    fn parenthesis_of_different_kind_returns_err() {
        assert_eq!(
            error_of("(1+2]"),
            ExpressionError::UnmatchedParenthesis { bracket: ']' }
        );
    }

    #[test]
    fn invalid_character_returns_err() {
        assert_eq!(
            error_of("2 $ 3"),
            ExpressionError::InvalidToken {
                token: "$".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn identifiers_are_not_supported() {
        assert!(matches!(
            error_of("x+1"),
            ExpressionError::InvalidToken { .. }
        ));
    }

    #[parameterized(expression = { "1+", "", "-", "*2", "1+()" })]
    fn incomplete_expression_is_malformed(expression: &str) {
        assert!(matches!(
            error_of(expression),
            ExpressionError::MalformedExpression(_)
        ));
    }

    #[test]
    fn error_message_names_the_expression() {
        let error = calculate("1+").unwrap_err();

        let message = format!("{:#}", error);

        assert!(message.contains("'1+'"), "{}", message);
        assert!(message.contains("missing operand"), "{}", message);
    }
}
