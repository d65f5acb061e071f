use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::UnaryOperator;
use crate::interpreter::token::Token;
use anyhow::{bail, Context, Result};

/// Computes the value of an expression in postfix notation.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, without parentheses.
///
/// returns: The single value the expression reduces to.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use shunting_yard::interpreter::evaluator::evaluate_postfix;
/// use shunting_yard::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::Number("3".to_string()),
///     Token::Number("4".to_string()),
///     "/".parse()?,
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens)?, 0.75);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for (position, token) in postfix_tokens.iter().enumerate() {
        match token {
            Token::Number(digits) => operands.push(parse_number(digits, position)?),
            Token::UnaryMinus => {
                let operand = pop_operand(&mut operands, token)?;
                operands.push(UnaryOperator::Negate.evaluate(operand));
            }
            Token::Operator(operator) => {
                // The right operand was pushed last.
                let right_operand = pop_operand(&mut operands, token)?;
                let left_operand = pop_operand(&mut operands, token)?;
                operands.push(operator.evaluate(left_operand, right_operand));
            }
            Token::LeftParenthesis(_) | Token::RightParenthesis(_) => {
                bail!(ExpressionError::MalformedExpression(format!(
                    "parenthesis '{}' in postfix expression",
                    token
                )))
            }
        }
    }

    match operands[..] {
        [result] => Ok(result),
        [] => bail!(ExpressionError::MalformedExpression(
            "no value to evaluate".to_string()
        )),
        _ => bail!(ExpressionError::MalformedExpression(format!(
            "{} values left without an operator",
            operands.len()
        ))),
    }
}

fn parse_number(digits: &str, position: usize) -> Result<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        bail!(ExpressionError::InvalidToken {
            token: digits.to_string(),
            position,
        });
    }
    digits
        .parse::<f64>()
        .with_context(|| format!("Failed to read {} as a number", digits))
}

fn pop_operand(operands: &mut Vec<f64>, operator: &Token) -> Result<f64> {
    match operands.pop() {
        Some(operand) => Ok(operand),
        None => bail!(ExpressionError::MalformedExpression(format!(
            "missing operand for '{}'",
            operator
        ))),
    }
}
