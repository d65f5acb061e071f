use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::{
    Associativity, BinaryOperator, UnaryOperator, PARENTHESIS_PRECEDENCE,
};
use crate::interpreter::parser::ConverterConfig;
use crate::interpreter::token::{Bracket, Token};
use anyhow::{bail, Result};

/// Reorders infix tokens into postfix notation using the shunting-yard algorithm.
///
/// A `-` is read as negation when it starts the expression, follows another
/// operator, or directly follows an opening parenthesis. Negation is emitted as
/// [`Token::UnaryMinus`].
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to convert, in infix format.
/// * `config`: How chained exponentiation should be grouped.
///
/// returns: The same expression in postfix format, free of parentheses.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use shunting_yard::interpreter::lexer::tokenize;
/// use shunting_yard::interpreter::parser::{infix_to_postfix, ConverterConfig};
/// use shunting_yard::interpreter::tokens_to_string;
///
/// let infix_tokens = tokenize("1 + 2 * 3")?;
/// let postfix_tokens = infix_to_postfix(infix_tokens, &ConverterConfig::default())?;
/// assert_eq!(tokens_to_string(&postfix_tokens)?, "1 2 3 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn infix_to_postfix(infix_tokens: Vec<Token>, config: &ConverterConfig) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = vec![];

    for (index, token) in infix_tokens.iter().enumerate() {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::LeftParenthesis(_) => operators.push(token.clone()),
            Token::RightParenthesis(bracket) => {
                parse_closing_parenthesis_token(&mut operators, &mut output, *bracket)?
            }
            Token::Operator(_) if is_unary_minus(&infix_tokens, index) => {
                operators.push(UnaryOperator::Negate.token())
            }
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, *operator, config)?
            }
            Token::UnaryMinus => bail!(ExpressionError::InvalidToken {
                token: token.to_string(),
                position: index,
            }),
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn is_unary_minus(tokens: &[Token], index: usize) -> bool {
    if !tokens[index].is_minus() {
        return false;
    }
    match index.checked_sub(1).and_then(|previous| tokens.get(previous)) {
        None => true,
        Some(previous) => previous.is_operator() || previous.is_left_parenthesis(),
    }
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::LeftParenthesis(bracket) => {
                bail!(ExpressionError::UnmatchedParenthesis {
                    bracket: bracket.opening()
                });
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    closing: Bracket,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => {
                bail!(ExpressionError::UnmatchedParenthesis {
                    bracket: closing.closing()
                });
            }
            Some(Token::LeftParenthesis(opening)) => {
                if opening != closing {
                    bail!(ExpressionError::UnmatchedParenthesis {
                        bracket: closing.closing()
                    });
                }
                // Discard the open parenthesis.
                return Ok(());
            }
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
    config: &ConverterConfig,
) -> Result<()> {
    let precedence = operator.precedence();
    let associativity = config.associativity(operator);

    while let Some(top_of_operator_stack) = operators.last() {
        let other_precedence = stack_precedence(top_of_operator_stack)?;

        let pops = match associativity {
            Associativity::Left => other_precedence >= precedence,
            Associativity::Right => other_precedence > precedence,
        };
        if !pops {
            break;
        }

        if let Some(other_operator) = operators.pop() {
            output.push(other_operator);
        }
    }

    operators.push(operator.token());
    Ok(())
}

fn stack_precedence(token: &Token) -> Result<u8> {
    match token {
        Token::Operator(operator) => Ok(operator.precedence()),
        Token::UnaryMinus => Ok(UnaryOperator::Negate.precedence()),
        Token::LeftParenthesis(_) => Ok(PARENTHESIS_PRECEDENCE),
        token => bail!("Found non-operator {} in operator stack", token),
    }
}
