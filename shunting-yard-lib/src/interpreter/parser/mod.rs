mod infix_converter;

pub use crate::interpreter::parser::infix_converter::infix_to_postfix;

use crate::interpreter::operator::{Associativity, BinaryOperator};

/// Options for converting infix expressions into postfix notation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    /// How `2^3^2` is grouped. Left gives `(2^3)^2`, right gives `2^(3^2)`.
    pub exponent_associativity: Associativity,
}

impl ConverterConfig {
    /// Every operator except exponentiation is always left-associative.
    pub(crate) fn associativity(&self, operator: BinaryOperator) -> Associativity {
        match operator {
            BinaryOperator::Exponentiate => self.exponent_associativity,
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => Associativity::Left,
        }
    }
}
