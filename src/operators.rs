use std::{fmt::Display, str::FromStr};

use crate::calculator_error::CalculatorError;

/// The arithmetic operations the calculator knows how to perform.
///
/// All of them operate on 64-bit signed integers and wrap around on
/// overflow, the same way two's-complement machine arithmetic does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn evaluate(&self, left_side: i64, right_side: i64) -> Result<i64, CalculatorError> {
        let result = match self {
            Operator::Add => left_side.wrapping_add(right_side),
            Operator::Subtract => left_side.wrapping_sub(right_side),
            Operator::Multiply => left_side.wrapping_mul(right_side),
            Operator::Divide => {
                if right_side == 0 {
                    return Err(CalculatorError::DivisionByZero);
                }
                // Truncates toward zero; i64::MIN / -1 wraps to i64::MIN.
                left_side.wrapping_div(right_side)
            }
        };
        Ok(result)
    }
}

impl FromStr for Operator {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|operator| operator.symbol() == s)
            .ok_or_else(|| CalculatorError::UnsupportedOperator(s.to_string()))
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
