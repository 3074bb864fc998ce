use std::{error::Error, fmt::Display};

use crate::operators::Operator;

#[derive(Debug, PartialEq)]
pub enum CalculatorError {
    DivisionByZero,
    UnsupportedOperator(String),
}

impl CalculatorError {
    /// The process exit code to use when a calculation fails with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CalculatorError::DivisionByZero => 1,
            CalculatorError::UnsupportedOperator(_) => 1,
        }
    }
}

impl Error for CalculatorError {}

impl Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculatorError::DivisionByZero => write!(f, "division by zero"),
            CalculatorError::UnsupportedOperator(symbol) => {
                write!(f, "unsupported operator '{}' (expected one of ", symbol)?;
                for (i, operator) in Operator::ALL.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", operator)?;
                }
                write!(f, ")")
            }
        }
    }
}
