mod calculator;
mod calculator_error;
mod operators;

pub use calculator::{Calculation, CalculationRequest, Calculator, CalculatorState};
pub use calculator_error::CalculatorError;
pub use operators::Operator;
