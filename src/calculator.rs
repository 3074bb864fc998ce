use std::fmt::Display;

use crate::{calculator_error::CalculatorError, operators::Operator};

/// The raw inputs to a calculation, as provided by the user.
///
/// The operator is kept as the symbol the user typed, since any string
/// is accepted as input; it's only validated once we compute.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub left: i64,
    pub right: i64,
    pub operator: String,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        CalculationRequest {
            left: 0,
            right: 0,
            operator: Operator::Add.symbol().to_string(),
        }
    }
}

impl CalculationRequest {
    pub fn new<T: Into<String>>(left: i64, operator: T, right: i64) -> Self {
        CalculationRequest {
            left,
            right,
            operator: operator.into(),
        }
    }

    pub fn compute(&self) -> Result<Calculation, CalculatorError> {
        let operator: Operator = self.operator.parse()?;
        let result = operator.evaluate(self.left, self.right)?;
        Ok(Calculation {
            left: self.left,
            operator,
            right: self.right,
            result,
        })
    }
}

/// A request that has been successfully computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub left: i64,
    pub operator: Operator,
    pub right: i64,
    pub result: i64,
}

impl Calculation {
    /// Returns the newline-terminated line that's printed to stdout.
    pub fn format_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorState {
    Loaded,
    Computed,
    Printed,
}

#[derive(Debug)]
pub struct Calculator {
    request: CalculationRequest,
    calculation: Option<Calculation>,
    state: CalculatorState,
}

impl Calculator {
    pub fn new(request: CalculationRequest) -> Self {
        tracing::debug!(
            left = request.left,
            right = request.right,
            operator = %request.operator,
            "loaded inputs"
        );
        Calculator {
            request,
            calculation: None,
            state: CalculatorState::Loaded,
        }
    }

    pub fn get_state(&self) -> CalculatorState {
        self.state
    }

    /// Computes the result of the loaded request. Once computed, calling
    /// this again just returns the same result.
    ///
    /// If computation fails, the calculator stays in the `Loaded` state.
    pub fn compute(&mut self) -> Result<i64, CalculatorError> {
        if let Some(calculation) = self.calculation {
            return Ok(calculation.result);
        }
        let calculation = self.request.compute().map_err(|err| {
            tracing::debug!(error = %err, "computation failed");
            err
        })?;
        tracing::debug!(result = calculation.result, "computed result");
        self.calculation = Some(calculation);
        self.state = CalculatorState::Computed;
        Ok(calculation.result)
    }

    /// Returns the formatted output line, if the request has been computed
    /// and the line hasn't already been taken.
    pub fn take_output(&mut self) -> Option<String> {
        if self.state != CalculatorState::Computed {
            return None;
        }
        let line = self.calculation.as_ref()?.format_line();
        self.state = CalculatorState::Printed;
        tracing::debug!("printed output");
        Some(line)
    }
}
