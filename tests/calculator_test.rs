use calc::{Calculation, CalculationRequest, Calculator, CalculatorError, CalculatorState, Operator};

fn run_calculation(request: CalculationRequest) -> Result<String, CalculatorError> {
    let mut calculator = Calculator::new(request);
    calculator.compute()?;
    let output = calculator
        .take_output()
        .expect("computed calculator should have output");
    assert_eq!(calculator.get_state(), CalculatorState::Printed);
    Ok(output)
}

fn assert_output(left: i64, operator: &'static str, right: i64, expected: &'static str) {
    let request = CalculationRequest::new(left, operator, right);
    match run_calculation(request.clone()) {
        Ok(output) => assert_eq!(output, expected, "evaluating {:?}", request),
        Err(err) => panic!("expected {:?} to succeed but got '{}'", request, err),
    }
}

fn assert_error(left: i64, operator: &'static str, right: i64, expected: CalculatorError) {
    let request = CalculationRequest::new(left, operator, right);
    match run_calculation(request.clone()) {
        Ok(output) => panic!("expected {:?} to error but got {:?}", request, output),
        Err(err) => assert_eq!(err, expected, "evaluating {:?}", request),
    }
}

#[test]
fn default_request_works() {
    assert_eq!(
        run_calculation(CalculationRequest::default()),
        Ok("0 + 0 = 0\n".to_string())
    );
}

#[test]
fn addition_works() {
    assert_output(3, "+", 4, "3 + 4 = 7\n");
    assert_output(-3, "+", 4, "-3 + 4 = 1\n");
}

#[test]
fn subtraction_works() {
    assert_output(10, "-", 3, "10 - 3 = 7\n");
    assert_output(3, "-", 10, "3 - 10 = -7\n");
}

#[test]
fn multiplication_works() {
    assert_output(6, "*", 7, "6 * 7 = 42\n");
    assert_output(0, "*", i64::MAX, "0 * 9223372036854775807 = 0\n");
}

#[test]
fn division_works() {
    assert_output(7, "/", 2, "7 / 2 = 3\n");
    assert_output(-7, "/", 2, "-7 / 2 = -3\n");
}

#[test]
fn arithmetic_matches_wrapping_integer_semantics() {
    let operands = [0, 1, -1, 2, -13, 1000, i64::MAX, i64::MIN];
    for left in operands {
        for right in operands {
            let compute = |symbol: &str| {
                CalculationRequest::new(left, symbol, right)
                    .compute()
                    .map(|calculation| calculation.result)
            };
            assert_eq!(compute("+"), Ok(left.wrapping_add(right)));
            assert_eq!(compute("-"), Ok(left.wrapping_sub(right)));
            assert_eq!(compute("*"), Ok(left.wrapping_mul(right)));
            if right != 0 {
                assert_eq!(compute("/"), Ok(left.wrapping_div(right)));
            }
        }
    }
}

#[test]
fn overflow_wraps_around() {
    assert_output(
        i64::MAX,
        "+",
        1,
        "9223372036854775807 + 1 = -9223372036854775808\n",
    );
}

#[test]
fn division_by_zero_errors() {
    assert_error(7, "/", 0, CalculatorError::DivisionByZero);
    assert_error(0, "/", 0, CalculatorError::DivisionByZero);
}

#[test]
fn unsupported_operators_error() {
    for symbol in ["%", "^", "", "plus", "//"] {
        assert_error(
            1,
            symbol,
            2,
            CalculatorError::UnsupportedOperator(symbol.to_string()),
        );
    }
}

#[test]
fn calculation_display_omits_newline() {
    let calculation = Calculation {
        left: 6,
        operator: Operator::Multiply,
        right: 7,
        result: 42,
    };
    assert_eq!(calculation.to_string(), "6 * 7 = 42");
    assert_eq!(calculation.format_line(), "6 * 7 = 42\n");
}
