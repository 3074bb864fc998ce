use std::io::Write;

use calc::{Calculator, CalculatorError};
use colored::*;

use crate::cli_args::CliArgs;

fn show_error(message: String) {
    eprintln!("{}: {}", "ERROR".red(), message);
}

/// Runs a single calculation from the command line, printing the result
/// to stdout and any errors to stderr.
pub struct StdioCalculator {
    args: CliArgs,
}

impl StdioCalculator {
    pub fn new(args: CliArgs) -> Self {
        StdioCalculator { args }
    }

    /// Returns the process exit code.
    pub fn run(&mut self) -> i32 {
        match self.run_impl() {
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    fn run_impl(&mut self) -> Result<(), i32> {
        let mut calculator = Calculator::new(self.args.create_request());

        calculator.compute().map_err(|err: CalculatorError| {
            show_error(err.to_string());
            err.exit_code()
        })?;

        if let Some(output) = calculator.take_output() {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                show_error(format!("failed to write output ({})", err));
                return Err(1);
            }
        }

        Ok(())
    }
}
