mod cli_args;
mod logging;
mod stdio_calculator;

use cli_args::CliArgs;
use stdio_calculator::StdioCalculator;

fn main() {
    let args = CliArgs::parse_normalized();
    logging::init(args.tracing);
    let mut calculator = StdioCalculator::new(args);
    let exit_code = calculator.run();
    std::process::exit(exit_code);
}
