use std::ffi::OsString;

use calc::CalculationRequest;
use clap::Parser;

/// Long flags that may also be written with a single dash, e.g. `-op=+`.
const SINGLE_DASH_LONG_FLAGS: [&str; 1] = ["op"];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Left operand.
    #[arg(
        short = 'x',
        long = "x",
        value_name = "INT",
        value_parser = parse_integer,
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub x: i64,

    /// Right operand.
    #[arg(
        short = 'y',
        long = "y",
        value_name = "INT",
        value_parser = parse_integer,
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub y: i64,

    /// Operator symbol: one of +, -, *, /.
    #[arg(
        long = "op",
        value_name = "OP",
        default_value = "+",
        allow_hyphen_values = true
    )]
    pub op: String,

    /// Trace calculator state transitions on stderr.
    #[arg(short, long)]
    pub tracing: bool,
}

impl CliArgs {
    /// Parses the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        CliArgs::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn create_request(&self) -> CalculationRequest {
        CalculationRequest::new(self.x, self.op.clone(), self.y)
    }
}

/// Rewrites single-dash long flags like `-op` and `-op=*` into the
/// `--op` form that clap understands. Everything after a bare `--` is
/// left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_separator = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if past_separator {
                return arg;
            }
            let Some(string) = arg.to_str() else {
                return arg;
            };
            if string == "--" {
                past_separator = true;
                return arg;
            }
            if is_single_dash_long_flag(string) {
                let mut normalized = OsString::from("-");
                normalized.push(&arg);
                normalized
            } else {
                arg
            }
        })
        .collect()
}

/// Parses a signed 64-bit integer literal.
///
/// Besides plain decimal, this accepts `0x`, `0o` and `0b` prefixes, a
/// leading `0` for octal, and `_` separators between digits, so `010`
/// is 8 and `1_000` is 1000.
pub fn parse_integer(value: &str) -> Result<i64, String> {
    let (negative, body) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let lowercase_prefix = body.get(..2).map(|prefix| prefix.to_ascii_lowercase());
    let (radix, digits) = match lowercase_prefix.as_deref() {
        Some("0x") => (16, &body[2..]),
        Some("0o") => (8, &body[2..]),
        Some("0b") => (2, &body[2..]),
        _ if body.len() > 1 && body.starts_with('0') => (8, &body[1..]),
        _ => (10, body),
    };
    let has_prefix = radix != 10;

    if digits.is_empty()
        || !digits.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
        || digits.ends_with('_')
        || digits.contains("__")
        || (!has_prefix && digits.starts_with('_'))
    {
        return Err("parse error".to_string());
    }

    let cleaned: String = digits.chars().filter(|&ch| ch != '_').collect();
    let magnitude = u64::from_str_radix(&cleaned, radix).map_err(|err| {
        if matches!(err.kind(), std::num::IntErrorKind::PosOverflow) {
            "value out of range".to_string()
        } else {
            "parse error".to_string()
        }
    })?;

    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return Err("value out of range".to_string());
        }
        // i64::MIN's magnitude doesn't fit in an i64, but wraps back to itself.
        Ok((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).map_err(|_| "value out of range".to_string())
    }
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG_FLAGS.contains(&name)
}
