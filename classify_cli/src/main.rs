use classify::{classify, render, ReportStyle};
use clap::{crate_version, Arg, Command};
use config::{Config, ConfigError};
use rstypes::OptionalValue;
use std::error::Error;
use std::io::{self, Write};
use std::num::IntErrorKind;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let matches = Command::new("classify")
    .version(crate_version!())
    .about("Classify integers against an upper limit")
    .arg(
      Arg::new("limit")
        .short('l')
        .long("limit")
        .value_name("LIMIT")
        .help("exclusive upper limit, overrides classify.limit in config")
        .takes_value(true)
        .validator(validate_limit),
    )
    .arg(
      Arg::new("config")
        .short('c')
        .long("config")
        .value_name("PATH")
        .help("config file, defaults to config.yaml")
        .takes_value(true),
    )
    .arg(
      Arg::new("INPUT")
        .help("an integer, `null` for a null reference, or `none`")
        .required(true)
        .multiple_values(true)
        .allow_hyphen_values(true)
        .validator(parse_input),
    )
    .get_matches();

  let config = load_config(matches.value_of("config"))?;
  let limit = match matches.value_of("limit") {
    Some(limit) => limit.parse()?,
    None => config.classify.limit,
  };
  let style = ReportStyle {
    ok_label: config.report.ok_label,
    err_label: config.report.err_label,
  };

  let inputs = matches
    .values_of("INPUT")
    .into_iter()
    .flatten()
    .map(parse_input)
    .collect::<Result<Vec<_>, _>>()?;
  tracing::debug!(limit, inputs = inputs.len(), "classifying");

  let stdout = io::stdout();
  run(&inputs, limit, &style, stdout.lock())?;

  Ok(())
}

/// An explicit path must exist; only the implicit `config.yaml` may be
/// missing.
fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
  match path {
    Some(path) => config::load_config_from(path),
    None => config::load_config(),
  }
}

fn run(
  inputs: &[OptionalValue<Option<i32>>],
  limit: i32,
  style: &ReportStyle,
  mut out: impl Write,
) -> io::Result<()> {
  for input in inputs {
    let result = classify(&borrow_input(input), limit);
    writeln!(out, "{}", render(&result, style))?;
  }
  out.flush()
}

fn borrow_input(
  input: &OptionalValue<Option<i32>>,
) -> OptionalValue<Option<&i32>> {
  match input.try_borrow() {
    Some(number) => OptionalValue::Present(number.as_ref()),
    None => OptionalValue::absent(),
  }
}

fn parse_input(s: &str) -> Result<OptionalValue<Option<i32>>, String> {
  match s {
    "none" => Ok(OptionalValue::absent()),
    "null" => Ok(OptionalValue::Present(None)),
    _ => match s.parse::<i32>() {
      Ok(n) => Ok(OptionalValue::Present(Some(n))),
      Err(err) => match err.kind() {
        IntErrorKind::NegOverflow | IntErrorKind::PosOverflow => {
          Err(format!("{} is out of the range of a 32-bit integer", s))
        }
        _ => Err(format!("{} is not an integer, `null` or `none`", s)),
      },
    },
  }
}

fn validate_limit(s: &str) -> Result<(), String> {
  match s.parse::<i32>() {
    Ok(n) if n > 0 => Ok(()),
    Ok(_) => Err("limit must be positive".to_owned()),
    Err(err) => match err.kind() {
      IntErrorKind::InvalidDigit | IntErrorKind::Empty => {
        Err("limit must be a decimal number".to_owned())
      }
      IntErrorKind::NegOverflow | IntErrorKind::PosOverflow => {
        Err(format!("limit must be in the range of [1, {}]", i32::MAX))
      }
      _ => Err(err.to_string()),
    },
  }
}
