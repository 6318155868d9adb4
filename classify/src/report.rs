use rstypes::OutcomeValue;
use std::fmt::Display;

/// Labels printed in front of each rendered outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
  pub ok_label: String,
  pub err_label: String,
}

impl Default for ReportStyle {
  fn default() -> Self {
    Self {
      ok_label: "Ok".to_owned(),
      err_label: "Err".to_owned(),
    }
  }
}

pub fn render<T, E>(
  outcome: &OutcomeValue<T, E>,
  style: &ReportStyle,
) -> String
where
  T: Display,
  E: Display,
{
  match outcome {
    OutcomeValue::Success(value) => format!("{}: {}", style.ok_label, value),
    OutcomeValue::Failure(err) => format!("{}: {}", style.err_label, err),
  }
}
