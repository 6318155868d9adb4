//! Classifies an optional, possibly-null integer against an upper limit.

pub mod report;

pub use self::report::*;

use rstypes::{OptionalValue, OutcomeValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u16)]
pub enum ClassifyError {
  #[error("NullPtr")]
  NullPtr,
  #[error("NumberTooBig")]
  NumberTooBig,
  #[error("OptionWasNone")]
  OptionWasNone,
}

impl ClassifyError {
  pub const fn name(self) -> &'static str {
    match self {
      Self::NullPtr => "NullPtr",
      Self::NumberTooBig => "NumberTooBig",
      Self::OptionWasNone => "OptionWasNone",
    }
  }
}

pub type ClassifyResult = OutcomeValue<i32, ClassifyError>;

/// `None` inside a present input stands for a null reference.
pub fn classify(
  input: &OptionalValue<Option<&i32>>,
  limit: i32,
) -> ClassifyResult {
  let result = match input {
    OptionalValue::Absent => {
      ClassifyResult::failure(ClassifyError::OptionWasNone)
    }
    OptionalValue::Present(None) => {
      ClassifyResult::failure(ClassifyError::NullPtr)
    }
    OptionalValue::Present(Some(&number)) if number >= limit => {
      ClassifyResult::failure(ClassifyError::NumberTooBig)
    }
    OptionalValue::Present(Some(&number)) => ClassifyResult::success(number),
  };
  tracing::debug!(?input, limit, ?result, "classified");
  result
}
