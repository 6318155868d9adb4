use crate::OutcomeTag;

/// Returned when a value is extracted from an absent [`OptionalValue`].
///
/// [`OptionalValue`]: crate::OptionalValue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("attempted to take a value from an absent optional")]
pub struct EmptyValueError;

/// Returned when the inactive alternative of an [`OutcomeValue`] is
/// extracted.
///
/// [`OutcomeValue`]: crate::OutcomeValue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("expected {expected} payload, found {found}")]
pub struct WrongVariantError {
  pub expected: OutcomeTag,
  pub found: OutcomeTag,
}

impl WrongVariantError {
  pub(crate) fn new(expected: OutcomeTag) -> Self {
    Self {
      expected,
      found: !expected,
    }
  }
}
