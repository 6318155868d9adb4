use crate::WrongVariantError;
use std::fmt::{self, Display, Formatter};
use std::ops::Not;

/// Discriminant of an [`OutcomeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OutcomeTag {
  Failure = 0,
  Success = 1,
}

impl Not for OutcomeTag {
  type Output = Self;

  fn not(self) -> Self {
    match self {
      Self::Failure => Self::Success,
      Self::Success => Self::Failure,
    }
  }
}

impl Display for OutcomeTag {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Failure => write!(f, "failure"),
      Self::Success => write!(f, "success"),
    }
  }
}

/// Either a success payload `T` or a failure payload `E`, never both and
/// never neither.
///
/// The two payloads share storage. Cloning, moving, comparing, and dropping
/// only ever touch the alternative selected by the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub enum OutcomeValue<T, E> {
  Success(T),
  Failure(E),
}

impl<T, E> OutcomeValue<T, E> {
  pub const fn success(value: T) -> Self {
    Self::Success(value)
  }

  pub const fn failure(error: E) -> Self {
    Self::Failure(error)
  }

  pub const fn tag(&self) -> OutcomeTag {
    match self {
      Self::Success(_) => OutcomeTag::Success,
      Self::Failure(_) => OutcomeTag::Failure,
    }
  }

  pub const fn is_success(&self) -> bool {
    matches!(self, Self::Success(_))
  }

  pub const fn is_failure(&self) -> bool {
    matches!(self, Self::Failure(_))
  }

  pub const fn peek_value(&self) -> Option<&T> {
    match self {
      Self::Success(x) => Some(x),
      Self::Failure(_) => None,
    }
  }

  pub const fn peek_error(&self) -> Option<&E> {
    match self {
      Self::Success(_) => None,
      Self::Failure(e) => Some(e),
    }
  }

  pub fn peek_value_mut(&mut self) -> Option<&mut T> {
    match self {
      Self::Success(x) => Some(x),
      Self::Failure(_) => None,
    }
  }

  pub fn peek_error_mut(&mut self) -> Option<&mut E> {
    match self {
      Self::Success(_) => None,
      Self::Failure(e) => Some(e),
    }
  }

  /// Moves the success payload out.
  ///
  /// A failure outcome yields [`WrongVariantError`]; its error payload is
  /// dropped.
  pub fn take_value(self) -> Result<T, WrongVariantError> {
    match self {
      Self::Success(x) => Ok(x),
      Self::Failure(_) => Err(WrongVariantError::new(OutcomeTag::Success)),
    }
  }

  /// Moves the failure payload out.
  pub fn take_error(self) -> Result<E, WrongVariantError> {
    match self {
      Self::Success(_) => Err(WrongVariantError::new(OutcomeTag::Failure)),
      Self::Failure(e) => Ok(e),
    }
  }

  pub fn into_result(self) -> Result<T, E> {
    self.into()
  }
}

impl<T, E> From<Result<T, E>> for OutcomeValue<T, E> {
  fn from(v: Result<T, E>) -> Self {
    match v {
      Ok(v) => Self::Success(v),
      Err(e) => Self::Failure(e),
    }
  }
}

impl<T, E> From<OutcomeValue<T, E>> for Result<T, E> {
  fn from(v: OutcomeValue<T, E>) -> Result<T, E> {
    match v {
      OutcomeValue::Success(v) => Ok(v),
      OutcomeValue::Failure(e) => Err(e),
    }
  }
}
