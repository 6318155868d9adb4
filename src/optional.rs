use crate::EmptyValueError;

/// Discriminant of an [`OptionalValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OptionalTag {
  Absent = 0,
  Present = 1,
}

/// A value of type `T`, or nothing.
///
/// Storage for `T` is only live in the `Present` state; an absent value never
/// constructs, drops, or hands out a `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub enum OptionalValue<T> {
  Present(T),
  Absent,
}

impl<T> OptionalValue<T> {
  /// Constructs a present value from anything convertible into `T`.
  pub fn present(value: impl Into<T>) -> Self {
    Self::Present(value.into())
  }

  pub const fn absent() -> Self {
    Self::Absent
  }

  pub const fn tag(&self) -> OptionalTag {
    match self {
      Self::Present(_) => OptionalTag::Present,
      Self::Absent => OptionalTag::Absent,
    }
  }

  pub const fn is_present(&self) -> bool {
    matches!(self, Self::Present(_))
  }

  pub const fn is_absent(&self) -> bool {
    matches!(self, Self::Absent)
  }

  /// Borrows the stored value, if any.
  pub const fn try_borrow(&self) -> Option<&T> {
    match self {
      Self::Present(x) => Some(x),
      Self::Absent => None,
    }
  }

  pub fn try_borrow_mut(&mut self) -> Option<&mut T> {
    match self {
      Self::Present(x) => Some(x),
      Self::Absent => None,
    }
  }

  /// Returns the stored value, or `fallback` when absent. Neither is copied.
  pub fn value_or<'a>(&'a self, fallback: &'a T) -> &'a T {
    match self {
      Self::Present(x) => x,
      Self::Absent => fallback,
    }
  }

  pub fn value_or_mut<'a>(&'a mut self, fallback: &'a mut T) -> &'a mut T {
    match self {
      Self::Present(x) => x,
      Self::Absent => fallback,
    }
  }

  /// Moves the stored value out and leaves `self` absent.
  pub fn take(&mut self) -> Result<T, EmptyValueError> {
    std::mem::replace(self, Self::Absent).into_value()
  }

  pub fn into_value(self) -> Result<T, EmptyValueError> {
    match self {
      Self::Present(x) => Ok(x),
      Self::Absent => Err(EmptyValueError),
    }
  }
}

impl<T> Default for OptionalValue<T> {
  fn default() -> Self {
    Self::Absent
  }
}

impl<T> From<Option<T>> for OptionalValue<T> {
  fn from(v: Option<T>) -> Self {
    match v {
      Some(v) => Self::Present(v),
      None => Self::Absent,
    }
  }
}

impl<T> From<OptionalValue<T>> for Option<T> {
  fn from(v: OptionalValue<T>) -> Option<T> {
    match v {
      OptionalValue::Present(v) => Some(v),
      OptionalValue::Absent => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use quickcheck_macros::quickcheck;
  use std::cell::Cell;
  use std::rc::Rc;

  /// Counts how many times it has been dropped.
  #[derive(Debug)]
  struct DropCounter(Rc<Cell<usize>>);

  impl Drop for DropCounter {
    fn drop(&mut self) {
      self.0.set(self.0.get() + 1);
    }
  }

  #[test]
  fn present_value() {
    let opt = OptionalValue::<i32>::present(41);
    assert!(opt.is_present());
    assert_eq!(opt.tag(), OptionalTag::Present);
    assert_eq!(opt.try_borrow(), Some(&41));
    assert_eq!(opt, OptionalValue::present(41));
    assert_ne!(opt, OptionalValue::present(42));
    assert_ne!(opt, OptionalValue::absent());
  }

  #[test]
  fn absent_value_or() {
    let opt = OptionalValue::<i32>::absent();
    let fallback = 7;
    assert!(opt.is_absent());
    assert_eq!(opt.try_borrow(), None);
    assert_eq!(*opt.value_or(&fallback), 7);
    assert!(std::ptr::eq(opt.value_or(&fallback), &fallback));
  }

  #[test]
  fn value_or_keeps_identity() {
    let opt = OptionalValue::<String>::present("inner");
    let fallback = "fallback".to_owned();
    let got = opt.value_or(&fallback);
    assert_eq!(got, "inner");
    assert!(std::ptr::eq(got, opt.try_borrow().unwrap()));
  }

  #[test]
  fn value_or_with_reference_payload() {
    let number = 999_999;
    let big_number = 1_000_001;

    let none = OptionalValue::<&i32>::absent();
    let some_number = OptionalValue::<&i32>::present(&number);

    assert!(std::ptr::eq(*none.value_or(&&number), &number));
    assert!(std::ptr::eq(*some_number.value_or(&&big_number), &number));
  }

  #[test]
  fn value_or_mut_writes_through() {
    let mut opt = OptionalValue::<i32>::present(1);
    let mut fallback = 0;
    *opt.value_or_mut(&mut fallback) += 10;
    assert_eq!(opt, OptionalValue::present(11));
    assert_eq!(fallback, 0);

    let mut opt = OptionalValue::<i32>::absent();
    *opt.value_or_mut(&mut fallback) += 10;
    assert_eq!(opt, OptionalValue::absent());
    assert_eq!(fallback, 10);
  }

  #[test]
  fn present_converts_argument() {
    let opt = OptionalValue::<String>::present("abc");
    assert_eq!(opt.try_borrow().map(String::as_str), Some("abc"));

    let opt = OptionalValue::<i64>::present(3u8);
    assert_eq!(opt, OptionalValue::Present(3i64));
  }

  #[test]
  fn take_leaves_absent() {
    let mut opt = OptionalValue::<String>::present("moved");
    assert_eq!(opt.take(), Ok("moved".to_owned()));
    assert!(opt.is_absent());
    assert_eq!(opt.take(), Err(EmptyValueError));
  }

  #[test]
  fn into_value_absent() {
    assert_eq!(
      OptionalValue::<i32>::absent().into_value(),
      Err(EmptyValueError)
    );
    assert_eq!(OptionalValue::<i32>::present(5).into_value(), Ok(5));
  }

  #[test]
  fn try_borrow_mut_edits_in_place() {
    let mut opt = OptionalValue::<Vec<i32>>::present(vec![1]);
    opt.try_borrow_mut().unwrap().push(2);
    assert_eq!(opt, OptionalValue::present(vec![1, 2]));
    assert!(OptionalValue::<i32>::absent().try_borrow_mut().is_none());
  }

  #[test]
  fn clone_is_independent() {
    let original = OptionalValue::<Vec<i32>>::present(vec![1, 2, 3]);
    let mut copy = original.clone();
    copy.try_borrow_mut().unwrap().clear();
    drop(copy);
    assert_eq!(original, OptionalValue::present(vec![1, 2, 3]));
  }

  #[test]
  fn payload_dropped_once() {
    let drops = Rc::new(Cell::new(0));

    let mut opt = OptionalValue::Present(DropCounter(drops.clone()));
    let payload = opt.take().unwrap();
    drop(opt);
    assert_eq!(drops.get(), 0);
    drop(payload);
    assert_eq!(drops.get(), 1);

    let opt = OptionalValue::Present(DropCounter(drops.clone()));
    let moved = opt;
    drop(moved);
    assert_eq!(drops.get(), 2);

    drop(OptionalValue::<DropCounter>::absent());
    assert_eq!(drops.get(), 2);
  }

  #[test]
  fn std_option_conversion() {
    assert_eq!(OptionalValue::from(Some(1)), OptionalValue::present(1));
    assert_eq!(OptionalValue::<i32>::from(None), OptionalValue::absent());
    assert_eq!(Option::<i32>::from(OptionalValue::Present(1)), Some(1));
    assert_eq!(Option::<i32>::from(OptionalValue::absent()), None);
    assert_eq!(OptionalValue::<i32>::default(), OptionalValue::absent());
  }

  #[quickcheck]
  fn borrow_matches_tag(v: Option<i32>) -> bool {
    let opt = OptionalValue::from(v);
    opt.try_borrow().is_some() == opt.is_present()
      && opt.is_present() == (opt.tag() == OptionalTag::Present)
  }

  #[quickcheck]
  fn eq_is_reflexive_and_symmetric(a: Option<u8>, b: Option<u8>) -> bool {
    let a = OptionalValue::from(a);
    let b = OptionalValue::from(b);
    a == a && (a == b) == (b == a)
  }

  #[quickcheck]
  fn eq_is_transitive(
    a: Option<bool>,
    b: Option<bool>,
    c: Option<bool>,
  ) -> bool {
    let a = OptionalValue::from(a);
    let b = OptionalValue::from(b);
    let c = OptionalValue::from(c);
    !(a == b && b == c) || a == c
  }

  #[quickcheck]
  fn eq_follows_tag_and_value(a: Option<u8>, b: Option<u8>) -> bool {
    let expected = match (a, b) {
      (Some(x), Some(y)) => x == y,
      (None, None) => true,
      _ => false,
    };
    (OptionalValue::from(a) == OptionalValue::from(b)) == expected
  }
}
