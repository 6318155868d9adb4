//! Sum-type containers for explicit absence and failure handling.
//!
//! [`OptionalValue`] holds a value or nothing; [`OutcomeValue`] holds either a
//! success payload or a failure payload. Both are `#[repr(C)]` enums, so the
//! discriminant and the overlapping payload storage have a stable layout that
//! can be handed across a C ABI.

pub mod error;
pub mod optional;
pub mod outcome;

pub use self::error::*;
pub use self::optional::*;
pub use self::outcome::*;
