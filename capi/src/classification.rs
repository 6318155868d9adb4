use classify::{ClassifyError, ClassifyResult};
use rstypes::OptionalValue;
use std::os::raw::c_char;

/// A present null pointer classifies as `NullPtr`.
///
/// # Safety
/// A present, non-null `input` must point to a readable `i32`.
#[no_mangle]
pub unsafe extern "C" fn rstypes_classify(
  input: OptionalValue<*const i32>,
  limit: i32,
) -> ClassifyResult {
  let input = match input {
    OptionalValue::Present(ptr) => {
      OptionalValue::Present(unsafe { ptr.as_ref() })
    }
    OptionalValue::Absent => OptionalValue::absent(),
  };
  classify::classify(&input, limit)
}

#[no_mangle]
pub extern "C" fn rstypes_default_limit() -> i32 {
  config::DEFAULT_LIMIT
}

/// The limit from `config.yaml`, or the default one when there is no config
/// file. Absent when the config file cannot be loaded.
#[no_mangle]
pub extern "C" fn rstypes_configured_limit() -> OptionalValue<i32> {
  match config::load_config() {
    Ok(config) => OptionalValue::present(config.classify.limit),
    Err(err) => {
      tracing::warn!(%err, "cannot load config");
      OptionalValue::absent()
    }
  }
}

/// Static NUL-terminated name of `err`.
#[no_mangle]
pub extern "C" fn rstypes_error_name(err: ClassifyError) -> *const c_char {
  let name: &'static [u8] = match err {
    ClassifyError::NullPtr => b"NullPtr\0",
    ClassifyError::NumberTooBig => b"NumberTooBig\0",
    ClassifyError::OptionWasNone => b"OptionWasNone\0",
  };
  name.as_ptr() as *const c_char
}
