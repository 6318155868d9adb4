use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Locates `p` and returns the path that exists, if any.
///
/// Search order:
/// - `p` itself (relative to the working directory)
/// - the directory of the running executable
pub fn find_config_file<P>(p: P) -> io::Result<Option<PathBuf>>
where
  P: AsRef<Path>,
{
  let p = p.as_ref();
  if p.is_file() {
    return Ok(Some(p.to_owned()));
  }
  if p.is_absolute() {
    return Ok(None);
  }

  let exe = env::current_exe()?;
  Ok(
    exe
      .parent()
      .map(|dir| dir.join(p))
      .filter(|path| path.is_file()),
  )
}

/// Reads the config file found by [`find_config_file`]. A missing file is
/// `Ok(None)`, not an error.
pub fn load_config_file<P>(p: P) -> io::Result<Option<String>>
where
  P: AsRef<Path>,
{
  match find_config_file(p)? {
    Some(path) => fs::read_to_string(path).map(Some),
    None => Ok(None),
  }
}
