use linked_hash_map::LinkedHashMap;
use std::fs;
use std::io;
use std::path::Path;
use util::config;
use yaml_rust::{Yaml, YamlLoader};

pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
  pub classify: ClassifyConfig,
  pub report: ReportConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyConfig {
  /// Inputs at or above this value are rejected.
  pub limit: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
  pub ok_label: String,
  pub err_label: String,
}

pub const DEFAULT_LIMIT: i32 = 1_000_000;

impl Default for ClassifyConfig {
  fn default() -> Self {
    Self {
      limit: DEFAULT_LIMIT,
    }
  }
}

impl Default for ReportConfig {
  fn default() -> Self {
    Self {
      ok_label: "Ok".to_owned(),
      err_label: "Err".to_owned(),
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("failed to read config file: {0}")]
  Io(#[from] io::Error),
  #[error("failed to parse config file: {0}")]
  Yaml(#[from] yaml_rust::ScanError),
  #[error("config file error: {0}")]
  Other(String),
}

impl From<String> for ConfigError {
  fn from(err: String) -> Self {
    Self::Other(err)
  }
}

impl From<&str> for ConfigError {
  fn from(err: &str) -> Self {
    Self::Other(err.to_owned())
  }
}

/// Loads `config.yaml` from the working directory or the executable's
/// directory, falling back to defaults when neither has one.
pub fn load_config() -> Result<Config, ConfigError> {
  match config::load_config_file(CONFIG_FILE)? {
    Some(content) => {
      let config = parse_config(&content)?;
      tracing::info!(path = CONFIG_FILE, "loaded config");
      Ok(config)
    }
    None => {
      tracing::warn!(
        path = CONFIG_FILE,
        "config file not found, using defaults"
      );
      Ok(Config::default())
    }
  }
}

/// Loads a config file the caller named explicitly. Unlike [`load_config`],
/// a missing file is an error.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
  let path = path.as_ref();
  let content = fs::read_to_string(path)?;
  let config = parse_config(&content)?;
  tracing::info!(path = %path.display(), "loaded config");
  Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
  let mut docs = YamlLoader::load_from_str(content)?;
  let mut config = Config::default();
  let doc = match docs.pop() {
    Some(doc) if !doc.is_null() => doc,
    _ => return Ok(config),
  };

  let mut obj = doc.into_hash().ok_or("toplevel is not object")?;

  // classify
  if let Some(classify) = obj.remove(&Yaml::String("classify".to_owned())) {
    if !classify.is_null() {
      let classify = classify
        .into_hash()
        .ok_or("classify is not object")?;
      config.classify = load_classify_config(classify)?;
    }
  }

  // report
  if let Some(report) = obj.remove(&Yaml::String("report".to_owned())) {
    if !report.is_null() {
      let report = report.into_hash().ok_or("report is not object")?;
      config.report = load_report_config(report)?;
    }
  }

  if let Some((key, _)) = obj.pop_front() {
    return Err(format!("superfluous field {}", yaml_to_string(&key)).into());
  }

  Ok(config)
}

fn load_classify_config(
  mut classify: LinkedHashMap<Yaml, Yaml>,
) -> Result<ClassifyConfig, ConfigError> {
  let mut classify_config = ClassifyConfig::default();

  if let Some(limit) = classify.remove(&Yaml::String("limit".into())) {
    let limit = limit
      .into_i64()
      .ok_or("classify.limit is not integer")?;
    if limit <= 0 || limit > i32::MAX as i64 {
      return Err(
        format!("classify.limit must be in the range of [1, {}]", i32::MAX)
          .into(),
      );
    }
    classify_config.limit = limit as i32;
  }

  if let Some((key, _)) = classify.pop_front() {
    return Err(
      format!("superfluous field {} in classify", yaml_to_string(&key)).into(),
    );
  }

  Ok(classify_config)
}

fn load_report_config(
  mut report: LinkedHashMap<Yaml, Yaml>,
) -> Result<ReportConfig, ConfigError> {
  let mut report_config = ReportConfig::default();

  if let Some(label) = read_label(&mut report, "report", "ok-label")? {
    report_config.ok_label = label;
  }

  if let Some(label) = read_label(&mut report, "report", "err-label")? {
    report_config.err_label = label;
  }

  if let Some((key, _)) = report.pop_front() {
    return Err(
      format!("superfluous field {} in report", yaml_to_string(&key)).into(),
    );
  }

  Ok(report_config)
}

fn read_label(
  obj: &mut LinkedHashMap<Yaml, Yaml>,
  ctx: impl AsRef<str>,
  name: impl ToString,
) -> Result<Option<String>, ConfigError> {
  let ctx = ctx.as_ref();
  let name = name.to_string();

  match obj.remove(&Yaml::String(name.clone())) {
    Some(label) => {
      let label = label
        .into_string()
        .ok_or_else(|| format!("{}.{} is not string", ctx, name))?;
      if label.trim().is_empty() {
        return Err(format!("{}.{} must not be blank", ctx, name).into());
      }
      Ok(Some(label))
    }
    None => Ok(None),
  }
}

fn yaml_to_string(yaml: &Yaml) -> String {
  match yaml {
    Yaml::Null => "~".to_owned(),
    Yaml::Boolean(true) => "true".to_owned(),
    Yaml::Boolean(false) => "false".to_owned(),
    Yaml::Hash(_) => "<object>".to_owned(),
    Yaml::Array(_) => "<array>".to_owned(),
    Yaml::String(s) => format!("'{}'", s.replace('\'', "\\'")),
    Yaml::Integer(n) => n.to_string(),
    Yaml::Real(n) => n.to_string(),
    _ => "<unknown>".to_owned(),
  }
}
