// Optional JSON configuration. Looked up at the path in AUTOPICK_CONFIG or
// at ./autopick.json; a missing file means defaults. Nothing is written back.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_ENV_VAR: &str = "AUTOPICK_CONFIG";
pub const CONFIG_FILE_NAME: &str = "autopick.json";

/// How the controller decides whether the ban sub-phase is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BanDetection {
  /// Count completed ban actions against the session's declared ban limit.
  ActionCount,
  /// Trust the session timer's reported sub-phase instead.
  TimerPhase,
}

/// What to do when an operator query matches no catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchPolicy {
  Reprompt,
  Abort,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
  #[serde(default)]
  pub league_path: Option<String>,
  #[serde(default = "default_poll_interval_ms")]
  pub poll_interval_ms: u64,
  #[serde(default = "default_lockfile_poll_ms")]
  pub lockfile_poll_ms: u64,
  #[serde(default = "default_ban_detection")]
  pub ban_detection: BanDetection,
  #[serde(default = "default_no_match")]
  pub no_match: NoMatchPolicy,
  #[serde(default = "default_prompt_attempts")]
  pub prompt_attempts: u32,
  #[serde(default)]
  pub verbose_logging: bool,
}

fn default_poll_interval_ms() -> u64 {
  2000
}

fn default_lockfile_poll_ms() -> u64 {
  2000
}

fn default_ban_detection() -> BanDetection {
  BanDetection::ActionCount
}

fn default_no_match() -> NoMatchPolicy {
  NoMatchPolicy::Reprompt
}

fn default_prompt_attempts() -> u32 {
  5
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      league_path: None,
      poll_interval_ms: default_poll_interval_ms(),
      lockfile_poll_ms: default_lockfile_poll_ms(),
      ban_detection: default_ban_detection(),
      no_match: default_no_match(),
      prompt_attempts: default_prompt_attempts(),
      verbose_logging: false,
    }
  }
}

fn config_path() -> PathBuf {
  env::var(CONFIG_ENV_VAR)
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load the config file if present, falling back to defaults when missing.
pub fn load_config() -> Result<AppConfig, String> {
  load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, String> {
  if !path.exists() {
    return Ok(AppConfig::default());
  }
  let data = fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
  serde_json::from_str(&data).map_err(|e| format!("Failed to parse config: {}", e))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("nope.json")).unwrap();
    assert_eq!(config.poll_interval_ms, 2000);
    assert_eq!(config.ban_detection, BanDetection::ActionCount);
    assert_eq!(config.no_match, NoMatchPolicy::Reprompt);
    assert_eq!(config.prompt_attempts, 5);
    assert!(config.league_path.is_none());
    assert!(!config.verbose_logging);
  }

  #[test]
  fn partial_file_keeps_defaults_for_absent_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("autopick.json");
    fs::write(
      &path,
      r#"{"poll_interval_ms": 500, "ban_detection": "timer_phase"}"#,
    )
    .unwrap();
    let config = load_config_from(&path).unwrap();
    assert_eq!(config.poll_interval_ms, 500);
    assert_eq!(config.ban_detection, BanDetection::TimerPhase);
    assert_eq!(config.lockfile_poll_ms, 2000);
    assert_eq!(config.no_match, NoMatchPolicy::Reprompt);
  }

  #[test]
  fn abort_policy_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("autopick.json");
    fs::write(&path, r#"{"no_match": "abort", "verbose_logging": true}"#).unwrap();
    let config = load_config_from(&path).unwrap();
    assert_eq!(config.no_match, NoMatchPolicy::Abort);
    assert!(config.verbose_logging);
  }

  #[test]
  fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("autopick.json");
    fs::write(&path, "{not json").unwrap();
    assert!(load_config_from(&path).is_err());
  }
}
