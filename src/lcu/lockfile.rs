// Lockfile discovery for the League client. While the client runs it keeps a
// `name:pid:port:password:protocol` file in its install directory and removes
// it on exit; parsing that file is the only credential source we need.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

pub const LCU_USERNAME: &str = "riot";
pub const LCU_ADDRESS: &str = "127.0.0.1";

/// Lockfile names the client has used across releases, in probe order.
pub const LOCKFILE_NAMES: &[&str] = &[
  "lockfile",
  "LeagueClientUx.lockfile",
  "LeagueClient.lockfile",
];

/// Standard Windows install locations, probed when no path is configured.
pub static DEFAULT_LEAGUE_DIRS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
  vec![
    PathBuf::from("C:\\Riot Games\\League of Legends"),
    PathBuf::from("C:\\Program Files\\Riot Games\\League of Legends"),
    PathBuf::from("C:\\Program Files (x86)\\Riot Games\\League of Legends"),
  ]
});

/// Connection credentials read from the client lockfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub address: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub protocol: String,
}

impl Credentials {
  pub fn base_url(&self) -> String {
    format!("{}://{}:{}", self.protocol, self.address, self.port)
  }
}

/// Parse lockfile content. The port must be numeric and all five fields must
/// be present; anything else is rejected.
pub fn parse_lockfile(content: &str) -> Option<Credentials> {
  let parts: Vec<&str> = content.trim().split(':').collect();
  if parts.len() < 5 {
    return None;
  }
  let port: u16 = parts[2].parse().ok()?;
  Some(Credentials {
    address: LCU_ADDRESS.to_string(),
    port,
    username: LCU_USERNAME.to_string(),
    password: parts[3].to_string(),
    protocol: parts[4].to_string(),
  })
}

/// Probe a single directory for any known lockfile name.
pub fn read_lockfile_in(dir: &Path) -> Option<Credentials> {
  for name in LOCKFILE_NAMES {
    let path = dir.join(name);
    if let Ok(content) = fs::read_to_string(&path) {
      if let Some(credentials) = parse_lockfile(&content) {
        return Some(credentials);
      }
    }
  }
  None
}

/// Probe the configured directory, or the default install locations, and
/// return the first parsable lockfile found.
pub fn discover(league_path: Option<&str>) -> Option<Credentials> {
  match league_path {
    Some(dir) => read_lockfile_in(Path::new(dir)),
    None => DEFAULT_LEAGUE_DIRS
      .iter()
      .find_map(|dir| read_lockfile_in(dir)),
  }
}

fn any_lockfile_in(dir: &Path) -> bool {
  LOCKFILE_NAMES.iter().any(|name| dir.join(name).exists())
}

/// True while any known lockfile name exists. Exit detection goes by
/// existence, not parsability, so a half-written file never reads as an exit.
pub fn lockfile_present(league_path: Option<&str>) -> bool {
  match league_path {
    Some(dir) => any_lockfile_in(Path::new(dir)),
    None => DEFAULT_LEAGUE_DIRS.iter().any(|dir| any_lockfile_in(dir)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_five_field_content() {
    let credentials = parse_lockfile("LeagueClient:12345:53711:sekret:https\n").unwrap();
    assert_eq!(credentials.address, "127.0.0.1");
    assert_eq!(credentials.port, 53711);
    assert_eq!(credentials.username, "riot");
    assert_eq!(credentials.password, "sekret");
    assert_eq!(credentials.protocol, "https");
    assert_eq!(credentials.base_url(), "https://127.0.0.1:53711");
  }

  #[test]
  fn rejects_short_content() {
    assert!(parse_lockfile("LeagueClient:12345:53711").is_none());
    assert!(parse_lockfile("").is_none());
  }

  #[test]
  fn rejects_non_numeric_port() {
    assert!(parse_lockfile("LeagueClient:12345:notaport:sekret:https").is_none());
  }

  #[test]
  fn discovery_finds_primary_lockfile() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lockfile"), "LeagueClient:1:50000:pw:https").unwrap();
    let credentials = discover(dir.path().to_str()).unwrap();
    assert_eq!(credentials.port, 50000);
  }

  #[test]
  fn discovery_probes_alternate_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
      dir.path().join("LeagueClientUx.lockfile"),
      "LeagueClientUx:1:50001:pw:https",
    )
    .unwrap();
    let credentials = discover(dir.path().to_str()).unwrap();
    assert_eq!(credentials.port, 50001);
  }

  #[test]
  fn discovery_misses_on_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(discover(dir.path().to_str()).is_none());
  }

  #[test]
  fn discovery_skips_unparsable_lockfile() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lockfile"), "garbage").unwrap();
    assert!(discover(dir.path().to_str()).is_none());
  }

  #[test]
  fn presence_tracks_existence_not_content() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!lockfile_present(dir.path().to_str()));
    std::fs::write(dir.path().join("lockfile"), "garbage").unwrap();
    assert!(lockfile_present(dir.path().to_str()));
  }
}
