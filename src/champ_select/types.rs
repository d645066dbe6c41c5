// Wire and domain types for the champion select flow. The session structs
// mirror the client's JSON (camelCase, tolerant of absent sections); the
// rest are the controller's own vocabulary.

use serde::Deserialize;

use crate::store::CatalogEntry;

/// Timer sub-phase value the client reports while the ban window is open.
pub const TIMER_PHASE_BAN: &str = "BAN_PICK";

/// Action type string for ban slots in the session grid.
pub const ACTION_TYPE_BAN: &str = "ban";

/// Client lifecycle phase as reported by the gameflow endpoint. Unknown
/// strings are carried through so new client phases stay visible in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameflowPhase {
  None,
  Lobby,
  Matchmaking,
  ReadyCheck,
  ChampSelect,
  GameStart,
  InProgress,
  WaitingForStats,
  EndOfGame,
  Other(String),
}

impl GameflowPhase {
  pub fn parse(text: &str) -> Self {
    match text {
      "None" => Self::None,
      "Lobby" => Self::Lobby,
      "Matchmaking" => Self::Matchmaking,
      "ReadyCheck" => Self::ReadyCheck,
      "ChampSelect" => Self::ChampSelect,
      "GameStart" => Self::GameStart,
      "InProgress" => Self::InProgress,
      "WaitingForStats" => Self::WaitingForStats,
      "EndOfGame" => Self::EndOfGame,
      other => Self::Other(other.to_string()),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      Self::None => "None",
      Self::Lobby => "Lobby",
      Self::Matchmaking => "Matchmaking",
      Self::ReadyCheck => "ReadyCheck",
      Self::ChampSelect => "ChampSelect",
      Self::GameStart => "GameStart",
      Self::InProgress => "InProgress",
      Self::WaitingForStats => "WaitingForStats",
      Self::EndOfGame => "EndOfGame",
      Self::Other(text) => text,
    }
  }
}

/// One ban-or-pick slot in the session's action grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAction {
  pub id: i64,
  #[serde(default)]
  pub actor_cell_id: i64,
  #[serde(default, rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBans {
  #[serde(default)]
  pub num_bans: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTimer {
  #[serde(default)]
  pub phase: String,
}

/// Point-in-time snapshot of the champion select session. Never cached;
/// every tick re-fetches and re-decides from scratch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampSelectSession {
  #[serde(default)]
  pub local_player_cell_id: i64,
  #[serde(default)]
  pub actions: Vec<Vec<SessionAction>>,
  #[serde(default)]
  pub bans: SessionBans,
  #[serde(default)]
  pub timer: SessionTimer,
}

/// The operator's chosen ban and pick targets, fixed for the session.
#[derive(Debug, Clone)]
pub struct TargetSelection {
  pub ban: CatalogEntry,
  pub pick: CatalogEntry,
}

/// Which of the two targets a decision submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
  Ban,
  Pick,
}

/// The single submission a tick decided on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
  pub action_id: i64,
  pub champion_id: i64,
  pub kind: DecisionKind,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn phase_parse_round_trips_known_values() {
    assert_eq!(GameflowPhase::parse("ChampSelect"), GameflowPhase::ChampSelect);
    assert_eq!(GameflowPhase::parse("Lobby"), GameflowPhase::Lobby);
    assert_eq!(GameflowPhase::parse("None"), GameflowPhase::None);
    assert_eq!(GameflowPhase::parse("InProgress").as_str(), "InProgress");
  }

  #[test]
  fn phase_parse_carries_unknown_values() {
    let phase = GameflowPhase::parse("ChampSelectFinalization");
    assert_eq!(
      phase,
      GameflowPhase::Other("ChampSelectFinalization".to_string())
    );
    assert_eq!(phase.as_str(), "ChampSelectFinalization");
  }
}
