// Pure decision rules for a champion select tick. Everything here works on
// an immutable session snapshot; the controller owns all I/O.

use crate::config::BanDetection;

use super::types::{
  ChampSelectSession, Decision, DecisionKind, SessionAction, TargetSelection, ACTION_TYPE_BAN,
  TIMER_PHASE_BAN,
};

/// Count completed ban actions across all seats.
pub fn completed_ban_count(session: &ChampSelectSession) -> i64 {
  session
    .actions
    .iter()
    .flatten()
    .filter(|action| action.kind == ACTION_TYPE_BAN && action.completed)
    .count() as i64
}

/// Whether the ban sub-phase is still open under the configured rule.
pub fn ban_phase_open(session: &ChampSelectSession, policy: BanDetection) -> bool {
  match policy {
    BanDetection::ActionCount => completed_ban_count(session) < session.bans.num_bans,
    BanDetection::TimerPhase => session.timer.phase == TIMER_PHASE_BAN,
  }
}

/// First incomplete action belonging to the local seat, in the flattened
/// group order the client reports. Completed actions are never revisited.
pub fn next_pending_action(session: &ChampSelectSession) -> Option<&SessionAction> {
  session
    .actions
    .iter()
    .flatten()
    .find(|action| action.actor_cell_id == session.local_player_cell_id && !action.completed)
}

/// Map a snapshot to the single submission for this tick, if any: the first
/// pending action of the local seat, completed with the ban target while the
/// ban sub-phase is open and the pick target afterwards.
pub fn decide(
  session: &ChampSelectSession,
  targets: &TargetSelection,
  policy: BanDetection,
) -> Option<Decision> {
  let action = next_pending_action(session)?;
  let (kind, champion_id) = if ban_phase_open(session, policy) {
    (DecisionKind::Ban, targets.ban.item_id)
  } else {
    (DecisionKind::Pick, targets.pick.item_id)
  };
  Some(Decision {
    action_id: action.id,
    champion_id,
    kind,
  })
}
