// Session polling controller. One task per client session watches the
// gameflow phase at a fixed cadence and fires at most one action per tick;
// the session context replaces any process-wide running flag, its
// cancellation token is the only stop signal.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::config::BanDetection;
use crate::lcu::ClientApi;
use crate::logging;
use crate::verbose_log;

use super::decision::decide;
use super::types::{Decision, DecisionKind, GameflowPhase, TargetSelection};

/// Everything one client session needs; dropped wholesale on disconnect.
pub struct SessionContext {
  pub api: ClientApi,
  pub targets: TargetSelection,
  pub ban_detection: BanDetection,
  pub poll_interval: Duration,
  pub cancel: CancellationToken,
}

/// What a single tick did. Drives both the log lines and the tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
  /// The session token was already cancelled; no work was attempted.
  Halted,
  /// The phase endpoint returned nothing usable.
  NoPhase,
  /// The client sits in some phase other than champion select.
  OutsideChampSelect(GameflowPhase),
  /// In champion select but the session snapshot was unavailable.
  NoSession,
  /// Snapshot present but no incomplete action belongs to the local seat.
  NothingPending,
  /// A submission was attempted for the decided action.
  Submitted { decision: Decision, accepted: bool },
}

/// Run one poll tick against the live session.
pub async fn run_tick(context: &SessionContext) -> TickOutcome {
  if context.cancel.is_cancelled() {
    return TickOutcome::Halted;
  }
  let phase = match context.api.get_gameflow_phase().await {
    Some(phase) => phase,
    None => return TickOutcome::NoPhase,
  };
  match phase {
    GameflowPhase::ChampSelect => {}
    other => {
      // Deliberate no-op: every phase outside champion select is skipped,
      // visibly in verbose mode.
      verbose_log!("[Session] Phase {}, nothing to do", other.as_str());
      return TickOutcome::OutsideChampSelect(other);
    }
  }
  let session = match context.api.get_champ_select_session().await {
    Some(session) => session,
    None => {
      verbose_log!("[Session] Champion select session not available yet");
      return TickOutcome::NoSession;
    }
  };
  let decision = match decide(&session, &context.targets, context.ban_detection) {
    Some(decision) => decision,
    None => {
      verbose_log!(
        "[Session] No pending action for cell {}",
        session.local_player_cell_id
      );
      return TickOutcome::NothingPending;
    }
  };
  let (verb, name) = match decision.kind {
    DecisionKind::Ban => ("Banning", context.targets.ban.name.as_str()),
    DecisionKind::Pick => ("Picking", context.targets.pick.name.as_str()),
  };
  logging::status(&format!(
    "[Session] {} {} (action {})",
    verb, name, decision.action_id
  ));
  let accepted = context
    .api
    .submit_action(decision.champion_id, decision.action_id)
    .await
    .is_some();
  TickOutcome::Submitted { decision, accepted }
}

/// Phase-change bookkeeping so entering champion select logs exactly once.
fn mark_champ_select(last_phase: &mut Option<GameflowPhase>) {
  if *last_phase != Some(GameflowPhase::ChampSelect) {
    logging::status("[Session] Entered champion select");
    *last_phase = Some(GameflowPhase::ChampSelect);
  }
}

/// Owns the poll task for one session.
pub struct SelectionController {
  context: Arc<SessionContext>,
  handle: Option<JoinHandle<()>>,
}

impl SelectionController {
  pub fn new(context: SessionContext) -> Self {
    Self {
      context: Arc::new(context),
      handle: None,
    }
  }

  pub fn is_running(&self) -> bool {
    self
      .handle
      .as_ref()
      .map(|handle| !handle.is_finished())
      .unwrap_or(false)
  }

  /// Spawn the poll loop. Ticks are single flight: the whole tick is awaited
  /// before the interval is polled again, so a slow tick delays the next one
  /// instead of stacking on it. Cancellation drops a tick mid-flight.
  pub fn start(&mut self) {
    if self.is_running() {
      return;
    }
    let context = Arc::clone(&self.context);
    self.handle = Some(tokio::spawn(async move {
      let mut ticker = interval(context.poll_interval);
      ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
      let mut last_phase: Option<GameflowPhase> = None;
      loop {
        tokio::select! {
          biased;
          _ = context.cancel.cancelled() => break,
          outcome = async {
            ticker.tick().await;
            run_tick(&context).await
          } => match outcome {
            TickOutcome::Halted => break,
            TickOutcome::NoPhase => {}
            TickOutcome::OutsideChampSelect(phase) => {
              if last_phase.as_ref() != Some(&phase) {
                logging::status(&format!("[Session] Phase: {}", phase.as_str()));
                last_phase = Some(phase);
              }
            }
            TickOutcome::NoSession | TickOutcome::NothingPending => {
              mark_champ_select(&mut last_phase);
            }
            TickOutcome::Submitted { decision, accepted } => {
              mark_champ_select(&mut last_phase);
              if !accepted {
                verbose_log!(
                  "[Session] Action {} was not accepted, retrying from the next snapshot",
                  decision.action_id
                );
              }
            }
          }
        }
      }
      verbose_log!("[Session] Poll loop stopped");
    }));
  }

  /// Cancel the session and wait for the poll task to wind down.
  pub async fn stop(&mut self) {
    self.context.cancel.cancel();
    if let Some(handle) = self.handle.take() {
      let _ = handle.await;
    }
  }
}
