// Champion select orchestration: wire types, pure decision rules, and the
// session polling controller.

pub mod controller;
pub mod decision;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use controller::{run_tick, SelectionController, SessionContext, TickOutcome};
pub use types::{ChampSelectSession, Decision, DecisionKind, GameflowPhase, TargetSelection};
