// Connect/disconnect watching for the League client. The client does not
// announce its own lifecycle, so both directions are plain lockfile polls,
// the same approach the desktop tooling around the LCU uses.

use std::time::Duration;

use tokio::time::sleep;

use super::lockfile::{self, Credentials};
use crate::verbose_log;

#[derive(Debug, Clone)]
pub struct ClientConnector {
  league_path: Option<String>,
  poll_interval: Duration,
}

impl ClientConnector {
  pub fn new(league_path: Option<String>, poll_interval: Duration) -> Self {
    Self {
      league_path,
      poll_interval,
    }
  }

  /// Poll until a parsable lockfile appears, then hand back its credentials.
  pub async fn wait_for_client(&self) -> Credentials {
    loop {
      if let Some(credentials) = lockfile::discover(self.league_path.as_deref()) {
        verbose_log!("[Connector] Lockfile found on port {}", credentials.port);
        return credentials;
      }
      sleep(self.poll_interval).await;
    }
  }

  /// Poll until the lockfile disappears, which marks the client exit.
  pub async fn wait_for_exit(&self) {
    loop {
      if !lockfile::lockfile_present(self.league_path.as_deref()) {
        verbose_log!("[Connector] Lockfile gone, client exited");
        return;
      }
      sleep(self.poll_interval).await;
    }
  }
}
