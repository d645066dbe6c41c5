// Authenticated adapter for the client's local control API. The LCU serves
// HTTPS on loopback with a self-signed certificate, so certificate checks
// are disabled for this one client; the endpoint never leaves the machine.
//
// Every operation is tolerant: a transport or HTTP failure logs one error
// line and yields None, and callers treat "no data" as "do nothing this
// tick". The poll loop re-derives everything from a fresh snapshot, so no
// retry logic lives here.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::StatusCode;

use super::lockfile::Credentials;
use crate::champ_select::types::{ChampSelectSession, GameflowPhase};
use crate::logging;
use crate::store::RsoAuth;

pub struct ClientApi {
  client: reqwest::Client,
  base_url: String,
  auth_header: String,
}

fn basic_token(username: &str, password: &str) -> String {
  STANDARD.encode(format!("{}:{}", username, password))
}

impl ClientApi {
  pub fn new(credentials: &Credentials) -> Result<Self, String> {
    let client = reqwest::Client::builder()
      .danger_accept_invalid_certs(true)
      .timeout(Duration::from_secs(5))
      .connect_timeout(Duration::from_secs(2))
      .build()
      .map_err(|e| format!("Failed to create HTTP client: {}", e))?;
    Ok(Self {
      client,
      base_url: credentials.base_url(),
      auth_header: format!(
        "Basic {}",
        basic_token(&credentials.username, &credentials.password)
      ),
    })
  }

  /// GET a path and return the raw body. A 404 is silent when `quiet_404`
  /// is set, for endpoints that legitimately have no data most of the time.
  async fn get_text(&self, path: &str, quiet_404: bool) -> Option<String> {
    let url = format!("{}{}", self.base_url, path);
    let response = match self
      .client
      .get(&url)
      .header("Authorization", &self.auth_header)
      .header("Content-Type", "application/json")
      .send()
      .await
    {
      Ok(response) => response,
      Err(e) => {
        logging::error(&format!("Request to {} failed: {}", path, e));
        return None;
      }
    };
    let status = response.status();
    if status == StatusCode::NOT_FOUND && quiet_404 {
      return None;
    }
    if !status.is_success() {
      logging::error(&format!("Request to {} failed: HTTP {}", path, status));
      return None;
    }
    match response.text().await {
      Ok(body) => Some(body),
      Err(e) => {
        logging::error(&format!("Failed to read response from {}: {}", path, e));
        None
      }
    }
  }

  pub async fn get_gameflow_phase(&self) -> Option<GameflowPhase> {
    let body = self
      .get_text("/lol-gameflow/v1/gameflow-phase", false)
      .await?;
    Some(GameflowPhase::parse(body.trim().trim_matches('"')))
  }

  /// Fetch the champion select session. Outside champion select the endpoint
  /// 404s; that is the expected steady state, not an error.
  pub async fn get_champ_select_session(&self) -> Option<ChampSelectSession> {
    let body = self.get_text("/lol-champ-select/v1/session", true).await?;
    match serde_json::from_str(&body) {
      Ok(session) => Some(session),
      Err(e) => {
        logging::error(&format!("Failed to parse champion select session: {}", e));
        None
      }
    }
  }

  pub async fn get_store_url(&self) -> Option<String> {
    let body = self.get_text("/lol-store/v1/getStoreUrl", false).await?;
    Some(body.trim().trim_matches('"').to_string())
  }

  pub async fn get_rso_auth(&self) -> Option<RsoAuth> {
    let body = self
      .get_text("/lol-rso-auth/v1/authorization/access-token", false)
      .await?;
    match serde_json::from_str(&body) {
      Ok(auth) => Some(auth),
      Err(e) => {
        logging::error(&format!("Failed to parse RSO auth response: {}", e));
        None
      }
    }
  }

  /// PATCH the given action as completed with the chosen champion.
  pub async fn submit_action(&self, champion_id: i64, action_id: i64) -> Option<()> {
    let url = format!(
      "{}/lol-champ-select/v1/session/actions/{}",
      self.base_url, action_id
    );
    let body = serde_json::json!({ "championId": champion_id, "completed": true });
    let response = match self
      .client
      .patch(&url)
      .header("Authorization", &self.auth_header)
      .json(&body)
      .send()
      .await
    {
      Ok(response) => response,
      Err(e) => {
        logging::error(&format!("Failed to submit action {}: {}", action_id, e));
        return None;
      }
    };
    if !response.status().is_success() {
      logging::error(&format!(
        "Failed to submit action {}: HTTP {}",
        action_id,
        response.status()
      ));
      return None;
    }
    Some(())
  }
}
