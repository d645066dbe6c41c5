// Supervisor: wait for the League client, build one session at a time
// (store handshake, operator prompt), run the polling controller, tear it
// all down when the client exits, and go back to waiting.

mod champ_select;
mod config;
mod lcu;
mod logging;
mod prompt;
mod store;

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use champ_select::{SelectionController, SessionContext};
use config::AppConfig;
use lcu::{ClientApi, ClientConnector, Credentials};
use store::{CatalogEntry, StoreApi};

/// How one session came to an end.
enum SessionEnd {
  ClientExited,
  Aborted(String),
}

#[tokio::main]
async fn main() {
  let config = match config::load_config() {
    Ok(config) => config,
    Err(e) => {
      logging::error(&e);
      AppConfig::default()
    }
  };
  logging::set_verbose(config.verbose_logging);

  let connector = ClientConnector::new(
    config.league_path.clone(),
    Duration::from_millis(config.lockfile_poll_ms),
  );

  loop {
    println!("\x1b[36mWaiting to start League Client\x1b[0m");
    let credentials = connector.wait_for_client().await;
    println!("League Client started.");

    let cancel = CancellationToken::new();
    let watchdog = tokio::spawn({
      let connector = connector.clone();
      let cancel = cancel.clone();
      async move {
        connector.wait_for_exit().await;
        cancel.cancel();
      }
    });

    match run_session(&config, &credentials, cancel.clone()).await {
      SessionEnd::ClientExited => {
        logging::status("[Connector] League Client exited.");
        let _ = watchdog.await;
      }
      SessionEnd::Aborted(reason) => {
        logging::error(&reason);
        cancel.cancel();
        watchdog.abort();
        return;
      }
    }
  }
}

/// Drive one client session from fresh credentials to disconnect.
async fn run_session(
  config: &AppConfig,
  credentials: &Credentials,
  cancel: CancellationToken,
) -> SessionEnd {
  let api = match ClientApi::new(credentials) {
    Ok(api) => api,
    Err(e) => return SessionEnd::Aborted(e),
  };
  let poll_interval = Duration::from_millis(config.poll_interval_ms);

  // The client often is not ready the instant its lockfile appears, so the
  // store handshake retries at the poll cadence until it works or the
  // session dies.
  let catalog = loop {
    match fetch_catalog(&api).await {
      Some(catalog) if !catalog.is_empty() => break catalog,
      _ => {
        tokio::select! {
          biased;
          _ = cancel.cancelled() => return SessionEnd::ClientExited,
          _ = tokio::time::sleep(poll_interval) => {}
        }
      }
    }
  };

  prompt::print_catalog(&catalog);
  let no_match = config.no_match;
  let attempts = config.prompt_attempts;
  let prompt_catalog = catalog.clone();
  let prompt_task = tokio::task::spawn_blocking(move || {
    prompt::ask_targets_from_stdin(&prompt_catalog, no_match, attempts)
  });
  let targets = tokio::select! {
    biased;
    _ = cancel.cancelled() => {
      logging::status("[Session] Selection prompt abandoned, client exited.");
      return SessionEnd::ClientExited;
    }
    result = prompt_task => match result {
      Ok(Ok(targets)) => targets,
      Ok(Err(e)) => return SessionEnd::Aborted(e),
      Err(e) => return SessionEnd::Aborted(format!("Prompt task failed: {}", e)),
    }
  };
  logging::status(&format!(
    "[Session] Ban target: {} | Pick target: {}",
    targets.ban.name, targets.pick.name
  ));
  println!("Champions selected, waiting join in champion select. ");

  let context = SessionContext {
    api,
    targets,
    ban_detection: config.ban_detection,
    poll_interval,
    cancel: cancel.clone(),
  };
  let mut controller = SelectionController::new(context);
  controller.start();
  cancel.cancelled().await;
  controller.stop().await;
  SessionEnd::ClientExited
}

/// One store handshake attempt: bearer token, base URL, then the catalog.
async fn fetch_catalog(api: &ClientApi) -> Option<Vec<CatalogEntry>> {
  let auth = api.get_rso_auth().await?;
  let store_url = api.get_store_url().await?;
  let store = match StoreApi::new(&store_url, &auth.token) {
    Ok(store) => store,
    Err(e) => {
      logging::error(&e);
      return None;
    }
  };
  store.get_catalog().await
}
