// Remote catalog adapter. The store service is discovered through the local
// client (base URL plus bearer token) and queried once per session for the
// selectable champion catalog. Also owns catalog-name resolution.

use std::time::Duration;

use serde::Deserialize;

use crate::logging;

/// Identity header the store service expects from client traffic.
pub const STORE_USER_AGENT: &str = "RiotClient/18.0.0 (rso-auth)";

/// Store-facing credential fetched from the local client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsoAuth {
  pub token: String,
}

/// One selectable champion from the store catalog. The service sends far
/// more per entry; everything beyond the id and display name is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
  pub item_id: i64,
  pub name: String,
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
  #[serde(default)]
  catalog: Vec<CatalogEntry>,
}

pub struct StoreApi {
  client: reqwest::Client,
  base_url: String,
  auth_header: String,
}

impl StoreApi {
  pub fn new(base_url: &str, token: &str) -> Result<Self, String> {
    let client = reqwest::Client::builder()
      .user_agent(STORE_USER_AGENT)
      .timeout(Duration::from_secs(5))
      .connect_timeout(Duration::from_secs(2))
      .build()
      .map_err(|e| format!("Failed to create HTTP client: {}", e))?;
    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth_header: format!("Bearer {}", token),
    })
  }

  /// Fetch the selectable champion catalog. Failure yields None and the
  /// caller retries the whole store handshake.
  pub async fn get_catalog(&self) -> Option<Vec<CatalogEntry>> {
    let url = format!("{}/storefront/v3/view/champions", self.base_url);
    let response = match self
      .client
      .get(&url)
      .header("Authorization", &self.auth_header)
      .send()
      .await
    {
      Ok(response) => response,
      Err(e) => {
        logging::error(&format!("Catalog request failed: {}", e));
        return None;
      }
    };
    if !response.status().is_success() {
      logging::error(&format!(
        "Catalog request failed: HTTP {}",
        response.status()
      ));
      return None;
    }
    match response.json::<CatalogResponse>().await {
      Ok(data) => Some(data.catalog),
      Err(e) => {
        logging::error(&format!("Failed to parse catalog response: {}", e));
        None
      }
    }
  }
}

/// Resolve an operator query against the catalog: case-insensitive substring
/// match, first hit in catalog order. Blank queries match nothing.
pub fn find_entry<'a>(catalog: &'a [CatalogEntry], query: &str) -> Option<&'a CatalogEntry> {
  let needle = query.trim().to_lowercase();
  if needle.is_empty() {
    return None;
  }
  catalog
    .iter()
    .find(|entry| entry.name.to_lowercase().contains(&needle))
}
