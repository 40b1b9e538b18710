//! Mojang profile API client
//!
//! `GET {base}/users/profiles/minecraft/{name}` answers `200` with
//! `{"id": "<32 hex>", "name": "<canonical>"}` for a known player, and `204`
//! or `404` when nobody holds the name.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use bridge_common::LookupConfig;
use bridge_core::traits::{AccountLookup, LookupError, ResolvedAccount};
use bridge_core::value_objects::{is_valid_player_name, AccountId};

/// Profile payload returned by the name lookup endpoint
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    id: String,
    name: String,
}

/// Client for the Mojang profile API
#[derive(Debug, Clone)]
pub struct MojangClient {
    client: Client,
    base_url: String,
}

impl MojangClient {
    /// Create a client from lookup configuration
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        Self::with_base_url(&config.api_url, config.timeout)
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Upstream(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AccountLookup for MojangClient {
    #[instrument(skip(self))]
    async fn resolve(&self, name: &str) -> Result<ResolvedAccount, LookupError> {
        // Nothing outside the username alphabet can exist upstream
        if !is_valid_player_name(name) {
            return Err(LookupError::NotFound(name.to_string()));
        }

        let url = format!("{}/users/profiles/minecraft/{}", self.base_url, name);
        debug!("Resolving player name at {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                warn!("Profile lookup timed out");
                LookupError::Timeout
            } else {
                warn!("Profile lookup failed: {}", e);
                LookupError::Upstream(format!("Request failed: {e}"))
            }
        })?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => {
                debug!("No profile for name");
                return Err(LookupError::NotFound(name.to_string()));
            }
            status => {
                warn!(%status, "Profile API returned error");
                return Err(LookupError::Upstream(format!("Mojang returned: {status}")));
            }
        }

        let profile: ProfileResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Upstream(format!("Failed to parse response: {e}"))
            }
        })?;

        let account_id = AccountId::parse(&profile.id)
            .map_err(|e| LookupError::Upstream(format!("Invalid profile id: {e}")))?;

        debug!(%account_id, canonical = %profile.name, "Resolved player name");

        Ok(ResolvedAccount {
            account_id,
            name: profile.name,
        })
    }
}
