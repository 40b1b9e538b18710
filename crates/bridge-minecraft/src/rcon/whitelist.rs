//! Whitelist sync over RCON

use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, instrument, warn};

use bridge_common::RconConfig;
use bridge_core::outcome::WhitelistAction;
use bridge_core::traits::{WhitelistError, WhitelistSync};
use bridge_core::value_objects::is_valid_player_name;

use super::{RconClient, RconError};

/// Reply prefix for commands the server does not know
const UNKNOWN_COMMAND: &str = "Unknown or incomplete command";

/// Applies whitelist changes through the server console.
///
/// Each call opens a fresh connection, so a server restart between calls
/// needs no reconnect logic.
#[derive(Clone)]
pub struct RconWhitelist {
    address: String,
    password: String,
    timeout: Duration,
}

impl std::fmt::Debug for RconWhitelist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RconWhitelist")
            .field("address", &self.address)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RconWhitelist {
    pub fn new(config: &RconConfig) -> Self {
        Self {
            address: config.address.clone(),
            password: config.password.clone(),
            timeout: config.timeout,
        }
    }

    async fn run(&self, command: &str) -> Result<String, RconError> {
        let mut client = RconClient::connect(self.address.as_str()).await?;
        client.authenticate(&self.password).await?;
        client.command(command).await
    }
}

#[async_trait]
impl WhitelistSync for RconWhitelist {
    #[instrument(skip(self), fields(address = %self.address))]
    async fn apply(&self, account_name: &str, action: WhitelistAction) -> Result<(), WhitelistError> {
        // The name ends up on a console command line
        if !is_valid_player_name(account_name) {
            return Err(WhitelistError::Rejected(format!(
                "invalid player name: {account_name:?}"
            )));
        }

        let command = format!("whitelist {} {}", action.as_str(), account_name);

        let reply = match tokio::time::timeout(self.timeout, self.run(&command)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                warn!(error = %e, "Whitelist command failed");
                return Err(e.into());
            }
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Whitelist command timed out");
                return Err(WhitelistError::Timeout);
            }
        };

        if reply.starts_with(UNKNOWN_COMMAND) {
            return Err(WhitelistError::Rejected(reply));
        }

        info!(%reply, "Whitelist updated");
        Ok(())
    }
}
