//! Collaborator ports - external systems the link workflow talks to
//!
//! - [`AccountLookup`]: resolves a player name to a stable account ID
//! - [`WhitelistSync`]: applies a whitelist change on the game server

use async_trait::async_trait;
use thiserror::Error;

use crate::outcome::WhitelistAction;
use crate::value_objects::AccountId;

// ============================================================================
// Lookup Gateway
// ============================================================================

/// A player name resolved upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAccount {
    pub account_id: AccountId,
    /// Canonical capitalization as reported upstream
    pub name: String,
}

/// Account lookup failures
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No account named {0}")]
    NotFound(String),

    #[error("Account lookup timed out")]
    Timeout,

    #[error("Account lookup failed: {0}")]
    Upstream(String),
}

impl LookupError {
    /// The name is free upstream, as opposed to the lookup itself failing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[async_trait]
pub trait AccountLookup: Send + Sync {
    /// Resolve a human-readable player name
    async fn resolve(&self, name: &str) -> Result<ResolvedAccount, LookupError>;
}

// ============================================================================
// Whitelist Sync
// ============================================================================

/// Whitelist mutation failures
#[derive(Debug, Error)]
pub enum WhitelistError {
    #[error("Whitelist update timed out")]
    Timeout,

    #[error("Game server unavailable: {0}")]
    Unavailable(String),

    #[error("Game server rejected command: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait WhitelistSync: Send + Sync {
    /// Add or remove a player from the server whitelist
    async fn apply(&self, account_name: &str, action: WhitelistAction) -> Result<(), WhitelistError>;
}
