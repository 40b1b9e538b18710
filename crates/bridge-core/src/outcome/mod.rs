//! Toggle outcome - the decision taken for a single link-toggle request
//!
//! The outcome drives the whitelist side effect: a fresh link grants access,
//! a removed link revokes it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::LinkedAccount;

/// Whitelist mutation requested from the game server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitelistAction {
    Add,
    Remove,
}

impl WhitelistAction {
    /// Server console verb for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for WhitelistAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a link toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The account was unbound and is now linked to the requester
    Linked(LinkedAccount),
    /// The account was bound (to the requester or anyone else) and has been removed
    Unlinked(LinkedAccount),
}

impl ToggleOutcome {
    /// The account row that was inserted or deleted
    pub fn account(&self) -> &LinkedAccount {
        match self {
            Self::Linked(account) | Self::Unlinked(account) => account,
        }
    }

    /// Whitelist action that mirrors this outcome
    pub fn action(&self) -> WhitelistAction {
        match self {
            Self::Linked(_) => WhitelistAction::Add,
            Self::Unlinked(_) => WhitelistAction::Remove,
        }
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        matches!(self, Self::Linked(_))
    }
}
