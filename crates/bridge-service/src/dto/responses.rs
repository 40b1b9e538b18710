//! Response DTOs and command replies

use serde::Serialize;
use std::fmt;

use bridge_core::entities::LinkedAccount;
use bridge_core::error::DomainError;
use bridge_core::outcome::{ToggleOutcome, WhitelistAction};

use crate::services::ServiceError;

/// Result of a whitelist command that reached the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReceipt {
    pub outcome: ToggleOutcome,
    /// Whether the game server confirmed the whitelist change
    pub whitelist_synced: bool,
}

impl LinkReceipt {
    pub fn action(&self) -> WhitelistAction {
        self.outcome.action()
    }
}

/// Accounts currently linked to a member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusResponse {
    /// Earliest linked account
    pub primary: Option<LinkedAccount>,
    /// Every other linked account, oldest first
    pub others: Vec<LinkedAccount>,
}

impl StatusResponse {
    /// All account names, primary first
    pub fn account_names(&self) -> Vec<&str> {
        self.primary
            .iter()
            .chain(&self.others)
            .map(|account| account.account_name.as_str())
            .collect()
    }
}

/// Reply shown to the member who issued a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandReply {
    Added { name: String, synced: bool },
    Deleted { name: String, synced: bool },
    NoSuchUser,
    /// The name still belongs to an older link whose stored name went stale
    NameStillRecorded { name: String },
    Invalid { reason: String },
    Status { names: Vec<String> },
    Unexpected,
}

impl From<&LinkReceipt> for CommandReply {
    fn from(receipt: &LinkReceipt) -> Self {
        let name = receipt.outcome.account().account_name.clone();
        let synced = receipt.whitelist_synced;
        match receipt.outcome {
            ToggleOutcome::Linked(_) => Self::Added { name, synced },
            ToggleOutcome::Unlinked(_) => Self::Deleted { name, synced },
        }
    }
}

impl From<&StatusResponse> for CommandReply {
    fn from(status: &StatusResponse) -> Self {
        Self::Status {
            names: status
                .account_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<&ServiceError> for CommandReply {
    fn from(err: &ServiceError) -> Self {
        match err {
            ServiceError::ResolutionFailed(e) if e.is_not_found() => Self::NoSuchUser,
            ServiceError::Domain(DomainError::AccountNameTaken(name)) => Self::NameStillRecorded {
                name: name.clone(),
            },
            ServiceError::Validation(reason) => Self::Invalid {
                reason: reason.clone(),
            },
            _ => Self::Unexpected,
        }
    }
}

impl fmt::Display for CommandReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { name, synced } => {
                write!(f, "Added: `{name}`")?;
                write_sync_note(f, *synced)
            }
            Self::Deleted { name, synced } => {
                write!(f, "Deleted: `{name}`")?;
                write_sync_note(f, *synced)
            }
            Self::NoSuchUser => f.write_str("No user exists"),
            Self::NameStillRecorded { name } => write!(
                f,
                "`{name}` is still recorded against an older link; ask an admin to clear it"
            ),
            Self::Invalid { reason } => write!(f, "Invalid request: {reason}"),
            Self::Status { names } if names.is_empty() => {
                f.write_str("You currently have no accounts whitelisted")
            }
            Self::Status { names } => {
                let quoted: Vec<String> = names.iter().map(|n| format!("`{n}`")).collect();
                write!(f, "You currently have {} whitelisted", quoted.join(", "))
            }
            Self::Unexpected => f.write_str("An unexpected error has occurred."),
        }
    }
}

fn write_sync_note(f: &mut fmt::Formatter<'_>, synced: bool) -> fmt::Result {
    if synced {
        Ok(())
    } else {
        f.write_str(" (the game server did not confirm the change; ask an admin or run the command twice to resync)")
    }
}
