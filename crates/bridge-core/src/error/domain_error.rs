//! Domain errors - error types for the identity store and link workflow

use thiserror::Error;

use crate::value_objects::{AccountId, MemberId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("Member {0} has no linked account")]
    NoLinkedAccount(MemberId),

    // =========================================================================
    // Duplicate Key Errors
    // =========================================================================
    #[error("Member already exists: {0}")]
    MemberAlreadyExists(MemberId),

    #[error("Account already linked: {0}")]
    AccountAlreadyLinked(AccountId),

    #[error("Account name already linked: {0}")]
    AccountNameTaken(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs and replies
    pub fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::NoLinkedAccount(_) => "NO_LINKED_ACCOUNT",
            Self::MemberAlreadyExists(_) => "MEMBER_EXISTS",
            Self::AccountAlreadyLinked(_) => "ACCOUNT_ALREADY_LINKED",
            Self::AccountNameTaken(_) => "ACCOUNT_NAME_TAKEN",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "no matching row" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound(_) | Self::NoLinkedAccount(_))
    }

    /// Check if this is a uniqueness violation
    pub fn is_duplicate_key(&self) -> bool {
        matches!(
            self,
            Self::MemberAlreadyExists(_) | Self::AccountAlreadyLinked(_) | Self::AccountNameTaken(_)
        )
    }

    /// Check if this is a connection or transaction failure
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
