//! Repository traits (ports) - define the interface for identity storage
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method is a single statement or a
//! single transaction; none of them caches.

use async_trait::async_trait;

use crate::entities::{LinkedAccount, Member};
use crate::error::DomainError;
use crate::value_objects::{AccountId, MemberId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Check if a member row exists
    async fn exists(&self, id: MemberId) -> RepoResult<bool>;

    /// Find member by ID
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;

    /// Insert a new member.
    ///
    /// Fails with `MemberAlreadyExists` if the row is present; there is no upsert.
    async fn create(&self, member: &Member) -> RepoResult<()>;

    /// Update the stored display name.
    ///
    /// Fails with `MemberNotFound` if the row is absent.
    async fn set_display_name(&self, id: MemberId, name: &str) -> RepoResult<()>;
}

// ============================================================================
// Linked Account Repository
// ============================================================================

#[async_trait]
pub trait LinkedAccountRepository: Send + Sync {
    /// Check whether the account is bound to any member
    async fn is_linked(&self, account_id: AccountId) -> RepoResult<bool>;

    /// Find the row for an account, whoever owns it
    async fn find_by_account(&self, account_id: AccountId) -> RepoResult<Option<LinkedAccount>>;

    /// Insert a link and mark the owning member as linked, in one transaction.
    ///
    /// Fails with `AccountAlreadyLinked` or `AccountNameTaken` on a uniqueness
    /// violation and `MemberNotFound` if the owner row is missing.
    async fn create(&self, account: &LinkedAccount) -> RepoResult<()>;

    /// Delete the link for an account and recompute the owner's linked flag.
    ///
    /// Returns the removed row, or `None` when nothing was bound (not an error).
    async fn delete(&self, account_id: AccountId) -> RepoResult<Option<LinkedAccount>>;

    /// List all accounts bound to a member
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<LinkedAccount>>;

    /// Get the member's primary (earliest linked) account.
    ///
    /// Fails with `NoLinkedAccount` if the member has none.
    async fn find_primary(&self, member_id: MemberId) -> RepoResult<LinkedAccount>;
}
