//! Error handling utilities for repositories

use std::future::Future;

use bridge_core::entities::LinkedAccount;
use bridge_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Unique constraint guarding one link per player name
const ACCOUNT_NAME_CONSTRAINT: &str = "minecraft_account_name_key";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Classify a failed `minecraft` insert
pub fn map_link_insert_error(e: SqlxError, account: &LinkedAccount) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return if db_err.constraint() == Some(ACCOUNT_NAME_CONSTRAINT) {
                DomainError::AccountNameTaken(account.account_name.clone())
            } else {
                DomainError::AccountAlreadyLinked(account.account_id)
            };
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::MemberNotFound(account.member_id);
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Run a storage operation on its own task.
///
/// Dropping the returned future does not cancel the operation, so an abandoned
/// request never leaves a transaction half-applied.
pub async fn run_detached<F, T>(operation: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(operation)
        .await
        .map_err(|e| DomainError::DatabaseError(format!("storage task failed: {e}")))?
}
