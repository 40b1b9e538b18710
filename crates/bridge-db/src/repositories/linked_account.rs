//! PostgreSQL implementation of LinkedAccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use bridge_core::entities::LinkedAccount;
use bridge_core::error::DomainError;
use bridge_core::traits::{LinkedAccountRepository, RepoResult};
use bridge_core::value_objects::{AccountId, MemberId};

use crate::models::LinkedAccountModel;

use super::error::{map_db_error, map_link_insert_error, run_detached};

/// PostgreSQL implementation of LinkedAccountRepository
#[derive(Clone)]
pub struct PgLinkedAccountRepository {
    pool: PgPool,
}

impl PgLinkedAccountRepository {
    /// Create a new PgLinkedAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the row and flag the owner as linked in one transaction
    async fn insert_link(pool: PgPool, account: LinkedAccount) -> RepoResult<()> {
        let mut tx = pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO minecraft (account_id, account_name, member_id, linked_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.account_id.into_inner())
        .bind(&account.account_name)
        .bind(account.member_id.into_inner())
        .bind(account.linked_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_link_insert_error(e, &account))?;

        sqlx::query(
            r#"
            UPDATE members SET member_linked = TRUE WHERE member_id = $1
            "#,
        )
        .bind(account.member_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)
    }

    /// Delete the row and recompute the owner's linked flag in one transaction
    async fn remove_link(pool: PgPool, account_id: AccountId) -> RepoResult<Option<LinkedAccount>> {
        let mut tx = pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query_as::<_, LinkedAccountModel>(
            r#"
            DELETE FROM minecraft
            WHERE account_id = $1
            RETURNING account_id, account_name, member_id, linked_at
            "#,
        )
        .bind(account_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(model) = removed else {
            // Nothing bound; the empty transaction rolls back on drop
            return Ok(None);
        };

        sqlx::query(
            r#"
            UPDATE members
            SET member_linked = EXISTS(SELECT 1 FROM minecraft WHERE member_id = $1)
            WHERE member_id = $1
            "#,
        )
        .bind(model.member_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(LinkedAccount::from(model)))
    }
}

#[async_trait]
impl LinkedAccountRepository for PgLinkedAccountRepository {
    #[instrument(skip(self))]
    async fn is_linked(&self, account_id: AccountId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM minecraft WHERE account_id = $1)
            "#,
        )
        .bind(account_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_by_account(&self, account_id: AccountId) -> RepoResult<Option<LinkedAccount>> {
        let result = sqlx::query_as::<_, LinkedAccountModel>(
            r#"
            SELECT account_id, account_name, member_id, linked_at
            FROM minecraft
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(LinkedAccount::from))
    }

    #[instrument(
        skip(self, account),
        fields(account_id = %account.account_id, member_id = %account.member_id)
    )]
    async fn create(&self, account: &LinkedAccount) -> RepoResult<()> {
        run_detached(Self::insert_link(self.pool.clone(), account.clone())).await?;
        debug!("Link committed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, account_id: AccountId) -> RepoResult<Option<LinkedAccount>> {
        let removed = run_detached(Self::remove_link(self.pool.clone(), account_id)).await?;
        debug!(removed = removed.is_some(), "Unlink committed");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<LinkedAccount>> {
        let results = sqlx::query_as::<_, LinkedAccountModel>(
            r#"
            SELECT account_id, account_name, member_id, linked_at
            FROM minecraft
            WHERE member_id = $1
            ORDER BY linked_at, account_id
            "#,
        )
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(LinkedAccount::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_primary(&self, member_id: MemberId) -> RepoResult<LinkedAccount> {
        let result = sqlx::query_as::<_, LinkedAccountModel>(
            r#"
            SELECT account_id, account_name, member_id, linked_at
            FROM minecraft
            WHERE member_id = $1
            ORDER BY linked_at, account_id
            LIMIT 1
            "#,
        )
        .bind(member_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(LinkedAccount::from)
            .ok_or(DomainError::NoLinkedAccount(member_id))
    }
}
