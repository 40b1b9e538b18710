//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bridge_core::entities::Member;
use bridge_core::error::DomainError;
use bridge_core::traits::{MemberRepository, RepoResult};
use bridge_core::value_objects::MemberId;

use crate::models::MemberModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn exists(&self, id: MemberId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM members WHERE member_id = $1)
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT member_id, member_name, member_linked
            FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self, member), fields(member_id = %member.id))]
    async fn create(&self, member: &Member) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO members (member_id, member_name, member_linked)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(member.id.into_inner())
        .bind(&member.display_name)
        .bind(member.linked)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::MemberAlreadyExists(member.id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_display_name(&self, id: MemberId, name: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE members SET member_name = $2 WHERE member_id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MemberNotFound(id));
        }

        Ok(())
    }
}
