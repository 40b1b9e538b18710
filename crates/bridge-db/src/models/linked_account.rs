//! Linked account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for minecraft table
#[derive(Debug, Clone, FromRow)]
pub struct LinkedAccountModel {
    pub account_id: Uuid,
    pub account_name: String,
    pub member_id: i64,
    pub linked_at: DateTime<Utc>,
}
