//! Member database model

use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub member_id: i64,
    pub member_name: String,
    pub member_linked: bool,
}
