//! LinkedAccount entity - a Minecraft account bound to a Member

use chrono::{DateTime, Utc};

use crate::value_objects::{AccountId, MemberId};

/// Minecraft account bound to a Discord member
///
/// Rows are never updated in place: relinking is a delete followed by an insert,
/// so `account_name` is the name the account had when it was linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedAccount {
    pub account_id: AccountId,
    pub account_name: String,
    pub member_id: MemberId,
    pub linked_at: DateTime<Utc>,
}

impl LinkedAccount {
    /// Create a new LinkedAccount stamped with the current time
    pub fn new(account_id: AccountId, account_name: impl Into<String>, member_id: MemberId) -> Self {
        Self {
            account_id,
            account_name: account_name.into(),
            member_id,
            linked_at: Utc::now(),
        }
    }

    /// Check if this account is owned by the given member
    #[inline]
    pub fn is_owned_by(&self, member_id: MemberId) -> bool {
        self.member_id == member_id
    }
}
