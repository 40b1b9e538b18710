//! Request DTOs
//!
//! Command input arrives as a [`WhitelistRequest`] and is validated before any
//! lookup or storage call. [`ToggleRequest`] is the resolved form handed to the
//! link workflow.

use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use bridge_core::value_objects::{is_valid_player_name, AccountId, MemberId};

/// Whitelist command issued by a guild member
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WhitelistRequest {
    pub member_id: MemberId,

    #[validate(length(min = 1, max = 100, message = "Display name must be 1-100 characters"))]
    pub display_name: String,

    #[validate(custom(function = "validate_player_name"))]
    pub account_name: String,
}

impl WhitelistRequest {
    pub fn new(
        member_id: MemberId,
        display_name: impl Into<String>,
        account_name: impl Into<String>,
    ) -> Self {
        Self {
            member_id,
            display_name: display_name.into(),
            account_name: account_name.into(),
        }
    }
}

/// Link toggle for an already resolved account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub member_id: MemberId,
    pub display_name: String,
    pub account_id: AccountId,
    /// Canonical name as reported by the lookup
    pub account_name: String,
}

fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if is_valid_player_name(name) {
        Ok(())
    } else {
        Err(ValidationError::new("player_name").with_message(Cow::Borrowed(
            "Player name must be 3-16 letters, digits or underscores",
        )))
    }
}
