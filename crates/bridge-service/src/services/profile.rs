//! Profile service
//!
//! Keeps the stored display name in step with the member's current one.

use bridge_core::error::DomainError;
use bridge_core::value_objects::MemberId;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store the member's current display name.
    ///
    /// Returns `false` without writing when the member has no row yet; the
    /// name is recorded when the row is created.
    #[instrument(skip(self))]
    pub async fn sync(&self, member_id: MemberId, current_name: &str) -> ServiceResult<bool> {
        match self
            .ctx
            .member_repo()
            .set_display_name(member_id, current_name)
            .await
        {
            Ok(()) => {
                debug!("Display name synced");
                Ok(true)
            }
            Err(DomainError::MemberNotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
