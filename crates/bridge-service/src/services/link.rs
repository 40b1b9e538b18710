//! Link service
//!
//! Toggles the binding between a member and a resolved account. An account
//! that is bound (to the requester or anyone else) gets unbound; an unbound
//! account gets bound to the requester.

use bridge_core::entities::{LinkedAccount, Member};
use bridge_core::error::DomainError;
use bridge_core::outcome::ToggleOutcome;
use tracing::{debug, info, instrument, warn};

use crate::dto::ToggleRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Decisions taken per request: the first try plus one retry after a race
const MAX_ATTEMPTS: usize = 2;

/// Link service
pub struct LinkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LinkService<'a> {
    /// Create a new LinkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Link the account if it is free, unlink it otherwise
    #[instrument(
        skip(self, request),
        fields(member_id = %request.member_id, account_id = %request.account_id)
    )]
    pub async fn toggle_link(&self, request: &ToggleRequest) -> ServiceResult<ToggleOutcome> {
        self.ensure_member(request).await?;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.decide(request).await {
                Ok(Some(outcome)) => {
                    info!(
                        linked = outcome.is_linked(),
                        owner = %outcome.account().member_id,
                        "Link toggled"
                    );
                    return Ok(outcome);
                }
                // Someone else unlinked between our check and our delete
                Ok(None) => warn!(attempt, "Link removed concurrently"),
                // Someone else linked between our check and our insert
                Err(DomainError::AccountAlreadyLinked(_)) => {
                    warn!(attempt, "Account linked concurrently");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::conflict(format!(
            "account {} changed while toggling its link",
            request.account_id
        )))
    }

    /// Create the requester's member row on first use
    async fn ensure_member(&self, request: &ToggleRequest) -> ServiceResult<()> {
        let members = self.ctx.member_repo();
        if members.exists(request.member_id).await? {
            return Ok(());
        }

        let member = Member::new(request.member_id, request.display_name.clone());
        match members.create(&member).await {
            Ok(()) => {
                debug!("Member registered");
                Ok(())
            }
            // A concurrent request registered them first
            Err(DomainError::MemberAlreadyExists(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// One check-then-act pass. `Ok(None)` means the row vanished before the delete.
    async fn decide(&self, request: &ToggleRequest) -> Result<Option<ToggleOutcome>, DomainError> {
        let links = self.ctx.link_repo();

        if links.is_linked(request.account_id).await? {
            let removed = links.delete(request.account_id).await?;
            return Ok(removed.map(ToggleOutcome::Unlinked));
        }

        let account = LinkedAccount::new(
            request.account_id,
            request.account_name.clone(),
            request.member_id,
        );
        links.create(&account).await?;
        Ok(Some(ToggleOutcome::Linked(account)))
    }
}
