//! Whitelist service
//!
//! Handles the member-facing whitelist command: validate the name, resolve it
//! upstream, toggle the link, then mirror the change on the game server.
//!
//! Ordering is what keeps the systems consistent:
//!
//! 1. Nothing is written until the lookup succeeds. A failed or timed out
//!    lookup leaves the store and the whitelist untouched.
//! 2. The whitelist is only touched after the store commit. A whitelist
//!    failure is logged and reported on the receipt, never rolled back;
//!    running the command again reconciles it.

use bridge_core::error::DomainError;
use bridge_core::traits::{LookupError, ResolvedAccount};
use bridge_core::value_objects::MemberId;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::dto::{LinkReceipt, StatusResponse, ToggleRequest, WhitelistRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::link::LinkService;
use super::profile::ProfileService;

/// Whitelist service
pub struct WhitelistService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WhitelistService<'a> {
    /// Create a new WhitelistService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the named account for the requesting member
    #[instrument(skip(self, request), fields(member_id = %request.member_id, account = %request.account_name))]
    pub async fn toggle(&self, request: &WhitelistRequest) -> ServiceResult<LinkReceipt> {
        request.validate()?;

        let resolved = self.resolve(&request.account_name).await?;

        ProfileService::new(self.ctx)
            .sync(request.member_id, &request.display_name)
            .await?;

        let toggle = ToggleRequest {
            member_id: request.member_id,
            display_name: request.display_name.clone(),
            account_id: resolved.account_id,
            account_name: resolved.name,
        };
        let outcome = LinkService::new(self.ctx).toggle_link(&toggle).await?;

        let account = outcome.account();
        let action = outcome.action();
        let whitelist_synced = match tokio::time::timeout(
            self.ctx.whitelist_timeout(),
            self.ctx.whitelist().apply(&account.account_name, action),
        )
        .await
        {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                error!(error = %e, %action, name = %account.account_name, "Whitelist sync failed");
                false
            }
            Err(_) => {
                error!(%action, name = %account.account_name, "Whitelist sync timed out");
                false
            }
        };

        Ok(LinkReceipt {
            outcome,
            whitelist_synced,
        })
    }

    /// Accounts currently linked to the member, primary first
    #[instrument(skip(self))]
    pub async fn status(&self, member_id: MemberId) -> ServiceResult<StatusResponse> {
        let links = self.ctx.link_repo();

        let primary = match links.find_primary(member_id).await {
            Ok(account) => account,
            Err(DomainError::NoLinkedAccount(_)) => return Ok(StatusResponse::default()),
            Err(e) => return Err(e.into()),
        };

        let others = links
            .find_by_member(member_id)
            .await?
            .into_iter()
            .filter(|account| account.account_id != primary.account_id)
            .collect();

        Ok(StatusResponse {
            primary: Some(primary),
            others,
        })
    }

    /// Resolve a player name within the configured bound
    async fn resolve(&self, name: &str) -> ServiceResult<ResolvedAccount> {
        match tokio::time::timeout(self.ctx.lookup_timeout(), self.ctx.lookup().resolve(name)).await
        {
            Ok(Ok(resolved)) => {
                info!(account_id = %resolved.account_id, canonical = %resolved.name, "Player resolved");
                Ok(resolved)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Player lookup failed");
                Err(ServiceError::ResolutionFailed(e))
            }
            Err(_) => {
                warn!("Player lookup timed out");
                Err(ServiceError::ResolutionFailed(LookupError::Timeout))
            }
        }
    }
}
