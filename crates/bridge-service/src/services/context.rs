//! Service context - dependency container for services
//!
//! Holds the repositories and outbound collaborators needed by services. It is
//! built once at startup and shared by every command handler.

use std::sync::Arc;
use std::time::Duration;

use bridge_core::traits::{AccountLookup, LinkedAccountRepository, MemberRepository, WhitelistSync};

use super::error::{ServiceError, ServiceResult};

/// Upper bound for a lookup or whitelist call when none is configured
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    link_repo: Arc<dyn LinkedAccountRepository>,

    // Collaborators
    lookup: Arc<dyn AccountLookup>,
    whitelist: Arc<dyn WhitelistSync>,

    lookup_timeout: Duration,
    whitelist_timeout: Duration,
}

impl ServiceContext {
    /// Create a new service context with default call timeouts
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        link_repo: Arc<dyn LinkedAccountRepository>,
        lookup: Arc<dyn AccountLookup>,
        whitelist: Arc<dyn WhitelistSync>,
    ) -> Self {
        Self {
            member_repo,
            link_repo,
            lookup,
            whitelist,
            lookup_timeout: DEFAULT_CALL_TIMEOUT,
            whitelist_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the linked account repository
    pub fn link_repo(&self) -> &dyn LinkedAccountRepository {
        self.link_repo.as_ref()
    }

    // === Collaborators ===

    /// Get the account lookup gateway
    pub fn lookup(&self) -> &dyn AccountLookup {
        self.lookup.as_ref()
    }

    /// Get the whitelist sync
    pub fn whitelist(&self) -> &dyn WhitelistSync {
        self.whitelist.as_ref()
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    pub fn whitelist_timeout(&self) -> Duration {
        self.whitelist_timeout
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("collaborators", &"...")
            .field("lookup_timeout", &self.lookup_timeout)
            .field("whitelist_timeout", &self.whitelist_timeout)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    link_repo: Option<Arc<dyn LinkedAccountRepository>>,
    lookup: Option<Arc<dyn AccountLookup>>,
    whitelist: Option<Arc<dyn WhitelistSync>>,
    lookup_timeout: Duration,
    whitelist_timeout: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            member_repo: None,
            link_repo: None,
            lookup: None,
            whitelist: None,
            lookup_timeout: DEFAULT_CALL_TIMEOUT,
            whitelist_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn link_repo(mut self, repo: Arc<dyn LinkedAccountRepository>) -> Self {
        self.link_repo = Some(repo);
        self
    }

    pub fn lookup(mut self, lookup: Arc<dyn AccountLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn whitelist(mut self, whitelist: Arc<dyn WhitelistSync>) -> Self {
        self.whitelist = Some(whitelist);
        self
    }

    pub fn lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn whitelist_timeout(mut self, timeout: Duration) -> Self {
        self.whitelist_timeout = timeout;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let mut ctx = ServiceContext::new(
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.link_repo
                .ok_or_else(|| ServiceError::validation("link_repo is required"))?,
            self.lookup
                .ok_or_else(|| ServiceError::validation("lookup is required"))?,
            self.whitelist
                .ok_or_else(|| ServiceError::validation("whitelist is required"))?,
        );
        ctx.lookup_timeout = self.lookup_timeout;
        ctx.whitelist_timeout = self.whitelist_timeout;
        Ok(ctx)
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
