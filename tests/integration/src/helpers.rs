//! Test helpers for integration tests
//!
//! [`TestHarness`] builds a `ServiceContext` over the in-memory fakes and keeps
//! handles to them so tests can inspect what the workflow did.

use std::sync::Arc;
use std::time::Duration;

use bridge_core::value_objects::MemberId;
use bridge_service::{
    LinkReceipt, ServiceContext, ServiceContextBuilder, ServiceResult, WhitelistRequest,
    WhitelistService,
};

use crate::fixtures::{alice_id, bob_id, InMemoryStore, RecordingLookup, RecordingWhitelist};

/// Fully wired service context plus the fakes behind it
pub struct TestHarness {
    pub store: Arc<InMemoryStore>,
    pub lookup: Arc<RecordingLookup>,
    pub whitelist: Arc<RecordingWhitelist>,
    pub ctx: ServiceContext,
}

impl TestHarness {
    /// Harness where "Alice" and "Bob" resolve
    pub fn new() -> Self {
        Self::with_timeouts(Duration::from_secs(5), Duration::from_secs(5))
    }

    pub fn with_timeouts(lookup_timeout: Duration, whitelist_timeout: Duration) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let lookup = Arc::new(RecordingLookup::new());
        let whitelist = Arc::new(RecordingWhitelist::new());

        lookup.register("Alice", alice_id());
        lookup.register("Bob", bob_id());

        let ctx = ServiceContextBuilder::new()
            .member_repo(store.clone())
            .link_repo(store.clone())
            .lookup(lookup.clone())
            .whitelist(whitelist.clone())
            .lookup_timeout(lookup_timeout)
            .whitelist_timeout(whitelist_timeout)
            .build()
            .expect("all dependencies provided");

        Self {
            store,
            lookup,
            whitelist,
            ctx,
        }
    }

    /// Issue the whitelist command as `member_id`
    pub async fn toggle(&self, member_id: MemberId, account_name: &str) -> ServiceResult<LinkReceipt> {
        let request =
            WhitelistRequest::new(member_id, format!("member-{}", member_id.into_inner()), account_name);
        WhitelistService::new(&self.ctx).toggle(&request).await
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
