//! Whitelist command workflow tests
//!
//! Run with: cargo test -p integration-tests --test workflow_tests

use std::time::Duration;

use bridge_core::entities::LinkedAccount;
use bridge_core::error::DomainError;
use bridge_core::outcome::{ToggleOutcome, WhitelistAction};
use bridge_core::traits::LookupError;
use bridge_core::value_objects::MemberId;
use bridge_service::{
    CommandReply, LinkService, ProfileService, ServiceError, ToggleRequest, WhitelistService,
};
use integration_tests::{alice_id, bob_id, unique_member_id, TestHarness};

// ============================================================================
// Link / unlink scenarios
// ============================================================================

#[tokio::test]
async fn test_first_toggle_links_and_whitelists() {
    let harness = TestHarness::new();
    let m1 = unique_member_id();

    let receipt = harness.toggle(m1, "Alice").await.unwrap();

    let ToggleOutcome::Linked(account) = &receipt.outcome else {
        panic!("expected Linked, got {:?}", receipt.outcome);
    };
    assert_eq!(account.account_id, alice_id());
    assert!(account.is_owned_by(m1));
    assert!(receipt.whitelist_synced);

    assert_eq!(
        harness.whitelist.calls(),
        vec![("Alice".to_string(), WhitelistAction::Add)]
    );
    assert_eq!(CommandReply::from(&receipt).to_string(), "Added: `Alice`");

    let member = harness.store.member(m1).unwrap();
    assert!(member.linked);
    assert_eq!(member.display_name, format!("member-{}", m1.into_inner()));
}

#[tokio::test]
async fn test_second_toggle_unlinks_and_removes() {
    let harness = TestHarness::new();
    let m1 = unique_member_id();

    harness.toggle(m1, "Alice").await.unwrap();
    let receipt = harness.toggle(m1, "Alice").await.unwrap();

    assert!(matches!(
        receipt.outcome,
        ToggleOutcome::Unlinked(ref account) if account.account_id == alice_id()
    ));
    assert_eq!(
        harness.whitelist.calls(),
        vec![
            ("Alice".to_string(), WhitelistAction::Add),
            ("Alice".to_string(), WhitelistAction::Remove),
        ]
    );
    assert_eq!(harness.store.link_rows(alice_id()), 0);
    assert!(!harness.store.member(m1).unwrap().linked);
    assert_eq!(CommandReply::from(&receipt).to_string(), "Deleted: `Alice`");
}

#[tokio::test]
async fn test_toggle_by_other_member_unlinks_owner() {
    let harness = TestHarness::new();
    let m1 = unique_member_id();
    let m2 = unique_member_id();

    harness.toggle(m1, "Alice").await.unwrap();
    let receipt = harness.toggle(m2, "Alice").await.unwrap();

    // The existing link is removed, not reassigned
    let ToggleOutcome::Unlinked(account) = &receipt.outcome else {
        panic!("expected Unlinked, got {:?}", receipt.outcome);
    };
    assert!(account.is_owned_by(m1));
    assert!(harness.store.links().iter().all(|l| l.member_id != m2));
    assert!(!harness.store.member(m1).unwrap().linked);

    let removes = harness
        .whitelist
        .calls()
        .into_iter()
        .filter(|(_, action)| *action == WhitelistAction::Remove)
        .count();
    assert_eq!(removes, 1);
}

#[tokio::test]
async fn test_unknown_name_changes_nothing() {
    let harness = TestHarness::new();

    let err = harness.toggle(unique_member_id(), "Ghost").await.unwrap_err();

    assert!(matches!(err, ServiceError::ResolutionFailed(LookupError::NotFound(_))));
    assert_eq!(harness.store.mutations(), 0);
    assert!(harness.whitelist.calls().is_empty());
    assert_eq!(CommandReply::from(&err).to_string(), "No user exists");
}

#[tokio::test]
async fn test_lookup_timeout_fails_closed() {
    let harness = TestHarness::with_timeouts(Duration::from_millis(50), Duration::from_secs(5));
    harness.lookup.set_delay(Duration::from_secs(2));

    let err = harness.toggle(unique_member_id(), "Alice").await.unwrap_err();

    assert!(matches!(err, ServiceError::ResolutionFailed(LookupError::Timeout)));
    assert_eq!(harness.store.mutations(), 0);
    assert!(harness.whitelist.calls().is_empty());
    assert_eq!(
        CommandReply::from(&err).to_string(),
        "An unexpected error has occurred."
    );
}

#[tokio::test]
async fn test_invalid_name_is_rejected_before_lookup() {
    let harness = TestHarness::new();

    let err = harness
        .toggle(unique_member_id(), "Alice;op")
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(harness.lookup.calls().is_empty());
    assert_eq!(harness.store.mutations(), 0);
}

#[tokio::test]
async fn test_canonical_name_is_stored_and_whitelisted() {
    let harness = TestHarness::new();
    let m1 = unique_member_id();

    let receipt = harness.toggle(m1, "aLiCe").await.unwrap();

    assert_eq!(receipt.outcome.account().account_name, "Alice");
    assert_eq!(harness.whitelist.calls()[0].0, "Alice");
}

// ============================================================================
// Failure handling
// ============================================================================

#[tokio::test]
async fn test_storage_failure_skips_whitelist() {
    let harness = TestHarness::new();
    harness.store.fail_writes(true);

    let err = harness.toggle(unique_member_id(), "Alice").await.unwrap_err();

    assert!(err.is_storage_failure());
    assert!(harness.whitelist.calls().is_empty());
    assert_eq!(harness.store.link_rows(alice_id()), 0);
}

#[tokio::test]
async fn test_whitelist_failure_keeps_link() {
    let harness = TestHarness::new();
    harness.whitelist.set_offline(true);
    let m1 = unique_member_id();

    let receipt = harness.toggle(m1, "Alice").await.unwrap();

    assert!(receipt.outcome.is_linked());
    assert!(!receipt.whitelist_synced);
    assert_eq!(harness.store.link_rows(alice_id()), 1);
    assert_eq!(harness.whitelist.calls().len(), 1);
    assert_eq!(
        CommandReply::from(&receipt).to_string(),
        "Added: `Alice` (the game server did not confirm the change; \
         ask an admin or run the command twice to resync)"
    );

    // Running it twice once the server is back leaves Alice linked and whitelisted
    harness.whitelist.set_offline(false);
    let first = harness.toggle(m1, "Alice").await.unwrap();
    let second = harness.toggle(m1, "Alice").await.unwrap();
    assert!(!first.outcome.is_linked());
    assert!(second.outcome.is_linked() && second.whitelist_synced);
    assert_eq!(harness.store.link_rows(alice_id()), 1);
    assert_eq!(
        harness.whitelist.calls().last(),
        Some(&("Alice".to_string(), WhitelistAction::Add))
    );
}

#[tokio::test]
async fn test_stale_account_name_gets_its_own_reply() {
    let harness = TestHarness::new();
    let old_owner = unique_member_id();

    // An old row still holds "Alice" while the name now resolves to Bob's profile
    harness
        .store
        .seed_link(LinkedAccount::new(alice_id(), "Alice", old_owner));
    harness.lookup.register("Alice", bob_id());

    let err = harness.toggle(unique_member_id(), "Alice").await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::AccountNameTaken(ref name)) if name == "Alice"
    ));
    assert!(harness.whitelist.calls().is_empty());
    assert_eq!(
        CommandReply::from(&err).to_string(),
        "`Alice` is still recorded against an older link; ask an admin to clear it"
    );
}

// ============================================================================
// Race handling
// ============================================================================

fn toggle_request(member_id: MemberId) -> ToggleRequest {
    ToggleRequest {
        member_id,
        display_name: "requester".to_string(),
        account_id: alice_id(),
        account_name: "Alice".to_string(),
    }
}

#[tokio::test]
async fn test_link_race_retries_once() {
    let harness = TestHarness::new();
    let requester = unique_member_id();
    let rival = unique_member_id();

    // Another request links Alice between our check and our insert
    harness
        .store
        .inject_rival_link(LinkedAccount::new(alice_id(), "Alice", rival));

    let outcome = LinkService::new(&harness.ctx)
        .toggle_link(&toggle_request(requester))
        .await
        .unwrap();

    // The retry sees the rival's link and removes it
    assert!(matches!(
        outcome,
        ToggleOutcome::Unlinked(ref account) if account.is_owned_by(rival)
    ));
    assert_eq!(harness.store.link_rows(alice_id()), 0);
}

#[tokio::test]
async fn test_vanished_link_retries_once() {
    let harness = TestHarness::new();
    let requester = unique_member_id();
    let rival = unique_member_id();
    harness
        .store
        .seed_link(LinkedAccount::new(alice_id(), "Alice", rival));

    // Someone unlinks Alice between our check and our delete
    harness.store.inject_rival_unlink();

    let outcome = LinkService::new(&harness.ctx)
        .toggle_link(&toggle_request(requester))
        .await
        .unwrap();

    // The retry sees Alice free and links her to the requester
    assert!(matches!(
        outcome,
        ToggleOutcome::Linked(ref account) if account.is_owned_by(requester)
    ));
    assert_eq!(harness.store.link_rows(alice_id()), 1);
}

#[tokio::test]
async fn test_second_race_surfaces_conflict() {
    let harness = TestHarness::new();
    let requester = unique_member_id();
    let rival = unique_member_id();
    harness
        .store
        .seed_link(LinkedAccount::new(alice_id(), "Alice", rival));

    // First attempt: the row vanishes before our delete.
    // Retry: Alice looks free, but a rival links her before our insert.
    harness.store.inject_rival_unlink();
    harness
        .store
        .inject_rival_link(LinkedAccount::new(alice_id(), "Alice", rival));

    let err = LinkService::new(&harness.ctx)
        .toggle_link(&toggle_request(requester))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
    assert_eq!(err.error_code(), "CONFLICT");
    assert_eq!(harness.store.link_rows(alice_id()), 1);
    assert!(harness.store.links().iter().all(|l| l.member_id != requester));
}

// ============================================================================
// Profile sync and status
// ============================================================================

#[tokio::test]
async fn test_profile_sync_is_noop_for_unknown_member() {
    let harness = TestHarness::new();
    let profiles = ProfileService::new(&harness.ctx);

    let synced = profiles.sync(unique_member_id(), "Nobody").await.unwrap();
    assert!(!synced);
    assert_eq!(harness.store.mutations(), 0);
}

#[tokio::test]
async fn test_profile_sync_updates_display_name() {
    let harness = TestHarness::new();
    let m1 = unique_member_id();
    harness.toggle(m1, "Alice").await.unwrap();

    let synced = ProfileService::new(&harness.ctx)
        .sync(m1, "Alice Renamed")
        .await
        .unwrap();

    assert!(synced);
    assert_eq!(harness.store.member(m1).unwrap().display_name, "Alice Renamed");
}

#[tokio::test]
async fn test_status_lists_primary_first() {
    let harness = TestHarness::new();
    let m1 = unique_member_id();
    let service = WhitelistService::new(&harness.ctx);

    let empty = service.status(m1).await.unwrap();
    assert!(empty.primary.is_none());
    assert_eq!(
        CommandReply::from(&empty).to_string(),
        "You currently have no accounts whitelisted"
    );

    harness.toggle(m1, "Alice").await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    harness.toggle(m1, "Bob").await.unwrap();

    let status = service.status(m1).await.unwrap();
    assert_eq!(status.primary.as_ref().unwrap().account_id, alice_id());
    assert_eq!(status.account_names(), vec!["Alice", "Bob"]);
    assert_eq!(
        CommandReply::from(&status).to_string(),
        "You currently have `Alice`, `Bob` whitelisted"
    );
}

#[tokio::test]
async fn test_member_created_once_across_toggles() {
    let harness = TestHarness::new();
    let m1 = unique_member_id();

    // Member insert + link insert
    harness.toggle(m1, "Alice").await.unwrap();
    assert_eq!(harness.store.mutations(), 2);

    // Display name sync + link insert, no second member insert
    harness.toggle(m1, "Bob").await.unwrap();
    assert_eq!(harness.store.mutations(), 4);
    assert_eq!(harness.store.links().len(), 2);
}
