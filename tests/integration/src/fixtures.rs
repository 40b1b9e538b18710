//! Test fixtures and fakes
//!
//! - [`InMemoryStore`] implements both repository ports with the same
//!   constraints as the PostgreSQL schema (primary keys, unique player name,
//!   member foreign key, linked flag maintenance)
//! - [`RecordingLookup`] and [`RecordingWhitelist`] stand in for Mojang and
//!   the game server and record every call

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use bridge_core::entities::{LinkedAccount, Member};
use bridge_core::error::DomainError;
use bridge_core::outcome::WhitelistAction;
use bridge_core::traits::{
    AccountLookup, LinkedAccountRepository, LookupError, MemberRepository, RepoResult,
    ResolvedAccount, WhitelistError, WhitelistSync,
};
use bridge_core::value_objects::{AccountId, MemberId};

/// Profile id of the "Alice" test account (U1)
pub const ALICE_UUID: &str = "069a79f444e94726a5befca90e38aaf5";
/// Profile id of the "Bob" test account
pub const BOB_UUID: &str = "853c80ef3c3749fdaa49938b674adae6";

pub fn alice_id() -> AccountId {
    AccountId::parse(ALICE_UUID).unwrap()
}

pub fn bob_id() -> AccountId {
    AccountId::parse(BOB_UUID).unwrap()
}

/// Counter for unique member ids
static MEMBER_COUNTER: AtomicI64 = AtomicI64::new(100_000);

/// Get a fresh member id
pub fn unique_member_id() -> MemberId {
    MemberId::new(MEMBER_COUNTER.fetch_add(1, Ordering::SeqCst))
}

// ============================================================================
// In-memory identity store
// ============================================================================

#[derive(Default)]
struct StoreState {
    members: HashMap<MemberId, Member>,
    /// Kept as rows, not a map, so uniqueness is enforced rather than implied
    links: Vec<LinkedAccount>,
    /// Rows a "concurrent request" inserts right before the next link insert
    rival_links: VecDeque<LinkedAccount>,
    /// Deletes that find their row already removed by a "concurrent request"
    rival_unlinks: usize,
    mutations: usize,
    fail_writes: bool,
}

impl StoreState {
    fn refresh_linked_flag(&mut self, member_id: MemberId) {
        let linked = self.links.iter().any(|l| l.member_id == member_id);
        if let Some(member) = self.members.get_mut(&member_id) {
            member.linked = linked;
        }
    }

    fn check_writable(&self) -> RepoResult<()> {
        if self.fail_writes {
            Err(DomainError::DatabaseError("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Identity store kept in process memory
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful writes so far
    pub fn mutations(&self) -> usize {
        self.state.lock().mutations
    }

    /// Number of rows held for an account
    pub fn link_rows(&self, account_id: AccountId) -> usize {
        self.state
            .lock()
            .links
            .iter()
            .filter(|l| l.account_id == account_id)
            .count()
    }

    /// Snapshot of every link row
    pub fn links(&self) -> Vec<LinkedAccount> {
        self.state.lock().links.clone()
    }

    /// Snapshot of a member row
    pub fn member(&self, id: MemberId) -> Option<Member> {
        self.state.lock().members.get(&id).cloned()
    }

    /// Seed a link (and its owner) without counting it as a mutation
    pub fn seed_link(&self, account: LinkedAccount) {
        let mut state = self.state.lock();
        state
            .members
            .entry(account.member_id)
            .or_insert_with(|| Member::new(account.member_id, "seeded"));
        let owner = account.member_id;
        state.links.push(account);
        state.refresh_linked_flag(owner);
    }

    /// Simulate another request linking `account` between our check and our insert
    pub fn inject_rival_link(&self, account: LinkedAccount) {
        self.state.lock().rival_links.push_back(account);
    }

    /// Simulate another request unlinking between our check and our delete
    pub fn inject_rival_unlink(&self) {
        self.state.lock().rival_unlinks += 1;
    }

    /// Make every write fail with a storage error
    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().fail_writes = fail;
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn exists(&self, id: MemberId) -> RepoResult<bool> {
        Ok(self.state.lock().members.contains_key(&id))
    }

    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        Ok(self.member(id))
    }

    async fn create(&self, member: &Member) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.check_writable()?;
        if state.members.contains_key(&member.id) {
            return Err(DomainError::MemberAlreadyExists(member.id));
        }
        state.members.insert(member.id, member.clone());
        state.mutations += 1;
        Ok(())
    }

    async fn set_display_name(&self, id: MemberId, name: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.check_writable()?;
        let member = state
            .members
            .get_mut(&id)
            .ok_or(DomainError::MemberNotFound(id))?;
        member.set_display_name(name);
        state.mutations += 1;
        Ok(())
    }
}

#[async_trait]
impl LinkedAccountRepository for InMemoryStore {
    async fn is_linked(&self, account_id: AccountId) -> RepoResult<bool> {
        Ok(self.link_rows(account_id) > 0)
    }

    async fn find_by_account(&self, account_id: AccountId) -> RepoResult<Option<LinkedAccount>> {
        Ok(self
            .state
            .lock()
            .links
            .iter()
            .find(|l| l.account_id == account_id)
            .cloned())
    }

    async fn create(&self, account: &LinkedAccount) -> RepoResult<()> {
        let rival = self.state.lock().rival_links.pop_front();
        if let Some(rival) = rival {
            self.seed_link(rival);
        }

        let mut state = self.state.lock();
        state.check_writable()?;
        if state.links.iter().any(|l| l.account_id == account.account_id) {
            return Err(DomainError::AccountAlreadyLinked(account.account_id));
        }
        if state.links.iter().any(|l| l.account_name == account.account_name) {
            return Err(DomainError::AccountNameTaken(account.account_name.clone()));
        }
        if !state.members.contains_key(&account.member_id) {
            return Err(DomainError::MemberNotFound(account.member_id));
        }

        state.links.push(account.clone());
        state.refresh_linked_flag(account.member_id);
        state.mutations += 1;
        Ok(())
    }

    async fn delete(&self, account_id: AccountId) -> RepoResult<Option<LinkedAccount>> {
        let mut state = self.state.lock();
        state.check_writable()?;
        if state.rival_unlinks > 0 {
            state.rival_unlinks -= 1;
            state.links.retain(|l| l.account_id != account_id);
        }
        let Some(index) = state.links.iter().position(|l| l.account_id == account_id) else {
            return Ok(None);
        };

        let removed = state.links.remove(index);
        state.refresh_linked_flag(removed.member_id);
        state.mutations += 1;
        Ok(Some(removed))
    }

    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<LinkedAccount>> {
        let mut links: Vec<LinkedAccount> = self
            .state
            .lock()
            .links
            .iter()
            .filter(|l| l.member_id == member_id)
            .cloned()
            .collect();
        links.sort_by_key(|l| (l.linked_at, l.account_id));
        Ok(links)
    }

    async fn find_primary(&self, member_id: MemberId) -> RepoResult<LinkedAccount> {
        self.find_by_member(member_id)
            .await?
            .into_iter()
            .next()
            .ok_or(DomainError::NoLinkedAccount(member_id))
    }
}

// ============================================================================
// Recording collaborators
// ============================================================================

/// Account lookup answering from a fixed table, case-insensitively
#[derive(Default)]
pub struct RecordingLookup {
    accounts: Mutex<HashMap<String, ResolvedAccount>>,
    calls: Mutex<Vec<String>>,
    delay: Mutex<Option<Duration>>,
}

impl RecordingLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `name` resolvable, with `name` as the canonical spelling
    pub fn register(&self, name: &str, account_id: AccountId) {
        self.accounts.lock().insert(
            name.to_lowercase(),
            ResolvedAccount {
                account_id,
                name: name.to_string(),
            },
        );
    }

    /// Delay every answer, for timeout tests
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    /// Names looked up so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl AccountLookup for RecordingLookup {
    async fn resolve(&self, name: &str) -> Result<ResolvedAccount, LookupError> {
        self.calls.lock().push(name.to_string());

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.accounts
            .lock()
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }
}

/// Whitelist that records every change instead of touching a server
#[derive(Default)]
pub struct RecordingWhitelist {
    calls: Mutex<Vec<(String, WhitelistAction)>>,
    offline: Mutex<bool>,
}

impl RecordingWhitelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every apply call, including failed ones
    pub fn calls(&self) -> Vec<(String, WhitelistAction)> {
        self.calls.lock().clone()
    }

    /// Make every apply call fail as if the server were down
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock() = offline;
    }
}

#[async_trait]
impl WhitelistSync for RecordingWhitelist {
    async fn apply(&self, account_name: &str, action: WhitelistAction) -> Result<(), WhitelistError> {
        self.calls.lock().push((account_name.to_string(), action));
        if *self.offline.lock() {
            return Err(WhitelistError::Unavailable("server offline".to_string()));
        }
        Ok(())
    }
}
