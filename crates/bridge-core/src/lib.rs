//! # bridge-core
//!
//! Domain layer for the Discord ↔ Minecraft account bridge: entities, value objects,
//! repository ports, collaborator ports, and the toggle outcome.
//! This crate has zero dependencies on infrastructure (database, HTTP, RCON).

pub mod entities;
pub mod error;
pub mod outcome;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{LinkedAccount, Member};
pub use error::DomainError;
pub use outcome::{ToggleOutcome, WhitelistAction};
pub use traits::{
    AccountLookup, LinkedAccountRepository, LookupError, MemberRepository, RepoResult,
    ResolvedAccount, WhitelistError, WhitelistSync,
};
pub use value_objects::{
    is_valid_player_name, AccountId, AccountIdParseError, MemberId, MemberIdParseError,
};
