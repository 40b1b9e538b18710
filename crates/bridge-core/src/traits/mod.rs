//! Ports - interfaces the domain needs from infrastructure

mod collaborators;
mod repositories;

pub use collaborators::{
    AccountLookup, LookupError, ResolvedAccount, WhitelistError, WhitelistSync,
};
pub use repositories::{LinkedAccountRepository, MemberRepository, RepoResult};
