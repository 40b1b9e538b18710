//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in bridge-core.

mod error;
mod linked_account;
mod member;

pub use linked_account::PgLinkedAccountRepository;
pub use member::PgMemberRepository;
