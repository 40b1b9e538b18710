//! Database models - SQLx-compatible structs for PostgreSQL tables

mod linked_account;
mod member;

pub use linked_account::LinkedAccountModel;
pub use member::MemberModel;
