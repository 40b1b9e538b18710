//! Domain entities - core business objects

mod linked_account;
mod member;

pub use linked_account::LinkedAccount;
pub use member::Member;
