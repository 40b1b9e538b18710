//! Business logic services
//!
//! Services borrow a shared [`ServiceContext`] and hold no state of their own.

pub mod context;
pub mod error;
pub mod link;
pub mod profile;
pub mod whitelist;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use link::LinkService;
pub use profile::ProfileService;
pub use whitelist::WhitelistService;
