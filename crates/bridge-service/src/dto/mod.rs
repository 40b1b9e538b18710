//! Data transfer objects for commands and their replies
//!
//! This module provides:
//! - Request DTOs with validation for command input
//! - Response DTOs and the user-facing reply text

pub mod requests;
pub mod responses;

pub use requests::{ToggleRequest, WhitelistRequest};
pub use responses::{CommandReply, LinkReceipt, StatusResponse};
