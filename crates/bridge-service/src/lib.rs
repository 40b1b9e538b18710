//! # bridge-service
//!
//! Application layer: the link toggle workflow, profile sync, and the
//! whitelist command that ties account lookup, storage and the game server
//! together.

pub mod dto;
pub mod services;

pub use dto::{CommandReply, LinkReceipt, StatusResponse, ToggleRequest, WhitelistRequest};
pub use services::{
    LinkService, ProfileService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, WhitelistService,
};
