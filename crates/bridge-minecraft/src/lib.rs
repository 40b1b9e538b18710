//! # bridge-minecraft
//!
//! Adapters for the two outbound collaborators of the link workflow:
//!
//! - [`MojangClient`] resolves player names through the Mojang profile API
//!   and implements [`bridge_core::AccountLookup`]
//! - [`RconWhitelist`] drives the game server whitelist over Source RCON and
//!   implements [`bridge_core::WhitelistSync`]

pub mod mojang;
pub mod rcon;

pub use mojang::MojangClient;
pub use rcon::{RconClient, RconError, RconWhitelist};
