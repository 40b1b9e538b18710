//! Source RCON: packet codec, client and whitelist adapter

mod client;
pub mod codec;
mod error;
mod whitelist;

pub use client::RconClient;
pub use error::RconError;
pub use whitelist::RconWhitelist;
