//! RCON errors

use thiserror::Error;

use bridge_core::traits::WhitelistError;

/// Failures talking to a game server over RCON
#[derive(Debug, Error)]
pub enum RconError {
    #[error("RCON I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RCON authentication failed")]
    AuthFailed,

    #[error("RCON payload too large: {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Malformed RCON packet: {0}")]
    Malformed(String),
}

impl From<RconError> for WhitelistError {
    fn from(e: RconError) -> Self {
        match e {
            RconError::Io(_) | RconError::AuthFailed | RconError::Malformed(_) => {
                WhitelistError::Unavailable(e.to_string())
            }
            RconError::PayloadTooLarge(_) => WhitelistError::Rejected(e.to_string()),
        }
    }
}
