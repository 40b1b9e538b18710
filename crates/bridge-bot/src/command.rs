//! Console command parsing

use std::str::FromStr;
use thiserror::Error;

use bridge_core::value_objects::MemberId;

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle the link between a member and a player name
    Whitelist {
        member_id: MemberId,
        display_name: String,
        account_name: String,
    },
    /// Show the member's linked accounts
    Status { member_id: MemberId },
    Help,
    Quit,
}

/// Console input that is not a command
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid member id: {0}")]
    InvalidMemberId(String),
}

const WHITELIST_USAGE: &str = "whitelist <member_id> <display name> <account_name>";
const STATUS_USAGE: &str = "status <member_id>";

/// Help text listing every command
pub const HELP: &str = "Commands:\n  \
    whitelist <member_id> <display name> <account_name>  link or unlink an account\n  \
    status <member_id>                                    list linked accounts\n  \
    help\n  \
    quit";

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return Err(CommandParseError::Empty);
        }
        let verb = parts.remove(0).to_lowercase();

        match verb.as_str() {
            "whitelist" => {
                // The display name sits between the two fixed arguments and may contain spaces
                if parts.len() < 3 {
                    return Err(CommandParseError::Usage(WHITELIST_USAGE));
                }
                let member_id = parse_member_id(parts[0])?;
                let account_name = parts[parts.len() - 1].to_string();
                let display_name = parts[1..parts.len() - 1].join(" ");
                Ok(Self::Whitelist {
                    member_id,
                    display_name,
                    account_name,
                })
            }
            "status" => match parts.as_slice() {
                [id] => Ok(Self::Status {
                    member_id: parse_member_id(id)?,
                }),
                _ => Err(CommandParseError::Usage(STATUS_USAGE)),
            },
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_member_id(raw: &str) -> Result<MemberId, CommandParseError> {
    MemberId::parse(raw).map_err(|_| CommandParseError::InvalidMemberId(raw.to_string()))
}
