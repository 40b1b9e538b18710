//! # bridge-bot
//!
//! Command front-end for the whitelist bridge. Reads commands line by line,
//! runs each on its own task, and prints the reply.
//!
//! ```text
//! whitelist <member_id> <display name> <account_name>
//! status <member_id>
//! help
//! quit
//! ```

pub mod command;
pub mod console;
pub mod server;

pub use command::{Command, CommandParseError};
pub use console::{execute, run_console};
pub use server::{create_service_context, run};
