//! Value objects - immutable types that represent domain concepts

mod account_id;
mod member_id;
mod player_name;

pub use account_id::{AccountId, AccountIdParseError};
pub use member_id::{MemberId, MemberIdParseError};
pub use player_name::{is_valid_player_name, PLAYER_NAME_MAX_LEN, PLAYER_NAME_MIN_LEN};
