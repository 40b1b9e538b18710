//! Player name rules

/// Shortest name Mojang accepts
pub const PLAYER_NAME_MIN_LEN: usize = 3;
/// Longest name Mojang accepts
pub const PLAYER_NAME_MAX_LEN: usize = 16;

/// Check a player name against Mojang's username rules: 3 to 16 characters
/// of ASCII letters, digits and underscore.
///
/// Names that pass are safe to place on an RCON command line or in a URL path.
pub fn is_valid_player_name(name: &str) -> bool {
    (PLAYER_NAME_MIN_LEN..=PLAYER_NAME_MAX_LEN).contains(&name.len())
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
