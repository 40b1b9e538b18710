//! Member entity - represents a chat-platform identity

use crate::value_objects::MemberId;

/// Discord member known to the bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    /// Last display name mirrored from the chat platform
    pub display_name: String,
    /// True iff at least one game account is currently bound
    pub linked: bool,
}

impl Member {
    /// Create a new, unlinked Member
    pub fn new(id: MemberId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            linked: false,
        }
    }

    /// Update the display name
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }
}
