//! Player model

use serde::{Deserialize, Serialize};

/// A connected player as seen by chat commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPlayer {
    /// Host user id, also the key for permissions and language preference
    pub id: String,
    pub display_name: String,
    /// Host admin role (distinct from plugin permissions)
    pub is_admin: bool,
}

impl ChatPlayer {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            is_admin: false,
        }
    }

    pub fn admin(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::new(id, display_name)
        }
    }
}
