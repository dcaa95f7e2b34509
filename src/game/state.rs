use serde::{Deserialize, Serialize};

/// Everything the game remembers between commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Whether or not the player has the key
    pub has_key: bool,
    /// Whether or not the door is locked
    pub door_locked: bool,
}

impl GameState {
    /// Fresh state: empty-handed, with the door locked or not as requested.
    pub fn new(door_locked: bool) -> Self {
        GameState {
            has_key: false,
            door_locked,
        }
    }
}
