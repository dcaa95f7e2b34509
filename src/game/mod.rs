//! The TextTrekkers adventure itself.
//!
//! The whole world is two flags: whether the player carries the key and
//! whether the door is locked. Four fixed commands move those flags around;
//! everything else is answered with a polite "I don't understand".
//!
//! ```rust
//! use texttrekkers::game::TextTrekkers;
//!
//! let mut game = TextTrekkers::new();
//! game.process_command("pick up key");
//! game.process_command("USE KEY");
//! assert!(!game.door_locked());
//! ```

pub mod commands;
pub mod engine;
pub mod responses;
pub mod state;

pub use commands::Command;
pub use engine::{Outcome, TextTrekkers};
pub use state::GameState;
