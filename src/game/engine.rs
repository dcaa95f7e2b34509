//! Command interpreter for the TextTrekkers adventure.
//!
//! Parses a line of player input, applies it to the [`GameState`] and
//! produces the narrative reply. Interpretation never fails: input that
//! matches no command gets the unrecognized-command message instead.

use log::{debug, info};

use super::commands::Command;
use super::responses;
use super::state::GameState;
use crate::logutil::escape_log;

/// How a command turned out, alongside the text shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Scenery only; nothing changed.
    Described,
    /// The action worked.
    Success,
    /// The action was understood but could not be done.
    Failure,
    /// The door opened. Game won.
    Won,
    /// Input matched no command.
    Unrecognized,
}

/// The game: owns the two flags and interprets commands against them.
#[derive(Debug, Clone, Default)]
pub struct TextTrekkers {
    state: GameState,
}

impl TextTrekkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn has_key(&self) -> bool {
        self.state.has_key
    }

    pub fn door_locked(&self) -> bool {
        self.state.door_locked
    }

    /// Process the player's command and return the text describing the result.
    pub fn process_command(&mut self, input: &str) -> String {
        self.execute(input).1.to_string()
    }

    /// Like [`process_command`](Self::process_command) but also reports the [`Outcome`].
    pub fn execute(&mut self, input: &str) -> (Outcome, &'static str) {
        let command = Command::parse(input);
        debug!("Command parsed: input={} command={:?}", escape_log(input), command);

        let result = match command {
            Command::GoNorth => self.handle_go_north(),
            Command::PickUpKey => self.handle_pick_up_key(),
            Command::UseKey => self.handle_use_key(),
            Command::OpenDoor => self.handle_open_door(),
            Command::Unknown(_) => (Outcome::Unrecognized, responses::UNRECOGNIZED),
        };
        debug!("Command outcome: {:?} state={:?}", result.0, self.state);
        result
    }

    fn handle_go_north(&self) -> (Outcome, &'static str) {
        (Outcome::Described, responses::NORTH_VIEW)
    }

    fn handle_pick_up_key(&mut self) -> (Outcome, &'static str) {
        self.state.has_key = true;
        (Outcome::Success, responses::KEY_PICKED_UP)
    }

    fn handle_use_key(&mut self) -> (Outcome, &'static str) {
        if !self.state.has_key {
            return (Outcome::Failure, responses::NO_KEY);
        }
        self.state.door_locked = false;
        (Outcome::Success, responses::KEY_USED)
    }

    fn handle_open_door(&self) -> (Outcome, &'static str) {
        if self.state.door_locked {
            return (Outcome::Failure, responses::DOOR_LOCKED);
        }
        info!("Door opened; game won");
        (Outcome::Won, responses::DOOR_OPENED)
    }
}
