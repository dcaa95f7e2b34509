//! Command parsing.
//!
//! Matching is a plain comparison against four literals after lowercasing,
//! so `"Go North"` works but `"go  north"` or `"north"` do not.

/// The four things a player can do, plus everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GoNorth,   // go north
    PickUpKey, // pick up key
    UseKey,    // use key
    OpenDoor,  // open door
    /// Normalized text of an input that matched nothing.
    Unknown(String),
}

impl Command {
    /// Classify raw player input.
    ///
    /// Surrounding whitespace (including a trailing line terminator) is
    /// dropped and the rest is lowercased before matching.
    pub fn parse(input: &str) -> Command {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "go north" => Command::GoNorth,
            "pick up key" => Command::PickUpKey,
            "use key" => Command::UseKey,
            "open door" => Command::OpenDoor,
            _ => Command::Unknown(normalized),
        }
    }

    /// Canonical spelling, as listed by the shell's help text.
    pub fn verb(&self) -> Option<&'static str> {
        match self {
            Command::GoNorth => Some("go north"),
            Command::PickUpKey => Some("pick up key"),
            Command::UseKey => Some("use key"),
            Command::OpenDoor => Some("open door"),
            Command::Unknown(_) => None,
        }
    }

    /// All recognized commands in the order a player would usually need them.
    pub fn all() -> [Command; 4] {
        [
            Command::GoNorth,
            Command::PickUpKey,
            Command::UseKey,
            Command::OpenDoor,
        ]
    }
}
