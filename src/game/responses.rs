//! Narrative text returned by the interpreter.

pub const NORTH_VIEW: &str = "You walk north and find yourself before a heavy wooden door. \
Something small and brass glints in the dust at your feet.";

pub const KEY_PICKED_UP: &str = "You pick up the key. It is cold and heavier than it looks.";

pub const KEY_USED: &str = "You turn the key in the lock. With a satisfying click, the door unlocks.";

pub const NO_KEY: &str = "You don't have a key.";

pub const DOOR_OPENED: &str =
    "You push the door open and step out into the daylight. You escaped. You win!";

pub const DOOR_LOCKED: &str = "The door is locked. Maybe there is a key somewhere.";

pub const UNRECOGNIZED: &str = "I don't understand that command.";
