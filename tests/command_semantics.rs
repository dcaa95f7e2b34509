use texttrekkers::game::responses;
use texttrekkers::game::{GameState, Outcome, TextTrekkers};

fn every_state() -> impl Iterator<Item = GameState> {
    [(false, false), (false, true), (true, false), (true, true)]
        .into_iter()
        .map(|(has_key, door_locked)| GameState {
            has_key,
            door_locked,
        })
}

#[test]
fn go_north_never_changes_flags() {
    for start in every_state() {
        let mut game = TextTrekkers::with_state(start);
        for spelling in ["go north", "GO NORTH", "Go North"] {
            game.process_command(spelling);
            assert_eq!(*game.state(), start);
        }
    }
}

#[test]
fn pick_up_key_sets_key_from_any_state() {
    for start in every_state() {
        let mut game = TextTrekkers::with_state(start);
        assert_eq!(game.process_command("Pick Up Key"), responses::KEY_PICKED_UP);
        assert!(game.has_key());
    }
}

#[test]
fn use_key_without_key_keeps_door_as_is() {
    for door_locked in [false, true] {
        let mut game = TextTrekkers::with_state(GameState {
            has_key: false,
            door_locked,
        });
        assert_eq!(game.process_command("use key"), responses::NO_KEY);
        assert_eq!(game.door_locked(), door_locked);
        assert!(!game.has_key());
    }
}

#[test]
fn use_key_with_key_unlocks_and_keeps_key() {
    for door_locked in [false, true] {
        let mut game = TextTrekkers::with_state(GameState {
            has_key: true,
            door_locked,
        });
        assert_eq!(game.process_command("USE KEY"), responses::KEY_USED);
        assert!(!game.door_locked());
        assert!(game.has_key());
    }
}

#[test]
fn open_door_wins_only_when_unlocked() {
    for start in every_state() {
        let mut game = TextTrekkers::with_state(start);
        let (outcome, text) = game.execute("open door");
        if start.door_locked {
            assert_eq!((outcome, text), (Outcome::Failure, responses::DOOR_LOCKED));
        } else {
            assert_eq!((outcome, text), (Outcome::Won, responses::DOOR_OPENED));
        }
        assert_eq!(*game.state(), start);
    }
}

#[test]
fn anything_else_is_unrecognized_and_inert() {
    let inputs = [
        "",
        "north",
        "go south",
        "pick up the key",
        "use  key",
        "open door now",
        "help",
        "ÖFFNE TÜR",
    ];
    for start in every_state() {
        for input in inputs {
            let mut game = TextTrekkers::with_state(start);
            let (outcome, text) = game.execute(input);
            assert_eq!(outcome, Outcome::Unrecognized, "input {:?}", input);
            assert_eq!(text, responses::UNRECOGNIZED);
            assert_eq!(*game.state(), start);
        }
    }
}

#[test]
fn fresh_game_starts_with_door_unlocked() {
    let mut game = TextTrekkers::new();
    assert!(!game.has_key());
    assert!(!game.door_locked());
    assert_eq!(game.execute("open door").0, Outcome::Won);
}
