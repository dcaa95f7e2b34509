mod common;

use texttrekkers::config::Config;
use texttrekkers::game::responses;

#[tokio::test]
async fn prints_banner_prompt_and_two_lines_per_command() {
    let (shell, out) = common::run_script(&Config::default(), "go north\n").await;
    assert!(out.starts_with("TextTrekkers\n\n"), "got {:?}", out);
    assert!(out.contains("Enter your command: You: go north\n"));
    assert!(out.contains(&format!("Game: {}\n", responses::NORTH_VIEW)));
    assert_eq!(shell.transcript().len(), 2);
}

#[tokio::test]
async fn locked_door_playthrough() {
    let script = "open door\nGo North\nuse key\npick up key\nUSE KEY\nopen door\n";
    let (shell, out) = common::run_script(&common::locked_config(), script).await;

    let game_lines: Vec<&str> = out
        .lines()
        .filter_map(|l| l.strip_prefix("Game: "))
        .collect();
    assert_eq!(
        game_lines,
        vec![
            responses::DOOR_LOCKED,
            responses::NORTH_VIEW,
            responses::NO_KEY,
            responses::KEY_PICKED_UP,
            responses::KEY_USED,
            responses::DOOR_OPENED,
        ]
    );
    assert!(shell.has_won());
    assert_eq!(shell.commands_processed(), 6);
    assert_eq!(shell.transcript().len(), 12);
}

#[tokio::test]
async fn quit_stops_reading() {
    let (shell, out) =
        common::run_script(&Config::default(), "pick up key\nquit\nuse key\n").await;
    assert!(out.contains("Goodbye."));
    assert!(!out.contains("You: use key"));
    assert!(shell.game().has_key());
    assert_eq!(shell.commands_processed(), 1);
}

#[tokio::test]
async fn eof_ends_session_without_quit() {
    let (shell, _out) = common::run_script(&Config::default(), "pick up key").await;
    assert!(shell.game().has_key());
}

#[tokio::test]
async fn crlf_input_is_accepted() {
    let (shell, out) = common::run_script(&Config::default(), "pick up key\r\n").await;
    assert!(out.contains("You: pick up key\n"));
    assert!(shell.game().has_key());
}

#[tokio::test]
async fn custom_title_and_prompt() {
    let mut config = Config::default();
    config.game.title = "Escape Room".to_string();
    config.shell.prompt = ">".to_string();
    let (_shell, out) = common::run_script(&config, "").await;
    assert_eq!(out, "Escape Room\n\n> \n");
}

#[test]
fn bounded_transcript_keeps_latest() {
    let mut config = Config::default();
    config.transcript.max_entries = 4;
    let (shell, _out) = tokio_test::block_on(common::run_script(
        &config,
        "go north\npick up key\nuse key\nopen door\n",
    ));
    let rendered = shell.transcript().render();
    assert!(rendered.starts_with("You: use key\n"), "got {:?}", rendered);
    assert!(rendered.ends_with(&format!("Game: {}\n", responses::DOOR_OPENED)));
}
