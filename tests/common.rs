//! Test utilities shared by the integration tests.

use texttrekkers::config::Config;
use texttrekkers::shell::GameShell;

/// Feed `script` (newline-separated lines) through a fresh shell and return
/// the shell plus everything it wrote to the terminal.
pub async fn run_script(config: &Config, script: &str) -> (GameShell, String) {
    let mut shell = GameShell::new(config).expect("shell");
    let mut out: Vec<u8> = Vec::new();
    shell
        .run(script.as_bytes(), &mut out)
        .await
        .expect("run script");
    (shell, String::from_utf8(out).expect("utf8 output"))
}

/// Default config with the door locked at the start.
#[allow(dead_code)] // not every test binary needs it
pub fn locked_config() -> Config {
    let mut config = Config::default();
    config.game.door_starts_locked = true;
    config
}
