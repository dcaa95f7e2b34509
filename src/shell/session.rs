use log::{debug, info, warn};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::errors::ShellError;
use super::transcript::{Speaker, Transcript};
use crate::config::Config;
use crate::game::{Command, GameState, Outcome, TextTrekkers};
use crate::logutil::escape_log;

/// What the shell did with one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// Lines to show the player; keep reading.
    Continue(Vec<String>),
    /// Lines to show the player; the session is over.
    Quit(Vec<String>),
}

/// # Game Session
///
/// One player, one game, one transcript. Every submission is echoed as a
/// `You:` line and answered with a `Game:` line, in that order.
///
/// ```rust
/// use texttrekkers::config::Config;
/// use texttrekkers::shell::GameShell;
///
/// let mut shell = GameShell::new(&Config::default()).unwrap();
/// shell.submit("pick up key");
/// assert!(shell.game().has_key());
/// assert_eq!(shell.transcript().len(), 2);
/// ```
#[derive(Debug)]
pub struct GameShell {
    title: String,
    prompt: String,
    meta_commands: bool,
    transcript_file: Option<PathBuf>,
    game: TextTrekkers,
    transcript: Transcript,
    commands_processed: u64,
    won: bool,
}

impl GameShell {
    pub fn new(config: &Config) -> Result<Self, ShellError> {
        config.validate()?;
        Ok(GameShell {
            title: config.game.title.clone(),
            prompt: config.shell.prompt.clone(),
            meta_commands: config.shell.meta_commands,
            transcript_file: config.transcript.file.as_ref().map(PathBuf::from),
            game: TextTrekkers::with_state(GameState::new(config.game.door_starts_locked)),
            transcript: Transcript::bounded(config.transcript.max_entries),
            commands_processed: 0,
            won: false,
        })
    }

    pub fn game(&self) -> &TextTrekkers {
        &self.game
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn commands_processed(&self) -> u64 {
        self.commands_processed
    }

    /// Append the player's input to the transcript; returns the `You:` line.
    pub fn update_user_response(&mut self, user_input: &str) -> String {
        self.transcript.append(Speaker::You, user_input)
    }

    /// Run the input through the game and append the reply; returns the `Game:` line.
    pub fn update_game_response(&mut self, user_input: &str) -> String {
        let (outcome, response) = self.game.execute(user_input);
        self.commands_processed += 1;
        if outcome == Outcome::Won && !self.won {
            self.won = true;
            info!("Player won after {} commands", self.commands_processed);
        }
        self.transcript.append(Speaker::Game, response)
    }

    /// Submit one command: echo it, then answer it. Returns the response text.
    pub fn submit(&mut self, user_input: &str) -> String {
        self.update_user_response(user_input);
        self.update_game_response(user_input);
        self.transcript
            .entries()
            .last()
            .map(|e| e.text.clone())
            .unwrap_or_default()
    }

    /// Handle one raw terminal line, including shell meta-commands.
    pub fn handle_line(&mut self, line: &str) -> LineResult {
        let input = line.trim_end_matches(['\r', '\n']);
        if input.trim().is_empty() {
            return LineResult::Continue(Vec::new());
        }

        if self.meta_commands {
            match input.trim().to_lowercase().as_str() {
                "help" | "?" => return LineResult::Continue(self.help_lines()),
                "quit" | "exit" => {
                    debug!("Player quit after {} commands", self.commands_processed);
                    return LineResult::Quit(vec!["Goodbye.".to_string()]);
                }
                _ => {}
            }
        }

        debug!("Submission: {}", escape_log(input));
        let you = self.update_user_response(input);
        let game = self.update_game_response(input);
        LineResult::Continue(vec![you, game])
    }

    fn help_lines(&self) -> Vec<String> {
        let verbs: Vec<&str> = Command::all().iter().filter_map(|c| c.verb()).collect();
        vec![
            format!("Commands: {}", verbs.join(", ")),
            "Type QUIT to leave.".to_string(),
        ]
    }

    /// Drive the session until EOF or `quit`, then export the transcript if configured.
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), ShellError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Session started: door_locked={}", self.game.door_locked());
        writer
            .write_all(format!("{}\n\n", self.title).as_bytes())
            .await?;

        let mut line = String::new();
        loop {
            writer
                .write_all(format!("{} ", self.prompt).as_bytes())
                .await?;
            writer.flush().await?;

            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                writer.write_all(b"\n").await?;
                break;
            }

            let (lines, quit) = match self.handle_line(&line) {
                LineResult::Continue(lines) => (lines, false),
                LineResult::Quit(lines) => (lines, true),
            };
            for out in lines {
                writer.write_all(out.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
            if quit {
                break;
            }
        }
        writer.flush().await?;

        info!(
            "Session ended: commands={} won={}",
            self.commands_processed, self.won
        );
        self.save_transcript()?;
        Ok(())
    }

    /// Override (or set) where the transcript is exported on session end.
    pub fn set_transcript_file(&mut self, path: Option<PathBuf>) {
        self.transcript_file = path;
    }

    /// Export the transcript if a destination is configured. Returns the path written.
    pub fn save_transcript(&self) -> Result<Option<PathBuf>, ShellError> {
        let Some(path) = self.transcript_file.as_ref() else {
            return Ok(None);
        };
        if self.transcript.is_empty() {
            warn!("Transcript is empty; writing empty export to {}", path.display());
        }
        self.transcript.save(path)?;
        info!(
            "Transcript saved to {} ({} entries)",
            path.display(),
            self.transcript.len()
        );
        Ok(Some(path.clone()))
    }
}
