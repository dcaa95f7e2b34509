//! # TextTrekkers - a very small text adventure
//!
//! You stand somewhere with a door to the north. There is a key. Find it,
//! use it, open the door.
//!
//! ## Features
//!
//! - **Four Commands**: `go north`, `pick up key`, `use key`, `open door`, matched case-insensitively.
//! - **Gameplay Transcript**: every submission is echoed as `You: ...` and answered as `Game: ...`.
//! - **Transcript Export**: optional JSON export at the end of a session, written atomically.
//! - **TOML Configuration**: title, prompt, starting lock state, logging.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use texttrekkers::config::Config;
//! use texttrekkers::shell::GameShell;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("config.toml").await?;
//!     let mut shell = GameShell::new(&config)?;
//!     let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//!     shell.run(stdin, tokio::io::stdout()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - Command parsing, game state and the interpreter
//! - [`shell`] - Terminal session, transcript and export
//! - [`config`] - Configuration loading and validation
//! - [`logutil`] - Single-line escaping of player input for logs

pub mod config;
pub mod game;
pub mod logutil;
pub mod shell;
