//! # Game Shell
//!
//! The terminal front end for [`TextTrekkers`](crate::game::TextTrekkers).
//!
//! - [`session`] - reads submitted lines, echoes them and prints the game's reply
//! - [`transcript`] - the running `You:`/`Game:` log and its JSON export
//! - [`errors`] - shell failures (I/O, export, configuration)
//!
//! ```rust,no_run
//! use texttrekkers::config::Config;
//! use texttrekkers::shell::GameShell;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut shell = GameShell::new(&Config::default())?;
//!     let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//!     shell.run(stdin, tokio::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod session;
pub mod transcript;

pub use errors::ShellError;
pub use session::{GameShell, LineResult};
pub use transcript::{Speaker, Transcript, TranscriptEntry};
