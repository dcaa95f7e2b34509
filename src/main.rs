//! Binary entrypoint for the TextTrekkers CLI.
//!
//! Commands:
//! - `play [--transcript <path>] [--locked]` - play on stdin/stdout
//! - `init` - create a starter `config.toml`
//! - `say <command...>` - answer a single command against a fresh game
//!
//! Logs go to stderr (or the configured log file) so they never mix with the transcript.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;

use texttrekkers::config::Config;
use texttrekkers::game::{GameState, TextTrekkers};
use texttrekkers::shell::GameShell;

#[derive(Parser)]
#[command(name = "texttrekkers")]
#[command(about = "A tiny text adventure: find the key, unlock the door, escape")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game in this terminal
    Play {
        /// Export the transcript as JSON to this file when the session ends
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// Start with the door locked (overrides the config file)
        #[arg(long)]
        locked: bool,
    },
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Process a single command against a fresh game and print the reply
    Say {
        /// The command, e.g. `say pick up key`
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        /// Start with the door locked (overrides the config file)
        #[arg(long)]
        locked: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init writes the config, so it must not require one to exist
    let config = match cli.command {
        Commands::Init { .. } => None,
        _ => Some(Config::load_or_default(&cli.config).await?),
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Play { transcript, locked } => {
            let mut config = config.unwrap_or_default();
            if locked {
                config.game.door_starts_locked = true;
            }
            info!("Starting TextTrekkers v{}", env!("CARGO_PKG_VERSION"));

            let mut shell = GameShell::new(&config)?;
            if transcript.is_some() {
                shell.set_transcript_file(transcript);
            }
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            shell.run(stdin, tokio::io::stdout()).await?;
        }
        Commands::Init { force } => {
            if !force && tokio::fs::try_exists(&cli.config).await.unwrap_or(false) {
                warn!("{} already exists; use --force to overwrite", cli.config);
                return Ok(());
            }
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Say { words, locked } => {
            let config = config.unwrap_or_default();
            let door_locked = locked || config.game.door_starts_locked;
            let mut game = TextTrekkers::with_state(GameState::new(door_locked));
            println!("{}", game.process_command(&words.join(" ")));
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    builder.target(env_logger::Target::Stderr);

    let log_file = config.as_ref().and_then(|c| c.logging.file.clone());
    let opened = log_file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    if let Some(f) = opened {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Mirror to the console only when someone is watching stderr
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
