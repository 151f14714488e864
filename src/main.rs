use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use expensify::app::{AppAction, AppState};
use expensify::config::Config;
use expensify::demo;
use expensify::logging::init_tracing;
use expensify::sink::ConsoleSink;

#[derive(Parser, Debug)]
#[command(
    name = "expensify",
    version,
    about = "Counter and expense tracker stores driven by actions"
)]
struct Cli {
    /// Config file to use instead of ~/.config/expensify/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print one JSON document per line instead of pretty-printing
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Increment, decrement and reset a counter
    Counter,
    /// Add, remove and edit expenses, then set a text filter
    Expenses,
    /// Dispatch a JSON array of actions to a fresh expense store
    Replay {
        /// JSON file holding the actions
        file: PathBuf,

        /// JSON file holding the state to start from
        #[arg(long)]
        initial: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.log);
    debug!(?config, "configuration loaded");

    let sink = ConsoleSink::stdout(config.output.pretty && !cli.compact);

    match cli.command {
        Command::Counter => {
            demo::run_counter(&sink)?;
        }
        Command::Expenses => {
            demo::run_expenses(&sink)?;
        }
        Command::Replay { file, initial } => {
            let actions = read_actions(&file)?;
            let initial = initial.as_deref().map(read_state).transpose()?;
            demo::replay(actions, initial, &sink)?;
        }
    }

    Ok(())
}

fn read_actions(path: &Path) -> Result<Vec<AppAction>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read actions from '{}'", path.display()))?;
    AppAction::list_from_json(&content)
        .with_context(|| format!("Failed to decode actions in '{}'", path.display()))
}

fn read_state(path: &Path) -> Result<AppState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state from '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to decode state in '{}'", path.display()))
}
