use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mancala::config::{AppConfig, Difficulty};
use mancala::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Mancala in the terminal against an alpha-beta AI.
#[derive(Parser)]
#[command(name = "mancala", version, about = "Play Mancala against an alpha-beta AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Difficulty level 1-3, skipping the in-game menu
    #[arg(long)]
    difficulty: Option<u8>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // An explicitly named config file must exist; the default path may not
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::load_or_default(Path::new("mancala.toml"))?,
    };

    let difficulty = match cli.difficulty {
        Some(level) => match Difficulty::from_level(level) {
            Some(difficulty) => Some(difficulty),
            None => bail!("difficulty must be 1, 2 or 3 (got {level})"),
        },
        None => None,
    };

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    // Create app and run
    let mut app = App::new(config, difficulty);
    let res = app.run(&mut terminal);

    // Restore the terminal even when the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running the game")
}
